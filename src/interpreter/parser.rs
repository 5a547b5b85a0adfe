/// Expression precedence ladder.
///
/// One parsing function per binary precedence level, plus assignment with
/// target validation and the compound-assignment sugar.
pub mod binary;

/// Parser entry points.
///
/// The result alias, the recovering top-level `parse`, and full-program
/// parsing.
pub mod core;

/// Statement parsing.
///
/// Statement dispatch and the `END*`-delimited block forms.
pub mod statement;

/// Unary, postfix, and primary expressions.
pub mod unary;

/// Shared parsing helpers: comma-separated lists, identifiers, token
/// expectation, and statement-boundary synchronization.
pub mod utils;
