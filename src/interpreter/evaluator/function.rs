/// Call dispatch.
///
/// Resolves the callee name, evaluates arguments, and applies the call.
pub mod core;

/// Native built-ins.
///
/// The table of built-in functions and the `nextl` constant installed into
/// the global environment at interpreter construction.
pub mod builtin;
