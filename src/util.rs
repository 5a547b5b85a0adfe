/// Safe numeric conversion helpers.
///
/// Conversions between the language's `i64` integers and the host's
/// `usize` lengths and indices, written so no silent truncation can occur.
pub mod num;
