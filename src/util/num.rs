/// Converts a language-level integer to a container index.
///
/// Returns `None` for negative values and for values that do not fit in
/// `usize`; callers turn that into an index error with the array context
/// attached.
///
/// # Examples
/// ```
/// use parlance::util::num::index_to_usize;
///
/// assert_eq!(index_to_usize(2), Some(2));
/// assert_eq!(index_to_usize(-1), None);
/// ```
#[must_use]
pub fn index_to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Converts a container length to a language-level integer.
///
/// Lengths beyond `i64::MAX` cannot occur for in-memory containers on any
/// supported target; the conversion saturates rather than wrapping so the
/// impossible case stays harmless.
#[must_use]
pub fn len_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
