//! Threshold suppression.

/// Errors produced by [`suppress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SuppressError {
    /// The input slice has no elements.
    #[display("input is empty")]
    Empty,
}

/// Returns a copy of `values` in which every element below `threshold` is
/// replaced by `suppressed_value`.
///
/// Elements that are not comparable with `threshold` (such as `NaN`) are kept.
///
/// # Errors
///
/// Returns [`SuppressError::Empty`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use miscs_core::suppress;
///
/// assert_eq!(suppress(&[1, 5, 2, 7], 3, -1)?, [-1, 5, -1, 7]);
/// # Ok::<(), miscs_core::SuppressError>(())
/// ```
pub fn suppress<T>(values: &[T], threshold: T, suppressed_value: T) -> Result<Vec<T>, SuppressError>
where
    T: PartialOrd + Clone,
{
    if values.is_empty() {
        return Err(SuppressError::Empty);
    }
    Ok(values
        .iter()
        .map(|value| {
            if *value < threshold {
                suppressed_value.clone()
            } else {
                value.clone()
            }
        })
        .collect())
}

/// Same as [`suppress`] with `T::default()` as the suppression value.
///
/// # Errors
///
/// Returns [`SuppressError::Empty`] if `values` is empty.
pub fn suppress_below<T>(values: &[T], threshold: T) -> Result<Vec<T>, SuppressError>
where
    T: PartialOrd + Clone + Default,
{
    suppress(values, threshold, T::default())
}
