use thiserror::Error;

/// Error returned when converting a slice of the wrong length into a [`Vector`].
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// let err = Vec3f::try_from(&[1.0, 2.0][..]).unwrap_err();
/// assert_eq!(err.to_string(), "expected 3 components, got 2");
/// ```
///
/// [`Vector`]: crate::Vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} components, got {actual}")]
pub struct DimensionMismatch {
    /// Number of components the target vector type has.
    pub expected: usize,
    /// Length of the slice that was passed in.
    pub actual: usize,
}
