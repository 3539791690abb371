/// The type of error for view, slicing and arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("num dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("dimension {axis} mismatch: expected {expected}, got {got}")]
    SizeMismatch { axis: usize, expected: u64, got: u64 },

    #[error("using more than one ALL selector is ambiguous")]
    AmbiguousAll,

    #[error("{selectors} selectors given for a {ndims}-dimensional view")]
    TooManySelectors { selectors: usize, ndims: usize },

    #[error("slice bounds reversed: max {max} < min {min}")]
    ReversedBounds { min: i64, max: i64 },

    #[error("inconsistent range provided: {min}..={max} with step {step}")]
    InconsistentRange { min: i64, max: i64, step: i64 },

    #[error("step must be non-zero")]
    ZeroStep,

    #[error("subsampling step {step} on axis {axis} must be positive")]
    NonPositiveStep { axis: usize, step: i64 },

    #[error("position {position} on axis {axis} is outside {min}..={max}")]
    OutOfBounds { axis: usize, position: i64, min: i64, max: i64 },

    #[error("axis {axis} out of range for {ndims}-dimensional view")]
    AxisOutOfRange { axis: usize, ndims: usize },

    #[error("invalid interval: {reason}")]
    InvalidInterval { reason: String },

    #[error("{ndims}-dimensional data not supported, expected {supported}")]
    UnsupportedDimensionality { ndims: usize, supported: &'static str },

    #[error("transform is not invertible")]
    SingularTransform,
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unwrap `result` or panic with the error's message.
///
/// Operator traits such as [`std::ops::Add`] cannot report failure, so their
/// implementations abort the way `assert!()` would.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(t) => t,
        Err(e) => panic!("{}", e),
    }
}
