use thiserror::Error;

/// Top-level error type for great circle projection.
#[derive(Debug, Error)]
pub enum GreatCircleError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to sampling parameters.
#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("sample count {count} is invalid, at least {min} samples are required")]
    InvalidSampleCount { count: usize, min: usize },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate radius: point ({x}, {y}, {z}) has no direction")]
    DegenerateRadius { x: f64, y: f64, z: f64 },

    #[error("non-finite coordinate in point ({x}, {y}, {z})")]
    NonFinite { x: f64, y: f64, z: f64 },
}

/// Convenience type alias for results using [`GreatCircleError`].
pub type Result<T> = std::result::Result<T, GreatCircleError>;
