use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the quadrature routines and the chart renderer.
#[derive(Debug, Error)]
pub enum Error {
    /// Simpson's rule partitions the interval into 3-point quadratic
    /// segments, which requires an even subinterval count.
    #[error("Simpson's rule requires an even number of subintervals, got {0}")]
    OddSubintervals(usize),

    #[error("need at least {min} subintervals, got {got}")]
    TooFewSubintervals { min: usize, got: usize },

    #[error("invalid interval: lower bound {a} is not below upper bound {b}")]
    InvalidInterval { a: f64, b: f64 },

    #[error("Monte Carlo estimate requires at least one sample")]
    NoSamples,

    #[error("quadratic fit requires three distinct abscissae")]
    CoincidentNodes,

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
