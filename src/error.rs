use thiserror::Error;

/// Rejected `LatticeConfig` values. Grid conditions such as off-grid points
/// are not errors; queries answer them with empty results.
#[derive(Debug, Error, PartialEq)]
pub enum LatticeError {
    #[error("key precision of {0} decimal places exceeds the supported maximum of 9")]
    KeyPrecision(u32),

    #[error("corridor sample spacing must be a positive number of pixels, got {0}")]
    SampleSpacing(f64),
}
