use thiserror::Error;

/// Core error type shared across mockset crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// Source data does not satisfy the store contract.
    #[error("invalid source data: {0}")]
    InvalidSourceData(String),
}

/// Convenience alias for results returned by mockset crates.
pub type Result<T> = std::result::Result<T, Error>;
