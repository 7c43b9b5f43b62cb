use thiserror::Error;

/// Errors surfaced by the data retrieval collaborator.
///
/// The analysis core receives and distinguishes these but never produces
/// them itself; they propagate to the caller as-is, without retry.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("No data found: {0}")]
    NoData(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Analysis error types.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Zero observations, or otherwise too little input to work with.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Malformed input: non-positive price, non-finite price, or a
    /// duplicate/non-ascending timestamp that survived normalization.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Internal defensive check failed; a caller bypassed the normalizer.
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
