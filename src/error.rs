use thiserror::Error;

/// Errors that can occur at the boundary of the step parsing pipeline.
///
/// The segmentation and grounding stages themselves never fail; these
/// variants only cover decoding input, loading configuration and running
/// worker tasks.
#[derive(Error, Debug)]
pub enum StepsError {
    /// The raw recipe record could not be decoded
    #[error("Invalid recipe record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The parsed recipe could not be written out as JSON
    #[error("Failed to serialize recipe: {0}")]
    Output(serde_json::Error),

    /// Failed to read a recipe record
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A per-step worker task panicked or was cancelled
    #[error("Step worker failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
