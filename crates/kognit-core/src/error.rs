use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown metric key: {0}")]
    UnknownMetric(String),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),
}
