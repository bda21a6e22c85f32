use kognit_core::error::CoreError;
use kognit_norms::error::NormsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Norms(#[from] NormsError),

    #[error("{group} {field} is {value}, the largest supported grid side is {max}")]
    GridTooLarge {
        group: &'static str,
        field: &'static str,
        value: u32,
        max: u32,
    },
}
