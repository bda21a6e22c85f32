use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum NormsError {
    #[error("unknown battery: {0}")]
    UnknownBattery(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
