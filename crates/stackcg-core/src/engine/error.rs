use crate::core::models::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid scenario: {source}")]
    InvalidScenario {
        #[from]
        source: ModelError,
    },
}
