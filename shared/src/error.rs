//! Errors raised by the scoring engines

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No crops were assessed; overall risk is undefined")]
    NoCropsAssessed,

    #[error("Invalid product catalog: {0}")]
    InvalidCatalog(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
