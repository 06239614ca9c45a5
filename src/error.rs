//! Error handling for the resume scoring engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("Matcher construction error: {0}")]
    MatcherConstruction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;
