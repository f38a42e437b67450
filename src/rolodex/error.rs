use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    // Wrong argument count for a REPL command. The dispatch layer turns
    // every arity failure into this one fixed, user-facing line.
    #[error("Enter the argument for the command")]
    Usage,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
