use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("unknown atomic command {0:?}")]
    UnknownCommand(String),

    #[error("rule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IntentResult<T> = Result<T, IntentError>;
