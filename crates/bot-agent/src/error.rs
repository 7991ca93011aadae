use bot_intent::IntentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),

    #[error("rule table error: {0}")]
    Rules(#[from] IntentError),
}

pub type AgentResult<T> = Result<T, AgentError>;
