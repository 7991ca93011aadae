use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("run configuration error: {0}")]
    Config(String),

    #[error("environment error: {0}")]
    Environment(String),

    #[error("step called before reset")]
    NotStarted,

    #[error("episode already ended; reset the environment first")]
    EpisodeOver,
}

pub type RunResult<T> = Result<T, RunError>;
