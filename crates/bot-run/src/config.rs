//! Run-length limits.

use crate::{RunError, RunResult};

/// How long a [`Runner`][crate::Runner] keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Episodes to play before stopping.
    pub max_episodes:          u64,
    /// Agent steps per episode before the episode is cut short, even if the
    /// environment has not sent a `Last` step.
    pub max_steps_per_episode: u64,
}

impl RunConfig {
    pub fn new(max_episodes: u64, max_steps_per_episode: u64) -> Self {
        Self { max_episodes, max_steps_per_episode }
    }

    /// Reject limits that would make the run do nothing.
    pub fn validate(&self) -> RunResult<()> {
        if self.max_episodes == 0 {
            return Err(RunError::Config("max_episodes must be at least 1".into()));
        }
        if self.max_steps_per_episode == 0 {
            return Err(RunError::Config("max_steps_per_episode must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(1, 1_000)
    }
}
