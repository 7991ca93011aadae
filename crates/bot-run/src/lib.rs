//! `bot-run`: drives an [`Agent`][bot_agent::Agent] against an
//! [`Environment`] for a bounded number of episodes.
//!
//! # Episode loop
//!
//! ```text
//! for episode in 0..config.max_episodes:
//!   agent.reset(); ts = env.reset()
//!   loop:
//!     action = agent.step(ts)          ← exactly one call per tick
//!     observer.on_step(..)
//!     break if ts is Last or the step cap is reached
//!     ts = env.step(action)
//! ```
//!
//! The agent always acts on the final observation, matching the usual
//! environment contract where the last frame still accepts an action.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bot_agent::MoveToBeacon;
//! use bot_run::{NoopObserver, ReplayEnvironment, RunConfig, Runner};
//!
//! let mut env = ReplayEnvironment::new(frames)?;
//! let runner = Runner::new(RunConfig::new(3, 500))?;
//! let summary = runner.run(&mut MoveToBeacon::new(), &mut env, &mut NoopObserver)?;
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod observer;
pub mod runner;

#[cfg(test)]
mod tests;

pub use config::RunConfig;
pub use environment::{Environment, ReplayEnvironment};
pub use error::{RunError, RunResult};
pub use observer::{NoopObserver, RunObserver};
pub use runner::{EpisodeSummary, RunSummary, Runner};
