//! Run observer trait for progress reporting and data collection.

use bot_core::{FunctionCall, Tick};
use bot_observe::TimeStep;

use crate::{EpisodeSummary, RunSummary};

/// Callbacks invoked by [`Runner::run`][crate::Runner::run] at key points in
/// the episode loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: reward printer
///
/// ```rust,ignore
/// struct RewardPrinter;
///
/// impl RunObserver for RewardPrinter {
///     fn on_episode_end(&mut self, summary: &EpisodeSummary) {
///         println!("episode {}: {}", summary.episode, summary.reward);
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called after the environment and agent are reset, before the first step.
    fn on_episode_start(&mut self, _episode: u64) {}

    /// Called once per agent step with the step it saw and the action it chose.
    ///
    /// `tick` counts from zero within the episode.
    fn on_step(
        &mut self,
        _episode: u64,
        _tick:    Tick,
        _step:    &TimeStep,
        _action:  &FunctionCall,
    ) {}

    /// Called when an episode ends (last step or step cap).
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}

    /// Called once after the final episode.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
