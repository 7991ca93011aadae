//! Per-agent counters kept across an agent's lifetime.

use bot_core::Tick;
use bot_observe::TimeStep;

/// Steps taken, episodes started, and reward collected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentStats {
    /// Total steps across all episodes.
    pub steps:          Tick,
    /// Episodes started (incremented by every reset).
    pub episodes:       u64,
    /// Cumulative reward across all episodes.
    pub reward:         f64,
    /// Steps taken in the current episode.
    pub episode_steps:  u64,
    /// Reward collected in the current episode.
    pub episode_reward: f64,
}

impl AgentStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one step and add its reward.
    pub fn record(&mut self, step: &TimeStep) {
        self.steps += 1;
        self.episode_steps += 1;
        self.reward += step.reward as f64;
        self.episode_reward += step.reward as f64;
    }

    /// Start a new episode.
    pub fn begin_episode(&mut self) {
        self.episodes += 1;
        self.episode_steps = 0;
        self.episode_reward = 0.0;
    }
}
