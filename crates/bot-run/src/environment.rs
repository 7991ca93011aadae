//! The game side of the loop.

use bot_core::FunctionCall;
use bot_observe::{Layer, Observation, TimeStep};

use crate::{RunError, RunResult};

/// Something that produces observations and consumes one action per tick.
///
/// A live game connection, a recorded replay, or a toy grid all fit.
pub trait Environment {
    /// Start a new episode and return its `First` step.
    fn reset(&mut self) -> RunResult<TimeStep>;

    /// Apply `action` and return the next step.
    fn step(&mut self, action: &FunctionCall) -> RunResult<TimeStep>;
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn reset(&mut self) -> RunResult<TimeStep> {
        (**self).reset()
    }

    fn step(&mut self, action: &FunctionCall) -> RunResult<TimeStep> {
        (**self).step(action)
    }
}

// ── ReplayEnvironment ─────────────────────────────────────────────────────────

/// Plays back a fixed list of observations, ignoring what the agent does
/// except to record it.
///
/// Every episode replays the same frames from the start.  The first frame is
/// `First`, the final one `Last`, anything between `Mid`.  A point argument
/// off the current frame's screen is an [`RunError::Environment`] error.
#[derive(Clone, Debug)]
pub struct ReplayEnvironment {
    frames:  Vec<Observation>,
    rewards: Vec<f32>,
    /// Index of the frame last returned; `None` before the first reset.
    cursor:  Option<usize>,
    actions: Vec<FunctionCall>,
}

impl ReplayEnvironment {
    /// Needs at least two frames so an episode has both a first and a last
    /// step.
    pub fn new(frames: Vec<Observation>) -> RunResult<Self> {
        if frames.len() < 2 {
            return Err(RunError::Config(format!(
                "a replay needs at least 2 frames, got {}",
                frames.len()
            )));
        }
        let rewards = vec![0.0; frames.len()];
        Ok(Self { frames, rewards, cursor: None, actions: Vec::new() })
    }

    /// Per-frame rewards (must match the frame count).
    pub fn with_rewards(mut self, rewards: Vec<f32>) -> RunResult<Self> {
        if rewards.len() != self.frames.len() {
            return Err(RunError::Config(format!(
                "reward count {} does not match frame count {}",
                rewards.len(),
                self.frames.len()
            )));
        }
        self.rewards = rewards;
        Ok(self)
    }

    /// Every action received, across all episodes, in order.
    pub fn actions(&self) -> &[FunctionCall] {
        &self.actions
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Environment for ReplayEnvironment {
    fn reset(&mut self) -> RunResult<TimeStep> {
        self.cursor = Some(0);
        Ok(TimeStep::first(self.frames[0].clone()))
    }

    fn step(&mut self, action: &FunctionCall) -> RunResult<TimeStep> {
        let cursor = self.cursor.ok_or(RunError::NotStarted)?;
        let next = cursor + 1;
        if next >= self.frames.len() {
            return Err(RunError::EpisodeOver);
        }
        if let (Some(target), Some(screen)) =
            (action.target(), self.frames[cursor].layer(Layer::PlayerRelative))
        {
            if !screen.contains(target) {
                return Err(RunError::Environment(format!("{action} targets {target}, off screen")));
            }
        }
        self.actions.push(action.clone());
        self.cursor = Some(next);

        let observation = self.frames[next].clone();
        let reward = self.rewards[next];
        Ok(if next + 1 == self.frames.len() {
            TimeStep::last(observation, reward)
        } else {
            TimeStep::mid(observation, reward)
        })
    }
}
