//! An agent that never acts.

use bot_core::FunctionCall;
use bot_observe::TimeStep;

use crate::{Agent, AgentStats};

/// An [`Agent`] that always returns `no_op`.
///
/// Useful as a placeholder in tests and as a do-nothing baseline.
#[derive(Debug, Default)]
pub struct NoopAgent {
    stats: AgentStats,
}

impl NoopAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for NoopAgent {
    fn step(&mut self, ts: &TimeStep) -> FunctionCall {
        self.stats.record(ts);
        FunctionCall::no_op()
    }

    fn reset(&mut self) {
        self.stats.begin_episode();
    }

    fn stats(&self) -> &AgentStats {
        &self.stats
    }
}
