//! The `Agent` trait: what the harness drives each tick.

use bot_core::FunctionCall;
use bot_observe::TimeStep;

use crate::AgentStats;

/// A decision-maker that emits exactly one action per tick.
///
/// # Contract
///
/// - `step` must return promptly and never fail: a tick with nothing sensible
///   to do returns [`FunctionCall::no_op`].
/// - `reset` is called at the start of every episode, before the first `step`.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysArmy(AgentStats);
///
/// impl Agent for AlwaysArmy {
///     fn step(&mut self, ts: &TimeStep) -> FunctionCall {
///         self.0.record(ts);
///         FunctionCall::select_army()
///     }
///     fn reset(&mut self) { self.0.begin_episode(); }
///     fn stats(&self) -> &AgentStats { &self.0 }
/// }
/// ```
pub trait Agent {
    /// Choose the action for this tick.
    fn step(&mut self, ts: &TimeStep) -> FunctionCall;

    /// Prepare for a new episode.
    fn reset(&mut self);

    /// Lifetime counters.
    fn stats(&self) -> &AgentStats;

    /// Short label for logs and output files.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("agent")
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn step(&mut self, ts: &TimeStep) -> FunctionCall {
        (**self).step(ts)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn stats(&self) -> &AgentStats {
        (**self).stats()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
