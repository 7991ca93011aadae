//! `bot-agent`: agents that turn a [`TimeStep`][bot_observe::TimeStep] into
//! one [`FunctionCall`][bot_core::FunctionCall].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`agent`]    | `Agent` trait                                                    |
//! | [`stats`]    | `AgentStats` - step / episode / reward counters                  |
//! | [`model`]    | `ActionPredictor`, `ActionExplainer`, rule-based fallbacks       |
//! | [`random`]   | `RandomPredictor` - seeded baseline                              |
//! | [`scripted`] | `MoveToBeacon`, `CollectMineralShards`, `DefeatRoaches`          |
//! | [`terran`]   | `SimpleTerranAgent` - predictor → interpreter → intent queue     |
//! | [`noop`]     | `NoopAgent` - always `no_op`                                     |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                                   |
//!
//! # Design notes
//!
//! The scripted agents are pure per-tick functions of the observation.  The
//! Terran agent is the only stateful one: it is either **idle** (queue empty:
//! ask the predictor for a symbolic action, explain it into an intent, admit
//! it) or **busy** (queue non-empty: skip selection), and in both states it
//! drains exactly one atomic command per tick.

pub mod agent;
pub mod error;
pub mod model;
pub mod noop;
pub mod random;
pub mod scripted;
pub mod stats;
pub mod terran;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use model::{ActionExplainer, ActionPredictor, RuleExplainer, RulePredictor};
pub use noop::NoopAgent;
pub use random::RandomPredictor;
pub use scripted::{CollectMineralShards, DefeatRoaches, MoveToBeacon};
pub use stats::AgentStats;
pub use terran::SimpleTerranAgent;
