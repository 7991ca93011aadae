//! Single-action scripted agents for the movement and combat minigames.
//!
//! Each is a pure function of the current observation: no queue, no memory
//! beyond [`AgentStats`].  All three fall back to `select_army` while their
//! action is not legal (nothing selected yet), and to `no_op` when the plane
//! they target is empty.

use bot_core::{Faction, FunctionCall, function};
use bot_observe::{Axis, Extremum, TimeStep, centroid, extreme, faction_cells, nearest};
use tracing::trace;

use crate::{Agent, AgentStats};

// ── MoveToBeacon ──────────────────────────────────────────────────────────────

/// Moves the army to the centre of the beacon.
#[derive(Debug, Default)]
pub struct MoveToBeacon {
    stats: AgentStats,
}

impl MoveToBeacon {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for MoveToBeacon {
    fn step(&mut self, ts: &TimeStep) -> FunctionCall {
        self.stats.record(ts);
        let obs = &ts.observation;
        if !obs.is_available(function::MOVE_SCREEN) {
            return FunctionCall::select_army();
        }
        match centroid(&faction_cells(obs, Faction::Neutral)) {
            Some(target) => {
                trace!(tick = %self.stats.steps, %target, "beacon");
                FunctionCall::move_screen(target)
            }
            None => FunctionCall::no_op(),
        }
    }

    fn reset(&mut self) {
        self.stats.begin_episode();
    }

    fn stats(&self) -> &AgentStats {
        &self.stats
    }
}

// ── CollectMineralShards ──────────────────────────────────────────────────────

/// Moves the army to the shard nearest its own centroid.
#[derive(Debug, Default)]
pub struct CollectMineralShards {
    stats: AgentStats,
}

impl CollectMineralShards {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for CollectMineralShards {
    fn step(&mut self, ts: &TimeStep) -> FunctionCall {
        self.stats.record(ts);
        let obs = &ts.observation;
        if !obs.is_available(function::MOVE_SCREEN) {
            return FunctionCall::select_army();
        }
        let shards = faction_cells(obs, Faction::Neutral);
        let army = faction_cells(obs, Faction::Own);
        if shards.is_empty() || army.is_empty() {
            return FunctionCall::no_op();
        }
        let Some(target) = centroid(&army).and_then(|player| nearest(player, &shards)) else {
            return FunctionCall::no_op();
        };
        trace!(tick = %self.stats.steps, %target, "closest shard");
        FunctionCall::move_screen(target)
    }

    fn reset(&mut self) {
        self.stats.begin_episode();
    }

    fn stats(&self) -> &AgentStats {
        &self.stats
    }
}

// ── DefeatRoaches ─────────────────────────────────────────────────────────────

/// Attacks the hostile unit furthest down the screen.
#[derive(Debug, Default)]
pub struct DefeatRoaches {
    stats: AgentStats,
}

impl DefeatRoaches {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for DefeatRoaches {
    fn step(&mut self, ts: &TimeStep) -> FunctionCall {
        self.stats.record(ts);
        let obs = &ts.observation;
        if !obs.is_available(function::ATTACK_SCREEN) {
            return FunctionCall::select_army();
        }
        match extreme(&faction_cells(obs, Faction::Hostile), Axis::Y, Extremum::Max) {
            Some(target) => {
                trace!(tick = %self.stats.steps, %target, "roach");
                FunctionCall::attack_screen(target)
            }
            None => FunctionCall::no_op(),
        }
    }

    fn reset(&mut self) {
        self.stats.begin_episode();
    }

    fn stats(&self) -> &AgentStats {
        &self.stats
    }
}
