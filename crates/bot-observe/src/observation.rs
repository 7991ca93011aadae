//! The per-tick snapshot handed to an agent.

use bot_core::FunctionId;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Layer, Raster};

/// Read-only view of the game at one tick: which actions are legal right now,
/// and the screen planes.
///
/// Built by the environment, never mutated by an agent.
#[derive(Clone, Debug, Default)]
pub struct Observation {
    available: FxHashSet<FunctionId>,
    layers:    FxHashMap<Layer, Raster>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `ids` as legal this tick.
    pub fn with_available<I: IntoIterator<Item = FunctionId>>(mut self, ids: I) -> Self {
        self.available.extend(ids);
        self
    }

    /// Attach (or replace) a named plane.
    pub fn with_layer(mut self, layer: Layer, raster: Raster) -> Self {
        self.layers.insert(layer, raster);
        self
    }

    #[inline]
    pub fn is_available(&self, id: FunctionId) -> bool {
        self.available.contains(&id)
    }

    /// Legal action ids in ascending order.
    pub fn available(&self) -> Vec<FunctionId> {
        let mut ids: Vec<FunctionId> = self.available.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[inline]
    pub fn layer(&self, layer: Layer) -> Option<&Raster> {
        self.layers.get(&layer)
    }
}

// ── TimeStep ──────────────────────────────────────────────────────────────────

/// Position of a transition within its episode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    First,
    Mid,
    Last,
}

/// One environment transition as delivered to an agent.
#[derive(Clone, Debug)]
pub struct TimeStep {
    pub kind:        StepKind,
    pub reward:      f32,
    pub discount:    f32,
    pub observation: Observation,
}

impl TimeStep {
    /// The opening transition of an episode: no reward yet.
    pub fn first(observation: Observation) -> Self {
        Self { kind: StepKind::First, reward: 0.0, discount: 0.0, observation }
    }

    pub fn mid(observation: Observation, reward: f32) -> Self {
        Self { kind: StepKind::Mid, reward, discount: 1.0, observation }
    }

    pub fn last(observation: Observation, reward: f32) -> Self {
        Self { kind: StepKind::Last, reward, discount: 0.0, observation }
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.kind == StepKind::First
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.kind == StepKind::Last
    }
}
