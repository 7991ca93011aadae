//! Binding an atomic command to a concrete action against a live observation.

use bot_core::{Faction, FunctionCall, Point, unit};
use bot_observe::{
    Axis, CellSet, Extremum, Layer, Observation, centroid, extreme, faction_cells,
    nearest, nearest_outside, own_units_of_type,
};

use crate::{AtomicCommand, CommandKind, ParamSlot};

/// Turns one [`AtomicCommand`] into the concrete action for this tick.
///
/// # Contract
///
/// - Must return exactly one action and never fail: anything that cannot be
///   carried out this tick becomes [`FunctionCall::no_op`].
/// - Must not block or perform I/O.
pub trait CommandResolver {
    fn resolve(&self, command: &AtomicCommand, obs: &Observation) -> FunctionCall;
}

impl<R: CommandResolver + ?Sized> CommandResolver for &R {
    fn resolve(&self, command: &AtomicCommand, obs: &Observation) -> FunctionCall {
        (**self).resolve(command, obs)
    }
}

impl<R: CommandResolver + ?Sized> CommandResolver for Box<R> {
    fn resolve(&self, command: &AtomicCommand, obs: &Observation) -> FunctionCall {
        (**self).resolve(command, obs)
    }
}

// ── ScreenResolver ────────────────────────────────────────────────────────────

/// Cells kept free between the builder and a new structure.
pub const DEFAULT_BUILD_CLEARANCE: f32 = 4.0;

/// Built-in resolver working purely from the screen planes.
///
/// | Command                 | Target                                          |
/// |-------------------------|-------------------------------------------------|
/// | `select_one_scv` etc.   | first own cell of that unit type                |
/// | `move_to_beacon`        | centroid of neutral cells                       |
/// | `move_to_mineral`       | neutral cell nearest the selection's centroid   |
/// | `harvest_mineral`       | same as `move_to_mineral`                       |
/// | `attack_enemy`          | hostile cell with the greatest row              |
/// | `build_*`               | nearest free cell at least `build_clearance` out|
///
/// A command whose action is not legal, or whose target mask is empty,
/// resolves to `no_op`.
#[derive(Clone, Debug)]
pub struct ScreenResolver {
    pub build_clearance: f32,
}

impl Default for ScreenResolver {
    fn default() -> Self {
        Self { build_clearance: DEFAULT_BUILD_CLEARANCE }
    }
}

impl ScreenResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn target(&self, kind: CommandKind, obs: &Observation) -> Option<Point> {
        match kind {
            CommandKind::SelectOneScv        => own_units_of_type(obs, unit::TERRAN_SCV).first(),
            CommandKind::SelectCommandCenter => {
                own_units_of_type(obs, unit::TERRAN_COMMAND_CENTER).first()
            }
            CommandKind::SelectBarracks      => own_units_of_type(obs, unit::TERRAN_BARRACKS).first(),
            CommandKind::MoveToBeacon        => centroid(&faction_cells(obs, Faction::Neutral)),
            CommandKind::MoveToMineral | CommandKind::HarvestMineral => {
                let minerals = faction_cells(obs, Faction::Neutral);
                if minerals.is_empty() {
                    return None;
                }
                nearest(centroid(&selection(obs))?, &minerals)
            }
            CommandKind::AttackEnemy => {
                extreme(&faction_cells(obs, Faction::Hostile), Axis::Y, Extremum::Max)
            }
            CommandKind::BuildSupplyDepot | CommandKind::BuildBarracks => {
                let free = faction_cells(obs, Faction::Background);
                if free.is_empty() {
                    return None;
                }
                let base = centroid(&faction_cells(obs, Faction::Own))?;
                nearest_outside(base, &free, self.build_clearance)
            }
            _ => None,
        }
    }
}

impl CommandResolver for ScreenResolver {
    fn resolve(&self, command: &AtomicCommand, obs: &Observation) -> FunctionCall {
        let kind = command.kind;
        if kind == CommandKind::NoOp || !obs.is_available(kind.required_function()) {
            return FunctionCall::no_op();
        }
        if !kind.is_targeted() {
            return kind.untargeted_call();
        }
        let target = match command.params {
            ParamSlot::Resolved(p) => Some(p),
            ParamSlot::Unresolved  => self.target(kind, obs),
        };
        match target {
            Some(p) => kind.call_at(p),
            None => FunctionCall::no_op(),
        }
    }
}

/// Own units currently selected, or every own unit when the selection plane is
/// missing or empty.
fn selection(obs: &Observation) -> CellSet {
    let own = faction_cells(obs, Faction::Own);
    let Some(selected) = obs.layer(Layer::Selected) else {
        return own;
    };
    let picked = bot_observe::cells_matching(selected, 1).intersect(&own);
    if picked.is_empty() { own } else { picked }
}
