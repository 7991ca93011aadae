//! Well-known entries of the environment's action catalogue.
//!
//! Only the actions the built-in agents issue are listed.  The numbering is
//! the environment's; an agent never invents ids of its own.

use crate::FunctionId;

pub const NO_OP:                     FunctionId = FunctionId(0);
pub const SELECT_POINT:              FunctionId = FunctionId(2);
pub const SELECT_IDLE_WORKER:        FunctionId = FunctionId(6);
pub const SELECT_ARMY:               FunctionId = FunctionId(7);
pub const ATTACK_SCREEN:             FunctionId = FunctionId(12);
pub const BUILD_BARRACKS_SCREEN:     FunctionId = FunctionId(42);
pub const BUILD_SUPPLY_DEPOT_SCREEN: FunctionId = FunctionId(91);
pub const HARVEST_GATHER_SCREEN:     FunctionId = FunctionId(264);
pub const MOVE_SCREEN:               FunctionId = FunctionId(331);
pub const TRAIN_MARINE_QUICK:        FunctionId = FunctionId(477);
pub const TRAIN_SCV_QUICK:           FunctionId = FunctionId(490);

// ── Argument values ───────────────────────────────────────────────────────────

/// Execute immediately rather than appending to the unit's order queue.
pub const NOT_QUEUED: [i32; 1] = [0];
/// `select_army` / `select_point`: replace the current selection.
pub const SELECT_ALL: [i32; 1] = [0];
/// `select_idle_worker`: select a single idle worker.
pub const SELECT_ONE: [i32; 1] = [0];

/// Human-readable name for a known function id, if it is one of the above.
pub fn name(id: FunctionId) -> Option<&'static str> {
    let name = match id {
        NO_OP                     => "no_op",
        SELECT_POINT              => "select_point",
        SELECT_IDLE_WORKER        => "select_idle_worker",
        SELECT_ARMY               => "select_army",
        ATTACK_SCREEN             => "Attack_screen",
        BUILD_BARRACKS_SCREEN     => "Build_Barracks_screen",
        BUILD_SUPPLY_DEPOT_SCREEN => "Build_SupplyDepot_screen",
        HARVEST_GATHER_SCREEN     => "Harvest_Gather_screen",
        MOVE_SCREEN               => "Move_screen",
        TRAIN_MARINE_QUICK        => "Train_Marine_quick",
        TRAIN_SCV_QUICK           => "Train_SCV_quick",
        _ => return None,
    };
    Some(name)
}
