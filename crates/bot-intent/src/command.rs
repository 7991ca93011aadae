//! Atomic commands: one indivisible game instruction each.

use std::fmt;
use std::str::FromStr;

use bot_core::{FunctionCall, FunctionId, Point, function};

use crate::IntentError;

/// The closed set of atomic command names the interpreter can emit.
///
/// Names round-trip through `Display` / `FromStr` in snake_case, which is the
/// form rule tables are written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    NoOp,
    SelectArmy,
    SelectIdleWorker,
    SelectOneScv,
    SelectCommandCenter,
    SelectBarracks,
    MoveToBeacon,
    MoveToMineral,
    HarvestMineral,
    AttackEnemy,
    BuildSupplyDepot,
    BuildBarracks,
    TrainScv,
    TrainMarine,
}

impl CommandKind {
    pub const ALL: [CommandKind; 14] = [
        CommandKind::NoOp,
        CommandKind::SelectArmy,
        CommandKind::SelectIdleWorker,
        CommandKind::SelectOneScv,
        CommandKind::SelectCommandCenter,
        CommandKind::SelectBarracks,
        CommandKind::MoveToBeacon,
        CommandKind::MoveToMineral,
        CommandKind::HarvestMineral,
        CommandKind::AttackEnemy,
        CommandKind::BuildSupplyDepot,
        CommandKind::BuildBarracks,
        CommandKind::TrainScv,
        CommandKind::TrainMarine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::NoOp                => "no_op",
            CommandKind::SelectArmy          => "select_army",
            CommandKind::SelectIdleWorker    => "select_idle_worker",
            CommandKind::SelectOneScv        => "select_one_scv",
            CommandKind::SelectCommandCenter => "select_command_center",
            CommandKind::SelectBarracks      => "select_barracks",
            CommandKind::MoveToBeacon        => "move_to_beacon",
            CommandKind::MoveToMineral       => "move_to_mineral",
            CommandKind::HarvestMineral      => "harvest_mineral",
            CommandKind::AttackEnemy         => "attack_enemy",
            CommandKind::BuildSupplyDepot    => "build_supply_depot",
            CommandKind::BuildBarracks       => "build_barracks",
            CommandKind::TrainScv            => "train_scv",
            CommandKind::TrainMarine         => "train_marine",
        }
    }

    /// The action that must be legal for this command to do anything.
    pub fn required_function(self) -> FunctionId {
        match self {
            CommandKind::NoOp                => function::NO_OP,
            CommandKind::SelectArmy          => function::SELECT_ARMY,
            CommandKind::SelectIdleWorker    => function::SELECT_IDLE_WORKER,
            CommandKind::SelectOneScv
            | CommandKind::SelectCommandCenter
            | CommandKind::SelectBarracks    => function::SELECT_POINT,
            CommandKind::MoveToBeacon
            | CommandKind::MoveToMineral     => function::MOVE_SCREEN,
            CommandKind::HarvestMineral      => function::HARVEST_GATHER_SCREEN,
            CommandKind::AttackEnemy         => function::ATTACK_SCREEN,
            CommandKind::BuildSupplyDepot    => function::BUILD_SUPPLY_DEPOT_SCREEN,
            CommandKind::BuildBarracks       => function::BUILD_BARRACKS_SCREEN,
            CommandKind::TrainScv            => function::TRAIN_SCV_QUICK,
            CommandKind::TrainMarine         => function::TRAIN_MARINE_QUICK,
        }
    }

    /// Whether the command needs a screen target.
    pub fn is_targeted(self) -> bool {
        !matches!(
            self,
            CommandKind::NoOp
                | CommandKind::SelectArmy
                | CommandKind::SelectIdleWorker
                | CommandKind::TrainScv
                | CommandKind::TrainMarine
        )
    }

    /// The concrete call for a targeted command aimed at `target`.
    ///
    /// Untargeted commands ignore `target`.
    pub fn call_at(self, target: Point) -> FunctionCall {
        match self {
            CommandKind::SelectOneScv
            | CommandKind::SelectCommandCenter
            | CommandKind::SelectBarracks => FunctionCall::select_point(target),
            _ if self.is_targeted() => FunctionCall::screen(self.required_function(), target),
            _ => self.untargeted_call(),
        }
    }

    /// The concrete call for an untargeted command.
    pub fn untargeted_call(self) -> FunctionCall {
        match self {
            CommandKind::SelectArmy       => FunctionCall::select_army(),
            CommandKind::SelectIdleWorker => FunctionCall::select_idle_worker(),
            CommandKind::TrainScv | CommandKind::TrainMarine => {
                FunctionCall::quick(self.required_function())
            }
            _ => FunctionCall::no_op(),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CommandKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| IntentError::UnknownCommand(s.to_owned()))
    }
}

// ── AtomicCommand ─────────────────────────────────────────────────────────────

/// Parameter slot of an [`AtomicCommand`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamSlot {
    /// Bind against the observation of the tick the command executes on.
    #[default]
    Unresolved,
    /// Target fixed up front (e.g. by an external explainer).
    Resolved(Point),
}

/// One step of an [`Intent`][crate::Intent]: what to do, and where if known.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomicCommand {
    pub kind:   CommandKind,
    pub params: ParamSlot,
}

impl AtomicCommand {
    /// A command whose target is resolved at execution time.
    pub fn deferred(kind: CommandKind) -> Self {
        Self { kind, params: ParamSlot::Unresolved }
    }

    /// A command aimed at a fixed target.
    pub fn at(kind: CommandKind, target: Point) -> Self {
        Self { kind, params: ParamSlot::Resolved(target) }
    }
}

impl From<CommandKind> for AtomicCommand {
    fn from(kind: CommandKind) -> Self {
        Self::deferred(kind)
    }
}

impl fmt::Display for AtomicCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params {
            ParamSlot::Unresolved  => write!(f, "{}", self.kind),
            ParamSlot::Resolved(p) => write!(f, "{}@{p}", self.kind),
        }
    }
}
