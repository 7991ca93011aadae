//! `FunctionCall`: the concrete action handed back to the environment.

use std::fmt;

use crate::function::{self, NOT_QUEUED, SELECT_ALL};
use crate::{FunctionId, Point};

/// One outgoing action: an action id plus its argument lists.
///
/// Exactly one `FunctionCall` is produced per tick.  Arguments are positional
/// and their meaning depends on `function` (e.g. `Move_screen` takes
/// `[queued, [x, y]]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    pub function:  FunctionId,
    pub arguments: Vec<Vec<i32>>,
}

impl FunctionCall {
    pub fn new(function: FunctionId, arguments: Vec<Vec<i32>>) -> Self {
        Self { function, arguments }
    }

    /// The explicit "do nothing this tick" action.
    pub fn no_op() -> Self {
        Self::new(function::NO_OP, vec![])
    }

    pub fn select_army() -> Self {
        Self::new(function::SELECT_ARMY, vec![SELECT_ALL.to_vec()])
    }

    pub fn select_idle_worker() -> Self {
        Self::new(function::SELECT_IDLE_WORKER, vec![function::SELECT_ONE.to_vec()])
    }

    pub fn select_point(target: Point) -> Self {
        Self::new(function::SELECT_POINT, vec![SELECT_ALL.to_vec(), target.to_arg()])
    }

    pub fn move_screen(target: Point) -> Self {
        Self::screen(function::MOVE_SCREEN, target)
    }

    pub fn attack_screen(target: Point) -> Self {
        Self::screen(function::ATTACK_SCREEN, target)
    }

    /// Any `*_screen` ability issued immediately at `target`.
    pub fn screen(function: FunctionId, target: Point) -> Self {
        Self::new(function, vec![NOT_QUEUED.to_vec(), target.to_arg()])
    }

    /// Any `*_quick` ability (no target) issued immediately.
    pub fn quick(function: FunctionId) -> Self {
        Self::new(function, vec![NOT_QUEUED.to_vec()])
    }

    #[inline]
    pub fn is_no_op(&self) -> bool {
        self.function == function::NO_OP
    }

    /// The screen target, if the last argument is an `[x, y]` pair.
    pub fn target(&self) -> Option<Point> {
        match self.arguments.last()?.as_slice() {
            [x, y] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }
}

impl Default for FunctionCall {
    fn default() -> Self {
        Self::no_op()
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match function::name(self.function) {
            Some(name) => write!(f, "{name}{:?}", self.arguments),
            None => write!(f, "{}{:?}", self.function, self.arguments),
        }
    }
}
