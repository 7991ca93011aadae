//! Rule tables: symbolic action → ordered atomic commands.
//!
//! A `RuleTable` is plain configuration.  It is built once (from
//! [`RuleTable::builtin`] or a CSV file via [`crate::load_rules_csv`]) and
//! handed to an [`Interpreter`][crate::Interpreter], which never mutates it.

use std::collections::BTreeMap;

use crate::CommandKind;
use CommandKind::*;

// ── Built-in action names ─────────────────────────────────────────────────────

pub const COLLECT_MINERAL:    &str = "Collect_Mineral";
pub const HARVEST_MINERAL:    &str = "Harvest_Mineral";
pub const MOVE_TO_BEACON:     &str = "Move_To_Beacon";
pub const ATTACK_ENEMY:       &str = "Attack_Enemy";
pub const BUILD_SUPPLY_DEPOT: &str = "Build_Supply_Depot";
pub const BUILD_BARRACKS:     &str = "Build_Barracks";
pub const TRAIN_SCV:          &str = "Train_SCV";
pub const TRAIN_MARINE:       &str = "Train_Marine";
pub const SELECT_ARMY:        &str = "Select_Army";

/// The expansion of one symbolic action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub commands: Vec<CommandKind>,
    /// Priority given to intents created from this rule.
    pub priority: i32,
}

/// Immutable map from symbolic action name to [`Rule`].
///
/// Iteration is in name order, so anything sampling from the table (e.g. a
/// seeded random predictor) is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<String, Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default Terran rule set.
    pub fn builtin() -> Self {
        Self::new()
            .with_rule(COLLECT_MINERAL,    [SelectOneScv, MoveToMineral], 0)
            .with_rule(HARVEST_MINERAL,    [SelectOneScv, HarvestMineral], 0)
            .with_rule(MOVE_TO_BEACON,     [SelectArmy, MoveToBeacon], 0)
            .with_rule(ATTACK_ENEMY,       [SelectArmy, AttackEnemy], 1)
            .with_rule(BUILD_SUPPLY_DEPOT, [SelectOneScv, BuildSupplyDepot], 0)
            .with_rule(BUILD_BARRACKS,     [SelectOneScv, BuildBarracks], 0)
            .with_rule(TRAIN_SCV,          [SelectCommandCenter, TrainScv], 0)
            .with_rule(TRAIN_MARINE,       [SelectBarracks, TrainMarine], 0)
            .with_rule(SELECT_ARMY,        [SelectArmy], 0)
    }

    /// Add (or replace) the rule for `action`.
    pub fn with_rule<I>(mut self, action: impl Into<String>, commands: I, priority: i32) -> Self
    where
        I: IntoIterator<Item = CommandKind>,
    {
        self.rules.insert(
            action.into(),
            Rule { commands: commands.into_iter().collect(), priority },
        );
        self
    }

    #[inline]
    pub fn get(&self, action: &str) -> Option<&Rule> {
        self.rules.get(action)
    }

    /// Symbolic action names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
