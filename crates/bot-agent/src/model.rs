//! Plug points for the Terran agent's decision-making.
//!
//! Selection is split in two: an [`ActionPredictor`] names the next symbolic
//! action, and an [`ActionExplainer`] turns that name into an [`Intent`].
//! Either may be supplied from outside (a learned model, a scripted curriculum)
//! or left to the rule-based fallbacks in this module.

use bot_core::{Faction, PolicyRng, function};
use bot_intent::{Intent, Interpreter, RuleTable, rules};
use bot_observe::{Observation, faction_cells};

/// Names the next symbolic action to pursue.
///
/// Receives the agent's [`PolicyRng`] so randomised predictors stay
/// reproducible for a given seed.  Returning `None` means "nothing to do";
/// the agent emits `no_op` for that tick.
pub trait ActionPredictor: Send + Sync {
    fn predict(&self, obs: &Observation, rng: &mut PolicyRng) -> Option<String>;
}

/// Expands a symbolic action into an [`Intent`] for the current observation.
///
/// Returning `None` means no intent is created this tick.
pub trait ActionExplainer: Send + Sync {
    fn explain(&self, obs: &Observation, action: &str) -> Option<Intent>;
}

// ── Rule-based fallbacks ──────────────────────────────────────────────────────

/// Built-in predictor.
///
/// | Observation                         | Action            |
/// |-------------------------------------|-------------------|
/// | hostile units visible, attack legal | `Attack_Enemy`    |
/// | minerals and own units visible      | `Collect_Mineral` |
/// | otherwise                           | `Select_Army`     |
#[derive(Clone, Copy, Debug, Default)]
pub struct RulePredictor;

impl RulePredictor {
    /// Every action name this predictor can emit.
    pub const ACTIONS: [&'static str; 3] =
        [rules::ATTACK_ENEMY, rules::COLLECT_MINERAL, rules::SELECT_ARMY];

    /// Names from [`Self::ACTIONS`] that `rules` does not define.
    pub fn missing_actions(rules: &RuleTable) -> Vec<&'static str> {
        Self::ACTIONS
            .into_iter()
            .filter(|name| rules.get(name).is_none())
            .collect()
    }
}

impl ActionPredictor for RulePredictor {
    fn predict(&self, obs: &Observation, _rng: &mut PolicyRng) -> Option<String> {
        let action = if obs.is_available(function::ATTACK_SCREEN)
            && !faction_cells(obs, Faction::Hostile).is_empty()
        {
            rules::ATTACK_ENEMY
        } else if !faction_cells(obs, Faction::Neutral).is_empty()
            && !faction_cells(obs, Faction::Own).is_empty()
        {
            rules::COLLECT_MINERAL
        } else {
            rules::SELECT_ARMY
        };
        Some(action.to_owned())
    }
}

/// Built-in explainer: a straight rule-table lookup.
///
/// `Default` uses the built-in rule table.
#[derive(Clone, Debug)]
pub struct RuleExplainer {
    interpreter: Interpreter,
}

impl RuleExplainer {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    pub fn builtin() -> Self {
        Self::new(Interpreter::builtin())
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl Default for RuleExplainer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ActionExplainer for RuleExplainer {
    fn explain(&self, _obs: &Observation, action: &str) -> Option<Intent> {
        self.interpreter.interpret(action)
    }
}
