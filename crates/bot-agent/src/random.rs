//! Seeded random baseline predictor.

use bot_core::PolicyRng;
use bot_intent::RuleTable;
use bot_observe::Observation;

use crate::ActionPredictor;

/// Picks uniformly among the rules whose first command is legal right now.
///
/// Useful as a baseline against scripted play.  Determinism comes from the
/// agent's [`PolicyRng`]: the same seed and observations give the same picks.
#[derive(Clone, Debug)]
pub struct RandomPredictor {
    rules: RuleTable,
}

impl RandomPredictor {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }
}

impl ActionPredictor for RandomPredictor {
    fn predict(&self, obs: &Observation, rng: &mut PolicyRng) -> Option<String> {
        let legal: Vec<&str> = self
            .rules
            .iter()
            .filter(|(_, rule)| {
                rule.commands
                    .first()
                    .is_some_and(|k| obs.is_available(k.required_function()))
            })
            .map(|(name, _)| name)
            .collect();
        rng.choose(&legal).map(|s| (*s).to_owned())
    }
}
