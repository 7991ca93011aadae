//! Unit tests for bot-agent.

use bot_core::{Faction, FunctionCall, FunctionId, Point, function, unit};
use bot_observe::{Layer, Observation, Raster, TimeStep};

use crate::Agent;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 8×8 player-relative screen with the given cells.
fn screen(cells: &[(Point, Faction)]) -> Raster {
    let mut r = Raster::zeros(8, 8);
    for &(p, f) in cells {
        r.set(p, f.code() as u32);
    }
    r
}

fn obs(cells: &[(Point, Faction)], available: &[FunctionId]) -> Observation {
    Observation::new()
        .with_layer(Layer::PlayerRelative, screen(cells))
        .with_available(available.iter().copied())
}

fn mid(observation: Observation) -> TimeStep {
    TimeStep::mid(observation, 0.0)
}

const MOVE_LEGAL: &[FunctionId] = &[function::NO_OP, function::SELECT_ARMY, function::MOVE_SCREEN];
const ATTACK_LEGAL: &[FunctionId] = &[function::NO_OP, function::SELECT_ARMY, function::ATTACK_SCREEN];
const NOTHING_SELECTED: &[FunctionId] = &[function::NO_OP, function::SELECT_ARMY];

/// Every action the built-in rules need.
fn all_legal() -> Vec<FunctionId> {
    bot_intent::CommandKind::ALL.iter().map(|k| k.required_function()).collect()
}

// ── AgentStats ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_tests {
    use super::*;
    use crate::{AgentStats, NoopAgent};

    #[test]
    fn record_counts_steps_and_reward() {
        let mut stats = AgentStats::new();
        stats.begin_episode();
        stats.record(&TimeStep::first(Observation::new()));
        stats.record(&TimeStep::mid(Observation::new(), 2.0));
        stats.record(&TimeStep::last(Observation::new(), 1.5));
        assert_eq!(stats.steps.0, 3);
        assert_eq!(stats.episodes, 1);
        assert_eq!(stats.reward, 3.5);
        assert_eq!(stats.episode_steps, 3);
    }

    #[test]
    fn begin_episode_resets_episode_counters_only() {
        let mut stats = AgentStats::new();
        stats.begin_episode();
        stats.record(&TimeStep::mid(Observation::new(), 4.0));
        stats.begin_episode();
        assert_eq!(stats.episodes, 2);
        assert_eq!(stats.episode_steps, 0);
        assert_eq!(stats.episode_reward, 0.0);
        assert_eq!(stats.steps.0, 1);
        assert_eq!(stats.reward, 4.0);
    }

    #[test]
    fn noop_agent_always_no_op() {
        let mut agent = NoopAgent::new();
        agent.reset();
        let call = agent.step(&mid(obs(&[], MOVE_LEGAL)));
        assert!(call.is_no_op());
        assert_eq!(agent.stats().steps.0, 1);
        assert_eq!(agent.name(), "NoopAgent");
    }
}

// ── Scripted agents ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted_tests {
    use super::*;
    use crate::{CollectMineralShards, DefeatRoaches, MoveToBeacon};

    #[test]
    fn beacon_selects_army_first() {
        let mut agent = MoveToBeacon::new();
        let call = agent.step(&mid(obs(&[(Point::new(3, 3), Faction::Neutral)], NOTHING_SELECTED)));
        assert_eq!(call, FunctionCall::select_army());
    }

    #[test]
    fn beacon_moves_to_centroid() {
        let mut agent = MoveToBeacon::new();
        let cells = [
            (Point::new(4, 2), Faction::Neutral),
            (Point::new(6, 2), Faction::Neutral),
            (Point::new(4, 4), Faction::Neutral),
            (Point::new(6, 4), Faction::Neutral),
        ];
        let call = agent.step(&mid(obs(&cells, MOVE_LEGAL)));
        assert_eq!(call, FunctionCall::move_screen(Point::new(5, 3)));
    }

    #[test]
    fn beacon_without_neutral_cells_is_no_op() {
        let mut agent = MoveToBeacon::new();
        assert!(agent.step(&mid(obs(&[], MOVE_LEGAL))).is_no_op());
    }

    #[test]
    fn shards_moves_to_nearest() {
        let mut agent = CollectMineralShards::new();
        let cells = [
            (Point::new(2, 2), Faction::Neutral),
            (Point::new(2, 4), Faction::Neutral),
            (Point::new(0, 0), Faction::Own),
        ];
        let call = agent.step(&mid(obs(&cells, MOVE_LEGAL)));
        assert_eq!(call, FunctionCall::move_screen(Point::new(2, 2)));
    }

    #[test]
    fn shards_without_army_or_shards_is_no_op() {
        let mut agent = CollectMineralShards::new();
        let no_army = [(Point::new(2, 2), Faction::Neutral)];
        let no_shards = [(Point::new(0, 0), Faction::Own)];
        assert!(agent.step(&mid(obs(&no_army, MOVE_LEGAL))).is_no_op());
        assert!(agent.step(&mid(obs(&no_shards, MOVE_LEGAL))).is_no_op());
    }

    #[test]
    fn shards_selects_army_when_move_illegal() {
        let mut agent = CollectMineralShards::new();
        assert_eq!(agent.step(&mid(obs(&[], NOTHING_SELECTED))), FunctionCall::select_army());
    }

    #[test]
    fn roaches_attacks_lowest_on_screen() {
        let mut agent = DefeatRoaches::new();
        let cells = [
            (Point::new(1, 2), Faction::Hostile),
            (Point::new(5, 6), Faction::Hostile),
            (Point::new(7, 6), Faction::Hostile),
            (Point::new(3, 0), Faction::Own),
        ];
        let call = agent.step(&mid(obs(&cells, ATTACK_LEGAL)));
        assert_eq!(call, FunctionCall::attack_screen(Point::new(5, 6)));
    }

    #[test]
    fn roaches_without_hostiles_is_no_op() {
        let mut agent = DefeatRoaches::new();
        assert!(agent.step(&mid(obs(&[], ATTACK_LEGAL))).is_no_op());
        assert_eq!(agent.step(&mid(obs(&[], NOTHING_SELECTED))), FunctionCall::select_army());
    }
}

// ── Predictors ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod predictor_tests {
    use bot_core::PolicyRng;
    use bot_intent::rules;

    use super::*;
    use crate::{ActionExplainer, ActionPredictor, RandomPredictor, RuleExplainer, RulePredictor};

    #[test]
    fn rule_predictor_prefers_attack() {
        let o = obs(
            &[(Point::new(1, 1), Faction::Hostile), (Point::new(2, 2), Faction::Neutral), (Point::new(0, 0), Faction::Own)],
            ATTACK_LEGAL,
        );
        let action = RulePredictor.predict(&o, &mut PolicyRng::new(0));
        assert_eq!(action.as_deref(), Some(rules::ATTACK_ENEMY));
    }

    #[test]
    fn rule_predictor_collects_when_minerals_visible() {
        let o = obs(&[(Point::new(2, 2), Faction::Neutral), (Point::new(0, 0), Faction::Own)], MOVE_LEGAL);
        let action = RulePredictor.predict(&o, &mut PolicyRng::new(0));
        assert_eq!(action.as_deref(), Some(rules::COLLECT_MINERAL));
    }

    #[test]
    fn rule_predictor_falls_back_to_select_army() {
        let o = obs(&[(Point::new(0, 0), Faction::Own)], MOVE_LEGAL);
        let action = RulePredictor.predict(&o, &mut PolicyRng::new(0));
        assert_eq!(action.as_deref(), Some(rules::SELECT_ARMY));
    }

    #[test]
    fn rule_explainer_uses_table() {
        let explainer = RuleExplainer::builtin();
        let intent = explainer.explain(&Observation::new(), rules::COLLECT_MINERAL).unwrap();
        assert_eq!(intent.len(), 2);
        assert!(explainer.explain(&Observation::new(), "Unknown").is_none());
    }

    #[test]
    fn random_predictor_only_picks_legal_rules() {
        let predictor = RandomPredictor::builtin();
        let o = obs(&[], NOTHING_SELECTED);
        let mut rng = PolicyRng::new(3);
        for _ in 0..50 {
            let action = predictor.predict(&o, &mut rng).unwrap();
            // Only rules starting with select_army are legal here.
            assert!(
                [rules::MOVE_TO_BEACON, rules::ATTACK_ENEMY, rules::SELECT_ARMY].contains(&action.as_str()),
                "picked {action}"
            );
        }
    }

    #[test]
    fn random_predictor_is_seeded() {
        let predictor = RandomPredictor::builtin();
        let o = obs(&[], &all_legal());
        let picks = |seed| {
            let mut rng = PolicyRng::new(seed);
            (0..10).map(|_| predictor.predict(&o, &mut rng).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(picks(9), picks(9));
    }

    #[test]
    fn random_predictor_with_nothing_legal_is_none() {
        let predictor = RandomPredictor::builtin();
        assert!(predictor.predict(&Observation::new(), &mut PolicyRng::new(0)).is_none());
    }
}

// ── SimpleTerranAgent ─────────────────────────────────────────────────────────

#[cfg(test)]
mod terran_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bot_core::PolicyRng;
    use bot_intent::{CommandKind, Intent, RuleTable};

    use super::*;
    use crate::{ActionExplainer, ActionPredictor, SimpleTerranAgent};

    /// Minerals at (2,2),(2,4); own SCV at (0,0).
    fn mineral_field() -> Observation {
        let mut types = Raster::zeros(8, 8);
        types.set(Point::new(0, 0), unit::TERRAN_SCV.0);
        obs(
            &[
                (Point::new(2, 2), Faction::Neutral),
                (Point::new(2, 4), Faction::Neutral),
                (Point::new(0, 0), Faction::Own),
            ],
            &all_legal(),
        )
        .with_layer(Layer::UnitType, types)
    }

    /// Counts how often it is asked, always answers the same action.
    struct CountingPredictor {
        action: &'static str,
        calls:  Arc<AtomicUsize>,
    }

    impl ActionPredictor for CountingPredictor {
        fn predict(&self, _obs: &Observation, _rng: &mut PolicyRng) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(self.action.to_owned())
        }
    }

    /// Always aims `attack_enemy` at a fixed cell.
    struct FixedTarget;

    impl ActionExplainer for FixedTarget {
        fn explain(&self, _obs: &Observation, action: &str) -> Option<Intent> {
            Some(Intent::from_commands(action, vec![
                bot_intent::AtomicCommand::at(CommandKind::AttackEnemy, Point::new(4, 4)),
            ]))
        }
    }

    #[test]
    fn rule_dispatch_collects_minerals() {
        let mut agent = SimpleTerranAgent::new();
        agent.reset();
        let ts = mid(mineral_field());
        assert_eq!(agent.step(&ts), FunctionCall::select_point(Point::new(0, 0)));
        assert_eq!(agent.queue().head().unwrap().name(), "Collect_Mineral");
        assert_eq!(agent.step(&ts), FunctionCall::move_screen(Point::new(2, 2)));
        assert!(agent.queue().is_empty());
    }

    #[test]
    fn empty_neutral_mask_emits_select_army() {
        let mut agent = SimpleTerranAgent::new();
        let ts = mid(obs(&[(Point::new(0, 0), Faction::Own)], MOVE_LEGAL));
        let call = agent.step(&ts);
        assert_eq!(call, FunctionCall::select_army());
        assert_ne!(call.function, function::MOVE_SCREEN);
    }

    #[test]
    fn busy_agent_skips_selection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut agent = SimpleTerranAgent::new().with_predictor(CountingPredictor {
            action: "Collect_Mineral",
            calls:  Arc::clone(&calls),
        });
        let ts = mid(mineral_field());
        agent.step(&ts); // idle → predict, select_one_scv
        agent.step(&ts); // busy → move_to_mineral
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        agent.step(&ts); // idle again
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unknown_prediction_is_no_op() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut agent = SimpleTerranAgent::new().with_predictor(CountingPredictor {
            action: "Dance",
            calls:  Arc::clone(&calls),
        });
        assert!(agent.step(&mid(mineral_field())).is_no_op());
        assert!(agent.queue().is_empty());
    }

    #[test]
    fn external_explainer_is_used() {
        let mut agent = SimpleTerranAgent::new().with_explainer(FixedTarget);
        let call = agent.step(&mid(mineral_field()));
        assert_eq!(call, FunctionCall::attack_screen(Point::new(4, 4)));
    }

    #[test]
    fn custom_rules_feed_fallback_explainer() {
        let rules = RuleTable::new().with_rule("Collect_Mineral", [CommandKind::SelectArmy], 0);
        let mut agent = SimpleTerranAgent::new().with_rules(rules);
        assert_eq!(agent.step(&mid(mineral_field())), FunctionCall::select_army());
        assert!(agent.queue().is_empty());
    }

    #[test]
    fn enqueued_intent_runs_before_prediction() {
        let mut agent = SimpleTerranAgent::new();
        agent.enqueue(Intent::new("opening", [CommandKind::TrainScv]));
        assert_eq!(
            agent.step(&mid(mineral_field())),
            FunctionCall::quick(function::TRAIN_SCV_QUICK),
        );
    }

    #[test]
    fn reset_clears_pending_intents() {
        let mut agent = SimpleTerranAgent::new();
        agent.step(&mid(mineral_field()));
        assert_eq!(agent.queue().len(), 1);
        agent.reset();
        assert!(agent.queue().is_empty());
        assert_eq!(agent.stats().episodes, 1);
    }

    #[test]
    fn clear_queue_keeps_stats() {
        let mut agent = SimpleTerranAgent::new();
        agent.step(&mid(mineral_field()));
        assert_eq!(agent.queue().len(), 1);
        agent.clear_queue();
        assert!(agent.queue().is_empty());
        assert_eq!(agent.stats().episode_steps, 1);
        assert_eq!(agent.stats().episodes, 0);
        // Idle again: the predictor starts a fresh Collect_Mineral intent.
        assert_eq!(agent.step(&mid(mineral_field())), FunctionCall::select_point(Point::new(0, 0)));
    }
}

#[cfg(test)]
mod rules_file_tests {
    use std::io::Write;

    use crate::{AgentError, RandomPredictor, RulePredictor, SimpleTerranAgent};

    use super::*;

    fn rules_file(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_rules_from_csv() {
        let f = rules_file(
            "action,step,command,priority\n\
             Select_Army,0,select_army,0\n\
             Collect_Mineral,0,select_army,0\n\
             Attack_Enemy,0,attack_enemy,1\n",
        );
        let mut agent = SimpleTerranAgent::from_rules_csv(f.path()).unwrap();
        let ts = mid(obs(&[(Point::new(0, 0), Faction::Own)], NOTHING_SELECTED));
        assert_eq!(agent.step(&ts), FunctionCall::select_army());
    }

    #[test]
    fn empty_table_is_config_error() {
        let f = rules_file("action,step,command,priority\n");
        let err = SimpleTerranAgent::from_rules_csv(f.path()).err().unwrap();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[test]
    fn table_without_predictor_actions_is_config_error() {
        let f = rules_file(
            "action,step,command,priority\nGather,0,select_army,0\nGather,1,move_to_mineral,0\n",
        );
        let err = SimpleTerranAgent::from_rules_csv(f.path()).err().unwrap();
        let AgentError::Config(msg) = err else { panic!("expected config error, got {err:?}") };
        for name in RulePredictor::ACTIONS {
            assert!(msg.contains(name), "{msg}");
        }
    }

    #[test]
    fn partial_table_names_missing_action() {
        let rules = bot_intent::RuleTable::new()
            .with_rule("Select_Army", [bot_intent::CommandKind::SelectArmy], 0)
            .with_rule("Collect_Mineral", [bot_intent::CommandKind::SelectArmy], 0);
        assert_eq!(RulePredictor::missing_actions(&rules), vec!["Attack_Enemy"]);
        assert!(RulePredictor::missing_actions(&bot_intent::RuleTable::builtin()).is_empty());
    }

    #[test]
    fn random_predictor_over_custom_table_acts() {
        let f = rules_file(
            "action,step,command,priority\nGather,0,select_army,0\nGather,1,move_to_mineral,0\n",
        );
        let rules = bot_intent::load_rules_csv(f.path()).unwrap();
        let mut agent = SimpleTerranAgent::new()
            .with_rules(rules.clone())
            .with_predictor(RandomPredictor::new(rules));
        let ts = mid(obs(
            &[(Point::new(0, 0), Faction::Own), (Point::new(3, 3), Faction::Neutral)],
            &all_legal(),
        ));
        assert_eq!(agent.step(&ts), FunctionCall::select_army());
        assert_eq!(agent.step(&ts), FunctionCall::move_screen(Point::new(3, 3)));
    }

    #[test]
    fn bad_command_is_rules_error() {
        let f = rules_file("action,step,command,priority\nDance,0,moonwalk,0\n");
        let err = SimpleTerranAgent::from_rules_csv(f.path()).err().unwrap();
        assert!(matches!(err, AgentError::Rules(_)));
    }
}
