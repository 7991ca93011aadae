//! Unit tests for bot-run.

use bot_agent::{Agent, MoveToBeacon, NoopAgent};
use bot_core::{Faction, FunctionCall, Point, Tick, function};
use bot_observe::{Layer, Observation, Raster, TimeStep};

use crate::{
    Environment, EpisodeSummary, NoopObserver, ReplayEnvironment, RunConfig, RunError,
    RunObserver, RunSummary, Runner,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Beacon at `at`, move legal.
fn beacon_frame(at: Point) -> Observation {
    let mut r = Raster::zeros(8, 8);
    r.set(at, Faction::Neutral.code() as u32);
    Observation::new()
        .with_layer(Layer::PlayerRelative, r)
        .with_available([function::NO_OP, function::SELECT_ARMY, function::MOVE_SCREEN])
}

fn replay(n: usize) -> ReplayEnvironment {
    let frames = (0..n).map(|i| beacon_frame(Point::new(i as i32, 1))).collect();
    ReplayEnvironment::new(frames).unwrap()
}

/// Records every hook call as a string.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl RunObserver for Recorder {
    fn on_episode_start(&mut self, episode: u64) {
        self.events.push(format!("start {episode}"));
    }

    fn on_step(&mut self, episode: u64, tick: Tick, _step: &TimeStep, action: &FunctionCall) {
        self.events.push(format!("step {episode} {tick} {action}"));
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        self.events.push(format!("end {} {}", summary.episode, summary.steps));
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.events.push(format!("run {}", summary.total_steps()));
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_episodes_rejected() {
        assert!(matches!(RunConfig::new(0, 10).validate(), Err(RunError::Config(_))));
        assert!(Runner::new(RunConfig::new(0, 10)).is_err());
    }

    #[test]
    fn zero_steps_rejected() {
        assert!(matches!(RunConfig::new(1, 0).validate(), Err(RunError::Config(_))));
    }
}

// ── ReplayEnvironment ─────────────────────────────────────────────────────────

#[cfg(test)]
mod replay_tests {
    use bot_observe::StepKind;

    use super::*;

    #[test]
    fn too_few_frames_rejected() {
        assert!(ReplayEnvironment::new(vec![Observation::new()]).is_err());
    }

    #[test]
    fn reward_count_must_match() {
        assert!(replay(3).with_rewards(vec![1.0]).is_err());
    }

    #[test]
    fn step_before_reset_fails() {
        let mut env = replay(2);
        assert!(matches!(env.step(&FunctionCall::no_op()), Err(RunError::NotStarted)));
    }

    #[test]
    fn kinds_are_first_mid_last() {
        let mut env = replay(3);
        let kinds = [
            env.reset().unwrap().kind,
            env.step(&FunctionCall::no_op()).unwrap().kind,
            env.step(&FunctionCall::no_op()).unwrap().kind,
        ];
        assert_eq!(kinds, [StepKind::First, StepKind::Mid, StepKind::Last]);
        assert!(matches!(env.step(&FunctionCall::no_op()), Err(RunError::EpisodeOver)));
    }

    #[test]
    fn records_actions_and_rewards() {
        let mut env = replay(3).with_rewards(vec![0.0, 1.0, 2.0]).unwrap();
        env.reset().unwrap();
        let mid = env.step(&FunctionCall::select_army()).unwrap();
        let last = env.step(&FunctionCall::no_op()).unwrap();
        assert_eq!(mid.reward, 1.0);
        assert_eq!(last.reward, 2.0);
        assert_eq!(env.actions(), &[FunctionCall::select_army(), FunctionCall::no_op()]);
    }

    #[test]
    fn off_screen_target_is_environment_error() {
        let mut env = replay(3);
        env.reset().unwrap();
        let err = env.step(&FunctionCall::move_screen(Point::new(8, 2))).unwrap_err();
        assert!(matches!(err, RunError::Environment(_)));
        assert!(env.actions().is_empty());
        // The rejected call does not advance the replay.
        assert_eq!(env.step(&FunctionCall::move_screen(Point::new(7, 7))).unwrap().kind, StepKind::Mid);
    }

    #[test]
    fn reset_rewinds() {
        let mut env = replay(2);
        env.reset().unwrap();
        env.step(&FunctionCall::no_op()).unwrap();
        assert!(env.reset().unwrap().is_first());
        assert!(env.step(&FunctionCall::no_op()).unwrap().is_last());
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner_tests {
    use super::*;

    #[test]
    fn one_action_per_step_including_last() {
        let mut env = replay(4);
        let mut agent = MoveToBeacon::new();
        let summary = Runner::new(RunConfig::new(1, 100))
            .unwrap()
            .run(&mut agent, &mut env, &mut NoopObserver)
            .unwrap();
        assert_eq!(summary.total_steps(), 4);
        assert!(!summary.episodes[0].truncated);
        // The environment only sees the actions for the first three frames.
        assert_eq!(env.actions().len(), 3);
        assert_eq!(env.actions()[1], FunctionCall::move_screen(Point::new(1, 1)));
        assert_eq!(agent.stats().steps, Tick(4));
    }

    #[test]
    fn step_cap_truncates() {
        let mut env = replay(10);
        let summary = Runner::new(RunConfig::new(2, 3))
            .unwrap()
            .run(&mut NoopAgent::new(), &mut env, &mut NoopObserver)
            .unwrap();
        assert_eq!(summary.episodes.len(), 2);
        assert!(summary.episodes.iter().all(|e| e.steps == 3 && e.truncated));
    }

    #[test]
    fn rewards_summed_per_episode() {
        let mut env = replay(3).with_rewards(vec![0.0, 0.5, 1.0]).unwrap();
        let summary = Runner::new(RunConfig::new(2, 100))
            .unwrap()
            .run(&mut NoopAgent::new(), &mut env, &mut NoopObserver)
            .unwrap();
        assert_eq!(summary.episodes[1].reward, 1.5);
        assert_eq!(summary.total_reward(), 3.0);
    }

    #[test]
    fn agent_reset_each_episode() {
        let mut env = replay(2);
        let mut agent = NoopAgent::new();
        Runner::new(RunConfig::new(3, 100))
            .unwrap()
            .run(&mut agent, &mut env, &mut NoopObserver)
            .unwrap();
        assert_eq!(agent.stats().episodes, 3);
        assert_eq!(agent.stats().steps, Tick(6));
    }

    #[test]
    fn observer_hooks_in_order() {
        let mut env = replay(2);
        let mut rec = Recorder::default();
        Runner::new(RunConfig::new(1, 100))
            .unwrap()
            .run(&mut NoopAgent::new(), &mut env, &mut rec)
            .unwrap();
        assert_eq!(rec.events, vec![
            "start 0",
            "step 0 T0 no_op[]",
            "step 0 T1 no_op[]",
            "end 0 2",
            "run 2",
        ]);
    }

    #[test]
    fn boxed_agent_runs() {
        let mut env = replay(2);
        let mut agent: Box<dyn Agent> = Box::new(NoopAgent::new());
        let summary = Runner::new(RunConfig::default())
            .unwrap()
            .run(&mut agent, &mut env, &mut NoopObserver)
            .unwrap();
        assert_eq!(summary.total_steps(), 2);
        assert_eq!(agent.name(), "NoopAgent");
    }

    #[test]
    fn terran_agent_drives_replay() {
        use bot_agent::SimpleTerranAgent;
        use bot_intent::CommandKind;

        let legal: Vec<_> = CommandKind::ALL.iter().map(|k| k.required_function()).collect();
        let frame = |p: Point| {
            let mut r = Raster::zeros(8, 8);
            r.set(Point::new(0, 0), Faction::Own.code() as u32);
            r.set(p, Faction::Neutral.code() as u32);
            Observation::new()
                .with_layer(Layer::PlayerRelative, r)
                .with_available(legal.iter().copied())
        };
        let mut env = ReplayEnvironment::new(vec![frame(Point::new(3, 3)), frame(Point::new(3, 3))]).unwrap();
        let mut agent = SimpleTerranAgent::new();
        Runner::new(RunConfig::default())
            .unwrap()
            .run(&mut agent, &mut env, &mut NoopObserver)
            .unwrap();
        assert_eq!(env.actions(), &[FunctionCall::select_point(Point::new(0, 0))]);
    }
}
