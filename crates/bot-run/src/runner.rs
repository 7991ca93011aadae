//! The episode loop.

use bot_agent::Agent;
use bot_core::Tick;
use tracing::{debug, info};

use crate::{Environment, RunConfig, RunObserver, RunResult};

/// Totals for one finished episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeSummary {
    pub episode:   u64,
    pub steps:     u64,
    pub reward:    f64,
    /// `true` if the step cap ended the episode before a `Last` step.
    pub truncated: bool,
}

/// Totals across the whole run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub episodes: Vec<EpisodeSummary>,
}

impl RunSummary {
    pub fn total_steps(&self) -> u64 {
        self.episodes.iter().map(|e| e.steps).sum()
    }

    pub fn total_reward(&self) -> f64 {
        self.episodes.iter().map(|e| e.reward).sum()
    }
}

/// Plays episodes of an agent against an environment.
#[derive(Clone, Debug)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Validates `config`.
    pub fn new(config: RunConfig) -> RunResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run `config.max_episodes` episodes.
    ///
    /// Environment errors abort the run; the agent itself cannot fail.
    pub fn run<A, E, O>(&self, agent: &mut A, env: &mut E, observer: &mut O) -> RunResult<RunSummary>
    where
        A: Agent + ?Sized,
        E: Environment + ?Sized,
        O: RunObserver,
    {
        let mut summary = RunSummary::default();
        for episode in 0..self.config.max_episodes {
            let result = self.run_episode(episode, agent, env, observer)?;
            info!(
                agent     = agent.name(),
                episode,
                steps     = result.steps,
                reward    = result.reward,
                truncated = result.truncated,
                "episode finished"
            );
            observer.on_episode_end(&result);
            summary.episodes.push(result);
        }
        info!(
            episodes = summary.episodes.len(),
            steps    = summary.total_steps(),
            reward   = summary.total_reward(),
            "run finished"
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    fn run_episode<A, E, O>(
        &self,
        episode:  u64,
        agent:    &mut A,
        env:      &mut E,
        observer: &mut O,
    ) -> RunResult<EpisodeSummary>
    where
        A: Agent + ?Sized,
        E: Environment + ?Sized,
        O: RunObserver,
    {
        agent.reset();
        let mut ts = env.reset()?;
        observer.on_episode_start(episode);

        let mut result = EpisodeSummary { episode, ..EpisodeSummary::default() };
        loop {
            let action = agent.step(&ts);
            observer.on_step(episode, Tick(result.steps), &ts, &action);
            result.steps += 1;
            result.reward += ts.reward as f64;

            if ts.is_last() {
                break;
            }
            if result.steps >= self.config.max_steps_per_episode {
                debug!(episode, steps = result.steps, "step cap reached");
                result.truncated = true;
                break;
            }
            ts = env.step(&action)?;
        }
        Ok(result)
    }
}
