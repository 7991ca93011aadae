//! beacon: drives the rts_bot agents against a toy minigame screen.
//!
//! ```text
//! cargo run -p beacon -- --agent terran --episodes 5
//! RUST_LOG=bot_intent=debug cargo run -p beacon -- --agent terran --steps 20
//! ```

mod grid;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::EnvFilter;

use bot_agent::{
    Agent, CollectMineralShards, DefeatRoaches, MoveToBeacon, NoopAgent, RandomPredictor,
    SimpleTerranAgent,
};
use bot_core::PolicyRng;
use bot_intent::{RuleTable, load_rules_csv};
use bot_output::{CsvWriter, RunOutputObserver};
use bot_run::{NoopObserver, RunConfig, RunSummary, Runner};

use grid::{GridConfig, GridWorld};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Beacon,
    Shards,
    Roaches,
    Terran,
    Random,
    Noop,
}

/// Command line arguments for the demo
#[derive(Parser, Debug)]
#[command(name = "beacon")]
#[command(about = "Run a scripted RTS agent against a toy minigame screen")]
struct Args {
    /// Which agent to run
    #[arg(long, value_enum, default_value_t = AgentKind::Beacon)]
    agent: AgentKind,

    /// Episodes to play
    #[arg(long, default_value_t = 3)]
    episodes: u64,

    /// Ticks per episode
    #[arg(long, default_value_t = 120)]
    steps: u64,

    /// Random seed for the screen and the agent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Screen width and height in cells
    #[arg(long, default_value_t = 32)]
    size: i32,

    /// Stationary hostiles placed each episode
    #[arg(long, default_value_t = 0)]
    hostiles: usize,

    /// CSV rule table for the Terran agents (action,step,command,priority)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Directory for actions.csv and episodes.csv
    #[arg(long)]
    output: Option<PathBuf>,
}

fn build_agent(args: &Args) -> Result<Box<dyn Agent>> {
    let terran = || -> Result<SimpleTerranAgent> {
        let agent = match &args.rules {
            Some(path) => SimpleTerranAgent::from_rules_csv(path)
                .with_context(|| format!("loading rules from {}", path.display()))?,
            None => SimpleTerranAgent::new(),
        };
        Ok(agent.with_seed(args.seed))
    };

    Ok(match args.agent {
        AgentKind::Beacon  => Box::new(MoveToBeacon::new()),
        AgentKind::Shards  => Box::new(CollectMineralShards::new()),
        AgentKind::Roaches => Box::new(DefeatRoaches::new()),
        AgentKind::Terran  => Box::new(terran()?),
        AgentKind::Random  => {
            let rules = match &args.rules {
                Some(path) => load_rules_csv(path)
                    .with_context(|| format!("loading rules from {}", path.display()))?,
                None => RuleTable::builtin(),
            };
            if rules.is_empty() {
                bail!("no rules to pick from");
            }
            Box::new(
                SimpleTerranAgent::new()
                    .with_rules(rules.clone())
                    .with_predictor(RandomPredictor::new(rules))
                    .with_seed(args.seed),
            )
        }
        AgentKind::Noop    => Box::new(NoopAgent::new()),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("=== beacon: rts_bot demo ===");
    println!(
        "Agent: {:?}  |  Episodes: {}  |  Steps: {}  |  Seed: {}",
        args.agent, args.episodes, args.steps, args.seed
    );
    println!();

    let mut agent = build_agent(&args)?;
    let mut env = GridWorld::new(
        GridConfig { size: args.size, hostiles: args.hostiles, episode_len: args.steps },
        PolicyRng::new(args.seed).child(1),
    )?;
    let runner = Runner::new(RunConfig::new(args.episodes, args.steps))?;

    let t0 = Instant::now();
    let summary: RunSummary = match &args.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output in {}", dir.display()))?;
            let mut obs = RunOutputObserver::new(writer);
            let summary = runner.run(&mut agent, &mut env, &mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            summary
        }
        None => runner.run(&mut agent, &mut env, &mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<10} {:<8} {:<10}", "Episode", "Steps", "Reward");
    println!("{}", "-".repeat(28));
    for e in &summary.episodes {
        println!("{:<10} {:<8} {:<10.1}", e.episode, e.steps, e.reward);
    }
    println!("{}", "-".repeat(28));
    println!("{:<10} {:<8} {:<10.1}", "total", summary.total_steps(), summary.total_reward());

    Ok(())
}
