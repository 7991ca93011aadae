//! `SimpleTerranAgent`: predictor → explainer → intent queue, one atomic
//! command per tick.

use std::path::Path;

use bot_core::{FunctionCall, PolicyRng};
use bot_intent::{
    CommandResolver, Intent, IntentQueue, Interpreter, RuleTable, ScreenResolver, load_rules_csv,
};
use bot_observe::{Observation, TimeStep};
use tracing::trace;

use crate::{
    ActionExplainer, ActionPredictor, Agent, AgentError, AgentResult, AgentStats, RuleExplainer,
    RulePredictor,
};

/// Intent-queue agent for the full game.
///
/// Each tick:
///
/// 1. **Idle** (queue empty): ask the predictor for a symbolic action, ask the
///    explainer to turn it into an [`Intent`], and admit it if one came back.
/// 2. **Busy** (queue non-empty): skip selection.
/// 3. In both cases, drain exactly one atomic command from the queue.
///
/// The predictor and explainer are optional plug points; when absent the
/// [`RulePredictor`] and a [`RuleExplainer`] over this agent's rule table are
/// used.
///
/// # Example
///
/// ```rust,ignore
/// let mut agent = SimpleTerranAgent::new()
///     .with_rules(load_rules_csv(Path::new("rules.csv"))?)
///     .with_predictor(MyModel::load()?);
/// let action = agent.step(&timestep);
/// ```
pub struct SimpleTerranAgent {
    stats:     AgentStats,
    queue:     IntentQueue,
    resolver:  Box<dyn CommandResolver + Send + Sync>,
    predictor: Option<Box<dyn ActionPredictor>>,
    explainer: Option<Box<dyn ActionExplainer>>,
    fallback:  (RulePredictor, RuleExplainer),
    rng:       PolicyRng,
}

impl Default for SimpleTerranAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleTerranAgent {
    /// Rule-based agent over [`RuleTable::builtin`] with seed 0.
    pub fn new() -> Self {
        Self {
            stats:     AgentStats::new(),
            queue:     IntentQueue::new(),
            resolver:  Box::new(ScreenResolver::new()),
            predictor: None,
            explainer: None,
            fallback:  (RulePredictor, RuleExplainer::builtin()),
            rng:       PolicyRng::new(0),
        }
    }

    /// Rule-based agent over a rule table loaded from CSV.
    ///
    /// The table must define every action [`RulePredictor`] can emit; an empty
    /// file or one missing any of [`RulePredictor::ACTIONS`] is a
    /// configuration error.
    pub fn from_rules_csv(path: &Path) -> AgentResult<Self> {
        let rules = load_rules_csv(path)?;
        if rules.is_empty() {
            return Err(AgentError::Config(format!("no rules in {}", path.display())));
        }
        let missing = RulePredictor::missing_actions(&rules);
        if !missing.is_empty() {
            return Err(AgentError::Config(format!(
                "{} does not define {}",
                path.display(),
                missing.join(", ")
            )));
        }
        Ok(Self::new().with_rules(rules))
    }

    /// Replace the rule table used by the fallback explainer.
    ///
    /// Unchecked: pair a custom table with a predictor that emits its names
    /// (e.g. [`RandomPredictor::new`](crate::RandomPredictor::new)), or use
    /// [`Self::from_rules_csv`] for the rule-based predictor.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.fallback.1 = RuleExplainer::new(Interpreter::new(rules));
        self
    }

    /// Plug in an external predictor.
    pub fn with_predictor<P: ActionPredictor + 'static>(mut self, predictor: P) -> Self {
        self.predictor = Some(Box::new(predictor));
        self
    }

    /// Plug in an external explainer.
    pub fn with_explainer<E: ActionExplainer + 'static>(mut self, explainer: E) -> Self {
        self.explainer = Some(Box::new(explainer));
        self
    }

    /// Replace the command resolver.
    pub fn with_resolver<R: CommandResolver + Send + Sync + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Seed the RNG handed to the predictor.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = PolicyRng::new(seed);
        self
    }

    /// Admit an intent from outside the predictor path (e.g. a scripted
    /// opening).  Priority rules apply as for any other admission.
    pub fn enqueue(&mut self, intent: Intent) {
        self.queue.admit(intent);
    }

    /// Drop every pending intent without touching the stats.
    ///
    /// The next tick is idle and asks the predictor again.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    pub fn queue(&self) -> &IntentQueue {
        &self.queue
    }

    /// Predict and explain the next intent, if any.
    fn next_intent(&mut self, obs: &Observation) -> Option<Intent> {
        let action = match &self.predictor {
            Some(p) => p.predict(obs, &mut self.rng),
            None => self.fallback.0.predict(obs, &mut self.rng),
        }?;
        let intent = match &self.explainer {
            Some(e) => e.explain(obs, &action),
            None => self.fallback.1.explain(obs, &action),
        };
        trace!(
            tick    = %self.stats.steps,
            action  = %action,
            created = intent.is_some(),
            "idle: selected next action"
        );
        intent
    }
}

impl Agent for SimpleTerranAgent {
    fn step(&mut self, ts: &TimeStep) -> FunctionCall {
        self.stats.record(ts);
        let obs = &ts.observation;
        if self.queue.is_empty() {
            if let Some(intent) = self.next_intent(obs) {
                self.queue.admit(intent);
            }
        }
        self.queue.step(obs, &*self.resolver)
    }

    fn reset(&mut self) {
        self.clear_queue();
        self.stats.begin_episode();
    }

    fn stats(&self) -> &AgentStats {
        &self.stats
    }
}
