//! Plain data row types written by output backends.

use bot_core::FunctionCall;

/// One action emitted by the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub episode:   u64,
    pub tick:      u64,
    /// Function name, or the numeric id if the function is not in the
    /// catalogue.
    pub function:  String,
    /// Argument lists in `[[0], [x, y]]` form.
    pub arguments: String,
}

impl ActionRow {
    pub fn new(episode: u64, tick: u64, call: &FunctionCall) -> Self {
        Self {
            episode,
            tick,
            function:  bot_core::function::name(call.function)
                .map_or_else(|| call.function.0.to_string(), str::to_owned),
            arguments: format!("{:?}", call.arguments),
        }
    }
}

/// Totals for one finished episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeRow {
    pub episode: u64,
    pub steps:   u64,
    pub reward:  f64,
}
