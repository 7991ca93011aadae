//! `RunOutputObserver<W>`: bridges `RunObserver` to an `OutputWriter`.

use bot_core::{FunctionCall, Tick};
use bot_observe::TimeStep;
use bot_run::{EpisodeSummary, RunObserver, RunSummary};
use tracing::warn;

use crate::row::{ActionRow, EpisodeRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that writes every action and episode total to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RunObserver` methods
/// have no return value.  After `runner.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `runner.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_step(&mut self, episode: u64, tick: Tick, _step: &TimeStep, action: &FunctionCall) {
        let row = ActionRow::new(episode, tick.0, action);
        let result = self.writer.write_action(&row);
        self.store_err(result);
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) {
        let row = EpisodeRow {
            episode: summary.episode,
            steps:   summary.steps,
            reward:  summary.reward,
        };
        let result = self.writer.write_episode(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
