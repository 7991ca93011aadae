//! The `OutputWriter` trait implemented by backend writers.

use crate::{ActionRow, EpisodeRow, OutputResult};

/// A sink for per-step actions and per-episode totals.
///
/// Errors surface through [`RunOutputObserver::take_error`][crate::RunOutputObserver::take_error]
/// when driven by the observer.
pub trait OutputWriter {
    /// Write one emitted action.
    fn write_action(&mut self, row: &ActionRow) -> OutputResult<()>;

    /// Write one finished episode.
    fn write_episode(&mut self, row: &EpisodeRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
