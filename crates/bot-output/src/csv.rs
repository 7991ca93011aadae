//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `actions.csv`
//! - `episodes.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{ActionRow, EpisodeRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes run output to two CSV files.
pub struct CsvWriter {
    actions:  Writer<File>,
    episodes: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut actions = Writer::from_path(dir.join("actions.csv"))?;
        actions.write_record(["episode", "tick", "function", "arguments"])?;

        let mut episodes = Writer::from_path(dir.join("episodes.csv"))?;
        episodes.write_record(["episode", "steps", "reward"])?;

        Ok(Self {
            actions,
            episodes,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_action(&mut self, row: &ActionRow) -> OutputResult<()> {
        self.actions.write_record(&[
            row.episode.to_string(),
            row.tick.to_string(),
            row.function.clone(),
            row.arguments.clone(),
        ])?;
        Ok(())
    }

    fn write_episode(&mut self, row: &EpisodeRow) -> OutputResult<()> {
        self.episodes.write_record(&[
            row.episode.to_string(),
            row.steps.to_string(),
            row.reward.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.actions.flush()?;
        self.episodes.flush()?;
        Ok(())
    }
}
