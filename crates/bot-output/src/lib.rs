//! `bot-output`: run output writers for rts_bot.
//!
//! | Backend | Files created                      |
//! |---------|------------------------------------|
//! | CSV     | `actions.csv`, `episodes.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`RunOutputObserver`], which implements `bot_run::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bot_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! runner.run(&mut agent, &mut env, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{ActionRow, EpisodeRow};
pub use writer::OutputWriter;
