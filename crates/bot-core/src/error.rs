//! Core error type.
//!
//! The per-tick path never fails; errors only arise when decoding raw
//! environment values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("unknown faction code {0}")]
    UnknownFaction(u8),
}

/// Shorthand result type for `bot-core`.
pub type BotResult<T> = Result<T, BotError>;
