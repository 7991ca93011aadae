//! `bot-core`: foundational types for the `rts_bot` scripted agents.
//!
//! This crate is a dependency of every other `bot-*` crate.  It has no
//! `bot-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `FunctionId`, `UnitTypeId`                                |
//! | [`function`] | Well-known action ids and argument constants              |
//! | [`unit`]     | Well-known unit type ids                                  |
//! | [`geo`]      | `Point` screen cell, Euclidean distance                   |
//! | [`faction`]  | `Faction` player-relative owner codes                     |
//! | [`action`]   | `FunctionCall` - the one concrete action emitted per tick |
//! | [`time`]     | `Tick`                                                    |
//! | [`rng`]      | `PolicyRng`                                               |
//! | [`error`]    | `BotError`, `BotResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod action;
pub mod error;
pub mod faction;
pub mod function;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod unit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::FunctionCall;
pub use error::{BotError, BotResult};
pub use faction::Faction;
pub use geo::Point;
pub use ids::{FunctionId, UnitTypeId};
pub use rng::PolicyRng;
pub use time::Tick;
