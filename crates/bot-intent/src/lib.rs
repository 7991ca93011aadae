//! `bot-intent`: turning a symbolic action into one concrete action per tick.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`command`]     | `CommandKind`, `AtomicCommand`, `ParamSlot`                   |
//! | [`intent`]      | `Intent` - ordered commands, cursor, priority                 |
//! | [`resolver`]    | `CommandResolver` trait, `ScreenResolver`                     |
//! | [`queue`]       | `IntentQueue` - admit / step                                  |
//! | [`rules`]       | `Rule`, `RuleTable` (built-in Terran rules)                   |
//! | [`interpreter`] | `Interpreter` - symbolic action → `Intent`                    |
//! | [`loader`]      | `load_rules_csv`, `load_rules_reader`                         |
//! | [`error`]       | `IntentError`, `IntentResult<T>`                              |
//!
//! # Per-tick flow
//!
//! ```text
//! "Collect_Mineral" ──Interpreter──▶ Intent[select_one_scv, move_to_mineral]
//!                                        │ admit
//!                                        ▼
//!                                   IntentQueue ──step(obs)──▶ FunctionCall
//! ```
//!
//! Parameters are bound late: an `AtomicCommand` carries only its kind until
//! `IntentQueue::step` resolves it against the observation of the tick on
//! which it actually executes.

pub mod command;
pub mod error;
pub mod intent;
pub mod interpreter;
pub mod loader;
pub mod queue;
pub mod resolver;
pub mod rules;


pub use command::{AtomicCommand, CommandKind, ParamSlot};
pub use error::{IntentError, IntentResult};
pub use intent::Intent;
pub use interpreter::Interpreter;
pub use loader::{load_rules_csv, load_rules_reader};
pub use queue::IntentQueue;
pub use resolver::{CommandResolver, ScreenResolver};
pub use rules::{Rule, RuleTable};
