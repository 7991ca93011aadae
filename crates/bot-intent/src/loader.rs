//! CSV rule loader.
//!
//! # CSV format
//!
//! One row per atomic command.  Rows for the same action must share the same
//! `priority`; `step` orders the commands within an action and must be unique
//! per action.
//!
//! ```csv
//! action,step,command,priority
//! Collect_Mineral,0,select_one_scv,0
//! Collect_Mineral,1,move_to_mineral,0
//! Attack_Enemy,0,select_army,1
//! Attack_Enemy,1,attack_enemy,1
//! ```
//!
//! `command` is any [`CommandKind`] name in snake_case.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{CommandKind, IntentError, IntentResult, RuleTable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RuleRecord {
    action:   String,
    step:     u32,
    command:  String,
    priority: i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RuleTable`] from a CSV file.
pub fn load_rules_csv(path: &Path) -> IntentResult<RuleTable> {
    let file = std::fs::File::open(path).map_err(IntentError::Io)?;
    load_rules_reader(file)
}

/// Like [`load_rules_csv`] but accepts any `Read` source.
pub fn load_rules_reader<R: Read>(reader: R) -> IntentResult<RuleTable> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_action: BTreeMap<String, Vec<RuleRecord>> = BTreeMap::new();

    for result in csv_reader.deserialize::<RuleRecord>() {
        let row = result.map_err(|e| IntentError::Parse(e.to_string()))?;
        by_action.entry(row.action.trim().to_owned()).or_default().push(row);
    }

    // ── Build one Rule per action ─────────────────────────────────────────
    let mut table = RuleTable::new();

    for (action, mut rows) in by_action {
        rows.sort_by_key(|r| r.step);

        let priority = rows[0].priority;
        if let Some(bad) = rows.iter().find(|r| r.priority != priority) {
            return Err(IntentError::Parse(format!(
                "action {action:?} has conflicting priorities {priority} and {}",
                bad.priority
            )));
        }
        if let Some(pair) = rows.windows(2).find(|w| w[0].step == w[1].step) {
            return Err(IntentError::Parse(format!(
                "action {action:?} has duplicate step {}",
                pair[0].step
            )));
        }

        let commands = rows
            .iter()
            .map(|r| r.command.parse::<CommandKind>())
            .collect::<Result<Vec<_>, IntentError>>()?;

        table = table.with_rule(action, commands, priority);
    }

    Ok(table)
}
