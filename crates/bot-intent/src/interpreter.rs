//! Symbolic action → [`Intent`].

use crate::{CommandKind, Intent, RuleTable};

/// Pure lookup from a symbolic action name to an [`Intent`].
///
/// No parameters are bound here; see [`crate::CommandResolver`].
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    rules: RuleTable,
}

impl Interpreter {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// An interpreter over [`RuleTable::builtin`].
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Ordered command names for `action`; empty when the action is unknown.
    pub fn commands(&self, action: &str) -> &[CommandKind] {
        self.rules.get(action).map(|r| r.commands.as_slice()).unwrap_or(&[])
    }

    /// Build the intent for `action`.
    ///
    /// Unknown actions (and rules with no commands) yield `None`: no intent is
    /// created.
    pub fn interpret(&self, action: &str) -> Option<Intent> {
        let rule = self.rules.get(action)?;
        if rule.commands.is_empty() {
            return None;
        }
        Some(Intent::new(action, rule.commands.iter().copied()).with_priority(rule.priority))
    }
}
