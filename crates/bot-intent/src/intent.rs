//! `Intent`: one high-level action in progress.

use std::fmt;

use crate::{AtomicCommand, CommandKind};

/// An ordered sequence of atomic commands plus a cursor and a priority.
///
/// The cursor starts at 0 and only ever moves forward, one command per
/// [`advance`][Self::advance].  An intent is finished once the cursor reaches
/// the end; the queue drops it at that point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intent {
    name:     String,
    commands: Vec<AtomicCommand>,
    cursor:   usize,
    priority: i32,
}

impl Intent {
    /// An intent whose commands are all resolved at execution time.
    pub fn new<I>(name: impl Into<String>, kinds: I) -> Self
    where
        I: IntoIterator<Item = CommandKind>,
    {
        Self::from_commands(name, kinds.into_iter().map(AtomicCommand::deferred).collect())
    }

    pub fn from_commands(name: impl Into<String>, commands: Vec<AtomicCommand>) -> Self {
        Self { name: name.into(), commands, cursor: 0, priority: 0 }
    }

    /// Higher runs sooner.  Default 0.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[AtomicCommand] {
        &self.commands
    }

    /// The command the cursor points at, or `None` once finished.
    #[inline]
    pub fn current(&self) -> Option<&AtomicCommand> {
        self.commands.get(self.cursor)
    }

    /// Move the cursor one command forward.  No-op once finished.
    #[inline]
    pub fn advance(&mut self) {
        if self.cursor < self.commands.len() {
            self.cursor += 1;
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.commands.len()
    }

    /// Commands not yet executed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.commands.len() - self.cursor
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.name, self.cursor, self.commands.len())?;
        if self.priority != 0 {
            write!(f, " p{}", self.priority)?;
        }
        Ok(())
    }
}
