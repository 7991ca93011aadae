//! `IntentQueue`: the per-tick cooperative scheduler.
//!
//! Pending intents sit in a `Vec` ordered by priority (descending), ties in
//! admission order.  The head is the active intent.  Each
//! [`step`][IntentQueue::step] resolves exactly one atomic command of the
//! head, advances its cursor, and drops the head once it is finished.
//!
//! # Performance note
//!
//! Admitting a positive-priority intent re-sorts the whole list, O(n log n).
//! Observed queues hold a handful of intents, so a `Vec` with a stable sort
//! beats anything cleverer.

use bot_core::FunctionCall;
use bot_observe::Observation;
use tracing::{debug, trace};

use crate::{CommandResolver, Intent};

/// Ordered list of pending intents.  Empty on construction.
#[derive(Clone, Debug, Default)]
pub struct IntentQueue {
    pending: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `intent`.
    ///
    /// A positive priority triggers a stable sort by priority, descending, so
    /// the new intent moves ahead of every strictly lower-priority one while
    /// equal priorities keep their admission order.  Priority 0 (or below)
    /// never reorders.  An intent with nothing left to execute is dropped.
    pub fn admit(&mut self, intent: Intent) {
        if intent.is_finished() {
            trace!(intent = intent.name(), "dropping intent with no commands");
            return;
        }
        let reorder = intent.priority() > 0;
        trace!(intent = %intent, queued = self.pending.len(), "admit");
        self.pending.push(intent);
        if reorder {
            self.pending.sort_by(|a, b| b.priority().cmp(&a.priority()));
        }
    }

    /// Resolve and return one concrete action.
    ///
    /// Returns `no_op` when the queue is empty.  A command that cannot be
    /// carried out this tick resolves to `no_op` too, and its cursor still
    /// advances: stalled commands are skipped, not retried.
    pub fn step<R>(&mut self, obs: &Observation, resolver: &R) -> FunctionCall
    where
        R: CommandResolver + ?Sized,
    {
        let Some(head) = self.pending.first_mut() else {
            return FunctionCall::no_op();
        };
        let call = match head.current() {
            Some(command) => {
                let call = resolver.resolve(command, obs);
                debug!(
                    intent  = head.name(),
                    step    = head.cursor(),
                    command = %command,
                    action  = %call,
                    "resolved atomic command"
                );
                call
            }
            None => FunctionCall::no_op(),
        };
        head.advance();
        if head.is_finished() {
            self.pending.remove(0);
        }
        call
    }

    /// The active intent.
    #[inline]
    pub fn head(&self) -> Option<&Intent> {
        self.pending.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending intent (end of episode).
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Pending intents in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Intent> {
        self.pending.iter()
    }
}
