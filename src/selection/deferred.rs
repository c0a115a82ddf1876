//! Scoped, cancellable deferred actions on a logical clock.
//!
//! The engine owns no timers. Actions are scheduled relative to a `now`
//! supplied by the host, and become due once the host advances time past
//! their deadline. Each action is identified by a `Ticket`; holders compare
//! tickets to tell a live action from one that was superseded.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one scheduled action. Tickets are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(pub u64);

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Scheduled<A> {
    ticket: Ticket,
    due: Duration,
    action: A,
}

/// Pending deferred actions ordered by deadline.
#[derive(Clone, Debug)]
pub struct Scheduler<A> {
    next_ticket: u64,
    pending: Vec<Scheduled<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            next_ticket: 0,
            pending: Vec::new(),
        }
    }
}

impl<A> Scheduler<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, action: A) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push(Scheduled {
            ticket,
            due: now + delay,
            action,
        });
        ticket
    }

    /// Drop a pending action, returning it if it had not fired yet.
    pub fn cancel(&mut self, ticket: Ticket) -> Option<A> {
        let idx = self.pending.iter().position(|s| s.ticket == ticket)?;
        Some(self.pending.remove(idx).action)
    }

    /// Remove and return every action due at or before `now`.
    ///
    /// Earlier deadlines come first; equal deadlines keep scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<(Ticket, A)> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.ticket));
        due.into_iter().map(|s| (s.ticket, s.action)).collect()
    }

    /// True if `ticket` is still waiting.
    #[must_use]
    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.pending.iter().any(|s| s.ticket == ticket)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
