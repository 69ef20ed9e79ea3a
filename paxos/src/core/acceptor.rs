//! Pure acceptor state machine - no I/O
//!
//! This module contains the promise/accept predicate. It deliberately keeps
//! the admission rules of the simulator this protocol comes from:
//!
//! - a promise echoes the *incoming* value, not a previously accepted one
//! - an accept only needs `number >= highest_seen`, no matching promise

use tracing::{debug, trace};

use super::types::{Proposal, ProposalNumber};

/// Pure acceptor state
///
/// Tracks the highest proposal number seen in either phase and the value
/// that came with it. `highest_seen` never decreases.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AcceptorCore<V> {
    highest_seen: ProposalNumber,
    accepted_value: Option<V>,
    has_promised: bool,
    has_accepted: bool,
}

/// Result of handling a Prepare request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromiseOutcome<V> {
    /// Promised - reply with this proposal
    Promised(Proposal<V>),
    /// Number not above what we have already seen; no reply
    Outdated { highest_seen: ProposalNumber },
}

/// Result of handling an Accept request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptOutcome<V> {
    /// Accepted - reply with this proposal
    Accepted(Proposal<V>),
    /// Number below what we have already seen; no reply
    Outdated { highest_seen: ProposalNumber },
}

impl<V> Default for AcceptorCore<V> {
    fn default() -> Self {
        Self {
            highest_seen: 0,
            accepted_value: None,
            has_promised: false,
            has_accepted: false,
        }
    }
}

impl<V: Clone> AcceptorCore<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn highest_seen(&self) -> ProposalNumber {
        self.highest_seen
    }

    #[must_use]
    pub fn accepted_value(&self) -> Option<&V> {
        self.accepted_value.as_ref()
    }

    #[must_use]
    pub fn has_promised(&self) -> bool {
        self.has_promised
    }

    #[must_use]
    pub fn has_accepted(&self) -> bool {
        self.has_accepted
    }

    /// Handle a Prepare request.
    ///
    /// Strict `>`: a repeated Prepare at the current number is not re-acked.
    pub fn prepare(&mut self, number: ProposalNumber, value: V) -> PromiseOutcome<V> {
        if number <= self.highest_seen {
            trace!(number, highest_seen = self.highest_seen, "dropping outdated prepare");
            return PromiseOutcome::Outdated {
                highest_seen: self.highest_seen,
            };
        }

        self.highest_seen = number;
        self.accepted_value = Some(value.clone());
        self.has_promised = true;
        debug!(number, "promised");
        PromiseOutcome::Promised(Proposal::new(number, value))
    }

    /// Handle an Accept request.
    ///
    /// Loose `>=`: equal numbers are accepted again, and no prior promise for
    /// this exact number is required.
    pub fn accept(&mut self, number: ProposalNumber, value: V) -> AcceptOutcome<V> {
        if number < self.highest_seen {
            trace!(number, highest_seen = self.highest_seen, "dropping outdated accept");
            return AcceptOutcome::Outdated {
                highest_seen: self.highest_seen,
            };
        }

        self.highest_seen = number;
        self.accepted_value = Some(value.clone());
        self.has_accepted = true;
        debug!(number, "accepted");
        AcceptOutcome::Accepted(Proposal::new(number, value))
    }
}
