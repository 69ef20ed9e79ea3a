//! Core type definitions for the single-decree protocol
//!
//! These types are shared between the participant shell and the model checker.

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Proposer-local proposal number. Only ever compared numerically.
pub type ProposalNumber = u64;

/// Bounds required of a participant identifier.
pub trait ParticipantId: Copy + Ord + Hash + fmt::Debug {}

impl<T> ParticipantId for T where T: Copy + Ord + Hash + fmt::Debug {}

/// Bounds required of a proposed value.
pub trait ProposalValue: Clone + Eq + Hash + fmt::Debug {}

impl<T> ProposalValue for T where T: Clone + Eq + Hash + fmt::Debug {}

// =============================================================================
// PROPOSAL
// =============================================================================

/// A numbered value, as carried by every phase message except `Learn`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proposal<V> {
    pub number: ProposalNumber,
    pub value: V,
}

impl<V> Proposal<V> {
    #[must_use]
    pub fn new(number: ProposalNumber, value: V) -> Self {
        Self { number, value }
    }
}
