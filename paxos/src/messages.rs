//! Protocol messages

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::ProposalNumber;

/// Message body. Each kind is routed to exactly one role.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Payload<V> {
    /// Phase 1a: proposer asks for a promise
    Prepare { number: ProposalNumber, value: V },
    /// Phase 1b: acceptor promised
    PrepareAck { number: ProposalNumber, value: V },
    /// Phase 2a: proposer asks for acceptance
    Accept { number: ProposalNumber, value: V },
    /// Phase 2b: acceptor accepted
    AcceptAck { number: ProposalNumber, value: V },
    /// Direct announcement of the learned value
    Learn { value: V },
}

impl<V> Payload<V> {
    /// Short name of the message kind, for logs and dumps
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Prepare { .. } => "prepare",
            Self::PrepareAck { .. } => "prepare-ack",
            Self::Accept { .. } => "accept",
            Self::AcceptAck { .. } => "accept-ack",
            Self::Learn { .. } => "learn",
        }
    }

    /// The proposal number, if this kind carries one
    #[must_use]
    pub fn number(&self) -> Option<ProposalNumber> {
        match self {
            Self::Prepare { number, .. }
            | Self::PrepareAck { number, .. }
            | Self::Accept { number, .. }
            | Self::AcceptAck { number, .. } => Some(*number),
            Self::Learn { .. } => None,
        }
    }
}

/// A payload stamped with the sender's outbound sequence number.
///
/// `seq` is informational. No handler reads it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message<V> {
    pub seq: u64,
    pub payload: Payload<V>,
}

impl<V: fmt::Debug> fmt::Debug for Message<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Message { seq, payload } = self;
        write!(f, "#{seq} {payload:?}")
    }
}
