//! Pure state machine core for the participant - no I/O
//!
//! Each role is its own state machine. A participant owns one of each and
//! they never see each other's state; the participant shell wires their
//! outcomes together.
//!
//! # Modules
//!
//! - [`types`]: Proposal number and value types
//! - [`acceptor`]: Promise/accept predicate (`AcceptorCore`)
//! - [`proposer`]: Proposal driving and ack accounting (`ProposerCore`)
//! - [`learner`]: The learned slot (`LearnerCore`)
//! - [`quorum`]: Majority threshold and ack sets

pub(crate) mod acceptor;
pub(crate) mod learner;
pub(crate) mod proposer;
pub(crate) mod quorum;
pub(crate) mod types;

pub use acceptor::{AcceptOutcome, AcceptorCore, PromiseOutcome};
pub use learner::{LearnOutcome, LearnerCore};
pub use proposer::{AcceptAckResult, ProposerCore, TriggerPlan};
pub use quorum::{AckSet, Quorum};
pub use types::{ParticipantId, Proposal, ProposalNumber, ProposalValue};
