//! Single-decree Paxos participant
//!
//! A cluster of N participants agrees on one value. Every participant is an
//! acceptor and a learner at the same time; a distinguished participant is
//! also the proposer. The admission rules are the simplified ones of the
//! simulator this protocol was written for, not textbook Paxos:
//!
//! - a promise echoes the incoming value rather than a previously accepted one
//! - an accept is admitted on `number >= highest_seen` with no matching promise
//! - the proposer adopts any value an acknowledgement echoes back
//! - a `Learn` announcement is trusted and may overwrite an earlier one
//!
//! # Architecture
//!
//! - [`core`](crate::core): Pure role state machines (`AcceptorCore`, `ProposerCore`, `LearnerCore`)
//! - [`Participant`]: Routes inbound messages to the roles and sends the replies
//! - [`Stamper`]: Stamps each outbound message with a per-node sequence number
//! - [`Transport`]: Delivery seam implemented by the embedding simulator
//!
//! Scheduling, topology and delivery are external. Each round the simulator
//! delivers the participant's inbox and then, if the peer set changed, calls
//! [`Participant::peer_set_changed`]. That call is the only thing that makes a
//! distinguished participant (re)broadcast.
//!
//! # Quick Start
//!
//! ```
//! use synod_paxos::{Outbox, Participant, ParticipantConfig};
//!
//! let config = ParticipantConfig::new(3, "A").distinguished(true);
//! let mut leader = Participant::new(1, config)?;
//!
//! let mut outbox = Outbox::new();
//! leader.peer_set_changed(&mut outbox);
//! assert_eq!(outbox.len(), 1); // Prepare{1, "A"}
//! # Ok::<(), error_stack::Report<synod_paxos::ConfigError>>(())
//! ```

#![warn(clippy::pedantic)]

pub mod core;
mod config;
mod messages;
mod participant;
mod stamper;
mod traits;
mod view;

pub use config::{ConfigError, ParticipantConfig};
pub use messages::{Message, Payload};
pub use participant::Participant;
pub use stamper::Stamper;
pub use traits::{Outbox, Outgoing, Transport};
pub use view::Highlight;
