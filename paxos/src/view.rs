//! Read-only presentation of participant state for simulator front ends.

use std::fmt;

use crate::core::{ParticipantId, ProposalValue};
use crate::participant::Participant;

/// Highlight a renderer should give a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    Distinguished,
    Learned,
    Accepted,
    Promised,
    Idle,
}

impl Highlight {
    /// Colour the simulator palette uses for this highlight
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Self::Distinguished => "red",
            Self::Learned => "blue",
            Self::Accepted => "yellow",
            Self::Promised => "green",
            Self::Idle => "white",
        }
    }
}

impl<I, V> Participant<I, V>
where
    I: ParticipantId,
    V: ProposalValue,
{
    /// First matching highlight in the order of [`Highlight`]'s variants
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        if self.is_distinguished() {
            Highlight::Distinguished
        } else if self.has_learned() {
            Highlight::Learned
        } else if self.acceptor().has_accepted() {
            Highlight::Accepted
        } else if self.acceptor().has_promised() {
            Highlight::Promised
        } else {
            Highlight::Idle
        }
    }
}

struct Maybe<'a, V>(Option<&'a V>);

impl<V: fmt::Debug> fmt::Display for Maybe<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:?}"),
            None => f.write_str("-"),
        }
    }
}

impl<I, V> fmt::Display for Participant<I, V>
where
    I: ParticipantId,
    V: ProposalValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proposer = self.proposer();
        let acceptor = self.acceptor();
        write!(f, "Participant({:?})", self.id())?;
        if self.is_distinguished() {
            write!(f, " distinguished default={:?}", self.default_value())?;
        }
        write!(
            f,
            " proposer[n={} v={} promises={} accepts={} quorum={}/{}]",
            proposer.current_number(),
            Maybe(proposer.current_value()),
            proposer.promise_acks().len(),
            proposer.accept_acks().len(),
            proposer.quorum().threshold(),
            proposer.quorum().cluster_size(),
        )?;
        write!(
            f,
            " acceptor[n={} v={}",
            acceptor.highest_seen(),
            Maybe(acceptor.accepted_value()),
        )?;
        if acceptor.has_promised() {
            f.write_str(" promised")?;
        }
        if acceptor.has_accepted() {
            f.write_str(" accepted")?;
        }
        write!(f, "] learned={} sent={}", Maybe(self.learned()), self.sent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticipantConfig;
    use crate::messages::{Message, Payload};
    use crate::traits::Outbox;

    #[test]
    fn test_highlight_follows_role_then_progress() {
        let mut outbox = Outbox::new();
        let config = ParticipantConfig::new(3, "A").distinguished(true);
        let leader = Participant::new(1, config).unwrap();
        assert_eq!(leader.highlight(), Highlight::Distinguished);
        assert_eq!(leader.highlight().color_name(), "red");

        let mut node = Participant::new(2, ParticipantConfig::new(3, "A")).unwrap();
        assert_eq!(node.highlight(), Highlight::Idle);

        let prepare = Payload::Prepare { number: 1, value: "A" };
        node.handle(Message { seq: 1, payload: prepare }, 1, &mut outbox);
        assert_eq!(node.highlight(), Highlight::Promised);
        assert_eq!(node.highlight().color_name(), "green");

        let accept = Payload::Accept { number: 1, value: "A" };
        node.handle(Message { seq: 2, payload: accept }, 1, &mut outbox);
        assert_eq!(node.highlight(), Highlight::Accepted);

        node.handle(Message { seq: 3, payload: Payload::Learn { value: "A" } }, 1, &mut outbox);
        assert_eq!(node.highlight(), Highlight::Learned);
    }

    #[test]
    fn test_display_dump() {
        let mut outbox = Outbox::new();
        let mut node = Participant::new(2, ParticipantConfig::new(5, "A")).unwrap();
        assert_eq!(
            node.to_string(),
            "Participant(2) proposer[n=0 v=- promises=0 accepts=0 quorum=3/5] \
             acceptor[n=0 v=-] learned=- sent=0"
        );

        let prepare = Payload::Prepare { number: 1, value: "A" };
        node.handle(Message { seq: 1, payload: prepare }, 1, &mut outbox);
        assert_eq!(
            node.to_string(),
            "Participant(2) proposer[n=0 v=- promises=0 accepts=0 quorum=3/5] \
             acceptor[n=1 v=\"A\" promised] learned=- sent=1"
        );
    }

    #[test]
    fn test_display_dump_distinguished() {
        let mut outbox = Outbox::new();
        let config = ParticipantConfig::new(3, "A").distinguished(true);
        let mut leader = Participant::new(1, config).unwrap();
        leader.peer_set_changed(&mut outbox);
        assert_eq!(
            leader.to_string(),
            "Participant(1) distinguished default=\"A\" \
             proposer[n=1 v=\"A\" promises=0 accepts=0 quorum=2/3] \
             acceptor[n=0 v=-] learned=- sent=1"
        );
    }
}
