//! Pure proposer state machine - no I/O
//!
//! The proposer never advances its own number: it starts at 1 and only moves
//! when an acknowledgement echoes a number at least as high. Every admitted
//! acknowledgement replaces the current value with the echoed one, whoever
//! proposed it first.

use tracing::{debug, trace};

use super::quorum::{AckSet, Quorum};
use super::types::{Proposal, ProposalNumber};

/// Pure proposer state
///
/// `promise_acks` and `accept_acks` only ever grow. Neither set is cleared
/// when the current number changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProposerCore<I: Ord, V> {
    current_number: ProposalNumber,
    current_value: Option<V>,
    promise_acks: AckSet<I>,
    accept_acks: AckSet<I>,
    quorum: Quorum,
}

/// Broadcasts the proposer wants on a trigger
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerPlan<V> {
    /// Always sent
    pub prepare: Proposal<V>,
    /// Sent once the promise quorum is reached, on every trigger after that
    pub accept: Option<Proposal<V>>,
}

/// Result of processing an `AcceptAck`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptAckResult<V> {
    /// Number below ours; nothing changed
    Ignored,
    /// Recorded, still below quorum
    Pending,
    /// Accept quorum holds - the current value is learned
    Quorum { value: V },
}

impl<I: Ord + Clone + std::fmt::Debug, V: Clone> ProposerCore<I, V> {
    /// Create an idle proposer for a cluster of `cluster_size` participants
    #[must_use]
    pub fn new(cluster_size: usize) -> Self {
        Self {
            current_number: 0,
            current_value: None,
            promise_acks: AckSet::default(),
            accept_acks: AckSet::default(),
            quorum: Quorum::new(cluster_size),
        }
    }

    #[must_use]
    pub fn current_number(&self) -> ProposalNumber {
        self.current_number
    }

    #[must_use]
    pub fn current_value(&self) -> Option<&V> {
        self.current_value.as_ref()
    }

    #[must_use]
    pub fn promise_acks(&self) -> &AckSet<I> {
        &self.promise_acks
    }

    #[must_use]
    pub fn accept_acks(&self) -> &AckSet<I> {
        &self.accept_acks
    }

    #[must_use]
    pub fn quorum(&self) -> Quorum {
        self.quorum
    }

    /// Whether more than half of the cluster has promised
    #[must_use]
    pub fn has_promise_quorum(&self) -> bool {
        self.quorum.is_reached(self.promise_acks.len())
    }

    /// Whether more than half of the cluster has accepted
    #[must_use]
    pub fn has_accept_quorum(&self) -> bool {
        self.quorum.is_reached(self.accept_acks.len())
    }

    /// Plan the broadcasts for one trigger.
    ///
    /// The first trigger starts proposal 1 with `default_value`. There is no
    /// "already sent" suppression; repeated triggers repeat the broadcasts.
    pub fn trigger(&mut self, default_value: &V) -> TriggerPlan<V> {
        let value = match &self.current_value {
            Some(value) => value.clone(),
            None => {
                self.current_number = 1;
                self.current_value = Some(default_value.clone());
                debug!(number = self.current_number, "starting proposal");
                default_value.clone()
            }
        };

        let prepare = Proposal::new(self.current_number, value);
        let accept = self.has_promise_quorum().then(|| prepare.clone());
        TriggerPlan { prepare, accept }
    }

    /// Admit an acknowledgement if it is not below our number, adopting its
    /// number and value. Returns `false` if it was dropped.
    fn adopt(&mut self, number: ProposalNumber, value: V) -> bool {
        if number < self.current_number {
            trace!(number, current = self.current_number, "dropping outdated ack");
            return false;
        }
        self.current_number = number;
        self.current_value = Some(value);
        true
    }

    /// Process a `PrepareAck`. Returns `true` if it was admitted.
    pub fn handle_prepare_ack(&mut self, sender: I, number: ProposalNumber, value: V) -> bool {
        if !self.adopt(number, value) {
            return false;
        }
        let had_quorum = self.has_promise_quorum();
        self.promise_acks.record(sender);
        if !had_quorum && self.has_promise_quorum() {
            debug!(number, acks = self.promise_acks.len(), "promise quorum reached");
        }
        true
    }

    /// Process an `AcceptAck`.
    ///
    /// The sender counts as having promised as well as accepted.
    pub fn handle_accept_ack(
        &mut self,
        sender: I,
        number: ProposalNumber,
        value: V,
    ) -> AcceptAckResult<V> {
        if !self.adopt(number, value) {
            return AcceptAckResult::Ignored;
        }
        self.promise_acks.record(sender.clone());
        self.accept_acks.record(sender);

        if self.has_accept_quorum()
            && let Some(value) = &self.current_value
        {
            trace!(number, acks = self.accept_acks.len(), "accept quorum holds");
            AcceptAckResult::Quorum {
                value: value.clone(),
            }
        } else {
            AcceptAckResult::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Core = ProposerCore<u32, &'static str>;

    #[test]
    fn test_first_trigger_initialises_proposal() {
        let mut core = Core::new(5);
        assert_eq!(core.current_number(), 0);
        assert_eq!(core.current_value(), None);

        let plan = core.trigger(&"A");
        assert_eq!(plan.prepare, Proposal::new(1, "A"));
        assert_eq!(plan.accept, None);
        assert_eq!(core.current_number(), 1);
        assert_eq!(core.current_value(), Some(&"A"));
    }

    #[test]
    fn test_trigger_repeats_prepare() {
        let mut core = Core::new(5);
        let first = core.trigger(&"A");
        let second = core.trigger(&"A");
        assert_eq!(first, second);
    }

    #[test]
    fn test_trigger_keeps_adopted_value() {
        let mut core = Core::new(3);
        core.trigger(&"A");
        assert!(core.handle_prepare_ack(2, 4, "Z"));
        let plan = core.trigger(&"A");
        assert_eq!(plan.prepare, Proposal::new(4, "Z"));
    }

    #[test]
    fn test_prepare_ack_adopts_foreign_value() {
        let mut core = Core::new(5);
        core.trigger(&"A");
        assert!(core.handle_prepare_ack(2, 1, "B"));
        assert_eq!(core.current_value(), Some(&"B"));
        assert!(core.promise_acks().contains(&2));
    }

    #[test]
    fn test_prepare_ack_below_current_ignored() {
        let mut core = Core::new(5);
        core.trigger(&"A");
        core.handle_prepare_ack(2, 3, "C");
        let before = core.clone();
        assert!(!core.handle_prepare_ack(4, 2, "B"));
        assert_eq!(core, before);
    }

    #[test]
    fn test_accept_planned_after_promise_quorum() {
        let mut core = Core::new(5);
        core.trigger(&"A");
        core.handle_prepare_ack(2, 1, "A");
        core.handle_prepare_ack(3, 1, "A");
        assert!(core.trigger(&"A").accept.is_none());

        core.handle_prepare_ack(4, 1, "A");
        let plan = core.trigger(&"A");
        assert_eq!(plan.accept, Some(Proposal::new(1, "A")));
        // Still repeated on the next trigger
        assert_eq!(core.trigger(&"A").accept, Some(Proposal::new(1, "A")));
    }

    #[test]
    fn test_duplicate_prepare_acks_do_not_count_twice() {
        let mut core = Core::new(3);
        core.trigger(&"A");
        core.handle_prepare_ack(2, 1, "A");
        core.handle_prepare_ack(2, 1, "A");
        assert_eq!(core.promise_acks().len(), 1);
        assert!(!core.has_promise_quorum());
    }

    #[test]
    fn test_accept_ack_counts_as_promise() {
        let mut core = Core::new(5);
        core.trigger(&"A");
        assert_eq!(core.handle_accept_ack(3, 1, "A"), AcceptAckResult::Pending);
        assert!(core.promise_acks().contains(&3));
        assert!(core.accept_acks().contains(&3));
    }

    #[test]
    fn test_accept_quorum_reports_current_value() {
        let mut core = Core::new(5);
        core.trigger(&"A");
        assert_eq!(core.handle_accept_ack(2, 1, "A"), AcceptAckResult::Pending);
        assert_eq!(core.handle_accept_ack(3, 1, "A"), AcceptAckResult::Pending);
        assert_eq!(
            core.handle_accept_ack(4, 1, "A"),
            AcceptAckResult::Quorum { value: "A" }
        );
        assert_eq!(
            core.handle_accept_ack(5, 1, "A"),
            AcceptAckResult::Quorum { value: "A" }
        );
    }

    #[test]
    fn test_outdated_accept_ack_ignored() {
        let mut core = Core::new(3);
        core.trigger(&"A");
        core.handle_prepare_ack(2, 2, "A");
        assert_eq!(core.handle_accept_ack(3, 1, "A"), AcceptAckResult::Ignored);
        assert!(core.accept_acks().is_empty());
    }

    #[test]
    fn test_current_number_never_decreases() {
        let mut core = Core::new(5);
        core.trigger(&"A");
        let mut last = core.current_number();
        for (sender, number) in [(2, 3), (3, 1), (4, 7), (5, 2), (2, 7), (3, 0)] {
            if sender % 2 == 0 {
                core.handle_prepare_ack(sender, number, "X");
            } else {
                core.handle_accept_ack(sender, number, "X");
            }
            assert!(core.current_number() >= last);
            last = core.current_number();
        }
        assert_eq!(last, 7);
    }
}
