//! The consensus participant: proposer, acceptor and learner in one node.

use error_stack::{Report, ResultExt};
use tracing::{debug, instrument, trace};

use crate::config::{ConfigError, ParticipantConfig};
use crate::core::{
    AcceptAckResult, AcceptOutcome, AcceptorCore, LearnerCore, ParticipantId, PromiseOutcome,
    ProposalNumber, ProposalValue, ProposerCore, TriggerPlan,
};
use crate::messages::{Message, Payload};
use crate::stamper::Stamper;
use crate::traits::Transport;

/// One node of the cluster.
///
/// Every participant acts as an acceptor and a learner. Only a
/// distinguished participant reacts to peer-set changes by proposing, but
/// acknowledgements are processed by the proposer role of any participant
/// that receives them.
///
/// All state is owned here and changed only through [`handle`](Self::handle),
/// [`deliver_inbox`](Self::deliver_inbox) and
/// [`peer_set_changed`](Self::peer_set_changed).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Participant<I: Ord, V> {
    id: I,
    distinguished: bool,
    default_value: V,
    proposer: ProposerCore<I, V>,
    acceptor: AcceptorCore<V>,
    learner: LearnerCore<V>,
    stamper: Stamper,
}

impl<I, V> Participant<I, V>
where
    I: ParticipantId,
    V: ProposalValue,
{
    /// Create a participant.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected by
    /// [`ParticipantConfig::validate`].
    pub fn new(id: I, config: ParticipantConfig<V>) -> Result<Self, Report<ConfigError>> {
        config
            .validate()
            .attach_with(|| format!("configuring participant {id:?}"))?;

        let ParticipantConfig {
            cluster_size,
            distinguished,
            default_value,
        } = config;
        debug!(?id, cluster_size, distinguished, "participant created");

        Ok(Self {
            id,
            distinguished,
            default_value,
            proposer: ProposerCore::new(cluster_size),
            acceptor: AcceptorCore::new(),
            learner: LearnerCore::new(),
            stamper: Stamper::new(),
        })
    }

    #[must_use]
    pub fn id(&self) -> I {
        self.id
    }

    #[must_use]
    pub fn is_distinguished(&self) -> bool {
        self.distinguished
    }

    #[must_use]
    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    #[must_use]
    pub fn proposer(&self) -> &ProposerCore<I, V> {
        &self.proposer
    }

    #[must_use]
    pub fn acceptor(&self) -> &AcceptorCore<V> {
        &self.acceptor
    }

    #[must_use]
    pub fn has_learned(&self) -> bool {
        self.learner.has_learned()
    }

    #[must_use]
    pub fn learned(&self) -> Option<&V> {
        self.learner.learned()
    }

    /// Number of messages sent so far
    #[must_use]
    pub fn sent(&self) -> u64 {
        self.stamper.sent()
    }

    /// Process one round's inbox, in the order given.
    #[instrument(skip_all, name = "deliver", fields(id = ?self.id))]
    pub fn deliver_inbox<T>(
        &mut self,
        inbox: impl IntoIterator<Item = (Message<V>, I)>,
        transport: &mut T,
    ) where
        T: Transport<I, V>,
    {
        for (message, sender) in inbox {
            self.handle(message, sender, transport);
        }
    }

    /// Process a single inbound message.
    ///
    /// The sequence stamp is ignored.
    pub fn handle(&mut self, message: Message<V>, sender: I, transport: &mut impl Transport<I, V>) {
        trace!(
            ?sender,
            seq = message.seq,
            kind = message.payload.kind(),
            number = ?message.payload.number(),
            "handling message"
        );
        match message.payload {
            Payload::Prepare { number, value } => self.on_prepare(sender, number, value, transport),
            Payload::PrepareAck { number, value } => {
                self.proposer.handle_prepare_ack(sender, number, value);
            }
            Payload::Accept { number, value } => self.on_accept(sender, number, value, transport),
            Payload::AcceptAck { number, value } => self.on_accept_ack(sender, number, value),
            Payload::Learn { value } => {
                let outcome = self.learner.learn(value);
                debug!(?sender, ?outcome, "learn announcement");
            }
        }
    }

    /// The peer set changed: a distinguished participant (re)broadcasts.
    ///
    /// Prepare goes out every time. Accept follows once a promise quorum
    /// exists, and Learn once a value is learned.
    #[instrument(skip_all, name = "trigger", fields(id = ?self.id))]
    pub fn peer_set_changed(&mut self, transport: &mut impl Transport<I, V>) {
        if !self.distinguished {
            return;
        }

        let TriggerPlan { prepare, accept } = self.proposer.trigger(&self.default_value);
        self.stamper.broadcast(
            transport,
            Payload::Prepare {
                number: prepare.number,
                value: prepare.value,
            },
        );

        if let Some(accept) = accept {
            self.stamper.broadcast(
                transport,
                Payload::Accept {
                    number: accept.number,
                    value: accept.value,
                },
            );
        }

        if let Some(value) = self.learner.learned().cloned() {
            self.stamper.broadcast(transport, Payload::Learn { value });
        }
    }

    fn on_prepare(
        &mut self,
        sender: I,
        number: ProposalNumber,
        value: V,
        transport: &mut impl Transport<I, V>,
    ) {
        match self.acceptor.prepare(number, value) {
            PromiseOutcome::Promised(promised) => self.stamper.send(
                transport,
                sender,
                Payload::PrepareAck {
                    number: promised.number,
                    value: promised.value,
                },
            ),
            PromiseOutcome::Outdated { .. } => {}
        }
    }

    fn on_accept(
        &mut self,
        sender: I,
        number: ProposalNumber,
        value: V,
        transport: &mut impl Transport<I, V>,
    ) {
        match self.acceptor.accept(number, value) {
            AcceptOutcome::Accepted(accepted) => self.stamper.send(
                transport,
                sender,
                Payload::AcceptAck {
                    number: accepted.number,
                    value: accepted.value,
                },
            ),
            AcceptOutcome::Outdated { .. } => {}
        }
    }

    fn on_accept_ack(&mut self, sender: I, number: ProposalNumber, value: V) {
        match self.proposer.handle_accept_ack(sender, number, value) {
            AcceptAckResult::Quorum { value } => {
                let outcome = self.learner.learn(value);
                debug!(?sender, ?outcome, "accept quorum reached");
            }
            AcceptAckResult::Pending | AcceptAckResult::Ignored => {}
        }
    }
}
