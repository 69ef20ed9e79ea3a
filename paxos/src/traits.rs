//! Transport seam and an in-memory implementation of it.

use crate::messages::Message;

/// Delivery service supplied by the embedding simulator.
///
/// Both operations are fire-and-forget. Delivery is expected to be reliable
/// in the sense that repeated triggers repeat the traffic; the participant
/// never waits for or inspects a delivery result.
pub trait Transport<I, V> {
    /// Send to one peer.
    fn unicast(&mut self, to: I, message: Message<V>);

    /// Send to every currently connected peer, not including the sender.
    fn broadcast(&mut self, message: Message<V>);
}

impl<I, V, T> Transport<I, V> for &mut T
where
    T: Transport<I, V> + ?Sized,
{
    fn unicast(&mut self, to: I, message: Message<V>) {
        (**self).unicast(to, message);
    }

    fn broadcast(&mut self, message: Message<V>) {
        (**self).broadcast(message);
    }
}

/// One recorded outbound operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outgoing<I, V> {
    Unicast { to: I, message: Message<V> },
    Broadcast { message: Message<V> },
}

impl<I, V> Outgoing<I, V> {
    #[must_use]
    pub fn message(&self) -> &Message<V> {
        match self {
            Self::Unicast { message, .. } | Self::Broadcast { message } => message,
        }
    }
}

/// Transport that records traffic for a driver to route later.
#[derive(Clone, Debug)]
pub struct Outbox<I, V> {
    sent: Vec<Outgoing<I, V>>,
}

impl<I, V> Default for Outbox<I, V> {
    fn default() -> Self {
        Self { sent: Vec::new() }
    }
}

impl<I, V> Outbox<I, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sent.len()
    }

    /// Everything recorded so far, in send order
    #[must_use]
    pub fn sent(&self) -> &[Outgoing<I, V>] {
        &self.sent
    }

    /// Take everything recorded so far, leaving the outbox empty
    pub fn drain(&mut self) -> std::vec::Drain<'_, Outgoing<I, V>> {
        self.sent.drain(..)
    }
}

impl<I, V> Transport<I, V> for Outbox<I, V> {
    fn unicast(&mut self, to: I, message: Message<V>) {
        self.sent.push(Outgoing::Unicast { to, message });
    }

    fn broadcast(&mut self, message: Message<V>) {
        self.sent.push(Outgoing::Broadcast { message });
    }
}
