//! Outbound sequence stamping

use tracing::trace;

use crate::messages::{Message, Payload};
use crate::traits::Transport;

/// Per-participant outbound counter.
///
/// Every outgoing message, unicast or broadcast, takes the next number
/// starting at 1. A broadcast is one message and takes one number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Stamper {
    sent: u64,
}

impl Stamper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages stamped so far, which is also the last stamp used
    #[must_use]
    pub fn sent(&self) -> u64 {
        self.sent
    }

    fn stamp<V>(&mut self, payload: Payload<V>) -> Message<V> {
        self.sent += 1;
        trace!(seq = self.sent, kind = payload.kind(), "stamped outbound message");
        Message {
            seq: self.sent,
            payload,
        }
    }

    pub fn send<I, V>(&mut self, transport: &mut impl Transport<I, V>, to: I, payload: Payload<V>) {
        let message = self.stamp(payload);
        transport.unicast(to, message);
    }

    pub fn broadcast<I, V>(&mut self, transport: &mut impl Transport<I, V>, payload: Payload<V>) {
        let message = self.stamp(payload);
        transport.broadcast(message);
    }
}
