//! Majority accounting shared by both proposer phases

use std::collections::BTreeSet;

/// Majority threshold for a fixed cluster size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quorum {
    cluster_size: usize,
}

impl Quorum {
    #[must_use]
    pub fn new(cluster_size: usize) -> Self {
        Self { cluster_size }
    }

    #[must_use]
    pub fn cluster_size(&self) -> usize {
        self.cluster_size
    }

    /// Smallest count that is more than half of the cluster.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.cluster_size / 2 + 1
    }

    /// `count > N/2`, without going through floating point.
    #[must_use]
    pub fn is_reached(&self, count: usize) -> bool {
        count >= self.threshold()
    }
}

/// Set of participants that acknowledged a phase.
///
/// Re-inserting a known sender is a no-op, so duplicate deliveries never
/// inflate the count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AckSet<I: Ord> {
    acks: BTreeSet<I>,
}

impl<I: Ord> Default for AckSet<I> {
    fn default() -> Self {
        Self {
            acks: BTreeSet::new(),
        }
    }
}

impl<I: Ord> AckSet<I> {
    /// Record an acknowledgement. Returns `true` if the sender was new.
    pub fn record(&mut self, sender: I) -> bool {
        self.acks.insert(sender)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.acks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acks.is_empty()
    }

    #[must_use]
    pub fn contains(&self, sender: &I) -> bool {
        self.acks.contains(sender)
    }

    pub fn iter(&self) -> impl Iterator<Item = &I> {
        self.acks.iter()
    }
}
