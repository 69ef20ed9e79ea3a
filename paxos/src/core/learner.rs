//! Pure learner state - the single learned slot

use tracing::{debug, warn};

/// Learner state shared by the proposer quorum path and `Learn` announcements.
///
/// `learned` becomes `Some` at most once and never goes back to `None`. Later
/// announcements still overwrite the value; nothing cross-checks them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LearnerCore<V> {
    learned: Option<V>,
}

/// What recording a value did to the learned slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearnOutcome<V> {
    /// First value learned
    Learned,
    /// Same value learned again
    Unchanged,
    /// A different value replaced the previous one
    Overwrote { previous: V },
}

impl<V> Default for LearnerCore<V> {
    fn default() -> Self {
        Self { learned: None }
    }
}

impl<V: Clone + PartialEq + std::fmt::Debug> LearnerCore<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_learned(&self) -> bool {
        self.learned.is_some()
    }

    #[must_use]
    pub fn learned(&self) -> Option<&V> {
        self.learned.as_ref()
    }

    /// Record `value` as learned, trusting the caller.
    pub fn learn(&mut self, value: V) -> LearnOutcome<V> {
        match self.learned.replace(value) {
            None => {
                debug!(value = ?self.learned, "learned value");
                LearnOutcome::Learned
            }
            Some(previous) if Some(&previous) == self.learned.as_ref() => LearnOutcome::Unchanged,
            Some(previous) => {
                warn!(?previous, current = ?self.learned, "learned value overwritten");
                LearnOutcome::Overwrote { previous }
            }
        }
    }
}
