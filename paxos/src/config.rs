//! Participant configuration

use std::fmt;

use error_stack::Report;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marker error for rejected configuration. Details are attached to the
/// `Report`.
#[derive(Debug)]
pub struct ConfigError;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid participant configuration")
    }
}

impl std::error::Error for ConfigError {}

/// Settings fixed at participant construction
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticipantConfig<V> {
    /// Number of participants in the cluster, including this one
    pub cluster_size: usize,
    /// Whether this participant drives proposals
    #[cfg_attr(feature = "serde", serde(default))]
    pub distinguished: bool,
    /// Value proposed on the first trigger
    pub default_value: V,
}

impl<V> ParticipantConfig<V> {
    /// Configuration for a non-distinguished participant
    #[must_use]
    pub fn new(cluster_size: usize, default_value: V) -> Self {
        Self {
            cluster_size,
            distinguished: false,
            default_value,
        }
    }

    #[must_use]
    pub fn distinguished(mut self, distinguished: bool) -> Self {
        self.distinguished = distinguished;
        self
    }

    /// # Errors
    ///
    /// Returns an error if the cluster is empty.
    pub fn validate(&self) -> Result<(), Report<ConfigError>> {
        if self.cluster_size == 0 {
            return Err(Report::new(ConfigError).attach("cluster size must be at least 1"));
        }
        Ok(())
    }
}
