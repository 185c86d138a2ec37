//! The outgoing edge stored in an intersection's adjacency list.

use serde::Serialize;

use super::DEFAULT_WEIGHT;

/// A directed, weighted road leading to `destination`.
///
/// The source is implied by the adjacency list the road is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Road {
    /// Name of the intersection this road leads to.
    pub destination: String,
    /// Distance of the road. Any integer is accepted.
    pub weight: i64,
}

impl Road {
    /// Create a road to `destination` with the given weight.
    pub fn new(destination: impl Into<String>, weight: i64) -> Self {
        Self {
            destination: destination.into(),
            weight,
        }
    }

    /// Create a road with [`DEFAULT_WEIGHT`].
    pub fn unweighted(destination: impl Into<String>) -> Self {
        Self::new(destination, DEFAULT_WEIGHT)
    }

    /// Whether this road leads to `name`.
    pub fn leads_to(&self, name: &str) -> bool {
        self.destination == name
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.destination, self.weight)
    }
}
