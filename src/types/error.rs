//! Error types for the citymap library.

use thiserror::Error;

/// Which side of a road named an unknown intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Only the source intersection is missing.
    Source,
    /// Only the destination intersection is missing.
    Destination,
    /// Neither intersection exists.
    Both,
}

impl Endpoint {
    /// Classify which endpoints are missing, or `None` when both exist.
    pub fn missing(src_present: bool, dest_present: bool) -> Option<Self> {
        match (src_present, dest_present) {
            (true, true) => None,
            (false, true) => Some(Self::Source),
            (true, false) => Some(Self::Destination),
            (false, false) => Some(Self::Both),
        }
    }

    /// Return a human-readable name for the missing side.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Both => "source and destination",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All errors that can occur in the citymap library.
#[derive(Error, Debug)]
pub enum MapError {
    /// A road was requested between intersections that do not both exist.
    #[error("Both intersections must exist ({missing} missing: {src} -> {dest})")]
    MissingEndpoint {
        src: String,
        dest: String,
        missing: Endpoint,
    },

    /// Road weight could not be parsed as an integer.
    #[error("Invalid distance: {0:?}")]
    InvalidWeight(String),

    /// IO error on the console streams.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for citymap operations.
pub type MapResult<T> = Result<T, MapError>;
