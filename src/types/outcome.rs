//! Structured results of the soft, never-failing mutations.

use serde::Serialize;

/// Result of adding an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insertion {
    /// The intersection was created.
    Added,
    /// An intersection with this name was already present; nothing changed.
    AlreadyExists,
}

impl Insertion {
    /// Whether a new intersection was created.
    pub fn created(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Result of removing an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Removal {
    /// The intersection and every road pointing at it were removed.
    Removed,
    /// No such intersection; nothing changed.
    NotFound,
}

impl Removal {
    /// Whether an intersection was actually removed.
    pub fn removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}
