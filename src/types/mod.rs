//! All data types for the citymap library.

pub mod error;
pub mod outcome;
pub mod road;

pub use error::{Endpoint, MapError, MapResult};
pub use outcome::{Insertion, Removal};
pub use road::Road;

/// Weight given to a road when the caller does not supply one.
pub const DEFAULT_WEIGHT: i64 = 1;
