//! Domain models for the GEDCOM record reader
//!
//! This module contains the entity models reconstructed from the input plus
//! the violation records produced by the consistency checks.

// Re-export entity models
pub mod family;
pub mod individual;
pub mod types;
pub mod violation;

// Re-export commonly used types
pub use family::{Family, RecordCollection};
pub use individual::Individual;
pub use types::{Gender, Offspring};
pub use violation::{Category, RuleCode, Violation};
