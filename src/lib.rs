//! A Rust library for reading GEDCOM genealogy files, deriving family
//! relationships, and checking the records against a fixed catalog of
//! consistency rules.
//!
//! The pipeline is one-directional: lines go through [`GedcomParser`] into a
//! [`RecordCollection`], [`derive_relationships`] fills in spouse, sibling
//! and childless facts in place, and [`validate`] reads the result and
//! returns the ordered violation list.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod utils;
pub mod validation;

// Re-export the most common types for easier use
// Core types
pub use config::GedReaderConfig;
pub use error::{GedReaderError, Result};
pub use models::{
    Category, Family, Gender, Individual, Offspring, RecordCollection, RuleCode, Violation,
};
pub use parser::GedcomParser;

// Pipeline stages
pub use algorithm::derive_relationships;
pub use validation::validate;

// Utility functions
pub use utils::read_gedcom;
