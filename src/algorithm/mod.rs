//! Post-parse derivation algorithms

pub mod relationships;

pub use relationships::derive_relationships;
