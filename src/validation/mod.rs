//! Consistency rule catalog
//!
//! Each check reads the derived record collection and appends structured
//! violations. The rules are mutually independent, but the catalog order is
//! fixed so repeated runs over the same input produce the same violation
//! list. A rule whose required fields are absent is simply not applicable
//! and emits nothing; no rule aborts the run.

pub mod rules;

use crate::config::GedReaderConfig;
use crate::models::{RecordCollection, Violation};

/// Run the full rule catalog against a derived record collection
///
/// US22 (unique identifiers) fires at parse time and is not repeated here.
#[must_use]
pub fn validate(collection: &RecordCollection, config: &GedReaderConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    rules::birth_before_death(collection, &mut violations);
    rules::birth_before_marriage(collection, &mut violations);
    rules::marriage_before_death(collection, &mut violations);
    rules::marriage_before_divorce(collection, &mut violations);
    rules::birth_within_wedlock(collection, &mut violations);
    rules::birth_before_parent_death(collection, &mut violations);
    rules::unique_name_and_birth(collection, &mut violations);
    rules::no_marriage_to_descendant(collection, config, &mut violations);
    rules::no_marriage_to_sibling(collection, &mut violations);
    rules::correct_gender_for_role(collection, &mut violations);

    violations
}
