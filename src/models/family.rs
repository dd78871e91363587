//! Family unit representation and the record collection
//!
//! A Family links a husband, a wife and an ordered list of children by
//! identifier. Display names for the spouses are not stored here; they are
//! looked up from the individuals table at report time so a `NAME` line that
//! arrives after the `HUSB`/`WIFE` line is never missed.

use crate::models::individual::Individual;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Family unit reconstructed from a `FAM` record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    /// Unique family identifier token, e.g. `@F1@`
    pub id: String,
    /// Husband identifier, if recorded
    pub husband_id: Option<String>,
    /// Wife identifier, if recorded
    pub wife_id: Option<String>,
    /// Marriage date
    pub marriage_date: Option<NaiveDate>,
    /// Divorce date, if applicable
    pub divorce_date: Option<NaiveDate>,
    /// Child identifiers, in file order
    pub children: Vec<String>,
}

impl Family {
    /// Create a new family with only its identifier known
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            husband_id: None,
            wife_id: None,
            marriage_date: None,
            divorce_date: None,
            children: Vec::new(),
        }
    }

    /// Whether the identifier is already listed as a child of this family
    #[must_use]
    pub fn has_child(&self, child_id: &str) -> bool {
        self.children.iter().any(|id| id == child_id)
    }

    /// Whether the individual is recorded as husband or wife
    #[must_use]
    pub fn has_spouse(&self, individual_id: &str) -> bool {
        self.husband_id.as_deref() == Some(individual_id)
            || self.wife_id.as_deref() == Some(individual_id)
    }
}

/// The collection of records reconstructed from one input file
///
/// Entities are indexed by identifier for lookup and additionally kept in
/// file order so derivation and validation walk them deterministically.
#[derive(Debug, Default)]
pub struct RecordCollection {
    /// Individuals indexed by identifier
    individuals: HashMap<String, Individual>,
    /// Families indexed by identifier
    families: HashMap<String, Family>,
    /// Individual identifiers in order of first appearance
    individual_order: Vec<String>,
    /// Family identifiers in order of first appearance
    family_order: Vec<String>,
}

impl RecordCollection {
    /// Create a new empty `RecordCollection`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an individual, returning `false` if the identifier was
    /// already present (the new record still takes over the slot)
    pub fn insert_individual(&mut self, individual: Individual) -> bool {
        let fresh = !self.individuals.contains_key(&individual.id);
        if fresh {
            self.individual_order.push(individual.id.clone());
        }
        self.individuals.insert(individual.id.clone(), individual);
        fresh
    }

    /// Insert a family, returning `false` if the identifier was already
    /// present (the new record still takes over the slot)
    pub fn insert_family(&mut self, family: Family) -> bool {
        let fresh = !self.families.contains_key(&family.id);
        if fresh {
            self.family_order.push(family.id.clone());
        }
        self.families.insert(family.id.clone(), family);
        fresh
    }

    /// Get an individual by identifier
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Get a mutable individual by identifier
    pub fn individual_mut(&mut self, id: &str) -> Option<&mut Individual> {
        self.individuals.get_mut(id)
    }

    /// Get a family by identifier
    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// Get a mutable family by identifier
    pub fn family_mut(&mut self, id: &str) -> Option<&mut Family> {
        self.families.get_mut(id)
    }

    /// Individuals in order of first appearance in the file
    pub fn individuals_in_order(&self) -> impl Iterator<Item = &Individual> {
        self.individual_order
            .iter()
            .filter_map(|id| self.individuals.get(id))
    }

    /// Families in order of first appearance in the file
    pub fn families_in_order(&self) -> impl Iterator<Item = &Family> {
        self.family_order
            .iter()
            .filter_map(|id| self.families.get(id))
    }

    /// Family identifiers in order of first appearance
    #[must_use]
    pub fn family_ids(&self) -> &[String] {
        &self.family_order
    }

    /// Individual identifiers in order of first appearance
    #[must_use]
    pub fn individual_ids(&self) -> &[String] {
        &self.individual_order
    }

    /// Look up an individual's name for display, e.g. in family reports
    #[must_use]
    pub fn individual_name(&self, id: &str) -> Option<&str> {
        self.individuals.get(id).map(|i| i.name.as_str())
    }

    /// Count the individuals in the collection
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Count the families in the collection
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Living individuals with a derived spouse, in file order
    #[must_use]
    pub fn living_married(&self) -> Vec<&Individual> {
        self.individuals_in_order()
            .filter(|i| i.is_alive() && i.spouse_id.is_some())
            .collect()
    }

    /// Living individuals over 30 with no derived spouse, in file order
    #[must_use]
    pub fn living_singles_over_30(&self, today: &NaiveDate) -> Vec<&Individual> {
        self.individuals_in_order()
            .filter(|i| i.is_alive() && i.spouse_id.is_none())
            .filter(|i| i.age_at(today).is_some_and(|age| age > 30))
            .collect()
    }

    /// Deceased individuals, in file order
    #[must_use]
    pub fn deceased(&self) -> Vec<&Individual> {
        self.individuals_in_order()
            .filter(|i| !i.is_alive())
            .collect()
    }
}
