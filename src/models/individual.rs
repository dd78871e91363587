//! Individual entity model
//!
//! An Individual represents one person reconstructed from the input file.
//! Name, gender and event dates come from the parser; spouse, children and
//! siblings are filled in by the relationship derivation pass.

use crate::models::types::{Gender, Offspring};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Core Individual entity reconstructed from an `INDI` record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    /// Unique identifier token, e.g. `@I1@`
    pub id: String,
    /// Full name; empty until a `NAME` line is seen
    pub name: String,
    /// Gender of the individual
    pub gender: Gender,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Death date, if applicable
    pub death_date: Option<NaiveDate>,
    /// Spouse identifier (derived)
    pub spouse_id: Option<String>,
    /// Children of the individual (derived)
    pub children: Offspring,
    /// Sibling identifiers, deduplicated, in derivation order (derived)
    pub siblings: Vec<String>,
}

impl Individual {
    /// Create a new Individual with only its identifier known
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            gender: Gender::Unknown,
            birth_date: None,
            death_date: None,
            spouse_id: None,
            children: Offspring::Unresolved,
            siblings: Vec::new(),
        }
    }

    /// Record a sibling, ignoring identifiers already present
    pub fn add_sibling(&mut self, sibling_id: &str) {
        if !self.siblings.iter().any(|id| id == sibling_id) {
            self.siblings.push(sibling_id.to_string());
        }
    }

    /// Whether no death date has been recorded
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death_date.is_none()
    }

    /// Calculate age of the individual at a specific reference date
    ///
    /// Returns `None` if the birth date is unknown or the individual was
    /// no longer alive at the reference date.
    #[must_use]
    pub fn age_at(&self, reference_date: &NaiveDate) -> Option<i32> {
        let birth_date = self.birth_date?;
        if self.death_date.is_some_and(|d| d < *reference_date) {
            return None;
        }

        let years = reference_date.year() - birth_date.year();
        // Adjust for birthday not yet reached in the reference year
        if (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day())
        {
            Some(years - 1)
        } else {
            Some(years)
        }
    }

    /// Calculate the age the individual reached at death
    ///
    /// Returns `None` unless both birth and death dates are known.
    #[must_use]
    pub fn age_at_death(&self) -> Option<i32> {
        let birth_date = self.birth_date?;
        let death_date = self.death_date?;

        let years = death_date.year() - birth_date.year();
        if (death_date.month(), death_date.day()) < (birth_date.month(), birth_date.day()) {
            Some(years - 1)
        } else {
            Some(years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_calculation() {
        let mut individual = Individual::new("@I1@".to_string());
        individual.birth_date = NaiveDate::from_ymd_opt(1980, 6, 15);

        // Age on the birthday itself
        assert_eq!(
            individual.age_at(&NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()),
            Some(40)
        );

        // Day before the birthday
        assert_eq!(
            individual.age_at(&NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()),
            Some(39)
        );
    }

    #[test]
    fn test_age_after_death() {
        let mut individual = Individual::new("@I1@".to_string());
        individual.birth_date = NaiveDate::from_ymd_opt(1980, 6, 15);
        individual.death_date = NaiveDate::from_ymd_opt(2000, 1, 1);

        assert_eq!(
            individual.age_at(&NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()),
            None
        );
    }

    #[test]
    fn test_age_at_death() {
        let mut individual = Individual::new("@I1@".to_string());
        individual.birth_date = NaiveDate::from_ymd_opt(1980, 3, 15);
        individual.death_date = NaiveDate::from_ymd_opt(2020, 1, 20);

        // Died before the birthday in the death year
        assert_eq!(individual.age_at_death(), Some(39));
    }

    #[test]
    fn test_add_sibling_deduplicates() {
        let mut individual = Individual::new("@I1@".to_string());
        individual.add_sibling("@I2@");
        individual.add_sibling("@I3@");
        individual.add_sibling("@I2@");

        assert_eq!(individual.siblings, ["@I2@".to_string(), "@I3@".to_string()]);
    }
}
