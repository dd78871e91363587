//! Common domain type definitions
//!
//! This module contains the enum types shared across the entity models.

use serde::{Deserialize, Serialize};

/// Gender of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// Children attributed to an individual
///
/// Distinguishes "derivation has not run yet" from "known childless" so the
/// recursive descendant traversal can stop at a resolved leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Offspring {
    /// Relationship derivation has not resolved this individual yet
    #[default]
    Unresolved,
    /// Derivation ran and found no children
    Childless,
    /// Known children, in file order
    Known(Vec<String>),
}

impl Offspring {
    /// Append a child identifier, promoting the state to `Known`
    pub fn add(&mut self, child_id: &str) {
        match self {
            Self::Known(ids) => ids.push(child_id.to_string()),
            _ => *self = Self::Known(vec![child_id.to_string()]),
        }
    }

    /// Whether the identifier is already recorded as a child
    #[must_use]
    pub fn contains(&self, child_id: &str) -> bool {
        match self {
            Self::Known(ids) => ids.iter().any(|id| id == child_id),
            _ => false,
        }
    }

    /// The known child identifiers (empty unless `Known`)
    #[must_use]
    pub fn ids(&self) -> &[String] {
        match self {
            Self::Known(ids) => ids,
            _ => &[],
        }
    }

    /// Whether derivation resolved this individual as having no children
    #[must_use]
    pub fn is_childless(&self) -> bool {
        matches!(self, Self::Childless)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_string() {
        assert_eq!(Gender::from("M"), Gender::Male);
        assert_eq!(Gender::from("male"), Gender::Male);
        assert_eq!(Gender::from("F"), Gender::Female);
        assert_eq!(Gender::from("female"), Gender::Female);
        assert_eq!(Gender::from("unknown"), Gender::Unknown);
    }

    #[test]
    fn test_offspring_transitions() {
        let mut offspring = Offspring::default();
        assert_eq!(offspring, Offspring::Unresolved);
        assert!(offspring.ids().is_empty());
        assert!(!offspring.is_childless());

        offspring.add("@I2@");
        offspring.add("@I3@");
        assert_eq!(offspring.ids(), ["@I2@".to_string(), "@I3@".to_string()]);
        assert!(offspring.contains("@I2@"));
        assert!(!offspring.contains("@I4@"));

        let childless = Offspring::Childless;
        assert!(childless.is_childless());
        assert!(childless.ids().is_empty());
    }
}
