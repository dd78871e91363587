//! Structured consistency violations
//!
//! Violations are append-only records produced by the parser (duplicate
//! identifiers) and the validation engine (everything else). They render as
//! `ERROR: <CATEGORY>: <RULECODE>: <subject(s)>: <description>` for
//! compatibility with existing consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which entity table a violation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// A violation attributed to one or more individuals
    Individual,
    /// A violation attributed to a family
    Family,
}

impl Category {
    /// The category token used in rendered messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Family => "FAMILY",
        }
    }
}

/// The fixed catalog of rule codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    /// Birth before marriage
    Us02,
    /// Birth before death
    Us03,
    /// Marriage before divorce
    Us04,
    /// Marriage before death
    Us05,
    /// Birth after marriage of parents (and before divorce plus nine months)
    Us08,
    /// Birth before death of mother (and father's death plus nine months)
    Us09,
    /// No marriage to descendants
    Us17,
    /// No marriage to siblings
    Us18,
    /// Correct gender for role
    Us21,
    /// Unique identifiers
    Us22,
    /// Unique name and birth date
    Us23,
}

impl RuleCode {
    /// The rule token used in rendered messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us02 => "US02",
            Self::Us03 => "US03",
            Self::Us04 => "US04",
            Self::Us05 => "US05",
            Self::Us08 => "US08",
            Self::Us09 => "US09",
            Self::Us17 => "US17",
            Self::Us18 => "US18",
            Self::Us21 => "US21",
            Self::Us22 => "US22",
            Self::Us23 => "US23",
        }
    }
}

/// One failed consistency rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Which entity table the violation concerns
    pub category: Category,
    /// The rule that failed
    pub code: RuleCode,
    /// Identifiers of the entities involved
    pub subjects: Vec<String>,
    /// Human-readable description
    pub message: String,
}

impl Violation {
    /// Create a violation record
    #[must_use]
    pub fn new(
        category: Category,
        code: RuleCode,
        subjects: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            subjects,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {}: {}: {}: {}",
            self.category.as_str(),
            self.code.as_str(),
            self.subjects.join(" and "),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display_single_subject() {
        let violation = Violation::new(
            Category::Individual,
            RuleCode::Us22,
            vec!["@I123@".to_string()],
            "Individual ID is not unique",
        );
        assert_eq!(
            violation.to_string(),
            "ERROR: INDIVIDUAL: US22: @I123@: Individual ID is not unique"
        );
    }

    #[test]
    fn test_violation_display_joins_subjects() {
        let violation = Violation::new(
            Category::Individual,
            RuleCode::Us23,
            vec!["@I1@".to_string(), "@I13@".to_string()],
            "Have the same name and birth date",
        );
        assert_eq!(
            violation.to_string(),
            "ERROR: INDIVIDUAL: US23: @I1@ and @I13@: Have the same name and birth date"
        );
    }
}
