//! Incremental line parser for GEDCOM records
//!
//! The parser consumes one line at a time and tracks which individual or
//! family record is currently open, plus a one-level date sub-context for
//! the birth/death/marriage/divorce events. A line is `<level> <tag> [value]`;
//! lines with fewer than two tokens are skipped silently and also terminate
//! any open date sub-context. While a date sub-context is open the parser
//! scans past unrecognized sub-record lines looking for the nested `DATE`,
//! but a line opening a different record element ends the scan and is
//! processed normally rather than consumed.

use crate::config::GedReaderConfig;
use crate::error::Result;
use crate::models::{
    Category, Family, Gender, Individual, RecordCollection, RuleCode, Violation,
};
use crate::utils::date::parse_gedcom_date;
use log::warn;

/// Which record is currently open
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Context {
    /// No record opened yet
    #[default]
    None,
    /// An individual record is current
    Individual(String),
    /// A family record is current
    Family(String),
}

/// An event tag whose `DATE` line is still expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingDate {
    Birth,
    Death,
    Marriage,
    Divorce,
}

impl PendingDate {
    const fn field(self) -> &'static str {
        match self {
            Self::Birth => "birth_date",
            Self::Death => "death_date",
            Self::Marriage => "marriage_date",
            Self::Divorce => "divorce_date",
        }
    }
}

/// Whether the tag opens a record or a recognized record field, as opposed
/// to an ignorable sub-record line
fn is_record_tag(tag: &str) -> bool {
    tag.starts_with("@I")
        || tag.starts_with("@F")
        || matches!(
            tag,
            "NAME" | "SEX" | "BIRT" | "DEAT" | "MARR" | "DIV" | "HUSB" | "WIFE" | "CHIL"
        )
}

/// Single-pass GEDCOM line parser
///
/// Feed lines through [`process_line`](Self::process_line) and take the
/// reconstructed records with [`finish`](Self::finish). Duplicate identifiers
/// are recorded as US22 violations rather than errors; the later record
/// reuses the slot.
#[derive(Debug)]
pub struct GedcomParser {
    config: GedReaderConfig,
    collection: RecordCollection,
    violations: Vec<Violation>,
    context: Context,
    pending: Option<PendingDate>,
}

impl Default for GedcomParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GedcomParser {
    /// Create a parser with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GedReaderConfig::default())
    }

    /// Create a parser with an explicit configuration
    #[must_use]
    pub fn with_config(config: GedReaderConfig) -> Self {
        Self {
            config,
            collection: RecordCollection::new(),
            violations: Vec::new(),
            context: Context::default(),
            pending: None,
        }
    }

    /// Consume the parser, returning the records and parse-time violations
    #[must_use]
    pub fn finish(self) -> (RecordCollection, Vec<Violation>) {
        (self.collection, self.violations)
    }

    /// Process one input line
    ///
    /// # Errors
    /// Returns an error only for a malformed non-empty date literal under
    /// `strict_dates`; every other anomaly is a violation or a silent skip.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            // A short line ends any open date sub-context.
            self.pending = None;
            return Ok(());
        }

        let tag = tokens[1];

        if let Some(pending) = self.pending.take() {
            if tag == "DATE" {
                return self.assign_pending_date(pending, &tokens[2..].join(" "));
            }
            if !is_record_tag(tag) {
                // An unrecognized sub-record line (e.g. PLAC); keep scanning
                // for the nested DATE.
                self.pending = Some(pending);
                return Ok(());
            }
            // A line that opens a different record element ends the
            // sub-context and is handled normally below, never consumed.
        }

        if tag.starts_with("@I") {
            self.open_individual(tag);
        } else if tag.starts_with("@F") {
            self.open_family(tag);
        } else {
            match tag {
                "NAME" => {
                    if let Some(individual) = self.current_individual_mut() {
                        individual.name = tokens[2..].join(" ");
                    }
                }
                "SEX" => {
                    if let Some(value) = tokens.get(2).copied() {
                        if let Some(individual) = self.current_individual_mut() {
                            individual.gender = Gender::from(value);
                        }
                    }
                }
                "BIRT" => {
                    if matches!(self.context, Context::Individual(_)) {
                        self.pending = Some(PendingDate::Birth);
                    }
                }
                "DEAT" => {
                    if matches!(self.context, Context::Individual(_)) {
                        self.pending = Some(PendingDate::Death);
                    }
                }
                "MARR" => {
                    if matches!(self.context, Context::Family(_)) {
                        self.pending = Some(PendingDate::Marriage);
                    }
                }
                "DIV" => {
                    if matches!(self.context, Context::Family(_)) {
                        self.pending = Some(PendingDate::Divorce);
                    }
                }
                "HUSB" => {
                    if let Some(id) = tokens.get(2) {
                        if let Some(family) = self.current_family_mut() {
                            family.husband_id = Some((*id).to_string());
                        }
                    }
                }
                "WIFE" => {
                    if let Some(id) = tokens.get(2) {
                        if let Some(family) = self.current_family_mut() {
                            family.wife_id = Some((*id).to_string());
                        }
                    }
                }
                "CHIL" => {
                    if let Some(id) = tokens.get(2).copied() {
                        self.record_child(id);
                    }
                }
                // Tags outside the recognized vocabulary are ignored.
                _ => {}
            }
        }

        Ok(())
    }

    fn open_individual(&mut self, id: &str) {
        let fresh = self
            .collection
            .insert_individual(Individual::new(id.to_string()));
        if !fresh {
            self.violations.push(Violation::new(
                Category::Individual,
                RuleCode::Us22,
                vec![id.to_string()],
                "Individual ID is not unique",
            ));
        }
        self.context = Context::Individual(id.to_string());
    }

    fn open_family(&mut self, id: &str) {
        let fresh = self.collection.insert_family(Family::new(id.to_string()));
        if !fresh {
            self.violations.push(Violation::new(
                Category::Family,
                RuleCode::Us22,
                vec![id.to_string()],
                "Family ID is not unique",
            ));
        }
        self.context = Context::Family(id.to_string());
    }

    fn current_individual_mut(&mut self) -> Option<&mut Individual> {
        match &self.context {
            Context::Individual(id) => {
                let id = id.clone();
                self.collection.individual_mut(&id)
            }
            _ => None,
        }
    }

    fn current_family_mut(&mut self) -> Option<&mut Family> {
        match &self.context {
            Context::Family(id) => {
                let id = id.clone();
                self.collection.family_mut(&id)
            }
            _ => None,
        }
    }

    /// Append a child to the current family and mirror it into both
    /// parents' children lists, where those parents exist in the store
    fn record_child(&mut self, child_id: &str) {
        let dedupe = self.config.dedupe_children;

        let Some(family) = self.current_family_mut() else {
            return;
        };
        if dedupe && family.has_child(child_id) {
            return;
        }
        family.children.push(child_id.to_string());
        let parents = [family.husband_id.clone(), family.wife_id.clone()];

        for parent_id in parents.into_iter().flatten() {
            match self.collection.individual_mut(&parent_id) {
                Some(parent) => {
                    if !(dedupe && parent.children.contains(child_id)) {
                        parent.children.add(child_id);
                    }
                }
                None => {
                    warn!("child {child_id} names parent {parent_id} not in the record table");
                }
            }
        }
    }

    /// Assign a nested `DATE` value to the field its event tag opened
    fn assign_pending_date(&mut self, pending: PendingDate, value: &str) -> Result<()> {
        // A DATE line with no value leaves the field unset.
        if value.is_empty() {
            return Ok(());
        }

        let record_id = match (&self.context, pending) {
            (Context::Individual(id), PendingDate::Birth | PendingDate::Death) => id.clone(),
            (Context::Family(id), PendingDate::Marriage | PendingDate::Divorce) => id.clone(),
            // The event tag was already ignored without a matching context.
            _ => return Ok(()),
        };

        let date = match parse_gedcom_date(&record_id, pending.field(), value) {
            Ok(date) => date,
            Err(e) if self.config.strict_dates => return Err(e.into()),
            Err(e) => {
                warn!("{e}; leaving field unset");
                return Ok(());
            }
        };

        match pending {
            PendingDate::Birth => {
                if let Some(individual) = self.current_individual_mut() {
                    individual.birth_date = Some(date);
                }
            }
            PendingDate::Death => {
                if let Some(individual) = self.current_individual_mut() {
                    individual.death_date = Some(date);
                }
            }
            PendingDate::Marriage => {
                if let Some(family) = self.current_family_mut() {
                    family.marriage_date = Some(date);
                }
            }
            PendingDate::Divorce => {
                if let Some(family) = self.current_family_mut() {
                    family.divorce_date = Some(date);
                }
            }
        }

        Ok(())
    }
}
