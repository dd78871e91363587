//! Utility functions for working with GEDCOM files

pub mod date;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::GedReaderConfig;
use crate::error::Result;
use crate::models::{RecordCollection, Violation};
use crate::parser::GedcomParser;

/// Read a GEDCOM file line by line into a record collection
///
/// Returns the reconstructed records plus any parse-time violations
/// (duplicate identifiers). Relationship derivation and rule validation
/// are separate passes, see [`crate::derive_relationships`] and
/// [`crate::validate`].
///
/// # Errors
/// Returns an error if the file cannot be read, or if a date literal is
/// malformed and `config.strict_dates` is set.
pub fn read_gedcom(path: &Path, config: &GedReaderConfig) -> Result<(RecordCollection, Vec<Violation>)> {
    let file = File::open(path)?;
    let mut parser = GedcomParser::with_config(config.clone());

    for line in BufReader::new(file).lines() {
        parser.process_line(&line?)?;
    }

    Ok(parser.finish())
}
