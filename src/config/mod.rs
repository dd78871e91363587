//! Configuration for the `GedReader`.

/// Configuration for GEDCOM parsing and validation
#[derive(Debug, Clone)]
pub struct GedReaderConfig {
    /// Whether a malformed non-empty date literal aborts the run;
    /// when false the field is left unset and a warning is logged
    pub strict_dates: bool,
    /// Whether to suppress duplicate `CHIL` entries for the same family
    pub dedupe_children: bool,
    /// Depth cap for the recursive descendant-marriage traversal
    pub max_descent_depth: usize,
}

impl Default for GedReaderConfig {
    fn default() -> Self {
        Self {
            strict_dates: true,
            dedupe_children: true,
            max_descent_depth: 64,
        }
    }
}
