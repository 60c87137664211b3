//! Editorial syllable override table
//!
//! A two-column `term,count` CSV loaded once at startup. Entries are keyed by
//! canonical form and take precedence over the base phonetic counter.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::ResourceError;
use crate::text::canonical_form;

const EMBEDDED_OVERRIDES: &str = include_str!("../../data/syllable_overrides.csv");

/// Canonical term to syllable count, consulted before the base counter
#[derive(Debug, Clone, Default)]
pub struct SyllableOverrideTable {
    counts: HashMap<String, u32>,
}

impl SyllableOverrideTable {
    /// Table with no overrides
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table from the embedded override resource
    pub fn embedded() -> Result<Self, ResourceError> {
        Self::from_csv("syllable_overrides.csv", EMBEDDED_OVERRIDES)
    }

    /// Table from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let content = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let resource = path.display().to_string();
        Self::from_csv(&resource, &content)
    }

    /// Table from CSV content; `resource` names the source in errors
    pub fn from_csv(resource: &str, content: &str) -> Result<Self, ResourceError> {
        let counts = parse_count_table(resource, content)?;
        log::info!("{resource}: {} syllable overrides loaded", counts.len());
        Ok(Self { counts })
    }

    /// Override count for a canonical term
    pub fn get(&self, canonical: &str) -> Option<u32> {
        self.counts.get(canonical).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries sorted by term
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        entries.sort_unstable();
        entries
    }
}

/// Parse `term,count` rows into a canonical-keyed map
///
/// Blank lines and `#` comments are skipped. A row with other than two
/// fields, an empty term, or a non-integer count fails the whole load.
pub(crate) fn parse_count_table(
    resource: &str,
    content: &str,
) -> Result<HashMap<String, u32>, ResourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut counts = HashMap::new();
    for result in reader.records() {
        let record = result.map_err(|e| ResourceError::Malformed {
            resource: resource.to_string(),
            line: e.position().map(|p| p.line() as usize).unwrap_or(0),
            reason: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let malformed = |reason: &str| ResourceError::Malformed {
            resource: resource.to_string(),
            line,
            reason: reason.to_string(),
        };

        if record.len() != 2 {
            return Err(malformed("expected exactly two columns: term,count"));
        }
        let term = canonical_form(&record[0]);
        if term.is_empty() {
            return Err(malformed("empty term"));
        }
        let count: u32 = record[1]
            .parse()
            .map_err(|_| malformed("count is not a non-negative integer"))?;

        counts.insert(term, count);
    }

    Ok(counts)
}
