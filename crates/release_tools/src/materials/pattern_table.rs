//! Ordered texture pattern table

use regex::{Regex, RegexBuilder};

use super::RenameError;
use crate::config::PatternSpec;

/// Extension given to every renamed texture
const CANONICAL_EXTENSION: &str = "png";

/// A compiled texture role pattern and the name it normalizes to
#[derive(Debug, Clone)]
pub struct PatternEntry {
    regex: Regex,
    canonical_name: String,
}

impl PatternEntry {
    /// Compile `pattern` case-insensitively
    pub fn new(pattern: &str, canonical_name: impl Into<String>) -> Result<Self, RenameError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| RenameError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            regex,
            canonical_name: canonical_name.into(),
        })
    }

    /// Pattern source as written in the table
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Canonical file stem, without extension
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Canonical file name, e.g. `albedo.png`
    pub fn canonical_file_name(&self) -> String {
        format!("{}.{}", self.canonical_name, CANONICAL_EXTENSION)
    }

    /// Whether the pattern occurs anywhere in `file_name`
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

/// Ordered list of texture patterns
///
/// Lookup is first-match in table order: a file name matching several
/// patterns belongs to the earliest one, not the longest or best match.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Create an empty table
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Compile a table from configured rows, keeping their order
    pub fn from_specs(specs: &[PatternSpec]) -> Result<Self, RenameError> {
        specs
            .iter()
            .try_fold(Self::new(), |table, spec| table.with_pattern(&spec.pattern, &spec.name))
    }

    /// Append a pattern with lower priority than every existing one
    pub fn with_pattern(
        mut self,
        pattern: &str,
        canonical_name: impl Into<String>,
    ) -> Result<Self, RenameError> {
        self.entries.push(PatternEntry::new(pattern, canonical_name)?);
        Ok(self)
    }

    /// First entry matching `file_name`, if any
    pub fn classify(&self, file_name: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.is_match(file_name))
    }

    /// Entries in priority order
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no patterns
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenamerConfig;

    fn default_table() -> PatternTable {
        PatternTable::from_specs(&RenamerConfig::default().patterns).unwrap()
    }

    fn classify<'a>(table: &'a PatternTable, name: &str) -> Option<&'a str> {
        table.classify(name).map(PatternEntry::canonical_name)
    }

    #[test]
    fn test_default_table_order() {
        let table = default_table();
        assert_eq!(table.len(), 3);

        let names: Vec<&str> = table.entries().iter().map(PatternEntry::canonical_name).collect();
        assert_eq!(names, ["albedo", "normal", "roughness"]);
        assert_eq!(table.entries()[0].pattern(), "albedo|Base_Color");
    }

    #[test]
    fn test_classify_any_casing() {
        let table = default_table();

        assert_eq!(classify(&table, "Rock_Albedo.png"), Some("albedo"));
        assert_eq!(classify(&table, "ROCK_ALBEDO.PNG"), Some("albedo"));
        assert_eq!(classify(&table, "rock_base_color.jpg"), Some("albedo"));
        assert_eq!(classify(&table, "Rock_Base_Color.png"), Some("albedo"));
        assert_eq!(classify(&table, "T_Rock_NoRmAl.tga"), Some("normal"));
        assert_eq!(classify(&table, "rock-Roughness.png"), Some("roughness"));
    }

    #[test]
    fn test_classify_miss() {
        let table = default_table();

        assert_eq!(classify(&table, "rock_metallic.png"), None);
        assert_eq!(classify(&table, "rock_ao.png"), None);
        // "Base_Color" is matched literally, a space does not count
        assert_eq!(classify(&table, "rock base color.png"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table = default_table();

        assert_eq!(classify(&table, "rock_normal_roughness.png"), Some("normal"));
        assert_eq!(classify(&table, "roughness_from_albedo.png"), Some("albedo"));
        assert_eq!(classify(&table, "normal_Base_Color.png"), Some("albedo"));
    }

    #[test]
    fn test_priority_follows_insertion() {
        let table = PatternTable::new()
            .with_pattern("rough", "roughness")
            .unwrap()
            .with_pattern("normal", "normal")
            .unwrap();

        assert_eq!(classify(&table, "normal_rough.png"), Some("roughness"));
    }

    #[test]
    fn test_canonical_file_name() {
        let entry = PatternEntry::new("normal", "normal").unwrap();
        assert_eq!(entry.canonical_file_name(), "normal.png");
    }

    #[test]
    fn test_invalid_pattern() {
        let specs = vec![PatternSpec::new("albedo(", "albedo")];
        let err = PatternTable::from_specs(&specs).unwrap_err();

        assert!(matches!(err, RenameError::Pattern { ref pattern, .. } if pattern == "albedo("));
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = PatternTable::new();
        assert!(table.is_empty());
        assert!(table.classify("albedo.png").is_none());
    }
}
