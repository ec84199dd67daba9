//! File type filters for picker dialogs.
//!
//! A filter spec is an ordered, non-empty list of (label, wildcard pattern)
//! pairs. Order matters twice: it is the order the dialog presents the types
//! in, and the first entry's pattern supplies the default extension.

/// One selectable file type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterEntry {
    pub label: String,
    pub pattern: String,
}

/// Ordered, non-empty set of file type filters.
///
/// Non-emptiness is enforced by construction: [`FilterSpec::new`] takes the
/// first entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
    entries: Vec<FilterEntry>,
}

impl FilterSpec {
    /// Create a spec with its first (and default) entry.
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            entries: vec![FilterEntry {
                label: label.into(),
                pattern: pattern.into(),
            }],
        }
    }

    /// Append another entry, preserving order.
    pub fn with(mut self, label: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.entries.push(FilterEntry {
            label: label.into(),
            pattern: pattern.into(),
        });
        self
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Join the entries into the double-delimited native filter string,
    /// preserving input order: `label|pattern|label|pattern`.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            out.push_str(&entry.label);
            out.push('|');
            out.push_str(&entry.pattern);
        }
        out
    }

    /// Default extension, taken from the first entry's pattern text after its
    /// wildcard prefix: `*.jpa` yields `jpa`.
    pub fn default_extension(&self) -> &str {
        let pattern = &self.entries[0].pattern;
        pattern
            .strip_prefix("*.")
            .unwrap_or_else(|| pattern.trim_start_matches(['*', '.']))
    }

    /// Extensions of one entry for toolkits that take extension lists instead
    /// of wildcard strings. Multi-pattern entries (`*.jpa;*.zip`) split on the
    /// separator.
    pub fn extensions(entry: &FilterEntry) -> Vec<&str> {
        entry
            .pattern
            .split(';')
            .map(|p| p.trim().trim_start_matches(['*', '.']))
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_preserves_order() {
        let spec = FilterSpec::new("Archives", "*.zip").with("All files", "*.*");
        assert_eq!(spec.serialize(), "Archives|*.zip|All files|*.*");
    }

    #[test]
    fn default_extension_comes_from_first_pattern() {
        let spec = FilterSpec::new("Archives", "*.zip").with("All files", "*.*");
        assert_eq!(spec.default_extension(), "zip");
    }

    #[test]
    fn wildcard_pattern_keeps_the_star() {
        let spec = FilterSpec::new("All files", "*.*");
        assert_eq!(spec.default_extension(), "*");
    }

    #[test]
    fn single_entry_serializes_without_trailing_delimiter() {
        let spec = FilterSpec::new("JPA archives", "*.jpa");
        assert_eq!(spec.serialize(), "JPA archives|*.jpa");
    }

    #[test]
    fn extensions_split_multi_pattern_entries() {
        let spec = FilterSpec::new("Backup archives", "*.jpa;*.jps;*.zip");
        assert_eq!(
            FilterSpec::extensions(&spec.entries()[0]),
            vec!["jpa", "jps", "zip"]
        );
    }
}
