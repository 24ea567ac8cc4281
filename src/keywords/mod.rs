//! Keyword → topic lookup.
//!
//! A [`KeywordIndex`] is an immutable, per-job value built from an ordered
//! table of `(keyword, topic)` pairs. Matching is a case-insensitive
//! substring scan over every registered keyword, and a page may match any
//! number of topics.
//!
//! Tables live in a [`KeywordRegistry`], which is constructed explicitly and
//! handed to the job that needs it. [`KeywordRegistry::builtin`] carries the
//! published tables; tests and callers can register their own.
//!
//! ## Example
//!
//! ```
//! use pastpaper::keywords::KeywordRegistry;
//!
//! let registry = KeywordRegistry::builtin();
//! let index = registry.build("9231").unwrap();
//! let topics = index.topics_matching("Find the VECTOR equation of the plane");
//! assert!(topics.contains("Vectors"));
//! ```

mod tables;

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A single keyword entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Keyword as registered.
    pub keyword: String,
    /// Topic the keyword maps to.
    pub topic: String,
    needle: String,
}

/// Immutable keyword → topic index for one subject.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    subject_code: String,
    entries: Vec<KeywordEntry>,
}

impl KeywordIndex {
    /// Build an index from ordered `(keyword, topic)` pairs.
    ///
    /// Every pair is kept, duplicates included. Empty keywords would match
    /// every page and are dropped.
    pub fn from_pairs<I, K, T>(subject_code: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let subject_code = subject_code.into();
        let mut entries = Vec::new();

        for (keyword, topic) in pairs {
            let keyword = keyword.into();
            if keyword.is_empty() {
                log::warn!("Ignoring empty keyword in table for subject {}", subject_code);
                continue;
            }
            entries.push(KeywordEntry {
                needle: keyword.to_lowercase(),
                keyword,
                topic: topic.into(),
            });
        }

        Self {
            subject_code,
            entries,
        }
    }

    /// Subject code the index was built for.
    pub fn subject_code(&self) -> &str {
        &self.subject_code
    }

    /// Registered entries in table order.
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Number of registered keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keyword is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct topics, sorted.
    pub fn topics(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.topic.as_str()).collect()
    }

    /// Topics whose keywords occur in `text`, compared case-insensitively.
    pub fn topics_matching(&self, text: &str) -> BTreeSet<&str> {
        self.topics_matching_lowercase(&text.to_lowercase())
    }

    /// Same as [`topics_matching`](Self::topics_matching) for text that is
    /// already lower case.
    ///
    /// Scans every keyword; a topic is reported once no matter how many of
    /// its keywords occur.
    pub fn topics_matching_lowercase(&self, text: &str) -> BTreeSet<&str> {
        self.entries
            .iter()
            .filter(|e| text.contains(e.needle.as_str()))
            .map(|e| e.topic.as_str())
            .collect()
    }
}

/// Registry of keyword tables, keyed by subject code.
#[derive(Debug, Clone, Default)]
pub struct KeywordRegistry {
    tables: IndexMap<String, Vec<(String, String)>>,
}

impl KeywordRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in tables (9231, 9618, 9608, 9701).
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (code, table) in tables::BUILTIN {
            registry.register(*code, table.iter().copied());
        }
        registry
    }

    /// Register (or replace) the table for a subject.
    pub fn register<I, K, T>(&mut self, subject_code: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(k, t)| (k.into(), t.into()))
            .collect();
        self.tables.insert(subject_code.into(), pairs);
    }

    /// True when a table is registered for the subject.
    pub fn contains(&self, subject_code: &str) -> bool {
        self.tables.contains_key(subject_code)
    }

    /// Registered subject codes in registration order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Build the index for a subject.
    ///
    /// Fails with [`Error::KeywordMapNotFound`] when no table is registered.
    pub fn build(&self, subject_code: &str) -> Result<KeywordIndex> {
        let table = self
            .tables
            .get(subject_code)
            .ok_or_else(|| Error::KeywordMapNotFound(subject_code.to_string()))?;

        Ok(KeywordIndex::from_pairs(
            subject_code,
            table.iter().map(|(k, t)| (k.as_str(), t.as_str())),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeywordIndex {
        KeywordIndex::from_pairs(
            "0000",
            [
                ("vector", "Vectors"),
                ("plane", "Vectors"),
                ("induction", "Mathematical Induction"),
                ("RAM", "Hardware"),
            ],
        )
    }

    #[test]
    fn test_case_insensitive_match() {
        let index = sample();
        let topics = index.topics_matching("The VECTOR lies in the Plane");
        assert_eq!(topics.into_iter().collect::<Vec<_>>(), vec!["Vectors"]);
    }

    #[test]
    fn test_mixed_case_keyword_matches_lowercase_text() {
        let index = sample();
        assert!(index.topics_matching_lowercase("how much ram is fitted").contains("Hardware"));
    }

    #[test]
    fn test_multi_label_scan_does_not_stop_at_first_hit() {
        let index = sample();
        let topics = index.topics_matching("vector proof by induction");
        assert!(topics.contains("Vectors"));
        assert!(topics.contains("Mathematical Induction"));
        assert_eq!(topics.len(), 2);
    }

    #[test]
    fn test_no_match() {
        let index = sample();
        assert!(index.topics_matching("unrelated content").is_empty());
    }

    #[test]
    fn test_empty_keyword_is_ignored() {
        let index = KeywordIndex::from_pairs("0000", [("", "Everything"), ("x", "X")]);
        assert_eq!(index.len(), 1);
        assert!(index.topics_matching("abc").is_empty());
    }

    #[test]
    fn test_duplicate_keywords_are_preserved() {
        let index = KeywordIndex::from_pairs("0000", [("peg", "A"), ("peg ", "B"), ("peg", "A")]);
        assert_eq!(index.len(), 3);
        let topics = index.topics_matching("a peg on the wall");
        assert_eq!(topics.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_registry_missing_subject() {
        let registry = KeywordRegistry::builtin();
        let err = registry.build("9700").unwrap_err();
        assert!(matches!(err, Error::KeywordMapNotFound(code) if code == "9700"));
    }

    #[test]
    fn test_builtin_subjects() {
        let registry = KeywordRegistry::builtin();
        let subjects: Vec<_> = registry.subjects().collect();
        assert_eq!(subjects, vec!["9231", "9618", "9608", "9701"]);
    }

    #[test]
    fn test_builtin_table_keeps_trailing_space_topics() {
        let index = KeywordRegistry::builtin().build("9231").unwrap();
        let topics = index.topics();
        assert!(topics.contains("Circular Motion"));
        assert!(topics.contains("Circular Motion "));
        assert!(index.topics_matching("a small peg").contains("Circular Motion "));
    }

    #[test]
    fn test_register_replaces_table() {
        let mut registry = KeywordRegistry::new();
        registry.register("1234", [("a", "A")]);
        registry.register("1234", [("b", "B")]);
        let index = registry.build("1234").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].keyword, "b");
        assert_eq!(index.subject_code(), "1234");
    }
}
