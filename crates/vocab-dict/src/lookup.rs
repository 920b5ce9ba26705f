//! The external definition-lookup seam and entry building.
//!
//! The codec never talks to a dictionary service itself; anything that can
//! answer "what does this word mean" implements [`DefinitionProvider`]. A
//! failed or empty lookup is not an error at this level — the word still
//! gets an entry, with [`Definition::Missing`] standing in.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::entry::{Definition, Entry};

/// A successful lookup for one word.
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    /// Definition lines, formatted `<part of speech> - <text>`.
    pub definitions: Vec<String>,
    /// Synonyms, in provider order.
    pub synonyms: Vec<String>,
    /// Antonyms, in provider order.
    pub antonyms: Vec<String>,
}

/// Error from a definition provider.
#[derive(Debug, Error)]
#[error("lookup failed: {0}")]
pub struct LookupError(pub String);

/// External source of definitions, synonyms, and antonyms.
pub trait DefinitionProvider {
    /// Look up one word.
    fn lookup(&self, word: &str) -> Result<Lookup, LookupError>;
}

/// Build the dictionary entry for one word.
///
/// A lookup failure or a lookup with no definitions yields
/// [`Definition::Missing`]; synonyms and antonyms default to empty.
pub fn build_entry(word: &str, provider: &dyn DefinitionProvider) -> Entry {
    match provider.lookup(word) {
        Ok(found) => {
            let definition = if found.definitions.is_empty() {
                Definition::Missing
            } else {
                Definition::Present(found.definitions)
            };
            Entry::new(word, definition, found.synonyms, found.antonyms)
        }
        Err(_) => Entry::new(word, Definition::Missing, Vec::new(), Vec::new()),
    }
}

/// Sort and deduplicate a raw word list, then build one entry per word.
///
/// `progress` is called before each lookup with the 1-based position, the
/// total count, and the word.
pub fn build_entries(
    words: &[String],
    provider: &dyn DefinitionProvider,
    mut progress: impl FnMut(usize, usize, &str),
) -> Vec<Entry> {
    let unique: BTreeSet<&str> = words.iter().map(String::as_str).collect();
    let total = unique.len();
    unique
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            progress(i + 1, total, word);
            build_entry(word, provider)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProvider;

    impl DefinitionProvider for FakeProvider {
        fn lookup(&self, word: &str) -> Result<Lookup, LookupError> {
            match word {
                "fail" => Err(LookupError("service unavailable".into())),
                "blank" => Ok(Lookup::default()),
                _ => Ok(Lookup {
                    definitions: vec![format!("noun - a {word}")],
                    synonyms: vec![format!("{word}ish")],
                    antonyms: vec![],
                }),
            }
        }
    }

    #[test]
    fn build_entry_success() {
        let entry = build_entry("cat", &FakeProvider);
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.definition.lines(), ["noun - a cat"]);
        assert_eq!(entry.synonyms, ["catish"]);
    }

    #[test]
    fn build_entry_failure_is_missing_definition() {
        let entry = build_entry("fail", &FakeProvider);
        assert_eq!(entry.definition, Definition::Missing);
        assert!(entry.synonyms.is_empty());
        assert!(entry.antonyms.is_empty());
    }

    #[test]
    fn build_entry_empty_lookup_is_missing_definition() {
        let entry = build_entry("blank", &FakeProvider);
        assert_eq!(entry.definition, Definition::Missing);
    }

    #[test]
    fn build_entries_sorts_and_dedups() {
        let words = vec!["dog".to_string(), "cat".to_string(), "dog".to_string()];
        let entries = build_entries(&words, &FakeProvider, |_, _, _| {});
        let names: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(names, ["cat", "dog"]);
    }

    #[test]
    fn build_entries_reports_progress() {
        let words = vec!["b".to_string(), "a".to_string()];
        let mut seen = Vec::new();
        build_entries(&words, &FakeProvider, |i, total, word| {
            seen.push((i, total, word.to_string()));
        });
        assert_eq!(seen, [(1, 2, "a".to_string()), (2, 2, "b".to_string())]);
    }
}
