//! Dictionary entries and the per-entry block codec.
//!
//! An entry block lists four fields under fixed header lines, one tab-indented
//! value line per element, and ends with a delimiter line:
//!
//! ```text
//! Word:
//! \tconcede
//! Definition:
//! \tverb - admit that something is true
//! Synonym:
//! \tyield
//! Antonym:
//! ------------------
//! ```
//!
//! A field with no values keeps its bare header, as `Antonym:` does above.
//!
//! Parsing is an explicit state machine over lines: headers must appear in
//! the fixed order word, definition, synonym, antonym, and any line that is
//! neither the expected header nor an indented value fails with
//! [`DictError::MalformedEntry`].

use crate::error::{DictError, DictResult};

/// Line that terminates every entry block in a dictionary file.
pub const ENTRY_DELIMITER: &str = "------------------";

/// Sentinel value line written when an entry has no definition.
pub const MISSING_DEFINITION: &str = "Missing definition";

/// Header lines, in the order they must appear inside a block.
const HEADERS: [&str; 4] = ["Word:", "Definition:", "Synonym:", "Antonym:"];

/// The definition field of an entry.
///
/// A lookup that found nothing is `Missing`, which serializes as the single
/// sentinel line `Missing definition`. That is a distinct state from
/// `Present(vec![])`, although the distinction does not survive a round trip
/// through the text format: an empty `Present` serializes as a bare header
/// and reparses as an empty `Present`, while a `Present` holding exactly the
/// sentinel text reparses as `Missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// The lookup found no definition for this word.
    Missing,
    /// One line per definition, formatted `<part of speech> - <text>`.
    Present(Vec<String>),
}

impl Definition {
    /// The definition lines; empty when missing.
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Missing => &[],
            Self::Present(lines) => lines,
        }
    }

    /// Whether this definition can back a flashcard (present and non-empty).
    pub fn is_usable(&self) -> bool {
        !self.lines().is_empty()
    }
}

/// One word's dictionary record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The word itself, non-empty and lower-cased.
    pub word: String,
    /// Definition lines, or the missing marker.
    pub definition: Definition,
    /// Synonyms, in lookup order.
    pub synonyms: Vec<String>,
    /// Antonyms, in lookup order.
    pub antonyms: Vec<String>,
}

impl Entry {
    /// Build an entry, normalizing the word to trimmed lower case.
    pub fn new(
        word: impl Into<String>,
        definition: Definition,
        synonyms: Vec<String>,
        antonyms: Vec<String>,
    ) -> Self {
        Self {
            word: word.into().trim().to_lowercase(),
            definition,
            synonyms,
            antonyms,
        }
    }

    /// Render the entry as a delimited text block, delimiter line included.
    ///
    /// Field values must not contain newlines, tabs, or the delimiter text;
    /// the codec does not validate this.
    pub fn to_block(&self) -> String {
        let mut out = String::new();
        out.push_str("Word:\n");
        push_value(&mut out, &self.word);
        out.push_str("Definition:\n");
        match &self.definition {
            Definition::Missing => push_value(&mut out, MISSING_DEFINITION),
            Definition::Present(lines) => {
                for line in lines {
                    push_value(&mut out, line);
                }
            }
        }
        out.push_str("Synonym:\n");
        for synonym in &self.synonyms {
            push_value(&mut out, synonym);
        }
        out.push_str("Antonym:\n");
        for antonym in &self.antonyms {
            push_value(&mut out, antonym);
        }
        out.push_str(ENTRY_DELIMITER);
        out.push('\n');
        out
    }

    /// Parse one entry block (the text between delimiter lines).
    pub fn parse_block(block: &str) -> DictResult<Self> {
        let mut fields: [Vec<String>; HEADERS.len()] = Default::default();
        let mut current: Option<usize> = None;

        for line in block.lines() {
            if let Some(value) = line.strip_prefix('\t') {
                match current {
                    Some(field) => fields[field].push(value.to_string()),
                    None => {
                        return Err(DictError::MalformedEntry(format!(
                            "value line before the {:?} header: {value:?}",
                            HEADERS[0]
                        )));
                    }
                }
            } else if line.trim().is_empty() {
                continue;
            } else {
                let next = current.map_or(0, |field| field + 1);
                match HEADERS.get(next) {
                    Some(&expected) if line == expected => current = Some(next),
                    Some(&expected) => {
                        return Err(DictError::MalformedEntry(format!(
                            "expected header {expected:?}, found {line:?}"
                        )));
                    }
                    None => {
                        return Err(DictError::MalformedEntry(format!(
                            "unexpected line after the last field: {line:?}"
                        )));
                    }
                }
            }
        }

        if current != Some(HEADERS.len() - 1) {
            let next = current.map_or(0, |field| field + 1);
            return Err(DictError::MalformedEntry(format!(
                "missing header {:?}",
                HEADERS[next]
            )));
        }

        let [word_lines, def_lines, synonyms, antonyms] = fields;
        let [word] = <[String; 1]>::try_from(word_lines).map_err(|lines| {
            DictError::MalformedEntry(format!(
                "the word field must hold exactly one value line, found {}",
                lines.len()
            ))
        })?;

        let definition = if def_lines.len() == 1 && def_lines[0] == MISSING_DEFINITION {
            Definition::Missing
        } else {
            Definition::Present(def_lines)
        };

        Ok(Self {
            word,
            definition,
            synonyms,
            antonyms,
        })
    }
}

fn push_value(out: &mut String, value: &str) {
    out.push('\t');
    out.push_str(value);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_entry() -> Entry {
        Entry::new(
            "concede",
            Definition::Present(vec![
                "verb - admit that something is true".to_string(),
                "verb - surrender or yield".to_string(),
            ]),
            vec!["yield".to_string(), "grant".to_string()],
            vec!["deny".to_string()],
        )
    }

    #[test]
    fn serialize_full_entry() {
        let block = sample_entry().to_block();
        assert_eq!(
            block,
            "Word:\n\tconcede\n\
             Definition:\n\tverb - admit that something is true\n\tverb - surrender or yield\n\
             Synonym:\n\tyield\n\tgrant\n\
             Antonym:\n\tdeny\n\
             ------------------\n"
        );
    }

    #[test]
    fn serialize_missing_definition_writes_sentinel() {
        let entry = Entry::new("zyzzyva", Definition::Missing, vec![], vec![]);
        assert_eq!(
            entry.to_block(),
            "Word:\n\tzyzzyva\nDefinition:\n\tMissing definition\nSynonym:\nAntonym:\n------------------\n"
        );
    }

    #[test]
    fn serialize_empty_sequences_keep_bare_headers() {
        let entry = Entry::new("cat", Definition::Present(vec!["noun - a cat".into()]), vec![], vec![]);
        let block = entry.to_block();
        assert!(block.contains("Synonym:\nAntonym:\n"));
    }

    #[test]
    fn new_normalizes_word() {
        let entry = Entry::new("  Concede ", Definition::Missing, vec![], vec![]);
        assert_eq!(entry.word, "concede");
    }

    #[test]
    fn parse_round_trips_full_entry() {
        let entry = sample_entry();
        let block = entry.to_block();
        let body = block.strip_suffix("------------------\n").unwrap();
        assert_eq!(Entry::parse_block(body).unwrap(), entry);
    }

    #[test]
    fn parse_missing_definition_sentinel() {
        let parsed =
            Entry::parse_block("Word:\n\tx\nDefinition:\n\tMissing definition\nSynonym:\nAntonym:\n")
                .unwrap();
        assert_eq!(parsed.word, "x");
        assert_eq!(parsed.definition, Definition::Missing);
        assert!(parsed.synonyms.is_empty());
        assert!(parsed.antonyms.is_empty());
    }

    #[test]
    fn empty_present_definition_reparses_as_empty_present() {
        // Bare "Definition:" header: empty-present survives, missing does not
        // collapse into it.
        let entry = Entry::new("cat", Definition::Present(vec![]), vec![], vec![]);
        let block = entry.to_block();
        let body = block.strip_suffix("------------------\n").unwrap();
        let parsed = Entry::parse_block(body).unwrap();
        assert_eq!(parsed.definition, Definition::Present(vec![]));
    }

    #[test]
    fn parse_rejects_missing_header() {
        let err = Entry::parse_block("Word:\n\tx\nDefinition:\nSynonym:\n").unwrap_err();
        assert!(err.to_string().contains("Antonym:"), "{err}");
    }

    #[test]
    fn parse_rejects_out_of_order_headers() {
        let err =
            Entry::parse_block("Word:\n\tx\nSynonym:\nDefinition:\nAntonym:\n").unwrap_err();
        assert!(err.to_string().contains("expected header"), "{err}");
    }

    #[test]
    fn parse_rejects_value_before_first_header() {
        let err = Entry::parse_block("\tx\nWord:\nDefinition:\nSynonym:\nAntonym:\n").unwrap_err();
        assert!(err.to_string().contains("value line before"), "{err}");
    }

    #[test]
    fn parse_rejects_multi_line_word() {
        let err =
            Entry::parse_block("Word:\n\tx\n\ty\nDefinition:\nSynonym:\nAntonym:\n").unwrap_err();
        assert!(err.to_string().contains("exactly one"), "{err}");
    }

    #[test]
    fn parse_rejects_unknown_line() {
        let err = Entry::parse_block("Word:\n\tx\nGibberish\nSynonym:\nAntonym:\n").unwrap_err();
        assert!(err.to_string().contains("expected header"), "{err}");
    }

    #[test]
    fn parse_skips_blank_lines() {
        let parsed = Entry::parse_block("\nWord:\n\tx\n\nDefinition:\n\ta - b\nSynonym:\nAntonym:\n")
            .unwrap();
        assert_eq!(parsed.word, "x");
        assert_eq!(parsed.definition.lines(), ["a - b"]);
    }

    proptest! {
        #[test]
        fn round_trip_law(
            word in "[a-z]{1,12}",
            defs in proptest::option::of(proptest::collection::vec("[a-z][a-z0-9 ,.'-]{0,38}[a-z0-9]", 1..4)),
            synonyms in proptest::collection::vec("[a-z]{1,12}", 0..4),
            antonyms in proptest::collection::vec("[a-z]{1,12}", 0..4),
        ) {
            let definition = match defs {
                None => Definition::Missing,
                Some(lines) => Definition::Present(lines),
            };
            let entry = Entry::new(word, definition, synonyms, antonyms);
            let block = entry.to_block();
            let body = block.strip_suffix("------------------\n").unwrap();
            prop_assert_eq!(Entry::parse_block(body).unwrap(), entry);
        }
    }
}
