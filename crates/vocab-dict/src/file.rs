//! Whole-file operations: word lists, dictionary files, merge-by-word.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::entry::{ENTRY_DELIMITER, Entry};
use crate::error::{DictError, DictResult};

/// How [`write`] treats an existing dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the file and write the given entries in order.
    Overwrite,
    /// Merge with the existing file by word (new entries win), sort the
    /// union by word, and rewrite the whole file. A nonexistent file merges
    /// into an empty base.
    Append,
}

/// Read a word list: one word per line, trimmed and lower-cased, blank lines
/// dropped. Input order is preserved; duplicates are kept.
pub fn read_words(path: &Path) -> DictResult<Vec<String>> {
    let text = read_file(path)?;
    Ok(text
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}

/// Parse a dictionary file into entries, preserving file order.
pub fn parse_file(path: &Path) -> DictResult<Vec<Entry>> {
    parse_str(&read_file(path)?)
}

/// Parse dictionary text: delimiter-terminated blocks, parsed in order.
///
/// Content after the final delimiter is discarded, so a file with no
/// delimiter at all parses as empty. The first malformed block aborts the
/// parse; there is no partial recovery.
pub fn parse_str(text: &str) -> DictResult<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut block = String::new();
    for line in text.lines() {
        if line == ENTRY_DELIMITER {
            entries.push(Entry::parse_block(&block)?);
            block.clear();
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    Ok(entries)
}

/// Merge two entry collections by word. Entries from `incoming` replace
/// `existing` entries sharing a word; the result is sorted by word and holds
/// one entry per distinct word.
pub fn merge_entries(existing: Vec<Entry>, incoming: Vec<Entry>) -> Vec<Entry> {
    let mut by_word: BTreeMap<String, Entry> = BTreeMap::new();
    for entry in existing.into_iter().chain(incoming) {
        by_word.insert(entry.word.clone(), entry);
    }
    by_word.into_values().collect()
}

/// Write entries to a dictionary file and return how many were written.
///
/// `Append` is merge-then-overwrite, not a byte append: the existing file is
/// parsed (empty base if absent), merged with `entries` per [`merge_entries`],
/// and the full result is rewritten.
pub fn write(entries: Vec<Entry>, path: &Path, mode: WriteMode) -> DictResult<usize> {
    let entries = match mode {
        WriteMode::Overwrite => entries,
        WriteMode::Append => {
            let existing = if path.exists() {
                parse_file(path)?
            } else {
                Vec::new()
            };
            merge_entries(existing, entries)
        }
    };

    let mut text = String::new();
    for entry in &entries {
        text.push_str(&entry.to_block());
    }
    fs::write(path, text).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(entries.len())
}

fn read_file(path: &Path) -> DictResult<String> {
    fs::read_to_string(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })
}
