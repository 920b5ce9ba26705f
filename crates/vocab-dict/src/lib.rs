//! Dictionary data model and the delimited text codec for vocab.
//!
//! A dictionary file is a sequence of entry blocks, each terminated by a
//! delimiter line. This crate owns the block format (parse and serialize),
//! the whole-file operations (word lists, merge-by-word, overwrite vs.
//! append), and the [`DefinitionProvider`] seam through which entries are
//! enriched — it never performs a lookup itself.

/// Entry types and the per-entry block codec.
pub mod entry;
/// Error types used throughout the crate.
pub mod error;
/// Whole-file codec: word lists, dictionary files, merge-by-word.
pub mod file;
/// The external definition-lookup seam and entry building.
pub mod lookup;

/// Re-export entry types and format constants.
pub use entry::{Definition, ENTRY_DELIMITER, Entry, MISSING_DEFINITION};
/// Re-export error types.
pub use error::{DictError, DictResult};
/// Re-export file operations.
pub use file::{WriteMode, merge_entries, parse_file, parse_str, read_words, write};
/// Re-export the lookup seam.
pub use lookup::{DefinitionProvider, Lookup, LookupError, build_entries, build_entry};
