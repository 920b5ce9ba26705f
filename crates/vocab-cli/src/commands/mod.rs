pub mod build;
pub mod list;
pub mod quiz;

use std::path::Path;

use vocab_dict::Entry;

/// Parse a dictionary file, mapping codec errors to CLI messages.
fn load_entries(path: &Path) -> Result<Vec<Entry>, String> {
    vocab_dict::parse_file(path).map_err(|e| e.to_string())
}
