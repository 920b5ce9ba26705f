use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;

use vocab_dict::WriteMode;
use vocab_lookup::DictApiClient;

pub fn run(source: &Path, dest: Option<&Path>, append: bool) -> Result<(), String> {
    let dest = dest.unwrap_or(source);

    let mut words = vocab_dict::read_words(source).map_err(|e| e.to_string())?;
    if words.is_empty() {
        return Err(format!("no words found in {}", source.display()));
    }

    // When appending, skip words the dictionary already has so they are not
    // looked up again.
    if append && dest.exists() {
        let existing = vocab_dict::parse_file(dest).map_err(|e| e.to_string())?;
        let known: BTreeSet<&str> = existing.iter().map(|e| e.word.as_str()).collect();
        words.retain(|word| !known.contains(word.as_str()));
        if words.is_empty() {
            println!("  Nothing new to add to {}.", dest.display());
            return Ok(());
        }
    }

    let client = DictApiClient::new().map_err(|e| e.to_string())?;

    println!("  {} vocab...", "Loading".bold());
    let entries = vocab_dict::build_entries(&words, &client, |i, total, word| {
        println!("  [{i}/{total}] {word}");
    });
    let missing = entries
        .iter()
        .filter(|e| !e.definition.is_usable())
        .count();

    let mode = if append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };
    println!("  {} dict...", "Writing".bold());
    let written = vocab_dict::write(entries, dest, mode).map_err(|e| e.to_string())?;

    println!();
    println!("  {} {written} entries to {}", "Wrote".bold(), dest.display());
    if missing > 0 {
        println!("  {missing} word(s) had no definition.");
    }
    Ok(())
}
