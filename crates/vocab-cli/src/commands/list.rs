use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let entries = super::load_entries(path)?;

    if entries.is_empty() {
        println!("  Empty dictionary.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Word", "Definition", "Synonyms", "Antonyms"]);

    for entry in &entries {
        let definition = match entry.definition.lines() {
            [] => "—".to_string(),
            [line] => line.clone(),
            [line, rest @ ..] => format!("{line} (+{} more)", rest.len()),
        };
        table.add_row(vec![
            entry.word.clone(),
            definition,
            entry.synonyms.join(", "),
            entry.antonyms.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", entries.len());

    Ok(())
}
