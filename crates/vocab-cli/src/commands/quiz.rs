use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use vocab_dict::{Entry, WriteMode};
use vocab_lookup::DictApiClient;
use vocab_quiz::{PassReport, build_cards, run_pass, sample_cards};

use crate::prompt::{self, StdinPrompter};

pub fn run(
    path: &Path,
    from_words: bool,
    save: Option<&Path>,
    cards: Option<usize>,
    choices: usize,
    seed: Option<u64>,
) -> Result<(), String> {
    if choices < 2 {
        return Err("a flashcard needs at least 2 options".into());
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let entries = if from_words {
        build_from_words(path, save)?
    } else {
        super::load_entries(path)?
    };
    let pool: Vec<String> = entries.iter().map(|e| e.word.clone()).collect();

    let mut deck = build_cards(&entries, &pool, choices, &mut rng).map_err(|e| e.to_string())?;
    if let Some(count) = cards {
        deck = sample_cards(deck, count, &mut rng).map_err(|e| e.to_string())?;
    }
    if deck.is_empty() {
        return Err(format!(
            "no entries with definitions to quiz on in {}",
            path.display()
        ));
    }

    println!("  {}", "Flashcards".bold());
    println!("  ----------");

    let mut prompter = StdinPrompter;
    loop {
        let report = run_pass(deck, &mut prompter, &mut rng).map_err(|e| e.to_string())?;
        print_summary(&report);

        if report.mistakes.is_empty() {
            break;
        }
        if !prompt::confirm("Would you like to play again with the words you missed?")? {
            break;
        }
        deck = report.mistakes;
    }
    Ok(())
}

fn print_summary(report: &PassReport) {
    let addendum = if report.accuracy > 0.5 {
        "Good job!"
    } else {
        "You have some work to do!"
    };
    println!(
        "  You got {:.2}% right. {addendum}\n",
        report.accuracy * 100.0
    );
}

fn build_from_words(path: &Path, save: Option<&Path>) -> Result<Vec<Entry>, String> {
    let words = vocab_dict::read_words(path).map_err(|e| e.to_string())?;
    let client = DictApiClient::new().map_err(|e| e.to_string())?;

    println!("  {} vocab...", "Loading".bold());
    let entries = vocab_dict::build_entries(&words, &client, |i, total, word| {
        println!("  [{i}/{total}] {word}");
    });

    if let Some(dest) = save {
        let written = vocab_dict::write(entries.clone(), dest, WriteMode::Overwrite)
            .map_err(|e| e.to_string())?;
        println!("  {} {written} entries to {}", "Saved".bold(), dest.display());
    }
    Ok(entries)
}
