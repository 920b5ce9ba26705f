//! Interactive prompting over stdin.
//!
//! The prompt loop is where invalid input is recovered: it keeps asking
//! until the validator accepts, so everything downstream only ever sees
//! validated values.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use vocab_quiz::{ChoiceSet, Prompter, QuizError, QuizResult};

/// Ask `question` until `validate` accepts the trimmed input; returns the
/// accepted line. End of input is an error, not a retry.
pub fn ask(question: &str, validate: impl Fn(&str) -> bool) -> Result<String, String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!("{question}");
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Err("unexpected end of input".into()),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if validate(input) {
            return Ok(input.to_string());
        }
        println!("{}\n", "Invalid option, try again".yellow());
    }
}

/// Yes/no confirmation: `1` for yes, `2` for no.
pub fn confirm(question: &str) -> Result<bool, String> {
    let answer = ask(&format!("{question}\n1:\tYes\n2:\tNo"), |input| {
        matches!(input, "1" | "2")
    })?;
    Ok(answer == "1")
}

/// Presents flashcards on stdout and reads answers from stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn choose(&mut self, card: &ChoiceSet, position: usize, total: usize) -> QuizResult<usize> {
        let mut text = format!(
            "[{position} / {total}]\nDefinition: {}\nSelect an answer:",
            card.question()
        );
        for (i, option) in card.options().iter().enumerate() {
            text.push_str(&format!("\n{}:\t{option}", i + 1));
        }

        let count = card.options().len();
        let answer = ask(&text, |input| {
            input
                .parse::<usize>()
                .is_ok_and(|n| (1..=count).contains(&n))
        })
        .map_err(QuizError::Prompt)?;

        let selected: usize = answer
            .parse()
            .map_err(|_| QuizError::Prompt("selection was not a number".into()))?;
        Ok(selected - 1)
    }

    fn report(&mut self, correct: bool, answer: &str) {
        if correct {
            println!("{}\n", "Correct!".green());
        } else {
            let message = format!("Incorrect, the correct answer was '{answer}'");
            println!("{}\n", message.red());
        }
    }
}
