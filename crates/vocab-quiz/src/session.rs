//! Quiz passes: the presentation seam, mistake collection, accuracy.
//!
//! One pass walks a deck of cards in order, reshuffling each card before it
//! is shown. The retry loop — playing the mistakes again — belongs to the
//! caller; a pass has no state beyond its report.

use rand::rngs::StdRng;
use rand::seq::index;

use crate::choice::ChoiceSet;
use crate::error::{QuizError, QuizResult};

/// Presentation seam for a quiz pass.
///
/// The implementation owns all user interaction, including its own
/// invalid-input retry loop: `choose` must only ever return an index that is
/// valid for the presented card.
pub trait Prompter {
    /// Present `card` (the `position`-th of `total`) and return the selected
    /// option index, already validated against the option count.
    fn choose(&mut self, card: &ChoiceSet, position: usize, total: usize) -> QuizResult<usize>;

    /// Report the outcome of the last selection; `answer` is the correct
    /// option. The default does nothing.
    fn report(&mut self, correct: bool, answer: &str) {
        let _ = (correct, answer);
    }
}

/// The outcome of one pass over a deck of flashcards.
#[derive(Debug)]
pub struct PassReport {
    /// Cards answered incorrectly, in presentation order.
    pub mistakes: Vec<ChoiceSet>,
    /// Number of cards presented.
    pub total: usize,
    /// Fraction of cards answered correctly.
    pub accuracy: f64,
}

/// Run one pass: reshuffle each card, obtain a selection through the
/// prompter, record it, and collect mistakes. Fails with
/// [`QuizError::EmptyPass`] on an empty deck.
pub fn run_pass(
    cards: Vec<ChoiceSet>,
    prompter: &mut dyn Prompter,
    rng: &mut StdRng,
) -> QuizResult<PassReport> {
    if cards.is_empty() {
        return Err(QuizError::EmptyPass);
    }

    let total = cards.len();
    let mut mistakes = Vec::new();
    for (i, mut card) in cards.into_iter().enumerate() {
        card.reshuffle(rng);
        let selection = prompter.choose(&card, i + 1, total)?;
        card.record_selection(selection);
        let correct = card.is_correct();
        prompter.report(correct, card.correct_answer());
        if !correct {
            mistakes.push(card);
        }
    }

    let accuracy = (total - mistakes.len()) as f64 / total as f64;
    Ok(PassReport {
        mistakes,
        total,
        accuracy,
    })
}

/// Deal `count` cards from the deck, sampled without replacement.
pub fn sample_cards(
    cards: Vec<ChoiceSet>,
    count: usize,
    rng: &mut StdRng,
) -> QuizResult<Vec<ChoiceSet>> {
    if cards.len() < count {
        return Err(QuizError::InsufficientEntries {
            needed: count,
            available: cards.len(),
        });
    }
    let mut cards = cards;
    let mut picked = index::sample(rng, cards.len(), count).into_vec();
    // Remove from the back so earlier indices stay valid.
    picked.sort_unstable_by_key(|&i| std::cmp::Reverse(i));
    Ok(picked.into_iter().map(|i| cards.swap_remove(i)).collect())
}
