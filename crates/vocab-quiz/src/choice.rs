//! Flashcard state machine and card construction.
//!
//! A card moves between two states: unanswered and answered. Reshuffling
//! permutes the options, re-derives which index is correct, and discards any
//! recorded selection; which *string* is the correct answer never changes.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom, index};

use vocab_dict::Entry;

use crate::error::{QuizError, QuizResult};

/// Number of options a flashcard presents by default.
pub const DEFAULT_CHOICES: usize = 4;

/// One flashcard: a question, its options, and the tracked correct answer.
#[derive(Debug, Clone)]
pub struct ChoiceSet {
    question: String,
    options: Vec<String>,
    correct_index: usize,
    selection: Option<usize>,
}

impl ChoiceSet {
    /// Build a choice set. Fails with [`QuizError::InvalidChoiceSet`] when
    /// `correct_index` does not address an option or the options are not
    /// distinct.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> QuizResult<Self> {
        if correct_index >= options.len() {
            return Err(QuizError::InvalidChoiceSet(format!(
                "correct index {correct_index} out of range for {} options",
                options.len()
            )));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(QuizError::InvalidChoiceSet(format!(
                    "duplicate option {option:?}"
                )));
            }
        }
        Ok(Self {
            question: question.into(),
            options,
            correct_index,
            selection: None,
        })
    }

    /// The question this card asks.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The options, in presentation order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option in the current order.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The correct answer string.
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Whether a selection has been recorded since the last reshuffle.
    pub fn is_answered(&self) -> bool {
        self.selection.is_some()
    }

    /// Permute the options uniformly at random and re-derive the correct
    /// index. The identity permutation is a legal outcome. Any recorded
    /// selection is discarded.
    pub fn reshuffle(&mut self, rng: &mut StdRng) {
        let mut order: Vec<usize> = (0..self.options.len()).collect();
        order.shuffle(rng);

        let mut shuffled = Vec::with_capacity(order.len());
        let mut correct_index = self.correct_index;
        for (new_pos, &old_pos) in order.iter().enumerate() {
            if old_pos == self.correct_index {
                correct_index = new_pos;
            }
            shuffled.push(std::mem::take(&mut self.options[old_pos]));
        }
        self.options = shuffled;
        self.correct_index = correct_index;
        self.selection = None;
    }

    /// Record the user's selection, moving the card to the answered state.
    ///
    /// The caller must have validated `index` against `options().len()`;
    /// out-of-range input is an input-validation failure upstream, not a
    /// card error.
    pub fn record_selection(&mut self, index: usize) {
        debug_assert!(index < self.options.len());
        self.selection = Some(index);
    }

    /// Whether the recorded selection is the correct answer. Returns `false`
    /// while unanswered.
    pub fn is_correct(&self) -> bool {
        self.selection == Some(self.correct_index)
    }
}

/// Sample `count` distractor words without replacement from `pool`, skipping
/// every occurrence of `answer`. The pool is expected to be deduplicated.
pub fn sample_distractors(
    pool: &[String],
    answer: &str,
    count: usize,
    rng: &mut StdRng,
) -> QuizResult<Vec<String>> {
    let eligible: Vec<&String> = pool.iter().filter(|word| word.as_str() != answer).collect();
    if eligible.len() < count {
        return Err(QuizError::InsufficientPool {
            needed: count,
            available: eligible.len(),
        });
    }
    Ok(index::sample(rng, eligible.len(), count)
        .iter()
        .map(|i| eligible[i].clone())
        .collect())
}

/// Build the flashcard for one entry.
///
/// The question is a randomly chosen definition line with its
/// `<part of speech> - ` prefix stripped; the options are the entry's word
/// plus `choices - 1` distractors from `pool`. The entry must have a usable
/// definition.
pub fn card_for_entry(
    entry: &Entry,
    pool: &[String],
    choices: usize,
    rng: &mut StdRng,
) -> QuizResult<ChoiceSet> {
    if choices < 2 {
        return Err(QuizError::InvalidChoiceSet(format!(
            "a card needs at least 2 options, requested {choices}"
        )));
    }
    let line = entry.definition.lines().choose(rng).ok_or_else(|| {
        QuizError::InvalidChoiceSet(format!(
            "entry \"{}\" has no definition to ask about",
            entry.word
        ))
    })?;
    let question = strip_pos_prefix(line).to_string();

    let mut options = vec![entry.word.clone()];
    options.extend(sample_distractors(pool, &entry.word, choices - 1, rng)?);
    ChoiceSet::new(question, options, 0)
}

/// Build cards for every quizzable entry. Entries whose definition is
/// missing or empty are filtered out before card construction.
pub fn build_cards(
    entries: &[Entry],
    pool: &[String],
    choices: usize,
    rng: &mut StdRng,
) -> QuizResult<Vec<ChoiceSet>> {
    entries
        .iter()
        .filter(|entry| entry.definition.is_usable())
        .map(|entry| card_for_entry(entry, pool, choices, rng))
        .collect()
}

/// Strip the `<part of speech> - ` prefix from a definition line.
fn strip_pos_prefix(line: &str) -> &str {
    line.split_once(" - ").map_or(line, |(_, text)| text)
}
