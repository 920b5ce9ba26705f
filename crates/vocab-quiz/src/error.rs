//! Error types for the flashcard engine.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while building or running flashcards.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A choice set was constructed with inconsistent parts.
    #[error("invalid choice set: {0}")]
    InvalidChoiceSet(String),

    /// Not enough distractor candidates to fill out a card.
    #[error("need {needed} distractor candidates, only {available} eligible words available")]
    InsufficientPool {
        /// Distractors required per card.
        needed: usize,
        /// Eligible words actually available.
        available: usize,
    },

    /// Not enough quizzable cards to deal the requested hand.
    #[error("need {needed} entries with definitions, only {available} available")]
    InsufficientEntries {
        /// Cards requested.
        needed: usize,
        /// Cards actually available.
        available: usize,
    },

    /// A pass was started over zero flashcards.
    #[error("cannot run a pass over an empty set of flashcards")]
    EmptyPass,

    /// The prompter could not produce a selection (e.g. end of input).
    #[error("prompt failed: {0}")]
    Prompt(String),
}
