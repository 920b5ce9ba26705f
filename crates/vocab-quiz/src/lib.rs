//! Multiple-choice flashcards for vocab.
//!
//! A [`ChoiceSet`] is one flashcard: a question, its options, and the index
//! of the correct answer, tracked across reshuffles. A pass over a deck of
//! cards is driven by [`run_pass`], which talks to the user through the
//! [`Prompter`] seam and reports mistakes and accuracy. Every random
//! operation takes `&mut StdRng`, so callers control seeding.

/// Flashcard state machine and card construction.
pub mod choice;
/// Error types used throughout the crate.
pub mod error;
/// Quiz passes: the presentation seam, mistake collection, accuracy.
pub mod session;

/// Re-export flashcard types.
pub use choice::{ChoiceSet, DEFAULT_CHOICES, build_cards, card_for_entry, sample_distractors};
/// Re-export error types.
pub use error::{QuizError, QuizResult};
/// Re-export pass types.
pub use session::{PassReport, Prompter, run_pass, sample_cards};
