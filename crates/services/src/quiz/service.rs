use chrono::{DateTime, Utc};

use prep_core::model::Question;

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── SUBMIT RESULT ─────────────────────────────────────────────────────────────
//

/// Outcome of submitting the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResult {
    pub correct: bool,
    pub completed: bool,
    pub score: usize,
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory run through a fixed, ordered question set.
///
/// Steps through the questions sequentially: one selection and one submission
/// per question, scoring each submission against the correct option. The
/// final submission marks the session complete with the cursor resting on the
/// last question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    score: usize,
    completed: bool,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
            completed: false,
            started_at,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question the cursor rests on.
    ///
    /// Always valid: the set is non-empty and the cursor never moves past the
    /// last question.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Number of questions already submitted.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        if self.completed {
            self.questions.len()
        } else {
            self.current
        }
    }

    /// Returns a summary of the current quiz progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.total_questions() - self.answered_count(),
            score: self.score,
            is_complete: self.completed,
        }
    }

    /// Record a selection for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyCompleted` after the final submission and
    /// `QuizError::OptionOutOfRange` for an index past the option list.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        let options = self.current_question().option_count();
        if index >= options {
            return Err(QuizError::OptionOutOfRange { index, options });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Submit the current selection, score it, and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyCompleted` once the session is complete and
    /// `QuizError::NoSelection` when nothing is selected; the session is left
    /// unchanged in both cases.
    pub fn submit(&mut self) -> Result<SubmitResult, QuizError> {
        if self.completed {
            return Err(QuizError::AlreadyCompleted);
        }
        let Some(selected) = self.selected else {
            return Err(QuizError::NoSelection);
        };

        let correct = self.current_question().is_correct(selected);
        if correct {
            self.score += 1;
        }

        if self.current + 1 == self.questions.len() {
            self.completed = true;
        } else {
            self.current += 1;
            self.selected = None;
        }

        Ok(SubmitResult {
            correct,
            completed: self.completed,
            score: self.score,
        })
    }

    /// Step back one question, clearing the selection.
    ///
    /// Clamped: a no-op on the first question and after completion.
    pub fn previous(&mut self) {
        if self.completed || self.current == 0 {
            return;
        }
        self.current -= 1;
        self.selected = None;
    }

    /// Restore the session to its initial state, keeping the question set.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.score = 0;
        self.completed = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
