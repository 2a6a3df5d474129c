use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("a question needs at least one option")]
    NoOptions,

    #[error("correct option {index} is out of range for {options} options")]
    CorrectOutOfRange { index: usize, options: usize },
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` for an empty option list and
    /// `QuestionError::CorrectOutOfRange` if `correct` does not index it.
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct,
                options: options.len(),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Returns true if `choice` names the correct option.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_requires_options() {
        let err = Question::new("Q", Vec::<String>::new(), 0).unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn correct_index_must_be_in_range() {
        let err = Question::new("Q", ["a", "b"], 2).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOutOfRange {
                index: 2,
                options: 2
            }
        );
    }

    #[test]
    fn scores_only_the_correct_option() {
        let question = Question::new("Q", ["a", "b", "c"], 1).unwrap();
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert!(!question.is_correct(2));
    }
}
