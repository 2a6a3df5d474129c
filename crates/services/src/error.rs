//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::ViewError;

/// Errors emitted by the quiz engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    Empty,

    #[error("no quiz has been started")]
    NotStarted,

    #[error("no option selected for the current question")]
    NoSelection,

    #[error("option {index} is out of range for {options} options")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("quiz already completed")]
    AlreadyCompleted,
}

/// Errors emitted by the chat transcript service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatError {
    #[error("message text cannot be empty")]
    EmptyMessage,
}

/// Errors emitted by the navigation state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("the login view is only reachable through logout")]
    LogoutRequired,

    #[error(transparent)]
    InvalidView(#[from] ViewError),
}
