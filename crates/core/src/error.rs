use thiserror::Error;

use crate::model::ProfileError;
use crate::model::QuestionError;
use crate::model::ViewError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    View(#[from] ViewError),
}
