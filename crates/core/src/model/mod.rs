mod chat;
mod ids;
mod profile;
mod question;
mod view;

pub use chat::{ChatMessage, Sender};
pub use ids::SessionId;
pub use profile::{DisplayName, Profile, ProfileError};
pub use question::{Question, QuestionError};
pub use view::{View, ViewError};
