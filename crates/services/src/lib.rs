#![forbid(unsafe_code)]

pub mod assistant;
pub mod error;
pub mod leaderboard;
pub mod navigation;
pub mod quiz;
pub mod session;

pub use prep_core::Clock;

pub use assistant::{AssistantResponder, CannedAssistant, ChatService, GREETING};
pub use error::{ChatError, NavigationError, QuizError};
pub use leaderboard::{LeaderboardEntry, LeaderboardProvider, StaticLeaderboard};
pub use navigation::Navigator;
pub use quiz::{QuizProgress, QuizSession, SubmitResult, quiz_of_the_day};
pub use session::{SessionController, SessionHandle, demo_profile};
