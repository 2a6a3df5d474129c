use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewError {
    #[error("unknown view identifier: {0}")]
    Unknown(String),
}

/// One named screen the application can present.
///
/// `Login` is the only view outside the authentication boundary; every other
/// view requires an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Login,
    Dashboard,
    Quiz,
    Assistant,
    Profile,
    Leaderboard,
}

impl View {
    /// Canonical lowercase identifier for this view.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Dashboard => "dashboard",
            View::Quiz => "quiz",
            View::Assistant => "assistant",
            View::Profile => "profile",
            View::Leaderboard => "leaderboard",
        }
    }

    /// Returns true for views that are only reachable after login.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Login)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(View::Login),
            "dashboard" => Ok(View::Dashboard),
            "quiz" => Ok(View::Quiz),
            "assistant" => Ok(View::Assistant),
            "profile" => Ok(View::Profile),
            "leaderboard" => Ok(View::Leaderboard),
            other => Err(ViewError::Unknown(other.to_string())),
        }
    }
}
