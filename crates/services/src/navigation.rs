use prep_core::model::View;

use crate::error::NavigationError;

/// Tracks which screen the presentation layer should be rendering.
///
/// `Login` marks the unauthenticated region. Every other view sits in a flat
/// graph behind the authentication boundary: once authenticated, any of them
/// can be reached from any other without preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: View::Login,
        }
    }

    #[must_use]
    pub fn current(&self) -> View {
        self.current
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current != View::Login
    }

    /// Cross the authentication boundary onto the dashboard.
    ///
    /// Idempotent while already authenticated: the current view is kept.
    pub fn authenticate(&mut self) {
        if self.current == View::Login {
            self.current = View::Dashboard;
        }
    }

    /// Switch to another authenticated view.
    ///
    /// Self-transitions are accepted and change nothing.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::Unauthenticated` before login and
    /// `NavigationError::LogoutRequired` when `view` is `View::Login`.
    pub fn navigate_to(&mut self, view: View) -> Result<(), NavigationError> {
        if !self.is_authenticated() {
            return Err(NavigationError::Unauthenticated);
        }
        if view == View::Login {
            return Err(NavigationError::LogoutRequired);
        }
        self.current = view;
        Ok(())
    }

    /// Resolve a view identifier, then switch to it.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidView` for unknown identifiers, plus
    /// the `navigate_to` errors.
    pub fn navigate_to_named(&mut self, name: &str) -> Result<View, NavigationError> {
        let view: View = name.parse()?;
        self.navigate_to(view)?;
        Ok(view)
    }

    /// Drop back to the login screen.
    pub fn logout(&mut self) {
        self.current = View::Login;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::ViewError;

    #[test]
    fn starts_unauthenticated_at_login() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), View::Login);
        assert!(!nav.is_authenticated());
    }

    #[test]
    fn navigation_requires_authentication() {
        let mut nav = Navigator::new();
        let err = nav.navigate_to(View::Dashboard).unwrap_err();
        assert_eq!(err, NavigationError::Unauthenticated);
        assert_eq!(nav.current(), View::Login);
    }

    #[test]
    fn authenticate_lands_on_dashboard() {
        let mut nav = Navigator::new();
        nav.authenticate();
        assert_eq!(nav.current(), View::Dashboard);

        // A second authenticate keeps the current view.
        nav.navigate_to(View::Quiz).unwrap();
        nav.authenticate();
        assert_eq!(nav.current(), View::Quiz);
    }

    #[test]
    fn current_view_reflects_last_navigation() {
        let mut nav = Navigator::new();
        nav.authenticate();

        for view in [View::Quiz, View::Assistant, View::Profile, View::Leaderboard] {
            nav.navigate_to(view).unwrap();
            assert_eq!(nav.current(), view);
        }

        // Self-transition is a no-op, not an error.
        nav.navigate_to(View::Leaderboard).unwrap();
        assert_eq!(nav.current(), View::Leaderboard);
    }

    #[test]
    fn login_is_not_a_destination() {
        let mut nav = Navigator::new();
        nav.authenticate();
        let err = nav.navigate_to(View::Login).unwrap_err();
        assert_eq!(err, NavigationError::LogoutRequired);
        assert_eq!(nav.current(), View::Dashboard);
    }

    #[test]
    fn named_navigation_rejects_unknown_identifiers() {
        let mut nav = Navigator::new();
        nav.authenticate();

        assert_eq!(nav.navigate_to_named("profile").unwrap(), View::Profile);

        let err = nav.navigate_to_named("forum").unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidView(ViewError::Unknown("forum".to_string()))
        );
        assert_eq!(nav.current(), View::Profile);
    }

    #[test]
    fn logout_returns_to_login() {
        let mut nav = Navigator::new();
        nav.authenticate();
        nav.navigate_to(View::Assistant).unwrap();
        nav.logout();
        assert_eq!(nav.current(), View::Login);
        assert!(!nav.is_authenticated());
    }
}
