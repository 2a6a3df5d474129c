use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use prep_core::Clock;
use prep_core::model::{
    ChatMessage, DisplayName, Profile, ProfileError, Question, SessionId, View,
};

use crate::assistant::{AssistantResponder, CannedAssistant, ChatService};
use crate::error::{ChatError, NavigationError, QuizError};
use crate::leaderboard::{LeaderboardEntry, LeaderboardProvider, StaticLeaderboard};
use crate::navigation::Navigator;
use crate::quiz::{QuizSession, SubmitResult, quiz_of_the_day};

//
// ─── SESSION HANDLE ────────────────────────────────────────────────────────────
//

/// Identity of one authenticated session, minted at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    id: SessionId,
    started_at: DateTime<Utc>,
}

impl SessionHandle {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

//
// ─── SESSION CONTROLLER ────────────────────────────────────────────────────────
//

/// Root of the session core.
///
/// Owns the navigator, profile, chat transcript, and the quiz session (when
/// one is running), and exposes the synchronous operation surface the
/// presentation layer drives. No sub-model holds a reference back here.
pub struct SessionController {
    clock: Clock,
    navigator: Navigator,
    profile: Profile,
    chat: ChatService,
    quiz: Option<QuizSession>,
    leaderboard: Arc<dyn LeaderboardProvider>,
    session: Option<SessionHandle>,
}

impl SessionController {
    /// Build a controller with the stock stubs and the seeded demo profile.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::with_profile(clock, demo_profile())
    }

    /// Build a controller around a specific profile.
    #[must_use]
    pub fn with_profile(clock: Clock, profile: Profile) -> Self {
        Self {
            clock,
            navigator: Navigator::new(),
            profile,
            chat: ChatService::with_greeting(clock, Arc::new(CannedAssistant)),
            quiz: None,
            leaderboard: Arc::new(StaticLeaderboard),
            session: None,
        }
    }

    /// Swap the assistant responder.
    ///
    /// Re-seeds the transcript, so wire this up before the first `send`.
    #[must_use]
    pub fn with_responder(mut self, responder: Arc<dyn AssistantResponder>) -> Self {
        self.chat = ChatService::with_greeting(self.clock, responder);
        self
    }

    /// Swap the leaderboard provider.
    #[must_use]
    pub fn with_leaderboard(mut self, leaderboard: Arc<dyn LeaderboardProvider>) -> Self {
        self.leaderboard = leaderboard;
        self
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────
    //

    /// Enter the authenticated region.
    ///
    /// Always succeeds; credential validation is out of scope here. A second
    /// call while authenticated changes nothing and keeps the session handle.
    pub fn login(&mut self) {
        if self.session.is_none() {
            self.session = Some(SessionHandle::new(self.clock.now()));
        }
        self.navigator.authenticate();
    }

    /// Leave the authenticated region.
    ///
    /// Discards the quiz session and the session handle. Profile and chat
    /// stay in memory for this controller's lifetime; a fresh session starts
    /// by constructing a fresh controller.
    pub fn logout(&mut self) {
        self.navigator.logout();
        self.quiz = None;
        self.session = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.navigator.is_authenticated()
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    /// Switch views.
    ///
    /// Leaving the quiz view discards the quiz session; the chat transcript
    /// is never touched by navigation.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::Unauthenticated` before login and
    /// `NavigationError::LogoutRequired` when `view` is `View::Login`.
    pub fn navigate_to(&mut self, view: View) -> Result<(), NavigationError> {
        let leaving_quiz = self.navigator.current() == View::Quiz && view != View::Quiz;
        self.navigator.navigate_to(view)?;
        if leaving_quiz {
            self.quiz = None;
        }
        Ok(())
    }

    /// Resolve a view identifier and switch to it.
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

    //
    // ─── QUIZ ──────────────────────────────────────────────────────────────
    //

    /// Start a quiz over the given questions, replacing any quiz in progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty question list; the previous
    /// quiz session, if any, is kept in that case.
    pub fn start_quiz(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        self.quiz = Some(QuizSession::new(questions, self.clock.now())?);
        Ok(())
    }

    /// Start the canned quiz-of-the-day set.
    ///
    /// # Errors
    ///
    /// Propagates `start_quiz` errors.
    pub fn start_quiz_of_the_day(&mut self) -> Result<(), QuizError> {
        self.start_quiz(quiz_of_the_day())
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    fn quiz_mut(&mut self) -> Result<&mut QuizSession, QuizError> {
        self.quiz.as_mut().ok_or(QuizError::NotStarted)
    }

    /// Record a selection on the active quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` without an active quiz, plus the
    /// `QuizSession::select_option` errors.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        self.quiz_mut()?.select_option(index)
    }

    /// Submit the current selection on the active quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` without an active quiz, plus the
    /// `QuizSession::submit` errors.
    pub fn submit(&mut self) -> Result<SubmitResult, QuizError> {
        self.quiz_mut()?.submit()
    }

    /// Step back one question; clamped like `QuizSession::previous`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` without an active quiz.
    pub fn previous_question(&mut self) -> Result<(), QuizError> {
        self.quiz_mut()?.previous();
        Ok(())
    }

    /// Restart the active quiz from its first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` without an active quiz.
    pub fn reset_quiz(&mut self) -> Result<(), QuizError> {
        self.quiz_mut()?.reset();
        Ok(())
    }

    //
    // ─── CHAT ──────────────────────────────────────────────────────────────
    //

    /// Send a user message and receive the assistant reply.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` for whitespace-only text.
    pub fn send_message(&mut self, text: &str) -> Result<(), ChatError> {
        self.chat.send(text)
    }

    /// Ordered chat transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    //
    // ─── PROFILE ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace the profile display name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` for a name that trims to nothing.
    pub fn update_name(&mut self, new_name: &str) -> Result<(), ProfileError> {
        self.profile.update_name(new_name)
    }

    /// Add earned XP to the profile.
    ///
    /// Nothing calls this on quiz completion; wiring a completed
    /// `SubmitResult` into an award is left to the embedding.
    pub fn award_xp(&mut self, amount: u32) {
        self.profile.award_xp(amount);
    }

    /// Insert or overwrite a skill completion percentage.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::SkillOutOfRange` for percentages above 100.
    pub fn update_skill(&mut self, name: &str, percentage: u8) -> Result<(), ProfileError> {
        self.profile.update_skill(name, percentage)
    }

    /// Record activity for streak upkeep, stamped by the controller clock.
    pub fn record_activity(&mut self) {
        self.profile.record_activity(self.clock.now());
    }

    //
    // ─── LEADERBOARD ───────────────────────────────────────────────────────
    //

    /// Global standings from the provider.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.standings()
    }

    /// Dashboard podium with the live profile in last place shown.
    #[must_use]
    pub fn dashboard_podium(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.podium(&self.profile)
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("current_view", &self.navigator.current())
            .field("session", &self.session)
            .field("quiz_active", &self.quiz.is_some())
            .field("transcript_len", &self.chat.messages().len())
            .finish_non_exhaustive()
    }
}

/// Seed profile shown until a real account system exists.
///
/// # Panics
///
/// Panics if the seed data is internally inconsistent, which would be a
/// programming error in this module.
#[must_use]
pub fn demo_profile() -> Profile {
    let name = DisplayName::new("Rinki Sharma").expect("seed name should be valid");
    Profile::from_parts(
        name,
        "rinki@example.com",
        420,
        5,
        &[("Python", 80), ("DSA", 55), ("Aptitude", 70)],
    )
    .expect("seed skills should be valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::time::fixed_clock;

    fn build_controller() -> SessionController {
        SessionController::new(fixed_clock())
    }

    #[test]
    fn login_enters_the_dashboard_and_mints_a_session() {
        let mut controller = build_controller();
        assert_eq!(controller.current_view(), View::Login);
        assert!(controller.session().is_none());

        controller.login();
        assert_eq!(controller.current_view(), View::Dashboard);
        assert!(controller.is_authenticated());
        assert!(controller.session().is_some());
    }

    #[test]
    fn second_login_keeps_the_session_handle() {
        let mut controller = build_controller();
        controller.login();
        let handle = *controller.session().unwrap();

        controller.navigate_to(View::Profile).unwrap();
        controller.login();
        assert_eq!(controller.session(), Some(&handle));
        assert_eq!(controller.current_view(), View::Profile);
    }

    #[test]
    fn navigation_before_login_is_rejected() {
        let mut controller = build_controller();
        let err = controller.navigate_to(View::Dashboard).unwrap_err();
        assert_eq!(err, NavigationError::Unauthenticated);
    }

    #[test]
    fn quiz_operations_require_a_started_quiz() {
        let mut controller = build_controller();
        controller.login();

        assert_eq!(controller.select_option(0).unwrap_err(), QuizError::NotStarted);
        assert_eq!(controller.submit().unwrap_err(), QuizError::NotStarted);
        assert_eq!(controller.reset_quiz().unwrap_err(), QuizError::NotStarted);
    }

    #[test]
    fn leaving_the_quiz_view_discards_the_quiz() {
        let mut controller = build_controller();
        controller.login();
        controller.navigate_to(View::Quiz).unwrap();
        controller.start_quiz_of_the_day().unwrap();
        assert!(controller.quiz().is_some());

        // Self-transition keeps the session alive.
        controller.navigate_to(View::Quiz).unwrap();
        assert!(controller.quiz().is_some());

        controller.navigate_to(View::Dashboard).unwrap();
        assert!(controller.quiz().is_none());
    }

    #[test]
    fn failed_start_keeps_the_running_quiz() {
        let mut controller = build_controller();
        controller.login();
        controller.start_quiz_of_the_day().unwrap();

        let err = controller.start_quiz(Vec::new()).unwrap_err();
        assert_eq!(err, QuizError::Empty);
        assert!(controller.quiz().is_some());
    }

    #[test]
    fn logout_resets_navigation_and_quiz_but_not_chat() {
        let mut controller = build_controller();
        controller.login();
        controller.navigate_to(View::Quiz).unwrap();
        controller.start_quiz_of_the_day().unwrap();
        controller.send_message("explain BFS").unwrap();
        let transcript_len = controller.transcript().len();

        controller.logout();
        assert_eq!(controller.current_view(), View::Login);
        assert!(controller.quiz().is_none());
        assert!(controller.session().is_none());
        assert_eq!(controller.transcript().len(), transcript_len);
        assert_eq!(controller.profile().name().as_str(), "Rinki Sharma");
    }

    #[test]
    fn profile_operations_flow_through_the_controller() {
        let mut controller = build_controller();
        controller.login();

        assert_eq!(
            controller.update_skill("Python", 150).unwrap_err(),
            ProfileError::SkillOutOfRange { value: 150 }
        );
        controller.update_skill("Python", 85).unwrap();
        assert_eq!(controller.profile().skill("Python"), Some(85));

        controller.award_xp(50);
        assert_eq!(controller.profile().xp(), 470);

        controller.record_activity();
        assert_eq!(controller.profile().streak(), 1);
    }

    #[test]
    fn podium_tracks_the_live_profile() {
        let mut controller = build_controller();
        controller.login();
        controller.award_xp(80);

        let podium = controller.dashboard_podium();
        assert_eq!(podium[2].xp, 500);
        assert_eq!(controller.leaderboard().len(), 10);
    }
}
