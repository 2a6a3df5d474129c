use prep_core::model::{Question, Sender, View};
use prep_core::time::fixed_clock;
use services::{NavigationError, QuizError, SessionController};

#[test]
fn full_session_walkthrough() {
    let mut controller = SessionController::new(fixed_clock());

    // Unauthenticated: only login is available.
    assert_eq!(controller.current_view(), View::Login);
    assert_eq!(
        controller.navigate_to(View::Dashboard).unwrap_err(),
        NavigationError::Unauthenticated
    );

    controller.login();
    assert_eq!(controller.current_view(), View::Dashboard);

    // Take the quiz of the day, answering everything correctly.
    controller.navigate_to(View::Quiz).unwrap();
    controller.start_quiz_of_the_day().unwrap();

    loop {
        let answer = controller
            .quiz()
            .expect("quiz is active")
            .current_question()
            .correct_index();
        controller.select_option(answer).unwrap();
        if controller.submit().unwrap().completed {
            break;
        }
    }

    let quiz = controller.quiz().expect("quiz is active");
    assert!(quiz.is_complete());
    assert_eq!(quiz.score(), quiz.total_questions());

    // Chat with the assistant; the transcript opens with the greeting.
    controller.navigate_to(View::Assistant).unwrap();
    assert_eq!(controller.quiz(), None);
    assert_eq!(controller.transcript().len(), 1);
    assert_eq!(controller.transcript()[0].sender(), Sender::Assistant);

    controller.send_message("explain BFS").unwrap();
    assert_eq!(controller.transcript().len(), 3);
    assert_eq!(controller.transcript()[1].sender(), Sender::User);
    assert_eq!(controller.transcript()[1].text(), "explain BFS");
    assert_eq!(controller.transcript()[2].sender(), Sender::Assistant);

    // Edit the profile.
    controller.navigate_to(View::Profile).unwrap();
    controller.update_name("Rinki S.").unwrap();
    controller.update_skill("Python", 85).unwrap();
    assert_eq!(controller.profile().name().as_str(), "Rinki S.");
    assert_eq!(controller.profile().skill("Python"), Some(85));

    // Check the standings.
    controller.navigate_to(View::Leaderboard).unwrap();
    let podium = controller.dashboard_podium();
    assert_eq!(podium[2].name, "Rinki S.");
    assert_eq!(podium[2].xp, controller.profile().xp());

    // Logout drops back to login; chat and profile survive in memory.
    controller.logout();
    assert_eq!(controller.current_view(), View::Login);
    assert_eq!(controller.transcript().len(), 3);
    assert_eq!(controller.profile().name().as_str(), "Rinki S.");
}

#[test]
fn partially_correct_quiz_scores_one_of_two() {
    let mut controller = SessionController::new(fixed_clock());
    controller.login();
    controller.navigate_to(View::Quiz).unwrap();

    let questions = vec![
        Question::new("Q1", ["a", "b"], 1).unwrap(),
        Question::new("Q2", ["a", "b", "c"], 2).unwrap(),
    ];
    controller.start_quiz(questions).unwrap();

    controller.select_option(1).unwrap();
    let first = controller.submit().unwrap();
    assert!(first.correct);
    assert_eq!(first.score, 1);
    assert!(!first.completed);

    controller.select_option(0).unwrap();
    let second = controller.submit().unwrap();
    assert!(!second.correct);
    assert_eq!(second.score, 1);
    assert!(second.completed);

    // Retry restores a clean slate over the same questions.
    assert_eq!(controller.submit().unwrap_err(), QuizError::AlreadyCompleted);
    controller.reset_quiz().unwrap();
    let quiz = controller.quiz().expect("quiz is active");
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.current_index(), 0);
    assert!(!quiz.is_complete());
}
