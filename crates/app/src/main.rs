use std::fmt;

use prep_core::Clock;
use prep_core::model::View;
use services::SessionController;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    name: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--name <display name>]");
    eprintln!();
    eprintln!("Runs a scripted walkthrough of the Prepthon session core and prints");
    eprintln!("each state transition.");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut name = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" => {
                    let value = args.next().ok_or(ArgsError::MissingValue { flag: "--name" })?;
                    name = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { name })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut controller = SessionController::new(Clock::default_clock());
    if let Some(name) = args.name.as_deref() {
        controller.update_name(name)?;
    }

    controller.login();
    let profile = controller.profile();
    println!(
        "Signed in as {} ({} XP, {}-day streak)",
        profile.name(),
        profile.xp(),
        profile.streak()
    );

    // Quiz of the day, answered with the correct option each time.
    controller.navigate_to(View::Quiz)?;
    controller.start_quiz_of_the_day()?;
    println!();
    println!("Quiz of the Day");
    loop {
        let Some(quiz) = controller.quiz() else { break };
        let number = quiz.current_index() + 1;
        let question = quiz.current_question();
        let prompt = question.prompt().to_string();
        let answer = question.correct_index();
        let option = question.options()[answer].clone();

        controller.select_option(answer)?;
        let result = controller.submit()?;
        println!("  Q{number}: {prompt}");
        println!(
            "      -> {option} ({})",
            if result.correct { "correct" } else { "wrong" }
        );
        if result.completed {
            break;
        }
    }
    if let Some(quiz) = controller.quiz() {
        println!("  Score: {}/{}", quiz.score(), quiz.total_questions());
    }

    // Ask the assistant something.
    controller.navigate_to(View::Assistant)?;
    controller.send_message("Can you explain BFS?")?;
    println!();
    println!("AI Buddy");
    for message in controller.transcript() {
        println!("  [{}] {}", message.sender().as_str(), message.text());
    }

    // Record today's practice and bump a skill.
    controller.record_activity();
    controller.update_skill("Python", 85)?;
    controller.award_xp(50);

    controller.navigate_to(View::Leaderboard)?;
    println!();
    println!("Global Leaderboard");
    for entry in controller.leaderboard() {
        println!("  #{:<2} {:<8} {} XP", entry.rank, entry.name, entry.xp);
    }

    println!();
    let profile = controller.profile();
    println!(
        "{} now has {} XP and a {}-day streak",
        profile.name(),
        profile.xp(),
        profile.streak()
    );

    controller.logout();
    println!("Signed out; view is '{}'", controller.current_view());

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
