use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use adaptive_practice::config::Config;
use adaptive_practice::logging::init_tracing;
use adaptive_practice::store::FileStore;
use adaptive_practice::{PracticeEngine, StaticContent};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = init_tracing(&config.log_level);

    let mut args = std::env::args().skip(1);
    let (Some(subject_id), Some(topic_id)) = (args.next(), args.next()) else {
        eprintln!("usage: adaptive-practice <subject-id> <topic-id>");
        return ExitCode::from(2);
    };

    let content = match StaticContent::from_dir(&config.content_dir) {
        Ok(content) => content,
        Err(err) => {
            tracing::error!(error = %err, dir = %config.content_dir.display(), "failed to load content");
            return ExitCode::FAILURE;
        }
    };
    let store = FileStore::new(&config.history_path);
    tracing::info!(history = %store.path().display(), "using history file");
    let mut engine = PracticeEngine::new(content, store, rand::rng());

    let session = match engine.start(&subject_id, &topic_id) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = Vec::with_capacity(session.questions.len());
    let total = session.questions.len();

    println!("Difficulty: {}", session.difficulty);
    for (index, question) in session.questions.iter().enumerate() {
        println!("\nQuestion {} of {}: {}", index + 1, total, question.prompt());
        for (option_index, option) in question.options().iter().enumerate() {
            println!("  [{option_index}] {option}");
        }

        loop {
            print!("> ");
            let _ = io::stdout().flush();
            let Some(Ok(line)) = lines.next() else {
                eprintln!("input ended before the attempt was complete");
                return ExitCode::FAILURE;
            };
            match line.trim().parse::<usize>() {
                Ok(choice) if choice < question.options().len() => {
                    answers.push(choice);
                    break;
                }
                _ => println!("enter an option number between 0 and {}", question.options().len() - 1),
            }
        }
    }

    let outcome = match engine.complete(&session, &answers) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("\n{json}"),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode outcome");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
