#![allow(dead_code)]

use std::path::PathBuf;

use adaptive_practice::practice::types::{DifficultyTier, Question, Subject, Topic};
use adaptive_practice::StaticContent;

pub fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn question(subject: &str, topic: &str, n: usize, correct: usize) -> Question {
    Question::new(
        subject,
        topic,
        format!("{subject}/{topic} question {n}"),
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct,
    )
    .expect("valid question")
}

pub fn questions(subject: &str, topic: &str, count: usize) -> Vec<Question> {
    (0..count).map(|n| question(subject, topic, n, n % 4)).collect()
}

/// math [algebra, geometry], physics [motion], every pool covers algebra well.
pub fn two_subject_content() -> StaticContent {
    let subjects = vec![
        Subject::new(
            "math",
            "Mathematics",
            vec![
                Topic::new("algebra", "Algebra").with_mastery(62),
                Topic::new("geometry", "Geometry").with_mastery(48),
            ],
        ),
        Subject::new(
            "physics",
            "Physics",
            vec![Topic::new("motion", "Motion").with_mastery(80)],
        ),
    ];

    let mut medium = questions("math", "algebra", 10);
    medium.extend(questions("math", "geometry", 2));
    medium.extend(questions("physics", "motion", 6));

    StaticContent::new(subjects)
        .expect("unique subjects")
        .with_questions(DifficultyTier::Easy, questions("math", "algebra", 8))
        .with_questions(DifficultyTier::Medium, medium)
        .with_questions(DifficultyTier::Hard, questions("math", "algebra", 5))
}

/// Answers that get exactly `correct` of the session's questions right.
pub fn answers_with(questions: &[Question], correct: usize) -> Vec<usize> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            if i < correct {
                q.correct_option()
            } else {
                (q.correct_option() + 1) % q.options().len()
            }
        })
        .collect()
}
