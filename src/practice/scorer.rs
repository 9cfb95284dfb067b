use serde::{Deserialize, Serialize};

use super::types::Question;
use crate::error::PracticeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Rounded percentage, 0..=100.
    pub percent: u8,
    pub correct: usize,
    pub total: usize,
}

/// Grades a complete attempt. `answers[i]` is the chosen option for
/// `questions[i]`; partial or over-long answer lists are rejected.
pub fn score(questions: &[Question], answers: &[usize]) -> Result<ScoreSummary, PracticeError> {
    if questions.is_empty() {
        return Err(PracticeError::EmptyAttempt);
    }
    if answers.len() != questions.len() {
        return Err(PracticeError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let correct = questions
        .iter()
        .zip(answers)
        .filter(|&(q, &answer)| answer == q.correct_option())
        .count();
    let total = questions.len();

    Ok(ScoreSummary {
        percent: round_percent(correct, total),
        correct,
        total,
    })
}

/// Nearest integer of `100 * correct / total`, halves rounding up.
fn round_percent(correct: usize, total: usize) -> u8 {
    let scaled = (200 * correct + total) / (2 * total);
    scaled.min(100) as u8
}
