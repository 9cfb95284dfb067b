use super::selector;
use super::types::{DifficultyTier, NextTopic, Recommendation, Subject};
use crate::content::ContentStore;

const REVIEW_LABEL: &str = "Review fundamentals";
const REVIEW_RATIONALE: &str = "Your score indicates you need to strengthen the basics. Try easier questions to build confidence.";
const PRACTICE_LABEL: &str = "Keep practicing";
const PRACTICE_RATIONALE: &str = "You're making good progress! Continue with medium difficulty to solidify your understanding.";
const CHALLENGE_LABEL: &str = "Challenge yourself";
const CHALLENGE_RATIONALE: &str = "Excellent work! You're ready for more challenging questions to master this topic.";

/// What to do after an attempt scoring `score` on `topic_id`.
pub fn recommend<C>(content: &C, score: u8, subject_id: &str, topic_id: &str) -> Recommendation
where
    C: ContentStore + ?Sized,
{
    let next_difficulty = selector::recommend(Some(score));
    let (action_label, rationale) = match next_difficulty {
        DifficultyTier::Easy => (REVIEW_LABEL, REVIEW_RATIONALE),
        DifficultyTier::Medium => (PRACTICE_LABEL, PRACTICE_RATIONALE),
        DifficultyTier::Hard => (CHALLENGE_LABEL, CHALLENGE_RATIONALE),
    };

    Recommendation {
        next_difficulty,
        action_label: action_label.to_string(),
        rationale: rationale.to_string(),
        next_topic: next_topic(content.subjects(), subject_id, topic_id),
        should_revisit: next_difficulty == DifficultyTier::Easy,
    }
}

/// Successor within the same subject, else the first topic of the first other
/// subject in store order.
pub fn next_topic(subjects: &[Subject], subject_id: &str, topic_id: &str) -> Option<NextTopic> {
    let subject = subjects.iter().find(|s| s.id == subject_id);
    let position = subject.and_then(|s| s.topic_position(topic_id));

    if let (Some(subject), Some(position)) = (subject, position) {
        if let Some(successor) = subject.topics.get(position + 1) {
            return Some(NextTopic {
                id: successor.id.clone(),
                name: successor.name.clone(),
                subject_id: None,
                subject_name: None,
            });
        }
    } else {
        // Lookup failures take the same path as reaching the end of the list.
        tracing::debug!(
            subject_id,
            topic_id,
            subject_found = subject.is_some(),
            "topic not found in progression, using cross-subject fallback"
        );
    }

    let other = subjects.iter().find(|s| s.id != subject_id)?;
    let first = other.topics.first()?;
    Some(NextTopic {
        id: first.id.clone(),
        name: first.name.clone(),
        subject_id: Some(other.id.clone()),
        subject_name: Some(other.name.clone()),
    })
}
