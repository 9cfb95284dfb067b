use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{DifficultyTier, Question};
use crate::config::AssemblyConfig;
use crate::content::ContentStore;

/// Picks a shuffled question set for one attempt.
///
/// With at least `min_topic_matches` questions for the (subject, topic) pair in
/// the tier pool, the set is drawn from those alone. Otherwise the whole tier
/// pool is used regardless of subject or topic. Either way at most
/// `max_questions` come back; an empty pool yields an empty set.
pub fn assemble<C, R>(
    content: &C,
    subject_id: &str,
    topic_id: &str,
    tier: DifficultyTier,
    config: &AssemblyConfig,
    rng: &mut R,
) -> Vec<Question>
where
    C: ContentStore + ?Sized,
    R: Rng + ?Sized,
{
    let pool = content.questions(tier);
    let matching: Vec<&Question> = pool
        .iter()
        .filter(|q| q.belongs_to(subject_id, topic_id))
        .collect();

    let mut candidates = if matching.len() >= config.min_topic_matches {
        matching
    } else {
        tracing::debug!(
            subject_id,
            topic_id,
            tier = %tier,
            matching = matching.len(),
            pool = pool.len(),
            "thin topic coverage, drawing from whole tier pool"
        );
        pool.iter().collect()
    };

    candidates.shuffle(rng);
    candidates
        .into_iter()
        .take(config.max_questions)
        .cloned()
        .collect()
}
