use super::types::DifficultyTier;

const EASY_BELOW: u8 = 50;
const HARD_ABOVE: u8 = 75;

/// Tier for the next attempt given the most recent score on the topic.
///
/// No history starts at medium. Below 50 drops to easy, 50..=75 stays at
/// medium, above 75 moves to hard.
pub fn recommend(last_score: Option<u8>) -> DifficultyTier {
    match last_score {
        None => DifficultyTier::Medium,
        Some(score) if score < EASY_BELOW => DifficultyTier::Easy,
        Some(score) if score <= HARD_ABOVE => DifficultyTier::Medium,
        Some(_) => DifficultyTier::Hard,
    }
}
