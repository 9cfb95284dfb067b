//! Property-based tests for selection, assembly, scoring and recommendation.
//!
//! Invariants covered:
//! - Tier bands are exhaustive and match the threshold rule
//! - Scores stay in [0,100] and equal the rounded match percentage
//! - Assembled sets respect the size bound and topic matching rule
//! - Most recent attempt wins in history lookups

mod common;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use adaptive_practice::config::AssemblyConfig;
use adaptive_practice::practice::types::{AttemptRecord, DifficultyTier, Question};
use adaptive_practice::practice::{assembler, recommend, scorer, selector, HistoryStore};
use adaptive_practice::store::MemoryStore;
use adaptive_practice::StaticContent;

use common::{question, questions, two_subject_content};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_attempt() -> impl Strategy<Value = (Vec<Question>, Vec<usize>)> {
    prop::collection::vec((0usize..4, 0usize..6), 1..=12).prop_map(|pairs| {
        let qs = pairs
            .iter()
            .enumerate()
            .map(|(i, &(key, _))| question("math", "algebra", i, key))
            .collect();
        let answers = pairs.into_iter().map(|(_, answer)| answer).collect();
        (qs, answers)
    })
}

fn arb_tier() -> impl Strategy<Value = DifficultyTier> {
    prop_oneof![
        Just(DifficultyTier::Easy),
        Just(DifficultyTier::Medium),
        Just(DifficultyTier::Hard),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_selector_bands(score in 0u8..=100) {
        let tier = selector::recommend(Some(score));
        match score {
            0..=49 => { prop_assert_eq!(tier, DifficultyTier::Easy); }
            50..=75 => { prop_assert_eq!(tier, DifficultyTier::Medium); }
            _ => { prop_assert_eq!(tier, DifficultyTier::Hard); }
        }
    }

    #[test]
    fn prop_score_is_rounded_match_percentage((qs, answers) in arb_attempt()) {
        let summary = scorer::score(&qs, &answers).unwrap();
        let matches = qs
            .iter()
            .zip(&answers)
            .filter(|(q, a)| q.correct_option() == **a)
            .count();
        let expected = (100.0 * matches as f64 / qs.len() as f64).round() as u8;

        prop_assert!(summary.percent <= 100);
        prop_assert_eq!(summary.correct, matches);
        prop_assert_eq!(summary.percent, expected);
    }

    #[test]
    fn prop_assembly_invariants(
        matching in 0usize..12,
        others in 0usize..12,
        tier in arb_tier(),
        seed in any::<u64>(),
    ) {
        let mut pool = questions("math", "algebra", matching);
        pool.extend(questions("physics", "motion", others));
        let content = StaticContent::new(Vec::new()).unwrap().with_questions(tier, pool.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        let set = assembler::assemble(
            &content, "math", "algebra", tier, &AssemblyConfig::default(), &mut rng,
        );

        prop_assert!(set.len() <= 7);
        prop_assert!(set.iter().all(|q| pool.contains(q)));
        if matching >= 5 {
            prop_assert_eq!(set.len(), matching.min(7));
            prop_assert!(set.iter().all(|q| q.belongs_to("math", "algebra")));
        } else {
            prop_assert_eq!(set.len(), pool.len().min(7));
        }
    }

    #[test]
    fn prop_recommendation_matches_selector(score in 0u8..=100) {
        let content = two_subject_content();
        let rec = recommend::recommend(&content, score, "math", "algebra");
        prop_assert_eq!(rec.next_difficulty, selector::recommend(Some(score)));
        prop_assert_eq!(rec.should_revisit, score < 50);
    }

    #[test]
    fn prop_history_most_recent_wins(scores in prop::collection::vec(0u8..=100, 1..10)) {
        let history = HistoryStore::new(MemoryStore::new());
        for &score in &scores {
            history.append(AttemptRecord::new("math", "algebra", score, DifficultyTier::Medium));
        }
        prop_assert_eq!(history.last_score("algebra"), scores.last().copied());
        prop_assert_eq!(history.records().len(), scores.len());
    }
}
