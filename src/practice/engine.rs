use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::history::HistoryStore;
use super::priority::{priority_topic, PriorityTopic};
use super::progress::ProgressStore;
use super::types::{AttemptRecord, DifficultyTier, Question, Recommendation};
use super::{assembler, recommend, scorer, selector};
use crate::config::AssemblyConfig;
use crate::content::ContentStore;
use crate::error::PracticeError;
use crate::store::KeyValueStore;

/// An assembled attempt waiting for answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    pub subject_id: String,
    pub topic_id: String,
    pub difficulty: DifficultyTier,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutcome {
    pub score: u8,
    pub correct: usize,
    pub total: usize,
    pub difficulty: DifficultyTier,
    pub recommendation: Recommendation,
}

/// One learner's practice loop: pick a tier, assemble, grade, record, advise.
pub struct PracticeEngine<C, S, R> {
    content: C,
    history: HistoryStore<Arc<S>>,
    progress: ProgressStore<Arc<S>>,
    config: AssemblyConfig,
    rng: R,
}

impl<C, S, R> PracticeEngine<C, S, R>
where
    C: ContentStore,
    S: KeyValueStore,
    R: Rng,
{
    pub fn new(content: C, store: S, rng: R) -> Self {
        let store = Arc::new(store);
        Self {
            content,
            history: HistoryStore::new(Arc::clone(&store)),
            progress: ProgressStore::new(store),
            config: AssemblyConfig::default(),
            rng,
        }
    }

    pub fn with_config(mut self, config: AssemblyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn history(&self) -> &HistoryStore<Arc<S>> {
        &self.history
    }

    pub fn progress(&self) -> &ProgressStore<Arc<S>> {
        &self.progress
    }

    /// Tier the next attempt on this topic would use.
    pub fn next_difficulty(&self, topic_id: &str) -> DifficultyTier {
        selector::recommend(self.history.last_score(topic_id))
    }

    /// Starting a new session never touches stored history, so it is always
    /// safe to call again for the same topic.
    pub fn start(&mut self, subject_id: &str, topic_id: &str) -> Result<QuizSession, PracticeError> {
        let difficulty = self.next_difficulty(topic_id);
        let questions = assembler::assemble(
            &self.content,
            subject_id,
            topic_id,
            difficulty,
            &self.config,
            &mut self.rng,
        );

        if questions.is_empty() {
            tracing::warn!(subject_id, topic_id, difficulty = %difficulty, "no questions available");
            return Err(PracticeError::NoContent {
                subject_id: subject_id.to_string(),
                topic_id: topic_id.to_string(),
            });
        }

        tracing::info!(
            subject_id,
            topic_id,
            difficulty = %difficulty,
            questions = questions.len(),
            "practice session started"
        );
        Ok(QuizSession {
            subject_id: subject_id.to_string(),
            topic_id: topic_id.to_string(),
            difficulty,
            questions,
        })
    }

    /// Grades the session, records the attempt and returns the next step.
    /// Nothing is persisted when grading fails.
    pub fn complete(
        &self,
        session: &QuizSession,
        answers: &[usize],
    ) -> Result<AttemptOutcome, PracticeError> {
        let summary = scorer::score(&session.questions, answers)?;

        self.history.append(AttemptRecord::new(
            session.subject_id.as_str(),
            session.topic_id.as_str(),
            summary.percent,
            session.difficulty,
        ));
        self.progress
            .update(&session.subject_id, &session.topic_id, summary.percent);

        let recommendation = recommend::recommend(
            &self.content,
            summary.percent,
            &session.subject_id,
            &session.topic_id,
        );

        tracing::info!(
            subject_id = %session.subject_id,
            topic_id = %session.topic_id,
            score = summary.percent,
            correct = summary.correct,
            total = summary.total,
            next_difficulty = %recommendation.next_difficulty,
            "attempt completed"
        );

        Ok(AttemptOutcome {
            score: summary.percent,
            correct: summary.correct,
            total: summary.total,
            difficulty: session.difficulty,
            recommendation,
        })
    }

    /// Dashboard suggestion using content mastery overlaid with stored progress.
    pub fn priority_topic(&self) -> Option<PriorityTopic> {
        priority_topic(&self.progress.overlay(self.content.subjects()))
    }
}
