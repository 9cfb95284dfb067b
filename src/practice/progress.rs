use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::types::Subject;
use crate::store::keys::student_progress_key;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub mastery: u8,
    pub last_score: u8,
    pub last_updated: DateTime<Utc>,
}

/// subject id -> topic id -> entry
pub type ProgressMap = BTreeMap<String, BTreeMap<String, ProgressEntry>>;

/// Latest per-topic mastery snapshot. Same fail-open rules as the attempt
/// history.
pub struct ProgressStore<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Mastery currently tracks the latest score.
    pub fn update(&self, subject_id: &str, topic_id: &str, score: u8) {
        let _guard = self.write_lock.lock();
        let score = score.min(100);
        let mut progress = self.all();
        progress.entry(subject_id.to_string()).or_default().insert(
            topic_id.to_string(),
            ProgressEntry {
                mastery: score,
                last_score: score,
                last_updated: Utc::now(),
            },
        );

        match serde_json::to_value(&progress) {
            Ok(value) => {
                if let Err(err) = self.store.set(student_progress_key(), value) {
                    tracing::warn!(error = %err, subject_id, topic_id, "failed to persist progress");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to encode progress"),
        }
    }

    pub fn get(&self, subject_id: &str, topic_id: &str) -> Option<ProgressEntry> {
        self.all().get(subject_id)?.get(topic_id).cloned()
    }

    pub fn all(&self) -> ProgressMap {
        let Some(value) = self.store.get(student_progress_key()) else {
            return ProgressMap::new();
        };
        serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "progress snapshot unreadable, treating as empty");
            ProgressMap::new()
        })
    }

    /// Copy of `subjects` with stored mastery and last score applied per topic.
    pub fn overlay(&self, subjects: &[Subject]) -> Vec<Subject> {
        let progress = self.all();
        subjects
            .iter()
            .map(|subject| {
                let mut subject = subject.clone();
                if let Some(topics) = progress.get(&subject.id) {
                    for topic in &mut subject.topics {
                        if let Some(entry) = topics.get(&topic.id) {
                            topic.mastery = entry.mastery;
                            topic.last_score = Some(entry.last_score);
                        }
                    }
                }
                subject
            })
            .collect()
    }
}
