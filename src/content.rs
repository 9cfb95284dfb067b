//! Read-only source of subjects and per-tier question pools.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ContentError;
use crate::practice::types::{DifficultyTier, Question, Subject};

pub trait ContentStore {
    /// Subjects in display and progression order.
    fn subjects(&self) -> &[Subject];

    fn questions(&self, tier: DifficultyTier) -> &[Question];

    fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects().iter().find(|s| s.id == subject_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    subjects: Vec<Subject>,
    easy: Vec<Question>,
    medium: Vec<Question>,
    hard: Vec<Question>,
}

impl StaticContent {
    /// Rejects duplicate subject ids, duplicate topic ids within a subject and
    /// percentages above 100.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for subject in &subjects {
            if !seen.insert(subject.id.as_str()) {
                return Err(ContentError::DuplicateSubject(subject.id.clone()));
            }
            validate_subject(subject)?;
        }
        Ok(Self {
            subjects,
            ..Default::default()
        })
    }

    pub fn with_questions(mut self, tier: DifficultyTier, questions: Vec<Question>) -> Self {
        *self.pool_mut(tier) = questions;
        self
    }

    /// Loads `subjects.json` and `questions_{easy,medium,hard}.json` from `dir`.
    /// A missing pool file yields an empty pool; a missing subjects file is an error.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        let dir = dir.as_ref();
        let subjects: Vec<Subject> = read_json(&dir.join("subjects.json"))?;
        let mut content = Self::new(subjects)?;

        for tier in DifficultyTier::ALL {
            let path = dir.join(format!("questions_{}.json", tier.as_str()));
            if !path.exists() {
                tracing::warn!(path = %path.display(), tier = %tier, "question pool file missing");
                continue;
            }
            let questions: Vec<Question> = read_json(&path)?;
            *content.pool_mut(tier) = questions;
        }

        tracing::info!(
            subjects = content.subjects.len(),
            easy = content.easy.len(),
            medium = content.medium.len(),
            hard = content.hard.len(),
            "content loaded"
        );
        Ok(content)
    }

    fn pool_mut(&mut self, tier: DifficultyTier) -> &mut Vec<Question> {
        match tier {
            DifficultyTier::Easy => &mut self.easy,
            DifficultyTier::Medium => &mut self.medium,
            DifficultyTier::Hard => &mut self.hard,
        }
    }
}

impl ContentStore for StaticContent {
    fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    fn questions(&self, tier: DifficultyTier) -> &[Question] {
        match tier {
            DifficultyTier::Easy => &self.easy,
            DifficultyTier::Medium => &self.medium,
            DifficultyTier::Hard => &self.hard,
        }
    }
}

fn validate_subject(subject: &Subject) -> Result<(), ContentError> {
    check_percent(&subject.id, "mastery", subject.mastery)?;

    let mut topic_ids = HashSet::new();
    for topic in &subject.topics {
        if !topic_ids.insert(topic.id.as_str()) {
            return Err(ContentError::DuplicateTopic {
                subject_id: subject.id.clone(),
                topic_id: topic.id.clone(),
            });
        }
        check_percent(&topic.id, "mastery", topic.mastery)?;
        if let Some(last_score) = topic.last_score {
            check_percent(&topic.id, "lastScore", last_score)?;
        }
    }
    Ok(())
}

fn check_percent(id: &str, field: &'static str, value: u8) -> Result<(), ContentError> {
    if value > 100 {
        return Err(ContentError::OutOfRange {
            id: id.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::types::Topic;

    fn subjects() -> Vec<Subject> {
        vec![
            Subject::new("math", "Mathematics", vec![Topic::new("algebra", "Algebra")]),
            Subject::new("physics", "Physics", vec![Topic::new("motion", "Motion")]),
        ]
    }

    #[test]
    fn test_duplicate_subject_rejected() {
        let mut list = subjects();
        list.push(Subject::new("math", "Again", Vec::new()));
        let err = StaticContent::new(list).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSubject(id) if id == "math"));
    }

    #[test]
    fn test_duplicate_topic_within_subject_rejected() {
        let list = vec![Subject::new(
            "math",
            "Mathematics",
            vec![Topic::new("algebra", "Algebra"), Topic::new("algebra", "Algebra II")],
        )];
        let err = StaticContent::new(list).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateTopic { ref subject_id, ref topic_id }
                if subject_id == "math" && topic_id == "algebra"
        ));
    }

    #[test]
    fn test_same_topic_id_in_different_subjects_allowed() {
        let list = vec![
            Subject::new("math", "Mathematics", vec![Topic::new("intro", "Intro")]),
            Subject::new("physics", "Physics", vec![Topic::new("intro", "Intro")]),
        ];
        assert!(StaticContent::new(list).is_ok());
    }

    #[test]
    fn test_mastery_above_100_rejected() {
        let mut subject = Subject::new("math", "Mathematics", vec![Topic::new("algebra", "Algebra")]);
        subject.mastery = 250;
        let err = StaticContent::new(vec![subject]).unwrap_err();
        assert!(matches!(err, ContentError::OutOfRange { ref id, value: 250, .. } if id == "math"));

        let mut topic = Topic::new("algebra", "Algebra");
        topic.mastery = 200;
        let err = StaticContent::new(vec![Subject::new("math", "Mathematics", vec![topic])]).unwrap_err();
        assert!(matches!(err, ContentError::OutOfRange { ref id, value: 200, .. } if id == "algebra"));

        let mut topic = Topic::new("algebra", "Algebra");
        topic.last_score = Some(101);
        let err = StaticContent::new(vec![Subject::new("math", "Mathematics", vec![topic])]).unwrap_err();
        assert!(matches!(err, ContentError::OutOfRange { field: "lastScore", .. }));
    }

    #[test]
    fn test_from_dir_rejects_out_of_range_mastery() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("subjects.json"),
            r#"[{"id":"math","name":"Mathematics","mastery":250,
                "topics":[{"id":"algebra","name":"Algebra","mastery":200}]}]"#,
        )
        .unwrap();
        let err = StaticContent::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::OutOfRange { value: 250, .. }));
    }

    #[test]
    fn test_subject_lookup() {
        let content = StaticContent::new(subjects()).unwrap();
        assert_eq!(content.subject("physics").map(|s| s.name.as_str()), Some("Physics"));
        assert!(content.subject("history").is_none());
    }

    #[test]
    fn test_pools_are_independent() {
        let q = Question::new("math", "algebra", "x?", vec!["a".into(), "b".into()], 0).unwrap();
        let content = StaticContent::new(subjects())
            .unwrap()
            .with_questions(DifficultyTier::Hard, vec![q]);
        assert_eq!(content.questions(DifficultyTier::Hard).len(), 1);
        assert!(content.questions(DifficultyTier::Easy).is_empty());
        assert!(content.questions(DifficultyTier::Medium).is_empty());
    }

    #[test]
    fn test_from_dir_loads_pools() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("subjects.json"),
            r#"[{"id":"math","name":"Mathematics","mastery":70,"status":"Improving",
                "topics":[{"id":"algebra","name":"Algebra","mastery":40,"lastScore":40,"priority":true}]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("questions_easy.json"),
            r#"[{"subject":"math","topic":"algebra","question":"2+2?","options":["3","4"],"correctAnswer":1}]"#,
        )
        .unwrap();

        let content = StaticContent::from_dir(dir.path()).unwrap();
        assert_eq!(content.subjects().len(), 1);
        assert_eq!(content.subjects()[0].topics[0].last_score, Some(40));
        assert!(content.subjects()[0].topics[0].priority);
        assert_eq!(content.questions(DifficultyTier::Easy).len(), 1);
        assert!(content.questions(DifficultyTier::Hard).is_empty());
    }

    #[test]
    fn test_from_dir_rejects_invalid_question() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("subjects.json"), "[]").unwrap();
        std::fs::write(
            dir.path().join("questions_medium.json"),
            r#"[{"subject":"math","topic":"algebra","question":"?","options":["a"],"correctAnswer":5}]"#,
        )
        .unwrap();

        let err = StaticContent::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
    }

    #[test]
    fn test_from_dir_missing_subjects() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaticContent::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
