use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mastery: u8,
    #[serde(default)]
    pub last_score: Option<u8>,
    #[serde(default)]
    pub priority: bool,
}

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mastery: 0,
            last_score: None,
            priority: false,
        }
    }

    pub fn with_mastery(mut self, mastery: u8) -> Self {
        self.mastery = mastery.min(100);
        self
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn mastery_band(&self) -> MasteryBand {
        MasteryBand::from_mastery(self.mastery)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mastery: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mastery: 0,
            status: None,
            topics,
        }
    }

    /// Position of a topic in this subject's progression order.
    pub fn topic_position(&self, topic_id: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.id == topic_id)
    }
}

/// Coarse mastery classification used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryBand {
    Weak,
    Developing,
    Strong,
}

impl MasteryBand {
    pub fn from_mastery(mastery: u8) -> Self {
        if mastery >= 80 {
            Self::Strong
        } else if mastery >= 60 {
            Self::Developing
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    subject: String,
    topic: String,
    question: String,
    options: Vec<String>,
    correct_answer: usize,
}

/// A multiple-choice question. [`Question::correct_option`] always indexes into
/// [`Question::options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion", rename_all = "camelCase")]
pub struct Question {
    subject: String,
    topic: String,
    question: String,
    options: Vec<String>,
    correct_answer: usize,
}

impl TryFrom<RawQuestion> for Question {
    type Error = ContentError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.subject, raw.topic, raw.question, raw.options, raw.correct_answer)
    }
}

impl Question {
    pub fn new(
        subject: impl Into<String>,
        topic: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, ContentError> {
        if correct >= options.len() {
            return Err(ContentError::InvalidQuestion {
                correct,
                options: options.len(),
            });
        }
        Ok(Self {
            subject: subject.into(),
            topic: topic.into(),
            question: prompt.into(),
            options,
            correct_answer: correct,
        })
    }

    pub fn subject_id(&self) -> &str {
        &self.subject
    }

    pub fn topic_id(&self) -> &str {
        &self.topic
    }

    pub fn prompt(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> usize {
        self.correct_answer
    }

    pub fn belongs_to(&self, subject_id: &str, topic_id: &str) -> bool {
        self.subject == subject_id && self.topic == topic_id
    }
}

/// One completed attempt. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub subject_id: String,
    pub topic_id: String,
    pub score: u8,
    pub difficulty: DifficultyTier,
    pub timestamp: DateTime<Utc>,
}

impl AttemptRecord {
    /// Scores above 100 are clamped.
    pub fn new(
        subject_id: impl Into<String>,
        topic_id: impl Into<String>,
        score: u8,
        difficulty: DifficultyTier,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            topic_id: topic_id.into(),
            score: score.min(100),
            difficulty,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTopic {
    pub id: String,
    pub name: String,
    /// Set only when the suggestion crosses into another subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub next_difficulty: DifficultyTier,
    pub action_label: String,
    pub rationale: String,
    pub next_topic: Option<NextTopic>,
    pub should_revisit: bool,
}
