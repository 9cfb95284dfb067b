use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid question: correct option {correct} out of range for {options} options")]
    InvalidQuestion { correct: usize, options: usize },
    #[error("duplicate subject id: {0}")]
    DuplicateSubject(String),
    #[error("duplicate topic id {topic_id} in subject {subject_id}")]
    DuplicateTopic { subject_id: String, topic_id: String },
    #[error("{field} of {id} is {value}, expected 0..=100")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: u8,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encode error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PracticeError {
    #[error("answer count mismatch: expected {expected}, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },
    #[error("cannot score an attempt with no questions")]
    EmptyAttempt,
    #[error("no content available for {subject_id}/{topic_id}")]
    NoContent { subject_id: String, topic_id: String },
}
