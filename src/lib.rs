//! Adaptive practice core: chooses a difficulty tier from a learner's last
//! score on a topic, assembles a shuffled question set, grades the attempt,
//! records it, and recommends what to practise next.
//!
//! - [`practice`] - selection, assembly, scoring, recommendations, history
//! - [`content`] - read-only subjects and question pools
//! - [`store`] - key-value persistence adapters

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod practice;
pub mod store;

pub use content::{ContentStore, StaticContent};
pub use error::{ContentError, PracticeError, StoreError};
pub use practice::{AttemptOutcome, PracticeEngine, QuizSession};
