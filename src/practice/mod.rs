pub mod assembler;
pub mod engine;
pub mod history;
pub mod priority;
pub mod progress;
pub mod recommend;
pub mod scorer;
pub mod selector;
pub mod types;

pub use engine::{AttemptOutcome, PracticeEngine, QuizSession};
pub use history::HistoryStore;
pub use progress::ProgressStore;
pub use types::*;
