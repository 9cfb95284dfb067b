pub fn quiz_results_key() -> &'static str {
    "quizResults"
}

pub fn student_progress_key() -> &'static str {
    "studentProgress"
}
