use serde::{Deserialize, Serialize};

/// Outcome of checking a quiz against the stored correct answers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub correct_count: usize,
    pub total_questions: usize,
    pub percentage: u32,
}

impl QuizAttempt {
    pub fn new(correct_count: usize, total_questions: usize) -> Self {
        let percentage = if total_questions == 0 {
            0
        } else {
            ((correct_count as f64 / total_questions as f64) * 100.0).round() as u32
        };

        QuizAttempt {
            correct_count,
            total_questions,
            percentage,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "You scored {} out of {} ({}%)",
            self.correct_count, self.total_questions, self.percentage
        )
    }
}
