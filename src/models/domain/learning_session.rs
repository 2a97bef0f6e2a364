use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Quiz, QuizAttempt, QuizSelection};

/// One processed summary/quiz pair plus the state of taking its quiz.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LearningSession {
    pub id: String,
    pub summary: String,
    pub quiz: Quiz,
    pub correct_answers: Vec<usize>, // parallel to quiz
    pub selection: QuizSelection,
    pub last_attempt: Option<QuizAttempt>, // None while the result is hidden
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl LearningSession {
    pub fn new_learning_session(summary: &str, quiz: Quiz) -> Self {
        Self::with_id(&Uuid::new_v4().to_string(), summary, quiz)
    }

    pub fn with_id(id: &str, summary: &str, quiz: Quiz) -> Self {
        let now = Utc::now();
        LearningSession {
            id: id.to_string(),
            summary: summary.to_string(),
            correct_answers: quiz.correct_answers(),
            quiz,
            selection: QuizSelection::new(),
            last_attempt: None,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
