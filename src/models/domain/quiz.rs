use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

/// Number of questions the quiz prompt asks for.
pub const EXPECTED_QUESTION_COUNT: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz(pub Vec<QuizQuestion>);

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Quiz(questions)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.0.get(index)
    }

    /// Correct option index per question, in quiz order.
    pub fn correct_answers(&self) -> Vec<usize> {
        self.0.iter().map(|q| q.answer).collect()
    }
}
