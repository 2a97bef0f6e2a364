use serde::{Deserialize, Serialize};

/// Number of options each generated question is asked to carry.
pub const EXPECTED_OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize, // index into options
}

impl QuizQuestion {
    pub fn new(question: &str, options: &[&str], answer: usize) -> Self {
        QuizQuestion {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
        }
    }

    pub fn has_valid_answer(&self) -> bool {
        self.answer < self.options.len()
    }

    pub fn answer_letter(&self) -> char {
        option_letter(self.answer)
    }
}

/// Letter shown next to an option: 0 -> 'A', 1 -> 'B', ...
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32(65 + i))
        .unwrap_or('?')
}
