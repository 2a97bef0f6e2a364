use crate::models::domain::{QuizAttempt, QuizSelection};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade the current selection against the correct answer of every question
    pub fn grade_attempt(correct_answers: &[usize], selection: &QuizSelection) -> QuizAttempt {
        let correct_count = correct_answers
            .iter()
            .enumerate()
            .filter(|(question_index, correct)| {
                Self::grade_question(selection.selected(*question_index), **correct)
            })
            .count();

        QuizAttempt::new(correct_count, correct_answers.len())
    }

    // Unanswered questions count as incorrect
    fn grade_question(selected: Option<usize>, correct: usize) -> bool {
        selected == Some(correct)
    }
}
