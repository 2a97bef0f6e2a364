use crate::{
    models::domain::{Quiz, QuizAttempt, QuizSelection},
    rendering::markdown::escape_text,
};

/// One block per question, one clickable option element per option. Options carry
/// their question and option index; the picked option gets the `selected` class.
pub fn render_quiz_html(quiz: &Quiz, selection: &QuizSelection) -> String {
    let mut html = String::new();

    for (question_index, question) in quiz.questions().iter().enumerate() {
        html.push_str("<div class=\"quiz-question\">");
        html.push_str(&format!(
            "<div class=\"question-text\">Question {}: {}</div>",
            question_index + 1,
            escape_text(&question.question)
        ));
        html.push_str("<div class=\"quiz-options\">");

        for (option_index, option) in question.options.iter().enumerate() {
            let class = if selection.is_selected(question_index, option_index) {
                "quiz-option selected"
            } else {
                "quiz-option"
            };
            html.push_str(&format!(
                "<div class=\"{}\" data-question-index=\"{}\" data-option-index=\"{}\">{}</div>",
                class,
                question_index,
                option_index,
                escape_text(option)
            ));
        }

        html.push_str("</div></div>");
    }

    html
}

/// Text of the quiz region as a reader sees it, without answers.
pub fn quiz_visible_text(quiz: &Quiz) -> String {
    quiz.questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let mut block = format!("Question {}: {}\n", index + 1, question.question);
            for option in &question.options {
                block.push_str(option);
                block.push('\n');
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_score_html(attempt: Option<&QuizAttempt>) -> String {
    match attempt {
        Some(attempt) => format!(
            "<div id=\"quiz-result\" style=\"display: block\">{}</div>",
            attempt.message()
        ),
        None => "<div id=\"quiz-result\" style=\"display: none\"></div>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuizQuestion;

    fn sample_quiz() -> Quiz {
        Quiz::new(vec![
            QuizQuestion::new("First?", &["A1", "B1", "C1", "D1"], 0),
            QuizQuestion::new("Second?", &["A2", "B2", "C2", "D2"], 3),
        ])
    }

    #[test]
    fn every_option_is_tagged_with_its_indices() {
        let html = render_quiz_html(&sample_quiz(), &QuizSelection::new());

        assert_eq!(html.matches("class=\"quiz-question\"").count(), 2);
        assert_eq!(html.matches("class=\"quiz-option\"").count(), 8);
        assert!(html.contains("data-question-index=\"1\" data-option-index=\"3\">D2</div>"));
        assert!(html.contains("Question 2: Second?"));
    }

    #[test]
    fn only_the_picked_option_is_marked_selected() {
        let mut selection = QuizSelection::new();
        selection.select(1, 2);

        let html = render_quiz_html(&sample_quiz(), &selection);

        assert_eq!(html.matches("quiz-option selected").count(), 1);
        assert!(html.contains(
            "class=\"quiz-option selected\" data-question-index=\"1\" data-option-index=\"2\""
        ));
    }

    #[test]
    fn question_text_is_escaped() {
        let quiz = Quiz::new(vec![QuizQuestion::new("<img>", &["<b>x</b>"], 0)]);

        let html = render_quiz_html(&quiz, &QuizSelection::new());

        assert!(!html.contains("<img>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn visible_text_lists_questions_and_options_without_answers() {
        let text = quiz_visible_text(&sample_quiz());

        assert_eq!(
            text,
            "Question 1: First?\nA1\nB1\nC1\nD1\n\nQuestion 2: Second?\nA2\nB2\nC2\nD2\n"
        );
    }

    #[test]
    fn score_block_is_hidden_without_attempt() {
        assert!(render_score_html(None).contains("display: none"));

        let shown = render_score_html(Some(&QuizAttempt::new(1, 2)));
        assert!(shown.contains("You scored 1 out of 2 (50%)"));
        assert!(shown.contains("display: block"));
    }
}
