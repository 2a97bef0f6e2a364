use crate::{
    models::domain::LearningSession,
    rendering::{
        markdown::{escape_text, markdown_to_html},
        quiz_view::{render_quiz_html, render_score_html},
    },
};

const PAGE_TITLE: &str = "Learning Assistant";

/// Full results page. Without a session the result container stays hidden.
pub fn render_results_page(session: Option<&LearningSession>) -> String {
    let (summary_html, quiz_html, score_html, result_display, session_id) = match session {
        Some(session) => (
            markdown_to_html(&session.summary),
            render_quiz_html(&session.quiz, &session.selection),
            render_score_html(session.last_attempt.as_ref()),
            "block",
            escape_text(&session.id),
        ),
        None => (
            String::new(),
            String::new(),
            render_score_html(None),
            "none",
            String::new(),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body data-session-id="{session_id}">
<div id="loader" style="display: none"></div>
<div id="result-container" style="display: {result_display}">
<section><h2>Summary</h2><div id="summary-content">{summary_html}</div></section>
<section><h2>Quiz</h2><div id="quiz-container">{quiz_html}</div>{score_html}</section>
</div>
</body>
</html>
"#,
        title = PAGE_TITLE,
        session_id = session_id,
        result_display = result_display,
        summary_html = summary_html,
        quiz_html = quiz_html,
        score_html = score_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{Quiz, QuizAttempt, QuizQuestion},
        test_utils::fixtures,
    };

    const PAGE_IDS: [&str; 5] = [
        "summary-content",
        "quiz-container",
        "result-container",
        "quiz-result",
        "loader",
    ];

    #[test]
    fn empty_page_exposes_every_element_id() {
        let page = render_results_page(None);

        for id in PAGE_IDS {
            assert!(page.contains(&format!("id=\"{}\"", id)), "missing element id {}", id);
        }
        assert!(page.contains("id=\"result-container\" style=\"display: none\""));
    }

    #[test]
    fn session_page_renders_summary_quiz_and_score() {
        let quiz = Quiz::new(vec![QuizQuestion::new("Q?", &["a", "b", "c", "d"], 1)]);
        let mut session = LearningSession::with_id("s-1", "## Key ideas", quiz);
        session.selection.select(0, 1);
        session.last_attempt = Some(QuizAttempt::new(1, 1));

        let page = render_results_page(Some(&session));

        assert!(page.contains("<h2>Key ideas</h2>"));
        assert!(page.contains("quiz-option selected"));
        assert!(page.contains("You scored 1 out of 1 (100%)"));
        assert!(page.contains("id=\"result-container\" style=\"display: block\""));
        assert!(page.contains("data-session-id=\"s-1\""));
    }

    #[test]
    fn unchecked_session_keeps_result_hidden() {
        let session = fixtures::sample_session();

        let page = render_results_page(Some(&session));

        assert!(page.contains("<h1>The Water Cycle</h1>"));
        assert_eq!(page.matches("class=\"quiz-question\"").count(), 5);
        assert!(!page.contains("quiz-option selected"));
        assert!(!page.contains("You scored"));
        assert!(page.contains("data-session-id=\"session-1\""));
    }
}
