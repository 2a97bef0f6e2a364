#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{LearningSession, Quiz, QuizQuestion};
    use crate::services::content_pipeline_service::ProcessedContent;

    pub const SAMPLE_SUMMARY: &str = "# The Water Cycle\n\n- Evaporation\n- Condensation\n- Precipitation";

    /// A five-question quiz with four options per question
    pub fn sample_quiz() -> Quiz {
        Quiz::new(vec![
            QuizQuestion::new("What drives evaporation?", &["Wind", "Solar energy", "Gravity", "Tides"], 1),
            QuizQuestion::new("Clouds form by?", &["Condensation", "Melting", "Erosion", "Runoff"], 0),
            QuizQuestion::new("Rain is a form of?", &["Infiltration", "Transpiration", "Precipitation", "Sublimation"], 2),
            QuizQuestion::new("Plants release water by?", &["Runoff", "Percolation", "Deposition", "Transpiration"], 3),
            QuizQuestion::new("Most surface water is in?", &["Oceans", "Lakes", "Rivers", "Glaciers"], 0),
        ])
    }

    pub fn processed_content() -> ProcessedContent {
        ProcessedContent {
            summary: SAMPLE_SUMMARY.to_string(),
            quiz: sample_quiz(),
        }
    }

    pub fn sample_session() -> LearningSession {
        LearningSession::with_id("session-1", SAMPLE_SUMMARY, sample_quiz())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz_has_expected_shape() {
        let quiz = sample_quiz();

        assert_eq!(quiz.len(), 5);
        assert!(quiz.questions().iter().all(|q| q.options.len() == 4));
        assert!(quiz.questions().iter().all(|q| q.has_valid_answer()));
    }

    #[test]
    fn test_fixtures_sample_session() {
        let session = sample_session();

        assert_eq!(session.id, "session-1");
        assert_eq!(session.correct_answers, vec![1, 0, 2, 3, 0]);
    }
}
