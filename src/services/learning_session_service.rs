use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{LearningSession, QuizAttempt},
    repositories::SessionRepository,
    services::{content_pipeline_service::ProcessedContent, quiz_attempt_service::QuizAttemptService},
};

/// Owns session lifecycle and the per-question selection state machine.
pub struct LearningSessionService {
    repository: Arc<dyn SessionRepository>,
    // serialises read-modify-write cycles on stored sessions
    write_lock: Mutex<()>,
}

impl LearningSessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Stores freshly processed content. With `session_id` the named session is
    /// overwritten, otherwise a new one is allocated.
    pub async fn create_session(
        &self,
        session_id: Option<&str>,
        processed: ProcessedContent,
    ) -> AppResult<LearningSession> {
        let session = match session_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => LearningSession::with_id(id, &processed.summary, processed.quiz),
            None => LearningSession::new_learning_session(&processed.summary, processed.quiz),
        };

        let _guard = self.write_lock.lock().await;
        let saved = self.repository.save(session).await?;
        log::info!(
            "Stored learning session {} with {} questions",
            saved.id,
            saved.quiz.len()
        );
        Ok(saved)
    }

    pub async fn get_session(&self, id: &str) -> AppResult<LearningSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Learning session with id '{}' not found", id)))
    }

    /// Selects one option, replacing any earlier pick for the same question.
    pub async fn select_option(
        &self,
        id: &str,
        question_index: usize,
        option_index: usize,
    ) -> AppResult<LearningSession> {
        let _guard = self.write_lock.lock().await;
        let mut session = self.get_session(id).await?;

        let question = session.quiz.get(question_index).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Question index {} is out of range for a quiz of {} questions",
                question_index,
                session.quiz.len()
            ))
        })?;

        if option_index >= question.options.len() {
            return Err(AppError::ValidationError(format!(
                "Option index {} is out of range for question {} with {} options",
                option_index,
                question_index + 1,
                question.options.len()
            )));
        }

        session.selection.select(question_index, option_index);
        session.touch();
        self.repository.save(session).await
    }

    /// Scores the current selection and keeps the result shown on the session.
    pub async fn check_quiz(&self, id: &str) -> AppResult<QuizAttempt> {
        let _guard = self.write_lock.lock().await;
        let mut session = self.get_session(id).await?;

        let attempt = QuizAttemptService::grade_attempt(&session.correct_answers, &session.selection);
        log::info!("Session {}: {}", id, attempt.message());

        session.last_attempt = Some(attempt.clone());
        session.touch();
        self.repository.save(session).await?;

        Ok(attempt)
    }

    /// Clears every selection and hides the last score.
    pub async fn reset_quiz(&self, id: &str) -> AppResult<LearningSession> {
        let _guard = self.write_lock.lock().await;
        let mut session = self.get_session(id).await?;

        session.selection.clear();
        session.last_attempt = None;
        session.touch();
        self.repository.save(session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repositories::InMemorySessionRepository, test_utils::fixtures};

    fn service() -> LearningSessionService {
        LearningSessionService::new(Arc::new(InMemorySessionRepository::new()))
    }

    #[tokio::test]
    async fn create_session_allocates_new_ids() {
        let service = service();

        let first = service.create_session(None, fixtures::processed_content()).await.unwrap();
        let second = service.create_session(None, fixtures::processed_content()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.correct_answers, fixtures::processed_content().quiz.correct_answers());
    }

    #[tokio::test]
    async fn create_session_with_id_overwrites_previous_state() {
        let service = service();
        let first = service.create_session(None, fixtures::processed_content()).await.unwrap();
        service.select_option(&first.id, 0, 1).await.unwrap();
        service.check_quiz(&first.id).await.unwrap();

        let replaced = service
            .create_session(Some(&first.id), fixtures::processed_content())
            .await
            .unwrap();

        assert_eq!(replaced.id, first.id);
        assert_eq!(replaced.selection.answered_count(), 0);
        assert!(replaced.last_attempt.is_none());
    }

    #[tokio::test]
    async fn get_unknown_session_is_not_found() {
        let err = service().get_session("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn selecting_again_replaces_previous_pick() {
        let service = service();
        let session = service.create_session(None, fixtures::processed_content()).await.unwrap();

        service.select_option(&session.id, 0, 1).await.unwrap();
        let updated = service.select_option(&session.id, 0, 3).await.unwrap();

        assert_eq!(updated.selection.selected(0), Some(3));
        assert_eq!(updated.selection.answered_count(), 1);
    }

    #[tokio::test]
    async fn out_of_range_selection_is_rejected_and_leaves_state() {
        let service = service();
        let session = service.create_session(None, fixtures::processed_content()).await.unwrap();
        service.select_option(&session.id, 0, 2).await.unwrap();

        let bad_question = service.select_option(&session.id, 99, 0).await;
        let bad_option = service.select_option(&session.id, 0, 4).await;

        assert!(matches!(bad_question, Err(AppError::ValidationError(_))));
        assert!(matches!(bad_option, Err(AppError::ValidationError(_))));
        let stored = service.get_session(&session.id).await.unwrap();
        assert_eq!(stored.selection.selected(0), Some(2));
    }

    #[tokio::test]
    async fn check_scores_and_shows_result() {
        let service = service();
        let session = service.create_session(None, fixtures::processed_content()).await.unwrap();
        for (question_index, correct) in session.correct_answers.iter().enumerate().take(3) {
            service.select_option(&session.id, question_index, *correct).await.unwrap();
        }

        let attempt = service.check_quiz(&session.id).await.unwrap();

        assert_eq!(attempt.correct_count, 3);
        assert_eq!(attempt.total_questions, 5);
        assert_eq!(attempt.percentage, 60);
        let stored = service.get_session(&session.id).await.unwrap();
        assert_eq!(stored.last_attempt, Some(attempt));
    }

    #[tokio::test]
    async fn reset_clears_selection_and_hides_score() {
        let service = service();
        let session = service.create_session(None, fixtures::processed_content()).await.unwrap();
        service.select_option(&session.id, 1, 1).await.unwrap();
        service.check_quiz(&session.id).await.unwrap();

        let reset = service.reset_quiz(&session.id).await.unwrap();

        assert_eq!(reset.selection.answered_count(), 0);
        assert!(reset.last_attempt.is_none());
    }
}
