use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::LearningSession};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LearningSession>>;
    /// Inserts the session, replacing any session stored under the same id.
    async fn save(&self, session: LearningSession) -> AppResult<LearningSession>;
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, LearningSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LearningSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn save(&self, session: LearningSession) -> AppResult<LearningSession> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Quiz;

    #[tokio::test]
    async fn test_save_then_find() {
        let repository = InMemorySessionRepository::new();
        let session = LearningSession::new_learning_session("summary", Quiz::default());

        repository.save(session.clone()).await.unwrap();

        let found = repository.find_by_id(&session.id).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let repository = InMemorySessionRepository::new();

        assert!(repository.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let repository = InMemorySessionRepository::new();
        repository
            .save(LearningSession::with_id("s-1", "first", Quiz::default()))
            .await
            .unwrap();
        repository
            .save(LearningSession::with_id("s-1", "second", Quiz::default()))
            .await
            .unwrap();

        let found = repository.find_by_id("s-1").await.unwrap().unwrap();
        assert_eq!(found.summary, "second");
        assert_eq!(repository.count().await.unwrap(), 1);
    }
}
