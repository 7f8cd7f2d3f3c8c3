use std::sync::Arc;

use storage::repository::WordRepository;
use vocab_core::model::{ReviewSession, WordId};

use crate::error::ReviewServiceError;

/// Loads the review list and persists reviewed flags.
///
/// The session itself is a plain value owned by the view; this service only
/// moves words in and out of storage around it.
#[derive(Clone)]
pub struct ReviewService {
    words: Arc<dyn WordRepository>,
}

impl ReviewService {
    #[must_use]
    pub fn new(words: Arc<dyn WordRepository>) -> Self {
        Self { words }
    }

    /// Load every word and open a session in the list view.
    ///
    /// # Errors
    ///
    /// Returns `ReviewServiceError::Storage` on persistence failures.
    pub async fn start_session(&self) -> Result<ReviewSession, ReviewServiceError> {
        Ok(ReviewSession::new(self.words.list_words().await?))
    }

    /// Persist the reviewed flag for a word the session has marked.
    ///
    /// Ids the session does not hold are ignored, matching the session's own
    /// handling of unknown ids.
    ///
    /// # Errors
    ///
    /// Returns `ReviewServiceError::Storage` on persistence failures.
    pub async fn persist_reviewed(
        &self,
        session: &ReviewSession,
        id: WordId,
    ) -> Result<(), ReviewServiceError> {
        if let Some(entry) = session.words().iter().find(|word| word.id() == id) {
            self.words.upsert_word(entry).await?;
        }
        Ok(())
    }

    /// Number of words still waiting for review.
    ///
    /// # Errors
    ///
    /// Returns `ReviewServiceError::Storage` on persistence failures.
    pub async fn due_count(&self) -> Result<usize, ReviewServiceError> {
        Ok(self
            .words
            .list_words()
            .await?
            .iter()
            .filter(|word| !word.reviewed())
            .count())
    }
}
