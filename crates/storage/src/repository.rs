use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use vocab_core::model::{AppSettings, Phonetic, WordEntry, WordError, WordId};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a word entry.
///
/// Mirrors the domain `WordEntry` so repositories can serialize and
/// deserialize without leaking storage concerns into the domain layer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WordRecord {
    pub id: WordId,
    pub word: String,
    pub phonetic_us: String,
    pub phonetic_uk: String,
    pub reviewed: bool,
}

impl WordRecord {
    #[must_use]
    pub fn from_entry(entry: &WordEntry) -> Self {
        Self {
            id: entry.id(),
            word: entry.word().to_owned(),
            phonetic_us: entry.phonetic().us.clone(),
            phonetic_uk: entry.phonetic().uk.clone(),
            reviewed: entry.reviewed(),
        }
    }

    /// Convert the record back into a domain `WordEntry`.
    ///
    /// # Errors
    ///
    /// Returns `WordError` if the display text fails validation.
    pub fn into_entry(self) -> Result<WordEntry, WordError> {
        WordEntry::from_persisted(
            self.id,
            self.word,
            Phonetic::new(self.phonetic_us, self.phonetic_uk),
            self.reviewed,
        )
    }
}

/// Repository contract for the word list.
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// Persist or update a word.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the word cannot be stored.
    async fn upsert_word(&self, entry: &WordEntry) -> Result<(), StorageError>;

    /// Fetch the full word list, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn list_words(&self) -> Result<Vec<WordEntry>, StorageError>;

    /// Case-insensitive substring search over word text, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn search_words(&self, query: &str) -> Result<Vec<WordEntry>, StorageError>;
}

/// Repository contract for the single-row app settings.
#[async_trait]
pub trait AppSettingsRepository: Send + Sync {
    /// Fetch persisted settings, or `None` when never saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError>;

    /// Persist new settings, replacing any previous row.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on storage failures.
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    words: Arc<Mutex<BTreeMap<WordId, WordEntry>>>,
    settings: Arc<Mutex<Option<AppSettings>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordRepository for InMemoryRepository {
    async fn upsert_word(&self, entry: &WordEntry) -> Result<(), StorageError> {
        let mut guard = self
            .words
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(entry.id(), entry.clone());
        Ok(())
    }

    async fn list_words(&self) -> Result<Vec<WordEntry>, StorageError> {
        let guard = self
            .words
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }

    async fn search_words(&self, query: &str) -> Result<Vec<WordEntry>, StorageError> {
        let needle = query.trim().to_lowercase();
        let guard = self
            .words
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .values()
            .filter(|entry| entry.word().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AppSettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(settings.clone());
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub words: Arc<dyn WordRepository>,
    pub settings: Arc<dyn AppSettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let words: Arc<dyn WordRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn AppSettingsRepository> = Arc::new(repo);
        Self { words, settings }
    }
}
