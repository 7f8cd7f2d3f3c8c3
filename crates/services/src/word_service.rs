use std::sync::Arc;

use storage::repository::WordRepository;
use vocab_core::model::{Phonetic, WordDraft, WordEntry, WordId};

use crate::error::WordServiceError;

/// Outcome of a word-library sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Words newly added by the sync.
    pub added: usize,
    /// Library size after the sync.
    pub total: usize,
}

/// Word search, the personal word book, and library sync.
#[derive(Clone)]
pub struct WordService {
    words: Arc<dyn WordRepository>,
}

impl WordService {
    #[must_use]
    pub fn new(words: Arc<dyn WordRepository>) -> Self {
        Self { words }
    }

    /// Every word in the book, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `WordServiceError::Storage` on persistence failures.
    pub async fn list(&self) -> Result<Vec<WordEntry>, WordServiceError> {
        Ok(self.words.list_words().await?)
    }

    /// Case-insensitive substring search. A blank query matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `WordServiceError::Storage` on persistence failures.
    pub async fn search(&self, query: &str) -> Result<Vec<WordEntry>, WordServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.words.search_words(query).await?)
    }

    /// Add a word to the word book, assigning the next free id.
    ///
    /// Adding a word that is already in the book returns the existing entry
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `WordServiceError::Word` for blank input and
    /// `WordServiceError::Storage` on persistence failures.
    pub async fn add_word(
        &self,
        text: &str,
        phonetic: Phonetic,
    ) -> Result<WordEntry, WordServiceError> {
        let existing = self.words.list_words().await?;

        let text_trimmed = text.trim();
        if let Some(entry) = existing
            .iter()
            .find(|entry| entry.word().eq_ignore_ascii_case(text_trimmed))
        {
            return Ok(entry.clone());
        }

        let entry = WordDraft::new(text, phonetic).validate(next_id(&existing))?;
        self.words.upsert_word(&entry).await?;
        Ok(entry)
    }

    /// Pull the bundled extension library into the store, skipping words
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns `WordServiceError::Storage` on persistence failures.
    pub async fn sync_library(&self) -> Result<SyncReport, WordServiceError> {
        let existing = self.words.list_words().await?;
        let mut next = next_id(&existing);
        let mut added = 0;

        for (word, us, uk) in extension_library() {
            let known = existing
                .iter()
                .any(|entry| entry.word().eq_ignore_ascii_case(word));
            if known {
                continue;
            }
            let entry = WordDraft::new(word, Phonetic::new(us, uk)).validate(next)?;
            self.words.upsert_word(&entry).await?;
            next = WordId::new(next.value() + 1);
            added += 1;
        }

        Ok(SyncReport {
            added,
            total: existing.len() + added,
        })
    }
}

fn next_id(existing: &[WordEntry]) -> WordId {
    let max = existing.iter().map(|entry| entry.id().value()).max();
    WordId::new(max.map_or(1, |max| max + 1))
}

/// The bundled extension library delivered by sync.
fn extension_library() -> [(&'static str, &'static str, &'static str); 10] {
    [
        ("accomplish", "/əˈkɑːmplɪʃ/", "/əˈkʌmplɪʃ/"),
        ("benefit", "/ˈbenɪfɪt/", "/ˈbenɪfɪt/"),
        ("curious", "/ˈkjʊriəs/", "/ˈkjʊəriəs/"),
        ("deliberate", "/dɪˈlɪbərət/", "/dɪˈlɪbərət/"),
        ("efficient", "/ɪˈfɪʃnt/", "/ɪˈfɪʃnt/"),
        ("fortunate", "/ˈfɔːrtʃənət/", "/ˈfɔːtʃənət/"),
        ("genuine", "/ˈdʒenjuɪn/", "/ˈdʒenjuɪn/"),
        ("hesitate", "/ˈhezɪteɪt/", "/ˈhezɪteɪt/"),
        ("improve", "/ɪmˈpruːv/", "/ɪmˈpruːv/"),
        ("journey", "/ˈdʒɜːrni/", "/ˈdʒɜːni/"),
    ]
}
