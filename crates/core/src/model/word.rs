use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::WordId;

//
// ─── WORD TYPES ────────────────────────────────────────────────────────────────
//

/// US and UK phonetic transcriptions for a word. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonetic {
    pub us: String,
    pub uk: String,
}

impl Phonetic {
    #[must_use]
    pub fn new(us: impl Into<String>, uk: impl Into<String>) -> Self {
        Self {
            us: us.into(),
            uk: uk.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("word text is empty")]
    EmptyText,
}

/// Unvalidated word input from seed data or storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDraft {
    pub word: String,
    pub phonetic: Phonetic,
}

impl WordDraft {
    #[must_use]
    pub fn new(word: impl Into<String>, phonetic: Phonetic) -> Self {
        Self {
            word: word.into(),
            phonetic,
        }
    }

    /// Validate the draft and assign an identifier.
    ///
    /// # Errors
    ///
    /// Returns `WordError::EmptyText` if the display text is blank.
    pub fn validate(self, id: WordId) -> Result<WordEntry, WordError> {
        let word = self.word.trim().to_string();
        if word.is_empty() {
            return Err(WordError::EmptyText);
        }
        Ok(WordEntry {
            id,
            word,
            phonetic: self.phonetic,
            reviewed: false,
        })
    }
}

/// A word under review. `reviewed` starts false and only ever flips to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    id: WordId,
    word: String,
    phonetic: Phonetic,
    reviewed: bool,
}

impl WordEntry {
    /// Rehydrate a word from persisted storage, including its reviewed flag.
    ///
    /// # Errors
    ///
    /// Returns `WordError::EmptyText` if the display text is blank.
    pub fn from_persisted(
        id: WordId,
        word: impl Into<String>,
        phonetic: Phonetic,
        reviewed: bool,
    ) -> Result<Self, WordError> {
        let mut entry = WordDraft::new(word, phonetic).validate(id)?;
        entry.reviewed = reviewed;
        Ok(entry)
    }

    #[must_use]
    pub fn id(&self) -> WordId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn phonetic(&self) -> &Phonetic {
        &self.phonetic
    }

    #[must_use]
    pub fn reviewed(&self) -> bool {
        self.reviewed
    }

    pub(crate) fn mark_reviewed(&mut self) {
        self.reviewed = true;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_blank_text() {
        let err = WordDraft::new("   ", Phonetic::default())
            .validate(WordId::new(1))
            .unwrap_err();
        assert_eq!(err, WordError::EmptyText);
    }

    #[test]
    fn draft_trims_and_starts_unreviewed() {
        let entry = WordDraft::new("  painless ", Phonetic::new("/ˈpeɪnləs/", "/ˈpeɪnləs/"))
            .validate(WordId::new(1))
            .unwrap();
        assert_eq!(entry.word(), "painless");
        assert!(!entry.reviewed());
    }

    #[test]
    fn from_persisted_keeps_reviewed_flag() {
        let entry =
            WordEntry::from_persisted(WordId::new(3), "example", Phonetic::default(), true)
                .unwrap();
        assert!(entry.reviewed());
        assert_eq!(entry.id(), WordId::new(3));
    }
}
