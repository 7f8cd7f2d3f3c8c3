use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use vocab_core::model::{WordEntry, WordId};

use super::SqliteRepository;
use crate::repository::{StorageError, WordRecord, WordRepository};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn entry_from_row(row: &SqliteRow) -> Result<WordEntry, StorageError> {
    let id: i64 = row.try_get("id").map_err(ser)?;
    let word: String = row.try_get("word").map_err(ser)?;
    let phonetic_us: String = row.try_get("phonetic_us").map_err(ser)?;
    let phonetic_uk: String = row.try_get("phonetic_uk").map_err(ser)?;
    let reviewed: i64 = row.try_get("reviewed").map_err(ser)?;

    let record = WordRecord {
        id: WordId::new(u64::try_from(id).map_err(ser)?),
        word,
        phonetic_us,
        phonetic_uk,
        reviewed: reviewed != 0,
    };
    record.into_entry().map_err(ser)
}

#[async_trait::async_trait]
impl WordRepository for SqliteRepository {
    async fn upsert_word(&self, entry: &WordEntry) -> Result<(), StorageError> {
        let record = WordRecord::from_entry(entry);
        let id = i64::try_from(record.id.value()).map_err(|_| ser("id overflow"))?;

        sqlx::query(
            r"
            INSERT INTO words (id, word, phonetic_us, phonetic_uk, reviewed)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                word = excluded.word,
                phonetic_us = excluded.phonetic_us,
                phonetic_uk = excluded.phonetic_uk,
                reviewed = excluded.reviewed
            ",
        )
        .bind(id)
        .bind(record.word)
        .bind(record.phonetic_us)
        .bind(record.phonetic_uk)
        .bind(i64::from(record.reviewed))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn list_words(&self) -> Result<Vec<WordEntry>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, word, phonetic_us, phonetic_uk, reviewed
            FROM words
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(entry_from_row).collect()
    }

    async fn search_words(&self, query: &str) -> Result<Vec<WordEntry>, StorageError> {
        // LIKE is case-insensitive for ASCII in SQLite, which covers the
        // word list we store.
        let pattern = format!("%{}%", query.trim());
        let rows = sqlx::query(
            r"
            SELECT id, word, phonetic_us, phonetic_uk, reviewed
            FROM words
            WHERE word LIKE ?1
            ORDER BY id
            ",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(entry_from_row).collect()
    }
}
