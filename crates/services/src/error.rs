//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use vocab_core::model::{AppSettingsError, QuizError, WordError};

/// Errors emitted by `AiService` and its remote backend.
///
/// The mock backend never fails; every variant here comes from the remote
/// client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    #[error("AI backend returned an empty response")]
    EmptyResponse,
    #[error("AI request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ReviewService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReviewServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ChatService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Errors emitted by `TestService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TestServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `WordService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordServiceError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AppSettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppSettingsServiceError {
    #[error(transparent)]
    Settings(#[from] AppSettingsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
