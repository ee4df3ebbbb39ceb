use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use recall_core::model::Theme;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted theme preference.
///
/// This is deliberately the whole persistence surface: assessment state is
/// session-only and dies with the process.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Fetch the stored theme, `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the underlying store fails.
    async fn theme(&self) -> Result<Option<Theme>, StorageError>;

    /// Persist the theme, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the underlying store fails.
    async fn save_theme(&self, theme: Theme) -> Result<(), StorageError>;
}

/// In-memory preferences for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryPreferences {
    theme: Arc<Mutex<Option<Theme>>>,
}

impl InMemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryPreferences {
    async fn theme(&self) -> Result<Option<Theme>, StorageError> {
        let guard = self
            .theme
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(*guard)
    }

    async fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        let mut guard = self
            .theme
            .lock()
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        *guard = Some(theme);
        Ok(())
    }
}

/// Bundle of repository handles handed to the composition root.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    /// Build a `Storage` backed by in-memory fakes.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            preferences: Arc::new(InMemoryPreferences::new()),
        }
    }
}
