use std::sync::Arc;

use recall_core::model::Theme;
use storage::repository::PreferencesRepository;

use crate::error::PreferencesError;

/// Load/save of the theme preference — the only thing this app persists.
#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Stored theme, or the default (dark) when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn theme(&self) -> Result<Theme, PreferencesError> {
        Ok(self.repo.theme().await?.unwrap_or_default())
    }

    /// Persist a theme choice.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn save_theme(&self, theme: Theme) -> Result<(), PreferencesError> {
        self.repo.save_theme(theme).await?;
        Ok(())
    }
}
