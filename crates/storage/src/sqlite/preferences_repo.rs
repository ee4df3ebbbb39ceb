use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{PreferencesRepository, StorageError};
use recall_core::model::Theme;

use super::SqliteRepository;

const THEME_KEY: &str = "theme";

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn theme(&self) -> Result<Option<Theme>, StorageError> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?1")
            .bind(THEME_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(Theme::from_persisted(&value)))
    }

    async fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(THEME_KEY)
        .bind(theme.as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
