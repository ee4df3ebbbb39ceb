use sqlx::SqlitePool;

use super::SqliteInitError;

/// Creates the preferences table.
///
/// The schema is a single key/value table; there is nothing else to
/// version yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
