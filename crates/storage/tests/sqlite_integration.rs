use recall_core::model::Theme;
use storage::Storage;
use storage::sqlite::SqliteRepository;
use storage::repository::PreferencesRepository;

#[tokio::test]
async fn theme_round_trips_through_sqlite() {
    let repo = SqliteRepository::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.theme().await.unwrap(), None);

    repo.save_theme(Theme::Light).await.unwrap();
    assert_eq!(repo.theme().await.unwrap(), Some(Theme::Light));

    // Saving again overwrites instead of duplicating.
    repo.save_theme(Theme::Dark).await.unwrap();
    assert_eq!(repo.theme().await.unwrap(), Some(Theme::Dark));
}

#[tokio::test]
async fn storage_sqlite_constructor_migrates() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    storage
        .preferences
        .save_theme(Theme::Light)
        .await
        .expect("save");
    assert_eq!(
        storage.preferences.theme().await.unwrap(),
        Some(Theme::Light)
    );
}

#[tokio::test]
async fn unknown_persisted_value_falls_back_to_dark() {
    let repo = SqliteRepository::connect("sqlite::memory:")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query("INSERT INTO preferences (key, value) VALUES ('theme', 'sepia')")
        .execute(repo.pool())
        .await
        .expect("seed row");

    assert_eq!(repo.theme().await.unwrap(), Some(Theme::Dark));
}
