#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryPreferences, PreferencesRepository, Storage, StorageError};
pub use sqlite::SqliteInitError;
