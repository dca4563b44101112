use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::error::StoreError;

pub mod queries;
pub mod schema;

pub type DbPool = Pool<Sqlite>;

/// Opens (creating if absent) the single-file database at `db_path`, making
/// sure its containing directory exists first. One connection only: the store
/// is a single-handle, single-caller design and SQLite does not arbitrate
/// concurrent writers.
pub async fn init_pool(db_path: &Path) -> Result<DbPool, StoreError> {
    if let Some(dir) = db_path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| StoreError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(StoreError::Open)?;

    Ok(pool)
}
