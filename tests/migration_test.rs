use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use tempfile::TempDir;
use tripbook_store::TripStore;

async fn raw_pool(path: &Path) -> Pool<Sqlite> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
        )
        .await
        .expect("open raw sqlite pool")
}

async fn column_names(path: &Path) -> Vec<String> {
    let pool = raw_pool(path).await;
    let rows = sqlx::query("PRAGMA table_info(trips)")
        .fetch_all(&pool)
        .await
        .expect("table_info");
    let names = rows
        .iter()
        .map(|r| r.get::<String, _>("name"))
        .collect();
    pool.close().await;
    names
}

async fn all_summaries(store: &TripStore) -> Vec<tripbook_store::TripSummary> {
    let mut all = Vec::new();
    let mut page = 0;
    loop {
        let chunk = store.list_page(page, 50).await.expect("list page");
        if chunk.is_empty() {
            break;
        }
        all.extend(chunk);
        page += 1;
    }
    all
}

#[tokio::test]
async fn fresh_open_creates_seeds_and_migrates_nothing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("trips.db");

    let store = TripStore::open(&db_path).await.expect("open store");
    let trips = all_summaries(&store).await;
    assert_eq!(trips.len(), 10);
    assert!(trips.iter().all(|t| t.vehicle == "FATEC-ACV 1"));
    drop(store);

    let columns = column_names(&db_path).await;
    assert!(columns.contains(&"vehicle".to_string()));
    assert!(columns.contains(&"traffic_violations".to_string()));
}

#[tokio::test]
async fn reopening_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("trips.db");

    let store = TripStore::open(&db_path).await.expect("first open");
    drop(store);
    let columns_first = column_names(&db_path).await;

    let store = TripStore::open(&db_path).await.expect("second open");
    let stats = store.fleet_statistics().await;
    assert_eq!(stats.total_trips, 10, "reopen must not re-seed");
    drop(store);

    let columns_second = column_names(&db_path).await;
    assert_eq!(columns_first, columns_second);
}

#[tokio::test]
async fn creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("deeper").join("trips.db");

    let store = TripStore::open(&db_path).await.expect("open store");
    assert_eq!(store.fleet_statistics().await.total_trips, 10);
    assert!(db_path.exists());
}

/// Schema as it was before the `vehicle` and `traffic_violations` columns.
const LEGACY_TABLE: &str = "CREATE TABLE trips (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT,
    duration INTEGER,
    driver TEXT,
    location TEXT,
    start_battery REAL,
    end_battery REAL,
    energy_used REAL,
    distance_m REAL,
    avg_speed REAL,
    notes TEXT,
    favorite INTEGER,
    photo TEXT
)";

async fn seed_legacy_db(path: &Path) {
    let pool = raw_pool(path).await;
    sqlx::query(LEGACY_TABLE).execute(&pool).await.unwrap();
    for (date, driver) in [("2024-03-01 09:00", "Ana"), ("2024-03-02 10:30", "Pedro")] {
        sqlx::query(
            "INSERT INTO trips (date, duration, driver, location, start_battery, end_battery, \
             energy_used, distance_m, avg_speed, notes, favorite, photo) \
             VALUES ($1, 20, $2, 'Lisbon', 80.0, 70.0, 3.0, 1500.0, 5.0, '', 0, '')",
        )
        .bind(date)
        .bind(driver)
        .execute(&pool)
        .await
        .unwrap();
    }
    pool.close().await;
}

#[tokio::test]
async fn legacy_table_gains_columns_with_backfill() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("trips.db");
    seed_legacy_db(&db_path).await;

    let store = TripStore::open(&db_path).await.expect("migrating open");

    // Existing data survives and is not re-seeded over.
    let trips = all_summaries(&store).await;
    assert_eq!(trips.len(), 2);

    // Every pre-existing row got the back-filled vehicle label and the
    // violations column default.
    for trip in &trips {
        assert_eq!(trip.vehicle, "FATEC-ACV 1");
        let detail = store
            .get_detail(trip.id)
            .await
            .expect("detail query")
            .expect("row exists");
        assert_eq!(detail.traffic_violations, 0);
    }
}

#[tokio::test]
async fn legacy_migration_then_reopen_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("trips.db");
    seed_legacy_db(&db_path).await;

    let store = TripStore::open(&db_path).await.expect("migrating open");
    drop(store);
    let columns_after_migration = column_names(&db_path).await;

    let store = TripStore::open(&db_path).await.expect("reopen");
    assert_eq!(all_summaries(&store).await.len(), 2);
    drop(store);

    assert_eq!(column_names(&db_path).await, columns_after_migration);
}
