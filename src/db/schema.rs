use sqlx::Row;
use tracing::info;

use crate::db::{queries, DbPool};
use crate::error::StoreError;

/// Label written into `vehicle` for rows that predate the column.
pub const DEFAULT_VEHICLE_LABEL: &str = "FATEC-ACV 1";

/// One additive migration: gated purely on the absence of `column`, applied in
/// declaration order. Forward-only; nothing is ever removed or renamed.
struct ColumnMigration {
    column: &'static str,
    add_column: &'static str,
    backfill: Option<&'static str>,
}

const MIGRATIONS: &[ColumnMigration] = &[
    ColumnMigration {
        column: "vehicle",
        add_column: queries::ALTER_ADD_VEHICLE,
        backfill: Some(queries::BACKFILL_VEHICLE),
    },
    ColumnMigration {
        column: "traffic_violations",
        add_column: queries::ALTER_ADD_TRAFFIC_VIOLATIONS,
        // The ALTER carries DEFAULT 0, which SQLite applies to existing rows.
        backfill: None,
    },
];

/// Brings the `trips` table to the current schema. Creates and seeds it on
/// first run; otherwise probes the live column set and applies whatever
/// additive migrations are still missing. Safe to run repeatedly: an
/// up-to-date schema results in no writes.
pub async fn init_schema(pool: &DbPool) -> Result<(), StoreError> {
    if !trips_table_exists(pool).await? {
        info!("trips table does not exist, creating and seeding");
        create_and_seed(pool).await?;
        return Ok(());
    }

    let columns = trips_columns(pool).await?;
    for migration in MIGRATIONS {
        if columns.iter().any(|c| c.as_str() == migration.column) {
            continue;
        }
        info!(column = migration.column, "applying additive migration");
        sqlx::query(migration.add_column)
            .execute(pool)
            .await
            .map_err(|source| StoreError::Migration {
                step: migration.column,
                source,
            })?;
        if let Some(backfill) = migration.backfill {
            sqlx::query(backfill)
                .execute(pool)
                .await
                .map_err(|source| StoreError::Migration {
                    step: migration.column,
                    source,
                })?;
        }
    }

    info!("trip database schema is up to date");
    Ok(())
}

async fn trips_table_exists(pool: &DbPool) -> Result<bool, StoreError> {
    let row = sqlx::query(queries::SELECT_TRIPS_TABLE)
        .fetch_optional(pool)
        .await
        .map_err(StoreError::SchemaInspection)?;
    Ok(row.is_some())
}

async fn trips_columns(pool: &DbPool) -> Result<Vec<String>, StoreError> {
    let rows = sqlx::query(queries::PRAGMA_TRIPS_COLUMNS)
        .fetch_all(pool)
        .await
        .map_err(StoreError::SchemaInspection)?;
    rows.iter()
        .map(|row| row.try_get("name").map_err(StoreError::SchemaInspection))
        .collect()
}

struct SampleTrip {
    date: &'static str,
    duration: i64,
    driver: &'static str,
    location: &'static str,
    start_battery: f64,
    end_battery: f64,
    energy_used: f64,
    distance_m: f64,
    avg_speed: f64,
    notes: &'static str,
    favorite: bool,
}

/// First-run demo population only, not durable business data.
const SAMPLE_TRIPS: &[SampleTrip] = &[
    SampleTrip {
        date: "2025-07-01 10:05",
        duration: 12,
        driver: "Luis",
        location: "Oporto",
        start_battery: 95.0,
        end_battery: 88.3,
        energy_used: 2.1,
        distance_m: 820.0,
        avg_speed: 4.1,
        notes: "Obstacle course trial",
        favorite: false,
    },
    SampleTrip {
        date: "2025-07-02 11:00",
        duration: 15,
        driver: "Jorge",
        location: "Oporto",
        start_battery: 90.0,
        end_battery: 83.1,
        energy_used: 2.5,
        distance_m: 1050.0,
        avg_speed: 4.2,
        notes: "Line following lap",
        favorite: true,
    },
    SampleTrip {
        date: "2025-07-03 09:40",
        duration: 10,
        driver: "Rui",
        location: "Oporto",
        start_battery: 98.0,
        end_battery: 93.8,
        energy_used: 1.6,
        distance_m: 700.0,
        avg_speed: 4.3,
        notes: "",
        favorite: false,
    },
    SampleTrip {
        date: "2025-07-04 13:20",
        duration: 9,
        driver: "Luiza",
        location: "Oporto",
        start_battery: 93.5,
        end_battery: 89.0,
        energy_used: 1.9,
        distance_m: 610.0,
        avg_speed: 4.1,
        notes: "Manual control",
        favorite: false,
    },
    SampleTrip {
        date: "2025-07-05 14:10",
        duration: 14,
        driver: "Luis",
        location: "Oporto",
        start_battery: 97.0,
        end_battery: 91.5,
        energy_used: 2.2,
        distance_m: 940.0,
        avg_speed: 4.0,
        notes: "Autonomous driving demo",
        favorite: true,
    },
    SampleTrip {
        date: "2025-07-06 16:00",
        duration: 13,
        driver: "Jorge",
        location: "Oporto",
        start_battery: 91.0,
        end_battery: 85.2,
        energy_used: 2.1,
        distance_m: 880.0,
        avg_speed: 4.1,
        notes: "",
        favorite: false,
    },
    SampleTrip {
        date: "2025-07-07 08:40",
        duration: 11,
        driver: "Rui",
        location: "Oporto",
        start_battery: 94.5,
        end_battery: 90.7,
        energy_used: 1.4,
        distance_m: 650.0,
        avg_speed: 3.6,
        notes: "Early morning quick run",
        favorite: false,
    },
    SampleTrip {
        date: "2025-07-08 12:30",
        duration: 17,
        driver: "Luiza",
        location: "Oporto",
        start_battery: 89.8,
        end_battery: 82.0,
        energy_used: 2.9,
        distance_m: 1120.0,
        avg_speed: 4.0,
        notes: "Longest continuous run",
        favorite: true,
    },
    SampleTrip {
        date: "2025-07-09 15:05",
        duration: 10,
        driver: "Luis",
        location: "Oporto",
        start_battery: 96.2,
        end_battery: 93.0,
        energy_used: 1.1,
        distance_m: 590.0,
        avg_speed: 3.5,
        notes: "",
        favorite: false,
    },
    SampleTrip {
        date: "2025-07-10 17:20",
        duration: 13,
        driver: "Jorge",
        location: "Oporto",
        start_battery: 88.7,
        end_battery: 85.3,
        energy_used: 1.2,
        distance_m: 670.0,
        avg_speed: 3.9,
        notes: "Sensor calibration",
        favorite: false,
    },
];

async fn create_and_seed(pool: &DbPool) -> Result<(), StoreError> {
    sqlx::query(queries::CREATE_TRIPS_TABLE)
        .execute(pool)
        .await
        .map_err(|source| StoreError::Migration {
            step: "create trips table",
            source,
        })?;

    for trip in SAMPLE_TRIPS {
        sqlx::query(queries::INSERT_SAMPLE_TRIP)
            .bind(trip.date)
            .bind(trip.duration)
            .bind(trip.driver)
            .bind(trip.location)
            .bind(DEFAULT_VEHICLE_LABEL)
            .bind(trip.start_battery)
            .bind(trip.end_battery)
            .bind(trip.energy_used)
            .bind(trip.distance_m)
            .bind(trip.avg_speed)
            .bind(trip.notes)
            .bind(trip.favorite)
            .bind("")
            .execute(pool)
            .await
            .map_err(|source| StoreError::Migration {
                step: "seed sample trips",
                source,
            })?;
    }

    info!(count = SAMPLE_TRIPS.len(), "trips table created and seeded");
    Ok(())
}
