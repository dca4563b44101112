use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::db::{self, queries, schema, DbPool};
use crate::error::StoreError;
use crate::models::{FleetStats, TripDetail, TripRow, TripStatPoint, TripSummary};

/// Handle to the trip database. Opened once at startup and passed by reference
/// to whoever needs it; all operations are independent request/response calls
/// with no state beyond the underlying pool.
pub struct TripStore {
    pool: DbPool,
}

impl TripStore {
    /// Opens (creating if absent) the store at `db_path` and brings its schema
    /// up to date. Any failure here is fatal: no handle is returned and the
    /// caller must not attempt further operations.
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let pool = db::init_pool(db_path.as_ref()).await?;
        schema::init_schema(&pool).await?;
        info!(path = %db_path.as_ref().display(), "trip store is open");
        Ok(Self { pool })
    }

    /// Trips ordered by timestamp descending (id breaks ties), windowed by
    /// `page * page_size`. A page past the end is an empty list, not an error.
    pub async fn list_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<TripSummary>, StoreError> {
        sqlx::query_as::<_, TripSummary>(queries::SELECT_TRIPS_PAGE)
            .bind(i64::from(page_size))
            .bind(i64::from(page) * i64::from(page_size))
            .fetch_all(&self.pool)
            .await
            .map_err(|source| StoreError::Query {
                operation: "list trips page",
                source,
            })
    }

    /// Full detail projection for one trip. `Ok(None)` when no row matches;
    /// that is a normal outcome, not a failure.
    pub async fn get_detail(&self, id: i64) -> Result<Option<TripDetail>, StoreError> {
        let row = sqlx::query_as::<_, TripRow>(queries::SELECT_TRIP_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| StoreError::Query {
                operation: "get trip detail",
                source,
            })?;
        Ok(row.map(TripDetail::from))
    }

    /// All trips as charting points, ascending by timestamp.
    pub async fn timeseries(&self) -> Result<Vec<TripStatPoint>, StoreError> {
        sqlx::query_as::<_, TripStatPoint>(queries::SELECT_TIMESERIES)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| StoreError::Query {
                operation: "trip timeseries",
                source,
            })
    }

    /// Sets the favorite flag for one trip. A missing id is silent success:
    /// zero rows change and the caller is not told whether the row existed.
    pub async fn set_favorite(&self, id: i64, favorite: bool) -> Result<(), StoreError> {
        let result = sqlx::query(queries::UPDATE_TRIP_FAVORITE)
            .bind(favorite)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| StoreError::Mutation {
                operation: "set favorite",
                id,
                source,
            })?;
        info!(
            trip_id = id,
            favorite,
            rows = result.rows_affected(),
            "favorite status updated"
        );
        Ok(())
    }

    /// Replaces the notes text for one trip, stored verbatim. Same silent
    /// success contract as [`set_favorite`](Self::set_favorite).
    pub async fn set_notes(&self, id: i64, notes: &str) -> Result<(), StoreError> {
        let result = sqlx::query(queries::UPDATE_TRIP_NOTES)
            .bind(notes)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| StoreError::Mutation {
                operation: "set notes",
                id,
                source,
            })?;
        info!(trip_id = id, rows = result.rows_affected(), "notes updated");
        Ok(())
    }

    /// Fleet-wide aggregates. Each aggregate is its own query; one failing is
    /// logged and leaves that field at its default, the rest still compute.
    pub async fn fleet_statistics(&self) -> FleetStats {
        let mut stats = FleetStats::default();

        match self.scalar_i64(queries::COUNT_TRIPS).await {
            Ok(n) => stats.total_trips = n,
            Err(e) => warn!("fleet statistics: trip count failed: {e}"),
        }
        match self.scalar_f64(queries::SUM_DISTANCE_KM).await {
            Ok(km) => stats.total_distance_km = km,
            Err(e) => warn!("fleet statistics: distance sum failed: {e}"),
        }
        match self.scalar_i64(queries::SUM_DURATION_MINUTES).await {
            Ok(min) => stats.total_duration_minutes = min,
            Err(e) => warn!("fleet statistics: duration sum failed: {e}"),
        }
        match self.scalar_f64(queries::SUM_ENERGY_USED).await {
            Ok(energy) => stats.total_energy_used = energy,
            Err(e) => warn!("fleet statistics: energy sum failed: {e}"),
        }
        match self.scalar_i64(queries::COUNT_FAVORITE_TRIPS).await {
            Ok(n) => stats.favorite_trip_count = n,
            Err(e) => warn!("fleet statistics: favorite count failed: {e}"),
        }
        match sqlx::query_as::<_, (String, i64)>(queries::COUNT_TRIPS_PER_VEHICLE)
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => stats.trips_per_vehicle = rows.into_iter().collect(),
            Err(e) => warn!("fleet statistics: per-vehicle count failed: {e}"),
        }

        stats
    }

    /// Total traffic violations per driver. An empty map (with a warning
    /// logged) when the query fails, never an error.
    pub async fn driver_violation_totals(&self) -> HashMap<String, i64> {
        match sqlx::query_as::<_, (String, i64)>(queries::SUM_VIOLATIONS_PER_DRIVER)
            .fetch_all(&self.pool)
            .await
        {
            Ok(rows) => rows.into_iter().collect(),
            Err(e) => {
                warn!("driver violation totals failed: {e}");
                HashMap::new()
            }
        }
    }

    async fn scalar_i64(&self, sql: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(sql).fetch_one(&self.pool).await
    }

    async fn scalar_f64(&self, sql: &str) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(sql).fetch_one(&self.pool).await
    }
}
