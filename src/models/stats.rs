use std::collections::HashMap;

use serde::Serialize;
use sqlx::FromRow;

/// Fleet-wide aggregates over the whole trip table. Aggregates are computed
/// independently; a field keeps its default when its query failed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FleetStats {
    pub total_trips: i64,
    pub total_distance_km: f64,
    pub total_duration_minutes: i64,
    pub total_energy_used: f64,
    pub favorite_trip_count: i64,
    pub trips_per_vehicle: HashMap<String, i64>,
}

/// One charting point, ascending by trip timestamp.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripStatPoint {
    pub date: String,
    pub distance_km: f64,
    pub battery_usage: f64,
    pub energy_used: f64,
    pub avg_speed: f64,
    pub traffic_violations: i64,
}
