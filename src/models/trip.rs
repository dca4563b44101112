use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use sqlx::FromRow;
use tracing::warn;

/// Storage format of the `date` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One row of the trip list, as surfaced to the presentation layer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripSummary {
    pub id: i64,
    /// Driver display name.
    pub name: String,
    /// Raw `yyyy-MM-dd HH:mm` timestamp, shown verbatim in the list.
    pub start_date: String,
    pub vehicle: String,
    pub notes: String,
    pub favorite: bool,
}

/// Full `trips` row exactly as stored.
#[derive(Debug, Clone, FromRow)]
pub struct TripRow {
    pub id: i64,
    pub date: String,
    pub duration: i64,
    pub driver: String,
    pub location: String,
    pub vehicle: String,
    pub start_battery: f64,
    pub end_battery: f64,
    pub energy_used: f64,
    pub distance_m: f64,
    pub avg_speed: f64,
    pub notes: String,
    pub favorite: bool,
    pub photo: String,
    pub traffic_violations: i64,
}

/// Single-trip detail projection: the stored row enriched with derived
/// date/time strings and the distance converted to kilometers.
#[derive(Debug, Clone, Serialize)]
pub struct TripDetail {
    pub id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub start_charge: f64,
    pub end_charge: f64,
    pub energy_used: f64,
    pub distance_km: f64,
    pub average_speed: f64,
    pub vehicle: String,
    pub location: String,
    pub notes: String,
    pub favorite: bool,
    pub photo: String,
    pub traffic_violations: i64,
}

impl From<TripRow> for TripDetail {
    fn from(row: TripRow) -> Self {
        let (start_date, start_time, end_time) =
            match NaiveDateTime::parse_from_str(&row.date, TIMESTAMP_FORMAT) {
                Ok(start) => {
                    let end = start + Duration::minutes(row.duration);
                    (
                        start.format("%Y-%m-%d").to_string(),
                        start.format("%H:%M").to_string(),
                        end.format("%H:%M").to_string(),
                    )
                }
                Err(e) => {
                    warn!(trip_id = row.id, date = %row.date, "unparseable trip timestamp: {e}");
                    (String::new(), String::new(), String::new())
                }
            };

        Self {
            id: row.id,
            name: row.driver,
            // End date is reported equal to the start date; trips crossing
            // midnight keep the start day (known simplification).
            end_date: start_date.clone(),
            start_date,
            start_time,
            end_time,
            duration_minutes: row.duration,
            start_charge: row.start_battery,
            end_charge: row.end_battery,
            energy_used: row.energy_used,
            distance_km: row.distance_m / 1000.0,
            average_speed: row.avg_speed,
            vehicle: row.vehicle,
            location: row.location,
            notes: row.notes,
            favorite: row.favorite,
            photo: row.photo,
            traffic_violations: row.traffic_violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, duration: i64) -> TripRow {
        TripRow {
            id: 1,
            date: date.to_string(),
            duration,
            driver: "Luiza".to_string(),
            location: "Oporto".to_string(),
            vehicle: "FATEC-ACV 1".to_string(),
            start_battery: 89.8,
            end_battery: 82.0,
            energy_used: 2.9,
            distance_m: 1120.0,
            avg_speed: 4.0,
            notes: String::new(),
            favorite: false,
            photo: String::new(),
            traffic_violations: 0,
        }
    }

    #[test]
    fn derives_times_and_distance() {
        let detail = TripDetail::from(row("2025-07-08 12:30", 17));
        assert_eq!(detail.start_date, "2025-07-08");
        assert_eq!(detail.end_date, "2025-07-08");
        assert_eq!(detail.start_time, "12:30");
        assert_eq!(detail.end_time, "12:47");
        assert!((detail.distance_km - 1.12).abs() < 1e-9);
    }

    #[test]
    fn end_date_stays_on_start_day_across_midnight() {
        let detail = TripDetail::from(row("2025-07-08 23:50", 30));
        assert_eq!(detail.end_time, "00:20");
        assert_eq!(detail.end_date, "2025-07-08");
    }

    #[test]
    fn unparseable_timestamp_yields_empty_derived_fields() {
        let detail = TripDetail::from(row("not a date", 17));
        assert_eq!(detail.start_date, "");
        assert_eq!(detail.start_time, "");
        assert_eq!(detail.end_time, "");
        assert_eq!(detail.duration_minutes, 17);
    }
}
