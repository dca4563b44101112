pub const SELECT_TRIPS_TABLE: &str = r#"
SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'trips';
"#;

pub const PRAGMA_TRIPS_COLUMNS: &str = r#"
PRAGMA table_info(trips);
"#;

pub const CREATE_TRIPS_TABLE: &str = r#"
CREATE TABLE trips (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT,
    duration INTEGER,
    driver TEXT,
    location TEXT,
    vehicle TEXT,
    start_battery REAL,
    end_battery REAL,
    energy_used REAL,
    distance_m REAL,
    avg_speed REAL,
    notes TEXT,
    favorite INTEGER,
    photo TEXT,
    traffic_violations INTEGER DEFAULT 0
);
"#;

pub const INSERT_SAMPLE_TRIP: &str = r#"
INSERT INTO trips (date, duration, driver, location, vehicle, start_battery, end_battery, energy_used, distance_m, avg_speed, notes, favorite, photo)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13);
"#;

pub const ALTER_ADD_VEHICLE: &str = r#"
ALTER TABLE trips ADD COLUMN vehicle TEXT;
"#;

pub const BACKFILL_VEHICLE: &str = r#"
UPDATE trips SET vehicle = 'FATEC-ACV 1';
"#;

pub const ALTER_ADD_TRAFFIC_VIOLATIONS: &str = r#"
ALTER TABLE trips ADD COLUMN traffic_violations INTEGER DEFAULT 0;
"#;

pub const SELECT_TRIPS_PAGE: &str = r#"
SELECT id,
       COALESCE(driver, '') AS name,
       COALESCE(date, '') AS start_date,
       COALESCE(vehicle, '') AS vehicle,
       COALESCE(notes, '') AS notes,
       COALESCE(favorite, 0) AS favorite
FROM trips
ORDER BY date DESC, id DESC
LIMIT $1 OFFSET $2;
"#;

pub const SELECT_TRIP_BY_ID: &str = r#"
SELECT id,
       COALESCE(date, '') AS date,
       COALESCE(duration, 0) AS duration,
       COALESCE(driver, '') AS driver,
       COALESCE(location, '') AS location,
       COALESCE(vehicle, '') AS vehicle,
       COALESCE(start_battery, 0) AS start_battery,
       COALESCE(end_battery, 0) AS end_battery,
       COALESCE(energy_used, 0) AS energy_used,
       COALESCE(distance_m, 0) AS distance_m,
       COALESCE(avg_speed, 0) AS avg_speed,
       COALESCE(notes, '') AS notes,
       COALESCE(favorite, 0) AS favorite,
       COALESCE(photo, '') AS photo,
       COALESCE(traffic_violations, 0) AS traffic_violations
FROM trips
WHERE id = $1;
"#;

pub const SELECT_TIMESERIES: &str = r#"
SELECT COALESCE(date, '') AS date,
       COALESCE(distance_m, 0) / 1000.0 AS distance_km,
       COALESCE(start_battery, 0) - COALESCE(end_battery, 0) AS battery_usage,
       COALESCE(energy_used, 0) AS energy_used,
       COALESCE(avg_speed, 0) AS avg_speed,
       COALESCE(traffic_violations, 0) AS traffic_violations
FROM trips
ORDER BY date ASC, id ASC;
"#;

pub const UPDATE_TRIP_FAVORITE: &str = r#"
UPDATE trips SET favorite = $1 WHERE id = $2;
"#;

pub const UPDATE_TRIP_NOTES: &str = r#"
UPDATE trips SET notes = $1 WHERE id = $2;
"#;

pub const COUNT_TRIPS: &str = r#"
SELECT COUNT(*) FROM trips;
"#;

pub const SUM_DISTANCE_KM: &str = r#"
SELECT COALESCE(SUM(distance_m), 0) / 1000.0 FROM trips;
"#;

pub const SUM_DURATION_MINUTES: &str = r#"
SELECT COALESCE(SUM(duration), 0) FROM trips;
"#;

pub const SUM_ENERGY_USED: &str = r#"
SELECT COALESCE(SUM(energy_used), 0) FROM trips;
"#;

pub const COUNT_FAVORITE_TRIPS: &str = r#"
SELECT COUNT(*) FROM trips WHERE favorite = 1;
"#;

pub const COUNT_TRIPS_PER_VEHICLE: &str = r#"
SELECT COALESCE(vehicle, '') AS vehicle, COUNT(*) AS trip_count
FROM trips
GROUP BY vehicle;
"#;

pub const SUM_VIOLATIONS_PER_DRIVER: &str = r#"
SELECT COALESCE(driver, '') AS driver, COALESCE(SUM(traffic_violations), 0) AS violations
FROM trips
GROUP BY driver;
"#;
