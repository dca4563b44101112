pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use config::AppConfig;
pub use error::StoreError;
pub use models::{FleetStats, TripDetail, TripStatPoint, TripSummary};
pub use store::TripStore;
