pub mod stats;
pub mod trip;

pub use stats::{FleetStats, TripStatPoint};
pub use trip::{TripDetail, TripRow, TripSummary};
