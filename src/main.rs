use tracing::info;
use tripbook_store::{AppConfig, TripStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Tripbook Store...");

    // Open store; a failure here aborts startup
    let store = TripStore::open(&config.db_path).await?;

    let first_page = store.list_page(0, 10).await?;
    info!("First page holds {} trips", first_page.len());

    let stats = store.fleet_statistics().await;
    info!(
        "Fleet: {} trips, {:.2} km, {} min, {:.2} energy used, {} favorites",
        stats.total_trips,
        stats.total_distance_km,
        stats.total_duration_minutes,
        stats.total_energy_used,
        stats.favorite_trip_count
    );

    for (driver, violations) in store.driver_violation_totals().await {
        info!("Driver {driver}: {violations} traffic violations");
    }

    Ok(())
}
