use std::sync::Arc;

use tracing::{error, info};

use society_client::{load_snapshot_with_retry, RestBackend, RestClient, RetryPolicy};
use society_core::domain::SubcollectionStatistics;
use society_core::services::ObligationService;
use society_shared::config::AppConfig;
use society_shared::events::{AppEvent, EventBus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    society_shared::telemetry::init_telemetry();

    info!("Society Manager starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let events = EventBus::default();
    let mut event_log = events.subscribe();

    // Give the bundled backend time to boot before the first request.
    let warmup = config.startup.warmup();
    if !warmup.is_zero() {
        info!("Waiting {:?} for backend at {}...", warmup, config.backend.base_url);
        tokio::time::sleep(warmup).await;
    }

    // Connect and load everything the views need.
    let backend = RestBackend::new(RestClient::from_settings(&config.backend));
    let policy = RetryPolicy::from(&config.startup);
    let snapshot = load_snapshot_with_retry(&backend, &policy).await?;

    events.publish(AppEvent::DataReloaded {
        resource: "all".to_string(),
    });
    if let Ok(event) = event_log.try_recv() {
        info!("Event: {:?}", event);
    }

    // Per-subcollection progress overview through the ledger service.
    let ledger = ObligationService::new(Arc::new(backend.obligations));
    for subcollection in &snapshot.subcollections {
        let obligations = ledger.list_by_subcollection(subcollection.id).await?;
        let stats = SubcollectionStatistics::from_obligations(&obligations);
        info!(
            "{}: {} members, {}% collected ({} of {})",
            subcollection.display_name(),
            stats.total_members,
            stats.collection_progress.percentage,
            stats.collection_progress.paid_amount,
            stats.collection_progress.total_amount
        );
    }

    info!("Ready.");
    Ok(())
}
