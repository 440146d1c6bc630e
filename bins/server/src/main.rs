//! Compta API Server
//!
//! Main entry point for the Compta dashboard backend.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use compta_airtable::AirtableClient;
use compta_api::{AppState, create_router};
use compta_core::clock::SystemClock;
use compta_core::service::SummaryService;
use compta_core::summary::CotisationRates;
use compta_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compta=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect the record source
    let source = AirtableClient::new(&config.airtable)?;
    info!(
        base_id = %config.airtable.base_id,
        table = %config.airtable.table,
        "Airtable record source configured"
    );

    let service = SummaryService::new(Arc::new(source), Arc::new(SystemClock))
        .with_rates(CotisationRates::from(&config.cotisation))
        .with_start_year(config.dashboard.start_year);
    info!(
        start_year = config.dashboard.start_year,
        main_rate = %config.cotisation.main_rate,
        secondary_rate = %config.cotisation.secondary_rate,
        "Summary service ready"
    );

    // Create application state
    let state = AppState {
        service: Arc::new(service),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
