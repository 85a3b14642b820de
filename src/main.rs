mod api;
mod app;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;
mod session;

use anyhow::Result;
use std::sync::Arc;

use services::{BookingOutbox, DataProvider, InMemoryProvider, SystemClock};
use session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting Callbook backend"
    );

    // Static dataset, validated up front
    let provider = Arc::new(InMemoryProvider::seeded()?);
    tracing::info!(
        profiles = provider.list_profiles().len(),
        posts = provider.list_posts().len(),
        "Dataset loaded"
    );

    let session = Session::for_user(provider.as_ref(), &settings.current_user_id)?;
    tracing::info!(user_id = %session.user_id(), "Session user resolved");

    // Submitted bookings are only logged
    let outbox = BookingOutbox::new(settings.booking_outbox_capacity);
    tokio::spawn(services::booking::log_bookings(outbox.subscribe()));

    let state = app::AppState::new(
        settings.clone(),
        provider,
        session,
        Arc::new(SystemClock),
        outbox,
    );

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
