//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use overmark_core::Config;

use crate::state::AppState;

/// Initialize the entire application. The shared state ends up inside the
/// router via `with_state`, so the router is all the caller needs.
pub fn initialize_app(config: Config) -> Result<axum::Router> {
    // Initialize tracing first so startup problems are visible
    crate::telemetry::init_tracing();

    tracing::info!("Configuration loaded and validated successfully");

    let state = Arc::new(AppState::new(config.clone())?);

    let router = routes::setup_routes(&config, state)?;

    Ok(router)
}
