//! Phenology Dashboard API Library
//!
//! HTTP server answering dashboard widget interactions with figure
//! descriptions built from the in-memory phenology dataset.

pub mod config;
pub mod credentials;
pub mod handlers;
pub mod metrics;
pub mod state;

use axum::{
    routing::get,
    Extension, Router,
};
use std::sync::Arc;

use crate::state::AppState;

/// Build the application router. Middleware layers are added by the caller.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Page description
        .route("/api/layout", get(handlers::layout::layout_handler))
        .route("/api/controls", get(handlers::controls::controls_handler))
        // Figures
        .route("/api/figures/map", get(handlers::figures::map_handler))
        .route(
            "/api/figures/scatter",
            get(handlers::figures::scatter_handler),
        )
        .route(
            "/api/figures/timeseries",
            get(handlers::figures::timeseries_handler)
                .post(handlers::figures::timeseries_hover_handler),
        )
        .route("/api/table", get(handlers::table::table_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .layer(Extension(state))
}
