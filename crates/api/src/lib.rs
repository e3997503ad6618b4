//! HTTP API server for doctor consultation schedules.
//!
//! Exposes CRUD endpoints over the in-memory registry, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use registry::{ConsultationStore, InMemoryConsultationStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::consultations::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ConsultationStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/consultations",
            get(routes::consultations::list::<S>).post(routes::consultations::create::<S>),
        )
        .route(
            "/consultations/{id}",
            get(routes::consultations::get::<S>)
                .put(routes::consultations::update::<S>)
                .delete(routes::consultations::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by an empty in-memory registry.
pub fn create_default_state() -> Arc<AppState<InMemoryConsultationStore>> {
    Arc::new(AppState::new(InMemoryConsultationStore::new()))
}
