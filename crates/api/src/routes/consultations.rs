//! Consultation schedule CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use common::ConsultationId;
use registry::{ConsultationRecord, ConsultationStore};
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ConsultationStore> {
    pub store: S,
}

impl<S: ConsultationStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /consultations — list all schedules in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list<S: ConsultationStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<ConsultationRecord>> {
    Json(state.store.list().await)
}

/// GET /consultations/:id — fetch one schedule.
#[tracing::instrument(skip(state))]
pub async fn get<S: ConsultationStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ConsultationRecord>, ApiError> {
    let Path(id) = id?;
    let record = state.store.get(ConsultationId::new(id)).await?;
    Ok(Json(record))
}

/// POST /consultations — add a schedule, echoing it back.
#[tracing::instrument(skip_all)]
pub async fn create<S: ConsultationStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    record: Result<Json<ConsultationRecord>, JsonRejection>,
) -> Result<Json<ConsultationRecord>, ApiError> {
    let Json(record) = record?;
    let created = state.store.create(record).await?;
    tracing::info!(id = %created.id, "consultation schedule created");
    Ok(Json(created))
}

/// PUT /consultations/:id — replace a schedule, echoing the replacement.
#[tracing::instrument(skip_all)]
pub async fn update<S: ConsultationStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<i64>, PathRejection>,
    record: Result<Json<ConsultationRecord>, JsonRejection>,
) -> Result<Json<ConsultationRecord>, ApiError> {
    let Path(id) = id?;
    let Json(record) = record?;
    let updated = state.store.update(ConsultationId::new(id), record).await?;
    tracing::info!(%id, "consultation schedule updated");
    Ok(Json(updated))
}

/// DELETE /consultations/:id — remove a schedule.
#[tracing::instrument(skip(state))]
pub async fn delete<S: ConsultationStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.store.delete(ConsultationId::new(id)).await?;
    tracing::info!(%id, "consultation schedule deleted");
    Ok(Json(MessageResponse {
        message: "Consultation schedule deleted",
    }))
}
