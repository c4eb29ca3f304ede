use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::ApplicationId;
use super::query::{ApplicationQuery, SortKey, StatusBucket};
use super::service::{TrackerService, TrackerServiceError};
use super::store::{ApplicationStore, StoreError};
use super::timeline::TimelineMode;

/// Router builder exposing the tracker's read surface over HTTP.
pub fn tracker_router<S>(service: Arc<TrackerService<S>>) -> Router
where
    S: ApplicationStore + 'static,
{
    Router::new()
        .route("/api/v1/applications", get(list_handler::<S>))
        .route(
            "/api/v1/applications/export.csv",
            get(export_handler::<S>),
        )
        .route(
            "/api/v1/applications/:application_id/timeline",
            get(timeline_handler::<S>),
        )
        .route("/api/v1/dashboard", get(dashboard_handler::<S>))
        .route("/api/v1/calendar/interviews", get(calendar_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimelineParams {
    #[serde(default)]
    mode: Option<String>,
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let query = ApplicationQuery {
        text: params.q.unwrap_or_default(),
        bucket: StatusBucket::parse(params.filter.as_deref().unwrap_or_default()),
        sort: SortKey::parse(params.sort.as_deref().unwrap_or_default()),
    };

    match service.search(&query) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn timeline_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Path(application_id): Path<String>,
    Query(params): Query<TimelineParams>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    let mode = TimelineMode::parse(params.mode.as_deref().unwrap_or_default());
    let id = ApplicationId(application_id);

    match service.timeline(&id, mode) {
        Ok(timeline) => (StatusCode::OK, Json(timeline)).into_response(),
        Err(TrackerServiceError::Store(StoreError::NotFound)) => {
            let payload = json!({
                "error": "application not found",
                "application_id": id.0,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
) -> Response
where
    S: ApplicationStore + 'static,
{
    // The evaluation instant is taken once at the edge; everything below it
    // is pure over that value.
    match service.dashboard(Utc::now()) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn export_handler<S>(State(service): State<Arc<TrackerService<S>>>) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.export() {
        Ok(document) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            document,
        )
            .into_response(),
        Err(err) => internal_error(err),
    }
}

pub(crate) async fn calendar_handler<S>(State(service): State<Arc<TrackerService<S>>>) -> Response
where
    S: ApplicationStore + 'static,
{
    match service.calendar() {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(err) => internal_error(err),
    }
}

fn internal_error(err: TrackerServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
