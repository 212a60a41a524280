use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use escala_core::{Assignment, EmployeeId, Schedule, UnitId};

use crate::{app_state::AppState, domain::ScheduleView, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/:unit_id/:year/:month",
            get(schedule_view).delete(delete_schedule),
        )
        .route("/:unit_id/:year/:month/assignments", post(record_assignments))
}

#[instrument(name = "schedule_view", skip(app_state))]
async fn schedule_view(
    Path((unit_id, year, month)): Path<(i32, i32, u8)>,
    State(app_state): State<AppState>,
) -> Result<Json<ScheduleView>, ApiError> {
    let view = app_state
        .schedule_service
        .build_schedule_view(UnitId::new(unit_id), month, year)
        .await?;
    Ok(Json(view))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignmentEntry {
    employee_id: i32,
    day: u8,
    shift_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordAssignmentsPayload {
    #[serde(default)]
    notes: String,
    entries: Vec<AssignmentEntry>,
}

#[instrument(name = "record_assignments", skip(app_state, payload))]
async fn record_assignments(
    Path((unit_id, year, month)): Path<(i32, i32, u8)>,
    State(app_state): State<AppState>,
    Json(payload): Json<RecordAssignmentsPayload>,
) -> Result<(StatusCode, Json<Schedule>), ApiError> {
    let entries: Vec<Assignment> = payload
        .entries
        .into_iter()
        .map(|e| Assignment {
            employee_id: EmployeeId::new(e.employee_id),
            day: e.day,
            shift_code: e.shift_code,
        })
        .collect();

    let schedule = app_state
        .schedule_service
        .record_assignments(UnitId::new(unit_id), month, year, &payload.notes, &entries)
        .await?;

    Ok((StatusCode::CREATED, Json(schedule)))
}

#[instrument(name = "delete_schedule", skip(app_state))]
async fn delete_schedule(
    Path((unit_id, year, month)): Path<(i32, i32, u8)>,
    State(app_state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    app_state
        .schedule_service
        .remove_schedule(UnitId::new(unit_id), month, year)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
