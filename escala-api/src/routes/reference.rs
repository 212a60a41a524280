use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use escala_core::{EmployeeId, Holiday, Vacation};

use crate::{
    app_state::AppState,
    repositories::{HolidayRepository, VacationRepository},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/holidays/:year/:month", get(holidays))
        .route("/employees/:employee_id/vacations", get(vacations))
}

#[instrument(name = "holidays", skip(app_state))]
async fn holidays(
    Path((year, month)): Path<(i32, u8)>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Holiday>>, ApiError> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::bad_request(format!("month out of range: {}", month)));
    }
    let holidays = app_state.holiday_repo.holidays_in(year, month).await?;
    Ok(Json(holidays))
}

#[instrument(name = "vacations", skip(app_state))]
async fn vacations(
    Path(employee_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Vacation>>, ApiError> {
    let vacations = app_state
        .vacation_repo
        .vacations_of(EmployeeId::new(employee_id))
        .await?;
    Ok(Json(vacations))
}
