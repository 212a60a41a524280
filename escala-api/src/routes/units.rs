use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use escala_core::{Employee, Unit, UnitId};

use crate::{
    app_state::AppState,
    repositories::{EmployeeRepository, UnitRepository},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_units))
        .route("/:unit_id/employees", get(unit_employees))
}

#[instrument(name = "list_units", skip(app_state))]
async fn list_units(State(app_state): State<AppState>) -> Result<Json<Vec<Unit>>, ApiError> {
    let units = app_state.unit_repo.list_units().await?;
    Ok(Json(units))
}

#[derive(Debug, Deserialize)]
struct RosterQuery {
    role: Option<String>,
}

#[instrument(name = "unit_employees", skip(app_state))]
async fn unit_employees(
    Path(unit_id): Path<i32>,
    Query(query): Query<RosterQuery>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let unit_id = UnitId::new(unit_id);
    app_state
        .unit_repo
        .get_unit(unit_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("unit not found: {}", unit_id)))?;

    let employees = app_state
        .employee_repo
        .employees_of(unit_id, query.role.as_deref())
        .await?;
    Ok(Json(employees))
}
