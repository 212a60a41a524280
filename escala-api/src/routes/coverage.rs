use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use escala_core::UnitId;

use crate::{app_state::AppState, domain::CoverageView, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/:unit_id/:year/:month", get(coverage_view))
}

#[instrument(name = "coverage_view", skip(app_state))]
async fn coverage_view(
    Path((unit_id, year, month)): Path<(i32, i32, u8)>,
    State(app_state): State<AppState>,
) -> Result<Json<CoverageView>, ApiError> {
    let view = app_state
        .schedule_service
        .build_coverage_view(UnitId::new(unit_id), month, year)
        .await?;
    Ok(Json(view))
}
