use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use escala_core::ShiftType;

use crate::{app_state::AppState, repositories::ShiftTypeRepository, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_shift_types))
}

#[instrument(name = "list_shift_types", skip(app_state))]
async fn list_shift_types(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ShiftType>>, ApiError> {
    let types = app_state.shift_type_repo.list_shift_types().await?;
    Ok(Json(types))
}
