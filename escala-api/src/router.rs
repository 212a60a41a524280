use axum::{http::Method, routing::get, Router};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(connection_pool: PgPool) -> Router<()> {
    let app = Router::new()
        .route("/", get(|| async { "escala-api" }))
        .nest("/units", routes::units::router())
        .nest("/shift-types", routes::shift_types::router())
        .nest("/schedules", routes::schedules::router())
        .nest("/coverage", routes::coverage::router())
        .merge(routes::reference::router());

    let app_state = AppState::new(connection_pool);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
