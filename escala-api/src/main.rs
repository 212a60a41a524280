use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod domain;
mod repositories;
mod router;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,escala_api=debug".into()),
        )
        .init();

    let config = config::read_config()?;

    let connection_pool = PgPoolOptions::new().connect_lazy_with(config.database.with_db());
    sqlx::migrate!().run(&connection_pool).await?;

    let app = router::create(connection_pool);

    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on {}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
