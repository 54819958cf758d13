use crate::config::PersonsConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::PersonRepository;
use crate::services::{ProductsProbe, SupabaseProbe};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
mod database;
mod domain;
mod error;
mod features;
mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PersonRepository>,
    pub probe: Arc<dyn ProductsProbe>,
    pub config: Arc<PersonsConfig>,
}

// features are composed here
pub fn app_router(state: AppState) -> Router {
    let api_router = Router::new().nest("/persons", features::persons::api::persons_api_router());

    Router::new()
        .merge(features::site::site_router())
        .nest("/persons", features::persons::persons_router())
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(state.config.static_dir.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("persons_server=info,tower_http=info")
            }),
        )
        .init();

    // load centralized config
    let config = PersonsConfig::from_env();

    // the schema must exist before any traffic is served
    let pool = database::connect(&config).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
        probe: Arc::new(SupabaseProbe::from_config(&config)),
        config: Arc::new(config.clone()),
    };

    let app = app_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
