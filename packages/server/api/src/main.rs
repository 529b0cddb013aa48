use axum::{http, routing::get, Json, Router};
use database::Database;
use dotenv::dotenv;
use serde_json::json;
use std::net::SocketAddr;

mod handlers;
mod middleware;
mod services;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let session_secure = std::env::var("SESSION_SECURE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    // Connect to Database. Constructed once here and injected via AppState;
    // handlers only ever clone the handle.
    let db = Database::connect(&database_url).await?;
    db.migrate().await?;

    let app_state = AppState { db };

    // Setup CORS
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(
            std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3001".to_string())
                .parse::<http::HeaderValue>()?,
        )
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
        ])
        .allow_headers([
            http::header::CONTENT_TYPE,
            http::header::AUTHORIZATION,
            http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Initialize Session Store
    let session_store = tower_sessions::MemoryStore::default();
    let session_layer = tower_sessions::SessionManagerLayer::new(session_store)
        .with_secure(session_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax);

    // Setup Router using handlers
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(handlers::auth::router())
        .merge(handlers::catalog::router())
        .merge(handlers::risks::router())
        .merge(handlers::matrix::router())
        .merge(handlers::reports::router())
        .merge(handlers::users::router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::auth_middleware,
        ))
        .layer(session_layer)
        .layer(cors)
        .with_state(app_state.clone());

    let addr: SocketAddr = bind_addr.parse()?;
    tracing::info!("Risk API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    match state.db.health_check().await {
        Ok(()) => Json(json!({ "status": "ok" })),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Json(json!({ "status": "degraded" }))
        }
    }
}
