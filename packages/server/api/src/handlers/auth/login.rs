use crate::handlers::ServiceError;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use shared::dto::LoginRequest;
use tower_sessions::Session;

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, ServiceError> {
    let auth_service = AuthService::new(state.db.clone());

    let user = auth_service
        .authenticate(&body.username, &body.password)
        .await
        .map_err(|e| {
            tracing::warn!("Login failed for '{}': {}", body.username, e);
            ServiceError::Unauthorized("Invalid username or password".to_string())
        })?;

    session
        .insert("user_id", user.id)
        .await
        .map_err(|e| ServiceError::DatabaseError(format!("Failed to persist session: {}", e)))?;

    tracing::info!("User '{}' logged in", user.username);

    Ok(Json(json!({
        "status": "authenticated",
        "user": {
            "id": user.id,
            "username": user.username,
            "email": user.email,
            "role": user.role
        }
    })))
}
