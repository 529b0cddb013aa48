use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use database::repositories::UserRepository;
use shared::dto::CreateUserRequest;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/users", get(list_users).post(create_user))
        .route(
            "/v1/users/:id",
            axum::routing::put(update_role).delete(delete_user),
        )
}

const ROLES: [&str; 3] = ["analyst", "manager", "admin"];

fn user_json(user: &database::models::User) -> Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "role": user.role,
        "created_at": user.created_at
    })
}

pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Value>>, ServiceError> {
    user.require_admin()?;

    let repo = UserRepository::new(state.db.pool.clone());
    let users = repo.list().await?;
    Ok(Json(users.iter().map(user_json).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<Value>, ServiceError> {
    user.require_admin()?;

    if !ROLES.contains(&body.role.as_str()) {
        return Err(ServiceError::BadRequest(format!(
            "Unknown role '{}'",
            body.role
        )));
    }
    if body.password.len() < 8 {
        return Err(ServiceError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let auth_service = AuthService::new(state.db.clone());
    let created = auth_service
        .create_user(&body.username, body.email.as_deref(), &body.password, &body.role)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user '{}': {}", body.username, e);
            ServiceError::DatabaseError("Failed to create user".to_string())
        })?;

    tracing::info!("User '{}' created with role {}", created.username, created.role);
    Ok(Json(user_json(&created)))
}

#[derive(Deserialize)]
pub struct RoleUpdate {
    pub role: String,
}

pub async fn update_role(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<RoleUpdate>,
) -> Result<Json<Value>, ServiceError> {
    user.require_admin()?;

    if !ROLES.contains(&body.role.as_str()) {
        return Err(ServiceError::BadRequest(format!(
            "Unknown role '{}'",
            body.role
        )));
    }

    let repo = UserRepository::new(state.db.pool.clone());
    let updated = repo
        .update_role(id, &body.role)
        .await?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
    Ok(Json(user_json(&updated)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ServiceError> {
    user.require_admin()?;

    if user.0.id == id {
        return Err(ServiceError::BadRequest(
            "Cannot delete your own account".to_string(),
        ));
    }

    let repo = UserRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("User not found".to_string()));
    }
    Ok(Json(json!({ "status": "deleted" })))
}
