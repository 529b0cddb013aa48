use crate::handlers::ServiceError;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use database::models::User;
use tower_sessions::Session;

/// The authenticated user for this request, resolved from the session by
/// `auth_middleware`. Extracting it in a handler enforces authentication:
/// absence turns into a 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.0.role == "admin"
    }

    pub fn is_manager(&self) -> bool {
        self.0.role == "manager" || self.0.role == "admin"
    }

    /// Catalog data (taxonomies, criteria, units, report templates) is
    /// managed by managers and admins only.
    pub fn require_manager(&self) -> Result<(), ServiceError> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(
                "Manager role required".to_string(),
            ))
        }
    }

    pub fn require_admin(&self) -> Result<(), ServiceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden("Admin role required".to_string()))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| ServiceError::Unauthorized("Not logged in".to_string()))
    }
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    session: Session,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let auth_service = AuthService::new(state.db.clone());

    if let Ok(Some(user_id)) = session.get::<uuid::Uuid>("user_id").await {
        match auth_service.find_user_by_id(user_id).await {
            Ok(Some(user)) => {
                req.extensions_mut().insert(AuthUser(user));
            }
            Ok(None) => {
                // Stale session pointing at a deleted user
                let _ = session.delete().await;
            }
            Err(e) => {
                tracing::error!("Failed to resolve session user: {}", e);
            }
        }
    }

    next.run(req).await
}
