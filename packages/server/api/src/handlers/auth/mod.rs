use axum::{
    routing::{get, post},
    Router,
};

pub mod login;
pub mod session;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login::login_handler))
        .route("/auth/session", get(session::session_handler))
        .route("/auth/logout", get(session::logout_handler))
}
