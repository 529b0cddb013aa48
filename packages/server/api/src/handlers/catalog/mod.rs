use axum::{
    routing::{delete, get, put},
    Router,
};

pub mod criteria;
pub mod taxonomies;
pub mod units;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/units", get(units::list_units).post(units::create_unit))
        .route(
            "/v1/units/:id",
            put(units::update_unit).delete(units::delete_unit),
        )
        .route(
            "/v1/taxonomies",
            get(taxonomies::list_taxonomies).post(taxonomies::create_taxonomy),
        )
        .route(
            "/v1/taxonomies/:id",
            put(taxonomies::update_taxonomy).delete(taxonomies::delete_taxonomy),
        )
        .route(
            "/v1/taxonomies/:id/categories",
            get(taxonomies::list_categories).post(taxonomies::create_category),
        )
        .route("/v1/categories/:id", delete(taxonomies::delete_category))
        .route(
            "/v1/criteria",
            get(criteria::list_criteria).post(criteria::upsert_criterion),
        )
        .route("/v1/criteria/:id", delete(criteria::delete_criterion))
}
