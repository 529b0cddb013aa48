pub mod assessment_service;
pub mod auth_service;
