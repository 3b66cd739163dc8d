// Route exports
pub mod dedup;
pub mod matches;

use actix_web::{web, HttpResponse};
use validator::ValidationErrors;

use crate::config::MatchingSettings;
use crate::core::{Deduplicator, Matcher};
use crate::models::ErrorResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub deduplicator: Deduplicator,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(dedup::configure),
    );
}

fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
