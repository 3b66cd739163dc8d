use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{validation_failed, AppState};
use crate::models::{FindCandidatesRequest, FindMatchesRequest, HealthResponse, MatchesResponse};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/jobs", web::post().to(find_matches))
        .route("/matches/candidates", web::post().to(find_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank jobs for a profile
///
/// POST /api/v1/matches/jobs
///
/// Request body:
/// ```json
/// {
///   "profile": { "id": "string", "bio": "string", "location": "string" },
///   "jobs": [ { "id": "string", "skills": ["string"], "location": "string",
///               "locationType": "remote|hybrid|onsite", "postedAt": "RFC 3339" } ],
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let limit = state.matching.effective_limit(req.limit);

    tracing::info!("Ranking {} jobs for profile: {}, limit: {}", req.jobs.len(), req.profile.id, limit);

    let result = state.matcher.find_best_matches(&req.profile, req.jobs, limit);

    HttpResponse::Ok().json(MatchesResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    })
}

/// Rank profiles for a job
///
/// POST /api/v1/matches/candidates
///
/// Request body:
/// ```json
/// {
///   "job": { "id": "string", "skills": ["string"], "locationType": "onsite" },
///   "profiles": [ { "id": "string", "bio": "string", "location": "string" } ],
///   "limit": 20
/// }
/// ```
async fn find_candidates(
    state: web::Data<AppState>,
    req: web::Json<FindCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_candidates request: {}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let limit = state.matching.effective_limit(req.limit);

    tracing::info!("Ranking {} profiles for job: {}, limit: {}", req.profiles.len(), req.job.id, limit);

    let result = state.matcher.find_best_candidates(&req.job, req.profiles, limit);

    HttpResponse::Ok().json(MatchesResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    })
}
