use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::{validation_failed, AppState};
use crate::models::{
    responses::DuplicatePair, DedupeBatchRequest, DedupeBatchResponse, DuplicateCheckRequest,
    DuplicateCheckResponse, HashRequest, HashResponse, JobContent,
};

/// Configure all dedup-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/jobs/hash", web::post().to(hash_job))
        .route("/jobs/duplicates", web::post().to(check_duplicate))
        .route("/jobs/dedupe", web::post().to(dedupe_jobs));
}

/// Content hash endpoint
///
/// POST /api/v1/jobs/hash
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "company": "string",
///   "description": "string"
/// }
/// ```
async fn hash_job(
    state: web::Data<AppState>,
    req: web::Json<HashRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let job: JobContent = req.into_inner().into();
    let hash = state.deduplicator.generate_hash(&job);

    HttpResponse::Ok().json(HashResponse { hash })
}

/// Duplicate check endpoint
///
/// POST /api/v1/jobs/duplicates
///
/// Request body:
/// ```json
/// {
///   "job": { "title": "string", "company": "string", "description": "string" },
///   "existing": [ { "title": "string", "company": "string", "description": "string" } ]
/// }
/// ```
async fn check_duplicate(
    state: web::Data<AppState>,
    req: web::Json<DuplicateCheckRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let hash = state.deduplicator.generate_hash(&req.job);
    let duplicate_index = state.deduplicator.find_duplicate(&req.job, &req.existing);

    tracing::debug!(
        "Checked posting {} against {} existing: duplicate_index={:?}",
        hash,
        req.existing.len(),
        duplicate_index
    );

    HttpResponse::Ok().json(DuplicateCheckResponse {
        hash,
        is_duplicate: duplicate_index.is_some(),
        duplicate_index,
    })
}

/// Batch dedupe endpoint
///
/// POST /api/v1/jobs/dedupe
async fn dedupe_jobs(
    state: web::Data<AppState>,
    req: web::Json<DedupeBatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let outcome = state.deduplicator.dedupe(&req.jobs);

    HttpResponse::Ok().json(DedupeBatchResponse {
        unique: outcome.unique,
        duplicates: outcome
            .duplicates
            .into_iter()
            .map(|(index, duplicate_of)| DuplicatePair { index, duplicate_of })
            .collect(),
    })
}
