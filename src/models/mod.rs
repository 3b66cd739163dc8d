// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ContentHash, DedupConfig, JobContent, JobRecord, LocationType, MatchBreakdown, ProfileRecord, RankedMatch, ScoringWeights};
pub use requests::{DedupeBatchRequest, DuplicateCheckRequest, FindCandidatesRequest, FindMatchesRequest, HashRequest};
pub use responses::{DedupeBatchResponse, DuplicateCheckResponse, ErrorResponse, HashResponse, HealthResponse, MatchesResponse};
