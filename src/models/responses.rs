use serde::{Deserialize, Serialize};
use crate::models::domain::{ContentHash, RankedMatch};

/// Response for the hash endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResponse {
    pub hash: ContentHash,
}

/// Response for the duplicate check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateCheckResponse {
    pub hash: ContentHash,
    #[serde(rename = "isDuplicate")]
    pub is_duplicate: bool,
    #[serde(rename = "duplicateIndex")]
    pub duplicate_index: Option<usize>,
}

/// A posting dropped from a batch and the kept posting it duplicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub index: usize,
    #[serde(rename = "duplicateOf")]
    pub duplicate_of: usize,
}

/// Response for the batch dedupe endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupeBatchResponse {
    pub unique: Vec<usize>,
    pub duplicates: Vec<DuplicatePair>,
}

/// Response for both ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse<T> {
    pub matches: Vec<RankedMatch<T>>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
