use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{JobContent, JobRecord, ProfileRecord};

/// Request to fingerprint a posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HashRequest {
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

impl From<HashRequest> for JobContent {
    fn from(req: HashRequest) -> Self {
        JobContent::new(req.title, req.company, req.description)
    }
}

/// Request to check one posting against existing ones
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DuplicateCheckRequest {
    pub job: JobContent,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub existing: Vec<JobContent>,
}

/// Request to deduplicate a batch of postings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DedupeBatchRequest {
    #[validate(length(min = 1, max = 1000))]
    pub jobs: Vec<JobContent>,
}

/// Request to rank jobs for a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub profile: ProfileRecord,
    #[validate(length(max = 5000))]
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to rank profiles for a job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindCandidatesRequest {
    pub job: JobRecord,
    #[validate(length(max = 5000))]
    pub profiles: Vec<ProfileRecord>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_rejected() {
        let req: FindMatchesRequest =
            serde_json::from_str(r#"{"profile": {}, "jobs": [], "limit": 0}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_limit_optional() {
        let req: FindCandidatesRequest =
            serde_json::from_str(r#"{"job": {"id": "j1"}, "profiles": []}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.limit.is_none());
    }

    #[test]
    fn test_empty_dedupe_batch_rejected() {
        let req = DedupeBatchRequest { jobs: vec![] };
        assert!(req.validate().is_err());
    }
}
