use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of a posting that feed its content fingerprint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

impl JobContent {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
        }
    }
}

/// SHA-256 fingerprint of a normalized posting, as 64 lowercase hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the work happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Remote,
    Hybrid,
    #[serde(rename = "onsite", alias = "on-site", alias = "on_site")]
    OnSite,
}

impl Default for LocationType {
    fn default() -> Self {
        LocationType::OnSite
    }
}

/// Job posting fields used by the matching engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "locationType", alias = "location_type", default)]
    pub location_type: LocationType,
    #[serde(rename = "postedAt", alias = "posted_at", default)]
    pub posted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Developer profile fields used by the matching engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Per-factor view of a single profile/job comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub location: f64,
    pub experience: f64,
    pub recency: f64,
    pub total: f64,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// A ranked record with the score that placed it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch<T> {
    pub record: T,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub breakdown: MatchBreakdown,
}

/// Scoring weights
///
/// The four weights must sum to 1.0 so that a weighted total of
/// sub-scores in [0, 1] stays in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub experience: f64,
    pub recency: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.experience + self.recency
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.50,
            location: 0.20,
            experience: 0.15,
            recency: 0.15,
        }
    }
}

/// Tunables for the deduplication engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DedupConfig {
    /// Title similarity must be strictly above this for a fuzzy duplicate
    pub fuzzy_threshold: f64,
    /// Number of description graphemes that feed the content hash
    pub description_prefix_chars: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.85,
            description_prefix_chars: 500,
        }
    }
}
