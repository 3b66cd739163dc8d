//! Job Match - deduplication and matching engine for the job board
//!
//! This library fingerprints scraped job postings so that re-posts from
//! several sources collapse to one listing, and ranks jobs against developer
//! profiles (and profiles against jobs) with a weighted multi-factor score.
//! Every engine is stateless apart from its configuration.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Deduplicator, Matcher, MatchResult, SkillVocabulary, edit_distance, normalize_text, similarity_ratio};
pub use crate::models::{ContentHash, DedupConfig, JobContent, JobRecord, LocationType, MatchBreakdown, ProfileRecord, RankedMatch, ScoringWeights};
