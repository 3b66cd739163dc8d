// Core algorithm exports
pub mod dedup;
pub mod distance;
pub mod matcher;
pub mod scoring;
pub mod skills;
pub mod text;

pub use dedup::{DedupOutcome, Deduplicator};
pub use distance::{edit_distance, similarity_ratio};
pub use matcher::{MatchResult, Matcher, DEFAULT_LIMIT};
pub use scoring::calculate_match_breakdown;
pub use skills::{SkillVocabulary, DEFAULT_SKILLS};
pub use text::normalize_text;
