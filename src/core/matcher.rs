use crate::core::{scoring::calculate_match_breakdown, skills::SkillVocabulary};
use crate::models::{JobRecord, MatchBreakdown, ProfileRecord, RankedMatch, ScoringWeights};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Default number of results returned by the ranking operations
pub const DEFAULT_LIMIT: usize = 20;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult<T> {
    pub matches: Vec<RankedMatch<T>>,
    pub total_candidates: usize,
}

/// Profile/job compatibility scoring and ranking
///
/// # Factors
/// 1. Skills overlap with the job's requirements
/// 2. Location fit
/// 3. Experience alignment
/// 4. Posting recency
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    vocabulary: SkillVocabulary,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, vocabulary: SkillVocabulary) -> Self {
        Self { weights, vocabulary }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            vocabulary: SkillVocabulary::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Compatibility score in [0, 1] for one profile and one job
    pub fn calculate_job_match_score(&self, profile: &ProfileRecord, job: &JobRecord) -> f64 {
        self.calculate_job_match_score_at(profile, job, Utc::now())
    }

    pub fn calculate_job_match_score_at(
        &self,
        profile: &ProfileRecord,
        job: &JobRecord,
        now: DateTime<Utc>,
    ) -> f64 {
        self.score_breakdown_at(profile, job, now).total
    }

    /// Per-factor scores for one profile and one job
    pub fn score_breakdown(&self, profile: &ProfileRecord, job: &JobRecord) -> MatchBreakdown {
        self.score_breakdown_at(profile, job, Utc::now())
    }

    pub fn score_breakdown_at(
        &self,
        profile: &ProfileRecord,
        job: &JobRecord,
        now: DateTime<Utc>,
    ) -> MatchBreakdown {
        let profile_skills = self.profile_skills(profile);
        calculate_match_breakdown(&profile_skills, profile, job, &self.weights, now)
    }

    /// Rank jobs for a profile, best first
    ///
    /// # Arguments
    /// * `profile` - The candidate being matched
    /// * `jobs` - Jobs to rank
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult with at most `limit` jobs, sorted by descending score.
    /// Equal scores keep their input order.
    pub fn find_best_matches(
        &self,
        profile: &ProfileRecord,
        jobs: Vec<JobRecord>,
        limit: usize,
    ) -> MatchResult<JobRecord> {
        self.find_best_matches_at(profile, jobs, limit, Utc::now())
    }

    pub fn find_best_matches_at(
        &self,
        profile: &ProfileRecord,
        jobs: Vec<JobRecord>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> MatchResult<JobRecord> {
        let total_candidates = jobs.len();
        let profile_skills = self.profile_skills(profile);

        let scored: Vec<RankedMatch<JobRecord>> = jobs
            .into_par_iter()
            .map(|job| {
                let breakdown =
                    calculate_match_breakdown(&profile_skills, profile, &job, &self.weights, now);
                tracing::trace!("Job {} scored {:.3}", job.id, breakdown.total);

                RankedMatch {
                    match_score: breakdown.total,
                    breakdown,
                    record: job,
                }
            })
            .collect();

        let matches = rank(scored, limit);

        tracing::debug!(
            "Ranked {} jobs for profile {}, returning {}",
            total_candidates,
            profile.id,
            matches.len()
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Rank profiles for a job, best first
    pub fn find_best_candidates(
        &self,
        job: &JobRecord,
        profiles: Vec<ProfileRecord>,
        limit: usize,
    ) -> MatchResult<ProfileRecord> {
        self.find_best_candidates_at(job, profiles, limit, Utc::now())
    }

    pub fn find_best_candidates_at(
        &self,
        job: &JobRecord,
        profiles: Vec<ProfileRecord>,
        limit: usize,
        now: DateTime<Utc>,
    ) -> MatchResult<ProfileRecord> {
        let total_candidates = profiles.len();

        let scored: Vec<RankedMatch<ProfileRecord>> = profiles
            .into_par_iter()
            .map(|profile| {
                let profile_skills = self.profile_skills(&profile);
                let breakdown =
                    calculate_match_breakdown(&profile_skills, &profile, job, &self.weights, now);
                tracing::trace!("Profile {} scored {:.3}", profile.id, breakdown.total);

                RankedMatch {
                    match_score: breakdown.total,
                    breakdown,
                    record: profile,
                }
            })
            .collect();

        let matches = rank(scored, limit);

        tracing::debug!(
            "Ranked {} profiles for job {}, returning {}",
            total_candidates,
            job.id,
            matches.len()
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }

    fn profile_skills(&self, profile: &ProfileRecord) -> BTreeSet<String> {
        profile
            .bio
            .as_deref()
            .map(|bio| self.vocabulary.extract(bio))
            .unwrap_or_default()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Stable sort by descending score, then keep the top `limit`
fn rank<T>(mut scored: Vec<RankedMatch<T>>, limit: usize) -> Vec<RankedMatch<T>> {
    scored.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationType;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn create_job(id: &str, skills: &[&str], location_type: LocationType, age_days: i64) -> JobRecord {
        JobRecord {
            id: id.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: Some("Austin".to_string()),
            location_type,
            posted_at: Some(now() - Duration::days(age_days)),
        }
    }

    fn create_profile(id: &str, bio: &str, location: &str) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            bio: Some(bio.to_string()),
            location: Some(location.to_string()),
        }
    }

    #[test]
    fn test_match_score_scenario() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile(
            "p1",
            "Experienced in Python and Kubernetes, based in Austin",
            "Austin, TX",
        );
        let mut job = create_job("j1", &["python", "docker"], LocationType::OnSite, 0);
        job.posted_at = None;

        let breakdown = matcher.score_breakdown_at(&profile, &job, now());
        assert_eq!(breakdown.skills, 0.5);
        assert_eq!(breakdown.location, 1.0);

        let score = matcher.calculate_job_match_score_at(&profile, &job, now());
        let expected = 0.5 * 0.5 + 1.0 * 0.2 + 0.7 * 0.15 + 0.5 * 0.15;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_profile_without_bio() {
        let matcher = Matcher::with_default_weights();
        let profile = ProfileRecord::default();
        let job = create_job("j1", &["rust"], LocationType::Remote, 1);

        let breakdown = matcher.score_breakdown_at(&profile, &job, now());
        assert_eq!(breakdown.skills, 0.0);
        assert!(breakdown.total >= 0.0 && breakdown.total <= 1.0);
    }

    #[test]
    fn test_find_best_matches_sorted() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("p1", "Rust and Docker on Linux", "Denver");

        let jobs = vec![
            create_job("weak", &["java", "spring"], LocationType::OnSite, 60),
            create_job("strong", &["rust", "docker"], LocationType::Remote, 1),
            create_job("middle", &["rust", "kafka"], LocationType::Hybrid, 10),
        ];

        let result = matcher.find_best_matches_at(&profile, jobs, 10, now());

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.record.id.as_str()).collect();
        assert_eq!(ids, vec!["strong", "middle", "weak"]);
    }

    #[test]
    fn test_find_best_matches_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("p1", "python", "Austin");

        let jobs: Vec<JobRecord> = (0..30)
            .map(|i| create_job(&i.to_string(), &["python"], LocationType::OnSite, i))
            .collect();

        let result = matcher.find_best_matches_at(&profile, jobs, 5, now());
        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 30);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile("p1", "python", "Austin");

        let jobs: Vec<JobRecord> = (0..50)
            .map(|i| create_job(&format!("job-{}", i), &["python"], LocationType::Remote, 1))
            .collect();

        let result = matcher.find_best_matches_at(&profile, jobs, DEFAULT_LIMIT, now());
        let ids: Vec<String> = result.matches.iter().map(|m| m.record.id.clone()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("job-{}", i)).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_find_best_candidates() {
        let matcher = Matcher::with_default_weights();
        let job = create_job("j1", &["react", "typescript"], LocationType::OnSite, 2);

        let profiles = vec![
            create_profile("none", "I paint landscapes", "Paris"),
            create_profile("both", "React and TypeScript for years", "Austin"),
            create_profile("one", "Mostly React", "Austin"),
        ];

        let result = matcher.find_best_candidates_at(&job, profiles, 2, now());

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.record.id.as_str()).collect();
        assert_eq!(ids, vec!["both", "one"]);
        assert_eq!(result.matches[0].breakdown.matched_skills, vec!["react", "typescript"]);
    }

    #[test]
    fn test_empty_inputs() {
        let matcher = Matcher::with_default_weights();

        let result = matcher.find_best_matches_at(&ProfileRecord::default(), vec![], 20, now());
        assert!(result.matches.is_empty());

        let job = create_job("j1", &[], LocationType::Remote, 0);
        let result = matcher.find_best_candidates_at(&job, vec![], 20, now());
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_custom_vocabulary() {
        let matcher = Matcher::new(ScoringWeights::default(), SkillVocabulary::new(["zig"]));
        let profile = create_profile("p1", "Zig and Rust", "Austin");
        let job = create_job("j1", &["zig", "rust"], LocationType::Remote, 0);

        let breakdown = matcher.score_breakdown_at(&profile, &job, now());
        assert_eq!(breakdown.skills, 0.5);
        assert_eq!(breakdown.matched_skills, vec!["zig"]);
    }
}
