use crate::models::{JobRecord, LocationType, MatchBreakdown, ProfileRecord, ScoringWeights};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Neutral score used when there is nothing to measure against
const NEUTRAL_SCORE: f64 = 0.5;

/// Experience sub-score until profiles carry an experience level
pub const EXPERIENCE_SCORE: f64 = 0.7;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calculate the full score breakdown for a profile/job pair
///
/// Scoring formula:
/// score = (
///     skills_score * 0.50 +       # Fraction of required skills found in the bio
///     location_score * 0.20 +     # Remote, same city, hybrid or on-site
///     experience_score * 0.15 +   # Constant for now
///     recency_score * 0.15        # Fresh postings score higher
/// )
///
/// `profile_skills` is the set already extracted from the profile bio, so
/// batch callers extract it once per profile.
pub fn calculate_match_breakdown(
    profile_skills: &BTreeSet<String>,
    profile: &ProfileRecord,
    job: &JobRecord,
    weights: &ScoringWeights,
    now: DateTime<Utc>,
) -> MatchBreakdown {
    let (skills, matched_skills) = calculate_skills_score(profile_skills, &job.skills);
    let location = calculate_location_score(profile.location.as_deref(), job);
    let experience = calculate_experience_score(profile, job);
    let recency = calculate_recency_score(job.posted_at, now);

    let total = skills * weights.skills
        + location * weights.location
        + experience * weights.experience
        + recency * weights.recency;

    MatchBreakdown {
        skills,
        location,
        experience,
        recency,
        total: total.clamp(0.0, 1.0),
        matched_skills,
    }
}

/// Calculate skills score (0-1)
///
/// Fraction of the job's skills that the profile has. Extra profile skills
/// are not penalized. A job with no listed skills scores neutral.
pub fn calculate_skills_score(
    profile_skills: &BTreeSet<String>,
    job_skills: &[String],
) -> (f64, Vec<String>) {
    let required: BTreeSet<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();

    if required.is_empty() {
        return (NEUTRAL_SCORE, Vec::new());
    }

    let matched: Vec<String> = required.intersection(profile_skills).cloned().collect();
    let score = matched.len() as f64 / required.len() as f64;

    (score, matched)
}

/// Calculate location score (0-1)
#[inline]
pub fn calculate_location_score(profile_location: Option<&str>, job: &JobRecord) -> f64 {
    if job.location_type == LocationType::Remote {
        return 1.0;
    }

    let profile_location = profile_location.filter(|l| !l.is_empty());
    let job_location = job.location.as_deref().filter(|l| !l.is_empty());

    match (profile_location, job_location) {
        (Some(profile_location), Some(job_location)) => {
            let profile_location = profile_location.to_lowercase();
            let job_location = job_location.to_lowercase();

            // Same city or region
            if profile_location.contains(&job_location) || job_location.contains(&profile_location) {
                1.0
            } else if job.location_type == LocationType::Hybrid {
                0.5
            } else {
                0.2
            }
        }
        _ => NEUTRAL_SCORE,
    }
}

/// Calculate experience score (0-1)
///
/// Profiles do not record an experience level yet, so every pair gets the
/// same value.
#[inline]
pub fn calculate_experience_score(_profile: &ProfileRecord, _job: &JobRecord) -> f64 {
    EXPERIENCE_SCORE
}

/// Calculate recency score (0-1)
///
/// Full score for the first week, linear decay to 0.5 over the next 23
/// days, then a flat 0.3. Age is measured in fractional days.
#[inline]
pub fn calculate_recency_score(posted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(posted_at) = posted_at else {
        return NEUTRAL_SCORE;
    };

    let days = (now - posted_at).num_seconds() as f64 / SECONDS_PER_DAY;

    if days < 7.0 {
        1.0
    } else if days < 30.0 {
        1.0 - ((days - 7.0) / 23.0) * 0.5
    } else {
        0.3
    }
}
