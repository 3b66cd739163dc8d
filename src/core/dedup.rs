use crate::core::{
    distance::similarity_ratio,
    text::{normalize_text, truncate_graphemes},
};
use crate::config::DedupConfigError;
use crate::models::{ContentHash, DedupConfig, JobContent};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Result of deduplicating a batch of postings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupOutcome {
    /// Indices of postings kept, in input order
    pub unique: Vec<usize>,
    /// `(dropped, kept)` index pairs
    pub duplicates: Vec<(usize, usize)>,
}

/// Duplicate detection for scraped job postings
///
/// A posting is fingerprinted from its normalized title, company and the
/// first `description_prefix_chars` graphemes of its description. Two
/// postings are likely duplicates when their fingerprints match, or when
/// they come from the same company and their titles are nearly identical.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    config: DedupConfig,
}

impl Deduplicator {
    /// Build a deduplicator without checking `config`
    pub fn new(config: DedupConfig) -> Self {
        Self { config }
    }

    /// Build a deduplicator, rejecting out-of-range tunables
    pub fn try_new(config: DedupConfig) -> Result<Self, DedupConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Compute the content fingerprint of a posting
    pub fn generate_hash(&self, job: &JobContent) -> ContentHash {
        let title = normalize_text(&job.title);
        let company = normalize_text(&job.company);
        let description = normalize_text(truncate_graphemes(
            &job.description,
            self.config.description_prefix_chars,
        ));

        // Normalized fields never contain '|'
        let mut hasher = Sha256::new();
        hasher.update(title.as_bytes());
        hasher.update(b"|");
        hasher.update(company.as_bytes());
        hasher.update(b"|");
        hasher.update(description.as_bytes());

        ContentHash::from_digest(&hasher.finalize())
    }

    /// Decide whether two postings describe the same listing
    pub fn are_likely_duplicates(&self, a: &JobContent, b: &JobContent) -> bool {
        if self.generate_hash(a) == self.generate_hash(b) {
            tracing::trace!("Exact content hash match");
            return true;
        }

        self.is_fuzzy_duplicate(a, b)
    }

    /// Index of the first posting in `existing` that duplicates `incoming`
    pub fn find_duplicate(&self, incoming: &JobContent, existing: &[JobContent]) -> Option<usize> {
        let incoming_hash = self.generate_hash(incoming);

        existing.iter().position(|candidate| {
            incoming_hash == self.generate_hash(candidate) || self.is_fuzzy_duplicate(incoming, candidate)
        })
    }

    /// Keep the first posting of each duplicate cluster
    ///
    /// Each posting is compared against the postings kept so far; a
    /// duplicate is attributed to the earliest kept posting it matches.
    pub fn dedupe(&self, postings: &[JobContent]) -> DedupOutcome {
        let hashes: Vec<ContentHash> = postings.iter().map(|p| self.generate_hash(p)).collect();
        let mut outcome = DedupOutcome::default();

        for (idx, posting) in postings.iter().enumerate() {
            let kept_match = outcome.unique.iter().copied().find(|&kept| {
                hashes[kept] == hashes[idx] || self.is_fuzzy_duplicate(&postings[kept], posting)
            });

            match kept_match {
                Some(kept) => outcome.duplicates.push((idx, kept)),
                None => outcome.unique.push(idx),
            }
        }

        tracing::debug!(
            "Deduplicated {} postings: {} unique, {} duplicates",
            postings.len(),
            outcome.unique.len(),
            outcome.duplicates.len()
        );

        outcome
    }

    /// Same normalized company and title similarity above the threshold
    fn is_fuzzy_duplicate(&self, a: &JobContent, b: &JobContent) -> bool {
        if normalize_text(&a.company) != normalize_text(&b.company) {
            return false;
        }

        let similarity = similarity_ratio(&normalize_text(&a.title), &normalize_text(&b.title));
        let duplicate = similarity > self.config.fuzzy_threshold;

        if duplicate {
            tracing::trace!("Fuzzy title match (similarity {:.3})", similarity);
        }

        duplicate
    }
}
