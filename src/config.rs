use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::{Deduplicator, Matcher, SkillVocabulary};
use crate::models::{DedupConfig, ScoringWeights};

/// Allowed drift of the weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(#[from] WeightsError),

    #[error("Invalid dedup settings: {0}")]
    InvalidDedupConfig(#[from] DedupConfigError),

    #[error("Invalid matching settings: {0}")]
    InvalidMatching(String),
}

/// Reasons a set of scoring weights is rejected
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{0}' is negative")]
    Negative(&'static str),

    #[error("weights sum to {0}, expected 1.0")]
    BadSum(f64),
}

/// Reasons a dedup configuration is rejected
#[derive(Debug, Error, PartialEq)]
pub enum DedupConfigError {
    #[error("fuzzy_threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("description_prefix_chars must be positive")]
    EmptyPrefix,
}

impl DedupConfig {
    /// Check that the threshold is a ratio and the prefix is non-empty
    pub fn validate(&self) -> Result<(), DedupConfigError> {
        // NaN fails the range check
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(DedupConfigError::ThresholdOutOfRange(self.fuzzy_threshold));
        }

        if self.description_prefix_chars == 0 {
            return Err(DedupConfigError::EmptyPrefix);
        }

        Ok(())
    }
}

impl ScoringWeights {
    /// Check that every weight is non-negative and that they sum to 1.0
    pub fn validate(&self) -> Result<(), WeightsError> {
        let named = [
            ("skills", self.skills),
            ("location", self.location),
            ("experience", self.experience),
            ("recency", self.recency),
        ];

        for (name, weight) in named {
            if weight < 0.0 || weight.is_nan() {
                return Err(WeightsError::Negative(name));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }

        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dedup: DedupSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub skills: SkillSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DedupSettings {
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(default = "default_description_prefix_chars")]
    pub description_prefix_chars: usize,
}

impl Default for DedupSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            description_prefix_chars: default_description_prefix_chars(),
        }
    }
}

fn default_fuzzy_threshold() -> f64 { 0.85 }
fn default_description_prefix_chars() -> usize { 500 }

impl DedupSettings {
    pub fn to_config(&self) -> Result<DedupConfig, DedupConfigError> {
        let config = DedupConfig {
            fuzzy_threshold: self.fuzzy_threshold,
            description_prefix_chars: self.description_prefix_chars,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and cap
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit) as usize
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_recency_weight")]
    pub recency: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            location: default_location_weight(),
            experience: default_experience_weight(),
            recency: default_recency_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.50 }
fn default_location_weight() -> f64 { 0.20 }
fn default_experience_weight() -> f64 { 0.15 }
fn default_recency_weight() -> f64 { 0.15 }

impl WeightsConfig {
    pub fn to_weights(&self) -> Result<ScoringWeights, WeightsError> {
        let weights = ScoringWeights {
            skills: self.skills,
            location: self.location,
            experience: self.experience,
            recency: self.recency,
        };
        weights.validate()?;
        Ok(weights)
    }
}

/// Skill vocabulary overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSettings {
    /// Replaces the built-in vocabulary when set
    pub vocabulary: Option<Vec<String>>,
    /// Added on top of the active vocabulary
    #[serde(default)]
    pub extra: Vec<String>,
}

impl SkillSettings {
    pub fn to_vocabulary(&self) -> SkillVocabulary {
        let base = match &self.vocabulary {
            Some(skills) => SkillVocabulary::new(skills),
            None => SkillVocabulary::default(),
        };
        base.extend(&self.extra)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBMATCH__)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBMATCH__DEDUP__FUZZY_THRESHOLD -> dedup.fuzzy_threshold
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build the engines described by these settings
    ///
    /// This is the single validation point: weights, dedup tunables and
    /// ranking limits are all checked here.
    pub fn engines(&self) -> Result<(Deduplicator, Matcher), SettingsError> {
        let weights = self.scoring.weights.to_weights()?;
        let dedup = self.dedup.to_config()?;

        if self.matching.max_limit == 0 || self.matching.default_limit == 0 {
            return Err(SettingsError::InvalidMatching(
                "limits must be positive".to_string(),
            ));
        }

        Ok((
            Deduplicator::new(dedup),
            Matcher::new(weights, self.skills.to_vocabulary()),
        ))
    }

    /// Reject values the engines cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.engines().map(|_| ())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("JOBMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skills, 0.50);
        assert_eq!(weights.location, 0.20);
        assert_eq!(weights.experience, 0.15);
        assert_eq!(weights.recency, 0.15);
        assert_eq!(weights.to_weights().unwrap(), ScoringWeights::default());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let weights = WeightsConfig {
            skills: 0.6,
            ..WeightsConfig::default()
        };
        assert!(matches!(weights.to_weights(), Err(WeightsError::BadSum(_))));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            skills: 0.9,
            location: -0.2,
            experience: 0.15,
            recency: 0.15,
        };
        assert_eq!(weights.validate(), Err(WeightsError::Negative("location")));
    }

    #[test]
    fn test_default_dedup() {
        let dedup = DedupSettings::default().to_config().unwrap();
        assert_eq!(dedup, DedupConfig::default());
        assert_eq!(dedup.fuzzy_threshold, 0.85);
        assert_eq!(dedup.description_prefix_chars, 500);
    }

    #[test]
    fn test_invalid_dedup() {
        let out_of_range = DedupSettings {
            fuzzy_threshold: 1.5,
            ..DedupSettings::default()
        };
        assert_eq!(
            out_of_range.to_config(),
            Err(DedupConfigError::ThresholdOutOfRange(1.5))
        );

        let zero_prefix = DedupSettings {
            description_prefix_chars: 0,
            ..DedupSettings::default()
        };
        assert_eq!(zero_prefix.to_config(), Err(DedupConfigError::EmptyPrefix));
    }

    #[test]
    fn test_dedup_config_validate() {
        assert!(DedupConfig::default().validate().is_ok());

        let boundaries = [0.0, 1.0];
        for threshold in boundaries {
            let config = DedupConfig {
                fuzzy_threshold: threshold,
                ..DedupConfig::default()
            };
            assert!(config.validate().is_ok());
        }

        let negative = DedupConfig {
            fuzzy_threshold: -1.0,
            description_prefix_chars: 0,
        };
        assert_eq!(negative.validate(), Err(DedupConfigError::ThresholdOutOfRange(-1.0)));

        let nan = DedupConfig {
            fuzzy_threshold: f64::NAN,
            ..DedupConfig::default()
        };
        assert!(matches!(nan.validate(), Err(DedupConfigError::ThresholdOutOfRange(_))));

        let zero_prefix = DedupConfig {
            description_prefix_chars: 0,
            ..DedupConfig::default()
        };
        assert_eq!(zero_prefix.validate(), Err(DedupConfigError::EmptyPrefix));
    }

    #[test]
    fn test_invalid_dedup_settings_wrapped() {
        let settings = Settings {
            dedup: DedupSettings {
                fuzzy_threshold: 2.0,
                ..DedupSettings::default()
            },
            ..Settings::default()
        };

        assert!(matches!(
            settings.engines(),
            Err(SettingsError::InvalidDedupConfig(DedupConfigError::ThresholdOutOfRange(_)))
        ));
    }

    #[test]
    fn test_engines_from_defaults() {
        let (dedup, matcher) = Settings::default().engines().unwrap();
        assert_eq!(*dedup.config(), DedupConfig::default());
        assert_eq!(*matcher.weights(), ScoringWeights::default());
        assert_eq!(*matcher.vocabulary(), SkillVocabulary::default());
    }

    #[test]
    fn test_effective_limit() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.effective_limit(None), 20);
        assert_eq!(matching.effective_limit(Some(5)), 5);
        assert_eq!(matching.effective_limit(Some(500)), 100);
    }

    #[test]
    fn test_skill_settings() {
        let defaults = SkillSettings::default().to_vocabulary();
        assert_eq!(defaults, SkillVocabulary::default());

        let custom = SkillSettings {
            vocabulary: Some(vec!["rust".to_string()]),
            extra: vec!["zig".to_string()],
        }
        .to_vocabulary();
        assert_eq!(custom.iter().collect::<Vec<_>>(), vec!["rust", "zig"]);
    }

    #[test]
    fn test_shipped_default_file() {
        let settings: Settings = toml::from_str(include_str!("../config/default.toml")).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.dedup.fuzzy_threshold, 0.85);
        assert_eq!(settings.matching.default_limit, 20);
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }
}
