//! Matcher configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mohu_core::{MohuError, Result};

/// Configuration for [`Matcher`](crate::Matcher).
///
/// All fields have usable defaults; a default-constructed config produces a
/// matcher with no confusion data and no similarity floor.
///
/// # Example
/// ```
/// use mohu::MatcherConfig;
///
/// let config = MatcherConfig {
///     similarity_threshold: 0.6,
///     ..MatcherConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Candidates farther than this weighted edit distance are discarded.
    pub max_distance: usize,

    /// Strip tone digits when normalizing to pinyin.
    /// Ignoring tones generally improves recall.
    pub ignore_tones: bool,

    /// Default similarity floor for searches; may be overridden per call.
    /// Must lie in [0, 1].
    pub similarity_threshold: f32,

    /// Optional confusion matrix (JSON) for grapheme substitutions.
    /// Absent means every substitution costs 1.
    pub char_confusion_path: Option<PathBuf>,

    /// Optional confusion matrix (JSON) for pinyin syllable substitutions.
    pub pinyin_confusion_path: Option<PathBuf>,

    // Hybrid fusion weights. With the default 0.5/0.5 split the hybrid score
    // of a word found by both strategies is the mean of its two similarities.
    /// Weight of the character-level score in hybrid fusion.
    pub char_weight: f32,
    /// Weight of the pinyin-level score in hybrid fusion.
    pub pinyin_weight: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_distance: 2,
            ignore_tones: true,
            similarity_threshold: 0.0,
            char_confusion_path: None,
            pinyin_confusion_path: None,
            char_weight: 0.5,
            pinyin_weight: 0.5,
        }
    }
}

impl MatcherConfig {
    /// Check value ranges. Called by `Matcher::new`; exposed for callers
    /// that assemble configs from untrusted sources.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(MohuError::invalid_argument(
                "similarity_threshold",
                format!("{} outside [0, 1]", self.similarity_threshold),
            ));
        }
        if self.char_weight < 0.0 || self.pinyin_weight < 0.0 {
            return Err(MohuError::invalid_argument(
                "hybrid weights",
                "weights must be non-negative",
            ));
        }
        let sum = self.char_weight + self.pinyin_weight;
        if !(sum > 0.0 && sum <= 1.0) {
            return Err(MohuError::invalid_argument(
                "hybrid weights",
                format!("char_weight + pinyin_weight = {sum}, expected (0, 1]"),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MohuError::invalid_data(path.display().to_string(), e.to_string()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MohuError::invalid_data("<toml string>", e.to_string()))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MohuError::invalid_data("<toml serialization>", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MatcherConfig::default();
        assert_eq!(config.max_distance, 2);
        assert!(config.ignore_tones);
        assert_eq!(config.similarity_threshold, 0.0);
        assert!(config.char_confusion_path.is_none());
        assert_eq!(config.char_weight, 0.5);
        assert_eq!(config.pinyin_weight, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_round_trip() {
        let config = MatcherConfig {
            max_distance: 3,
            ignore_tones: false,
            similarity_threshold: 0.4,
            ..MatcherConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        let parsed = MatcherConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.max_distance, 3);
        assert!(!parsed.ignore_tones);
        assert_eq!(parsed.similarity_threshold, 0.4);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed = MatcherConfig::from_toml_str("max_distance = 1\n").unwrap();
        assert_eq!(parsed.max_distance, 1);
        assert!(parsed.ignore_tones);
        assert_eq!(parsed.pinyin_weight, 0.5);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let config = MatcherConfig {
            similarity_threshold: 1.5,
            ..MatcherConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn degenerate_weights_are_rejected() {
        let zero = MatcherConfig {
            char_weight: 0.0,
            pinyin_weight: 0.0,
            ..MatcherConfig::default()
        };
        assert!(zero.validate().is_err());

        let oversized = MatcherConfig {
            char_weight: 0.8,
            pinyin_weight: 0.8,
            ..MatcherConfig::default()
        };
        assert!(oversized.validate().is_err());
    }
}
