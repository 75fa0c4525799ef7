use crate::error::FuzzySearchError;
use crate::error::Result;
use serde::Deserialize;
use serde::Serialize;

/// Upper bound on the cull threshold.
pub const DEFAULT_CULL_CUTOFF: f64 = 30.0;

/// How far the cull threshold moves from the mean score towards the best one.
pub const DEFAULT_CULL_FACTOR: f64 = 0.1;

/// Characters that delimit words inside a path.
pub const DEFAULT_BOUNDARY_CHARS: &str = "/\\-_.";

/// Session parameters for a search pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Accept tokens split into several runs. When false every token must
    /// appear as one literal run.
    #[serde(default = "default_true")]
    pub allow_subsequences: bool,

    /// Token characters that may go unmatched, shared by all tokens of a target
    #[serde(default = "default_max_misses")]
    pub max_misses: usize,

    /// Character index where every token scan begins
    #[serde(default)]
    pub start_offset: usize,

    /// Maximum number of results returned by a search pass
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_cull_cutoff")]
    pub cull_cutoff: f64,

    /// Blend between mean (0.0) and best (1.0) score for the cull threshold
    #[serde(default = "default_cull_factor")]
    pub cull_factor: f64,

    #[serde(default = "default_boundary_chars")]
    pub boundary_chars: String,
}

fn default_true() -> bool {
    true
}

fn default_max_misses() -> usize {
    2
}

fn default_max_results() -> usize {
    100
}

fn default_cull_cutoff() -> f64 {
    DEFAULT_CULL_CUTOFF
}

fn default_cull_factor() -> f64 {
    DEFAULT_CULL_FACTOR
}

fn default_boundary_chars() -> String {
    DEFAULT_BOUNDARY_CHARS.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_subsequences: true,
            max_misses: default_max_misses(),
            start_offset: 0,
            max_results: default_max_results(),
            cull_cutoff: default_cull_cutoff(),
            cull_factor: default_cull_factor(),
            boundary_chars: default_boundary_chars(),
        }
    }
}

impl SearchConfig {
    /// Literal matching only; a miss budget makes no sense without
    /// subsequences, so it is zeroed as well.
    pub fn exact() -> Self {
        Self {
            allow_subsequences: false,
            max_misses: 0,
            ..Default::default()
        }
    }

    /// Parses a TOML document, filling unset keys with defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cull_factor) {
            return Err(FuzzySearchError::CullFactorOutOfRange(self.cull_factor));
        }
        if !self.cull_cutoff.is_finite() {
            return Err(FuzzySearchError::NonFiniteCutoff(self.cull_cutoff));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.allow_subsequences);
        assert_eq!(config.max_misses, 2);
        assert_eq!(config.max_results, 100);
        assert_eq!(config.boundary_chars, "/\\-_.");
    }

    #[test]
    fn test_exact_preset() {
        let config = SearchConfig::exact();
        assert!(!config.allow_subsequences);
        assert_eq!(config.max_misses, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cull_factor_validation() {
        let mut config = SearchConfig::default();
        config.cull_factor = 1.0;
        assert!(config.validate().is_ok());

        config.cull_factor = 1.5;
        assert!(matches!(
            config.validate(),
            Err(FuzzySearchError::CullFactorOutOfRange(_))
        ));

        config.cull_factor = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cutoff_validation() {
        let mut config = SearchConfig::default();
        config.cull_cutoff = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(FuzzySearchError::NonFiniteCutoff(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SearchConfig::from_toml_str("max_misses = 0\nmax_results = 5\n")
            .unwrap_or_else(|err| panic!("config should parse: {err}"));
        assert_eq!(config.max_misses, 0);
        assert_eq!(config.max_results, 5);
        assert!(config.allow_subsequences);
        assert_eq!(config.cull_cutoff, DEFAULT_CULL_CUTOFF);
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            SearchConfig::from_toml_str("max_misses = \"two\""),
            Err(FuzzySearchError::Config(_))
        ));
        assert!(matches!(
            SearchConfig::from_toml_str("cull_factor = -0.5"),
            Err(FuzzySearchError::CullFactorOutOfRange(_))
        ));
    }
}
