//! CLI configuration

use serde::Deserialize;

/// Analysis run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the extracted treaty JSON
    pub treaty_path: String,
    /// Path to the extracted bordereaux JSON
    pub bordereaux_path: String,
    /// Path to the extracted treaty-slip statement JSON
    pub statement_path: String,
    /// Quarter to analyze (1-4)
    pub quarter: u8,
    /// Log level
    pub log_level: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            treaty_path: "data/treaty.json".to_string(),
            bordereaux_path: "data/bordereaux.json".to_string(),
            statement_path: "data/statement.json".to_string(),
            quarter: 1,
            log_level: "info".to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ANALYSIS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quarter_is_first() {
        let config = AnalysisConfig::default();
        assert_eq!(config.quarter, 1);
        assert_eq!(config.log_level, "info");
    }
}
