use crate::error::{Error, Result};
use std::path::PathBuf;

/// Index file scanned when no path is given
pub const DEFAULT_INPUT: &str = "data/2024-04-01_anthem_index.json";

/// Output file written when no path is given (created or truncated)
pub const DEFAULT_OUTPUT: &str = "data/solution.txt";

/// Whitespace-bounded tokens a qualifying plan name must contain
pub const PLAN_NAME_PATTERNS: [&str; 2] = [r"\sNY\s", r"\sPPO\s"];

/// Patterns a qualifying file location must contain
pub const LOCATION_PATTERNS: [&str; 2] = [r"s3\.amazonaws\.com", "NY"];

/// Configuration for one filter run
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Every pattern must match the plan name for the plan to qualify
    pub plan_patterns: Vec<String>,
    /// Every pattern must match the file location for the file to qualify
    pub location_patterns: Vec<String>,
}

impl Config {
    /// Create a configuration with the default paths and patterns
    pub fn new() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            plan_patterns: PLAN_NAME_PATTERNS.iter().map(|p| p.to_string()).collect(),
            location_patterns: LOCATION_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Create a builder with default settings
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.plan_patterns.is_empty() {
            return Err(Error::Config("no plan name patterns configured".to_string()));
        }
        if self.location_patterns.is_empty() {
            return Err(Error::Config(
                "no file location patterns configured".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Set the index file to scan
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    /// Set the output file for qualifying locations
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    /// Replace the plan name patterns
    pub fn plan_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.plan_patterns = patterns;
        self
    }

    /// Replace the file location patterns
    pub fn location_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.location_patterns = patterns;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
