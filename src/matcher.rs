use crate::config::Config;
use crate::error::Result;
use crate::types::{FileLocation, ReportingPlan};
use regex::Regex;

/// Compiled match predicates for one run
///
/// Plan patterns require the `NY` and `PPO` tokens to be whitespace-bounded,
/// so a name like "NYX PPO" or a leading "NY" with nothing before it does not
/// qualify. Location patterns are plain substring checks.
pub struct Matcher {
    plan_patterns: Vec<Regex>,
    location_patterns: Vec<Regex>,
}

impl Matcher {
    /// Compile the configured patterns
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            plan_patterns: compile(&config.plan_patterns)?,
            location_patterns: compile(&config.location_patterns)?,
        })
    }

    /// A plan qualifies when its name matches every plan pattern
    pub fn plan_matches(&self, plan: &ReportingPlan) -> bool {
        self.plan_patterns
            .iter()
            .all(|pattern| pattern.is_match(&plan.plan_name))
    }

    /// A file qualifies when its location matches every location pattern
    pub fn file_matches(&self, file: &FileLocation) -> bool {
        self.location_patterns
            .iter()
            .all(|pattern| pattern.is_match(&file.location))
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| Ok(Regex::new(pattern)?))
        .collect()
}
