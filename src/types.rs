use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One downloadable file reference inside a reporting structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileLocation {
    /// Identifies the file; used as the deduplication key
    #[serde(default)]
    pub description: String,
    /// URL of the file; the value emitted on match
    #[serde(default)]
    pub location: String,
}

/// One named insurance plan inside a reporting structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportingPlan {
    /// Human-readable plan label used for matching
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub plan_id_type: String,
    #[serde(default)]
    pub plan_id: String,
    #[serde(default)]
    pub plan_market_type: String,
}

/// One line of the index: a group of plans and their associated files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportingStructure {
    #[serde(default)]
    pub reporting_plans: Vec<ReportingPlan>,
    #[serde(default)]
    pub in_network_files: Vec<FileLocation>,
    /// Present in the index schema; never consulted by the filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_amount_file: Option<FileLocation>,
}

impl ReportingStructure {
    /// Parse one deframed index line, tagging failures with the line number
    pub fn from_line(bytes: &[u8], line: usize) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| Error::Parse { line, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let line = br#"{"reporting_plans":[{"plan_name":"Anthem NY PPO Plan","plan_id_type":"EIN","plan_id":"12-3456789","plan_market_type":"group"}],"in_network_files":[{"description":"f1","location":"https://s3.amazonaws.com/b/NY.json"}],"allowed_amount_file":{"description":"aa","location":"https://example.com/aa.json"}}"#;
        let record = ReportingStructure::from_line(line, 2).unwrap();

        assert_eq!(record.reporting_plans.len(), 1);
        assert_eq!(record.reporting_plans[0].plan_name, "Anthem NY PPO Plan");
        assert_eq!(record.reporting_plans[0].plan_id, "12-3456789");
        assert_eq!(record.in_network_files[0].description, "f1");
        assert!(record.allowed_amount_file.is_some());
    }

    #[test]
    fn test_parse_sparse_record() {
        // Real index lines frequently omit ids and the allowed-amount file
        let line = br#"{"reporting_plans":[{"plan_name":"Anthem NY PPO Plan"}],"in_network_files":[{"description":"f1","location":"https://s3.amazonaws.com/b/NY.json"}]}"#;
        let record = ReportingStructure::from_line(line, 2).unwrap();

        assert_eq!(record.reporting_plans[0].plan_id_type, "");
        assert!(record.allowed_amount_file.is_none());
    }

    #[test]
    fn test_parse_failure_carries_line_number() {
        let err = ReportingStructure::from_line(b"not json", 7).unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 7),
            other => panic!("expected Parse error, got {other}"),
        }
    }
}
