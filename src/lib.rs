//! Streaming filter for healthcare price-transparency index files.
//!
//! This library scans a payer-published machine-readable index one line at a
//! time, decodes each line as a reporting structure, and emits the locations
//! of in-network files whose plans and URLs match the configured patterns,
//! deduplicated by file description in first-discovery order.

pub mod config;
pub mod deframe;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod types;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use filter::{run_files, RunStats, StreamFilter};
pub use matcher::Matcher;
pub use types::{FileLocation, ReportingPlan, ReportingStructure};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::filter::{run_files, RunStats, StreamFilter};
    pub use crate::types::{FileLocation, ReportingPlan, ReportingStructure};
}
