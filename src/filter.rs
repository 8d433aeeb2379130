//! Single-pass streaming filter over the index.
//!
//! One sequential pass: read a line, deframe it, decode it, test its plans
//! and files, write qualifying locations. End-of-stream is the normal
//! termination; any other read error aborts the run. Parse failures and
//! write failures are recovered locally and the stream continues.

use crate::config::Config;
use crate::deframe::deframe;
use crate::error::{Error, Result};
use crate::matcher::Matcher;
use crate::types::ReportingStructure;
use indexmap::IndexSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

/// Counters accumulated over one run, reported by the CLI summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Physical lines read from the input
    pub lines_read: usize,
    /// Lines that decoded into a reporting structure
    pub records_parsed: usize,
    /// Lines skipped as envelope or malformed
    pub lines_skipped: usize,
    /// Locations written to the output
    pub locations_emitted: usize,
    /// Qualifying files suppressed because their description was already seen
    pub duplicates_suppressed: usize,
    /// Emissions that failed to write (still counted as seen)
    pub write_failures: usize,
}

/// Streaming filter with per-run deduplication state
pub struct StreamFilter {
    matcher: Matcher,
    seen: IndexSet<String>,
}

impl StreamFilter {
    /// Create a filter from a configuration, compiling its patterns
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::from_config(config)?,
            seen: IndexSet::new(),
        })
    }

    /// Run the filter over `input`, writing qualifying locations to `output`
    ///
    /// Emits one location per line in first-discovery order. The seen-set
    /// persists on `self`, so repeated runs share deduplication state.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<RunStats> {
        let mut stats = RunStats::default();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = input.read_until(b'\n', &mut raw).map_err(|source| Error::Read {
                line: stats.lines_read + 1,
                source,
            })?;
            // Zero bytes means end-of-stream, the normal termination
            if n == 0 {
                break;
            }
            stats.lines_read += 1;

            let bytes = match deframe(&raw) {
                Some(bytes) => bytes,
                None => {
                    stats.lines_skipped += 1;
                    continue;
                }
            };

            let record = match ReportingStructure::from_line(bytes, stats.lines_read) {
                Ok(record) => record,
                Err(_) => {
                    stats.lines_skipped += 1;
                    continue;
                }
            };
            stats.records_parsed += 1;

            self.emit_matches(&record, &mut output, &mut stats);
        }

        Ok(stats)
    }

    /// Seen descriptions in first-discovery order
    pub fn seen_descriptions(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }

    fn emit_matches<W: Write>(
        &mut self,
        record: &ReportingStructure,
        output: &mut W,
        stats: &mut RunStats,
    ) {
        for plan in &record.reporting_plans {
            if !self.matcher.plan_matches(plan) {
                continue;
            }
            for file in &record.in_network_files {
                if !self.matcher.file_matches(file) {
                    continue;
                }
                // Dedup key is the description, not the location: the first
                // entry wins and later entries with the same description are
                // suppressed even when their locations differ.
                if !self.seen.insert(file.description.clone()) {
                    stats.duplicates_suppressed += 1;
                    continue;
                }
                // The description above is marked seen before the write, so a
                // failed emission is not retried on a later encounter.
                match writeln!(output, "{}", file.location) {
                    Ok(()) => stats.locations_emitted += 1,
                    Err(source) => {
                        eprintln!("Error writing location: {}", Error::Write { source });
                        stats.write_failures += 1;
                    }
                }
            }
        }
    }
}

/// Open the configured input and output files and run the filter to completion
///
/// The output file is created, truncating any existing file at that path.
pub fn run_files(config: &Config) -> Result<RunStats> {
    let input = File::open(&config.input).map_err(|source| Error::Open {
        path: config.input.clone(),
        source,
    })?;
    let output = File::create(&config.output).map_err(|source| Error::Open {
        path: config.output.clone(),
        source,
    })?;

    let mut filter = StreamFilter::new(config)?;
    filter.run(BufReader::new(input), output)
}
