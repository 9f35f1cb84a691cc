//! The record collection for one run.

use tracing::{debug, warn};

use crate::config::{Config, MalformedPolicy};
use crate::error::PricebookError;
use crate::record::Record;
use crate::report;
use crate::source::{LineSource, source_for};

/// A line that was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the fetched line list.
    pub line: usize,
    pub reason: String,
}

/// Parsed records in input order, plus any lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
    skipped: Vec<SkippedLine>,
}

impl Catalog {
    /// Parse every line under `policy`.
    ///
    /// With [`MalformedPolicy::Abort`] the first bad line is returned as a
    /// [`PricebookError::MalformedRecord`] carrying its line number.
    pub fn from_lines(
        lines: &[String],
        policy: MalformedPolicy,
    ) -> Result<Catalog, PricebookError> {
        let mut catalog = Catalog::default();

        for (idx, line) in lines.iter().enumerate() {
            let line_num = idx + 1;
            match Record::parse(line) {
                Ok(record) => catalog.records.push(record),
                Err(e) => match policy {
                    MalformedPolicy::Abort => return Err(e.at_line(line_num)),
                    MalformedPolicy::Skip => {
                        let reason = match e {
                            PricebookError::MalformedRecord { reason, .. } => reason,
                            other => other.to_string(),
                        };
                        warn!(line = line_num, %reason, "skipping malformed record");
                        catalog.skipped.push(SkippedLine {
                            line: line_num,
                            reason,
                        });
                    }
                },
            }
        }

        debug!(
            records = catalog.records.len(),
            skipped = catalog.skipped.len(),
            "parsed price book"
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fetch from `source` and parse into a catalog.
///
/// A source with no lines, or no line that parses, is reported as
/// [`PricebookError::EmptySource`].
pub fn load_catalog(
    source: &dyn LineSource,
    policy: MalformedPolicy,
) -> Result<Catalog, PricebookError> {
    let lines = source.fetch_lines()?;
    if lines.is_empty() {
        return Err(PricebookError::EmptySource {
            source_name: source.describe(),
        });
    }

    let catalog = Catalog::from_lines(&lines, policy)?;
    if catalog.is_empty() {
        return Err(PricebookError::EmptySource {
            source_name: source.describe(),
        });
    }
    Ok(catalog)
}

/// Output of a complete run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub lines: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

/// Fetch, parse, sort and render according to `config`.
pub fn run(config: &Config) -> Result<RunOutput, PricebookError> {
    let source = source_for(&config.source)?;
    run_with_source(source.as_ref(), config)
}

/// Like [`run`], with an explicit source.
pub fn run_with_source(
    source: &dyn LineSource,
    config: &Config,
) -> Result<RunOutput, PricebookError> {
    let catalog = load_catalog(source, config.policy)?;
    Ok(RunOutput {
        lines: report::render(catalog.records(), config.sort),
        skipped: catalog.skipped,
    })
}
