//! Error types for pricebook.

use thiserror::Error;

/// Errors produced while fetching, parsing, or sorting the price book.
#[derive(Debug, Error)]
pub enum PricebookError {
    /// The price book could not be retrieved.
    #[error("unable to read price data from {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// The source was readable but yielded nothing usable.
    #[error("invalid price data: no usable lines in {source_name}")]
    EmptySource { source_name: String },

    /// A line could not be turned into a record.
    #[error("malformed record{}: {reason}", .line.map(|n| format!(" on line {n}")).unwrap_or_default())]
    MalformedRecord { line: Option<usize>, reason: String },

    /// The sort selector is not one of the recognized names.
    #[error("unknown sort field '{0}' (expected one of: {})", crate::sort::SortField::NAMES.join(", "))]
    InvalidSortField(String),
}

impl PricebookError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PricebookError::MalformedRecord {
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number to a malformed-record error.
    pub fn at_line(self, line_num: usize) -> Self {
        match self {
            PricebookError::MalformedRecord { reason, .. } => PricebookError::MalformedRecord {
                line: Some(line_num),
                reason,
            },
            other => other,
        }
    }
}
