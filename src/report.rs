//! Rendering of sorted records.

use crate::record::Record;
use crate::sort::{SortField, sorted};

/// Render `records` ordered by `field`, one display line per record.
///
/// The input slice is not reordered; rendering the same slice twice gives
/// the same lines.
pub fn render(records: &[Record], field: SortField) -> Vec<String> {
    sorted(records, field)
        .into_iter()
        .map(|r| r.to_string())
        .collect()
}

/// Render as a single newline-separated block.
pub fn render_text(records: &[Record], field: SortField) -> String {
    render(records, field).join("\n")
}
