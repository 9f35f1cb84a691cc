//! Run configuration.

use crate::sort::SortField;
use crate::source::DEFAULT_SOURCE_URL;

/// What to do with a line that does not parse as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Log a warning, leave the line out, and keep going.
    #[default]
    Skip,
    /// Stop at the first malformed line.
    Abort,
}

/// Settings for one run, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL or file path of the price book.
    pub source: String,
    pub sort: SortField,
    pub policy: MalformedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_URL.to_string(),
            sort: SortField::default(),
            policy: MalformedPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source, DEFAULT_SOURCE_URL);
        assert_eq!(config.sort, SortField::Name);
        assert_eq!(config.policy, MalformedPolicy::Skip);
    }
}
