use regex::Regex;
use tracing::debug;

use crate::domain::CommitEntry;
use crate::error::{ChangelogError, Result};

/// Compiled set of exclusion patterns
///
/// Patterns are matched against the commit subject only (the entry minus
/// its leading hash token), as an unanchored search.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    patterns: Vec<Regex>,
}

impl ExclusionFilter {
    /// Compile every pattern before any entry is filtered
    ///
    /// Fails on the first pattern that does not compile, naming it.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(pattern).map_err(|source| ChangelogError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ExclusionFilter { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `line` is dropped by any pattern
    pub fn excludes(&self, line: &str) -> bool {
        let entry = CommitEntry::new(line);
        let subject = entry.subject();

        match self.patterns.iter().find(|re| re.is_match(subject)) {
            Some(re) => {
                debug!(hash = entry.hash(), pattern = re.as_str(), "excluding entry");
                true
            }
            None => false,
        }
    }

    /// Keep the entries no pattern excludes, in their original order
    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return lines;
        }

        let total = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| !self.excludes(line))
            .collect();

        debug!(total, excluded = total - kept.len(), "filtered changelog entries");
        kept
    }
}

/// Compile `patterns` and filter `lines` with them
pub fn filter_entries<S: AsRef<str>>(lines: Vec<String>, patterns: &[S]) -> Result<Vec<String>> {
    Ok(ExclusionFilter::new(patterns)?.apply(lines))
}
