//! Changelog generation stages
//!
//! Run in order by [crate::pipeline::ChangelogPipe]:
//!
//! 1. [resolver::resolve_previous] finds the lower bound of the range
//! 2. [log::fetch_log] reads the one-line log for that range
//! 3. [filter::ExclusionFilter] drops entries whose subject matches a pattern
//! 4. [format::format_changelog] renders the release notes

pub mod filter;
pub mod format;
pub mod log;
pub mod resolver;

pub use filter::{filter_entries, ExclusionFilter};
pub use format::{format_changelog, CHANGELOG_HEADER};
pub use log::{fetch_log, log_args, split_entries};
pub use resolver::resolve_previous;
