use tracing::debug;

use crate::domain::Reference;
use crate::error::Result;
use crate::git::GitCommand;

const LOG_FORMAT: [&str; 3] = ["log", "--pretty=oneline", "--abbrev-commit"];

/// Arguments of the log query for the range ending at `tag`
///
/// A prior tag bounds the range with `<prev>..<tag>`. The root-commit
/// fallback is passed as a second positional endpoint instead, since it is
/// part of the history being described rather than a boundary to exclude.
pub fn log_args(reference: &Reference, tag: &str) -> Vec<String> {
    let mut args: Vec<String> = LOG_FORMAT.iter().map(|s| s.to_string()).collect();

    match reference {
        Reference::PriorTag(prev) => args.push(format!("{}..{}", prev, tag)),
        Reference::RootFallback(root) => {
            args.push(root.clone());
            args.push(tag.to_string());
        }
    }

    args
}

/// Read the one-line log between `reference` and `tag`, newest first
pub fn fetch_log<G: GitCommand>(git: &G, reference: &Reference, tag: &str) -> Result<String> {
    let args = log_args(reference, tag);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let log = git.run(&args)?;
    debug!(bytes = log.len(), "fetched commit log");

    Ok(log)
}

/// Split raw log output into entries
///
/// The trailing newline git prints after the last commit does not produce
/// an entry; empty output yields no entries.
pub fn split_entries(log: &str) -> Vec<String> {
    log.trim_end_matches(&['\n', '\r'][..])
        .lines()
        .map(str::to_string)
        .collect()
}
