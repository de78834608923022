//! Version-control adapter layer
//!
//! Changelog generation only ever asks git questions through the
//! [GitCommand] trait: "run these arguments, give me the text". This keeps
//! the resolver and log fetcher independent of how git is reached.
//!
//! - [system::SystemGit]: spawns the system `git` binary
//! - [mock::MockGit]: canned responses for tests
//! - [repository::Git2Repository]: libgit2 queries used to build the
//!   pipeline context (current tag detection)
//!
//! ```rust
//! # use git_changelog::git::{clean, GitCommand};
//! # fn example<G: GitCommand>(git: &G) -> git_changelog::Result<()> {
//! let root = clean(git.run(&["rev-list", "--max-parents=0", "HEAD"]))?;
//! println!("root commit: {}", root);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;
pub mod system;

pub use mock::MockGit;
pub use repository::Git2Repository;
pub use system::SystemGit;

use crate::error::{ChangelogError, Result};

/// Runs git with an argument vector and returns its output
///
/// Implementations must return the raw output on success and a
/// [ChangelogError::Git] (or another error) on failure. Output is not
/// trimmed; callers that expect a single value pass it through [clean].
pub trait GitCommand {
    /// Run `git <args...>` and return its output text
    fn run(&self, args: &[&str]) -> Result<String>;
}

impl<G: GitCommand + ?Sized> GitCommand for &G {
    fn run(&self, args: &[&str]) -> Result<String> {
        (**self).run(args)
    }
}

/// Normalize the output of a single-value git query
///
/// On success keeps only the first line, with single quotes and surrounding
/// whitespace removed. On failure the trailing newline of the error message
/// is dropped and the error is otherwise passed through unchanged.
pub fn clean(result: Result<String>) -> Result<String> {
    match result {
        Ok(output) => {
            let first = output.lines().next().unwrap_or("");
            Ok(first.replace('\'', "").trim().to_string())
        }
        Err(ChangelogError::Git { args, message }) => Err(ChangelogError::Git {
            args,
            message: message.trim_end_matches('\n').to_string(),
        }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_keeps_first_line() {
        let cleaned = clean(Ok("v1.1.0\nsecond line\n".to_string())).unwrap();
        assert_eq!(cleaned, "v1.1.0");
    }

    #[test]
    fn test_clean_strips_quotes_and_whitespace() {
        let cleaned = clean(Ok("'abc1234'  \n".to_string())).unwrap();
        assert_eq!(cleaned, "abc1234");
    }

    #[test]
    fn test_clean_empty_output() {
        assert_eq!(clean(Ok(String::new())).unwrap(), "");
    }

    #[test]
    fn test_clean_trims_error_message() {
        let err = clean(Err(ChangelogError::git(
            &["describe"],
            "fatal: No names found\n",
        )))
        .unwrap_err();

        match err {
            ChangelogError::Git { args, message } => {
                assert_eq!(args, vec!["describe".to_string()]);
                assert_eq!(message, "fatal: No names found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_clean_passes_other_errors_through() {
        let err = clean(Err(ChangelogError::config("x"))).unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
    }
}
