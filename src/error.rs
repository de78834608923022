use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("git {} failed: {message}", .args.join(" "))]
    Git { args: Vec<String>, message: String },

    #[error("Cannot resolve previous release for tag '{tag}': {source}")]
    Resolution {
        tag: String,
        #[source]
        source: Box<ChangelogError>,
    },

    #[error("Invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a git command error for the given argument vector
    pub fn git(args: &[&str], message: impl Into<String>) -> Self {
        ChangelogError::Git {
            args: args.iter().map(|s| s.to_string()).collect(),
            message: message.into(),
        }
    }

    /// Wrap a fallback failure as a resolution error for `tag`
    pub fn resolution(tag: impl Into<String>, source: ChangelogError) -> Self {
        ChangelogError::Resolution {
            tag: tag.into(),
            source: Box::new(source),
        }
    }
}
