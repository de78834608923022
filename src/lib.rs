pub mod boundary;
pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod ui;

pub use error::{ChangelogError, Result};
pub use pipeline::{ChangelogPipe, Context, Outcome, Pipe};
