//! Release pipeline step producing the changelog
//!
//! A step ends in one of three [Outcome]s. A skip is not a failure: the
//! step decided there is nothing to do and the pipeline carries on.

use tracing::{info, warn};

use crate::boundary::BoundaryWarning;
use crate::changelog::{fetch_log, format_changelog, resolve_previous, split_entries, ExclusionFilter};
use crate::config::Config;
use crate::domain::Reference;
use crate::error::{ChangelogError, Result};
use crate::git::GitCommand;

/// State shared between the steps of a release
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Tag of the release being built
    pub current_tag: String,
    /// Release notes; when already set on entry they were supplied externally
    pub release_notes: Option<String>,
    /// Unpublished build
    pub snapshot: bool,
    pub config: Config,
    /// Notices collected by steps that succeeded
    pub warnings: Vec<BoundaryWarning>,
}

impl Context {
    pub fn new(current_tag: impl Into<String>, config: Config) -> Self {
        Context {
            current_tag: current_tag.into(),
            config,
            ..Default::default()
        }
    }

    fn has_release_notes(&self) -> bool {
        self.release_notes
            .as_deref()
            .is_some_and(|notes| !notes.is_empty())
    }
}

/// How a step ended
#[derive(Debug)]
pub enum Outcome {
    Success,
    Skipped(String),
    Failed(ChangelogError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// One step of the release pipeline
pub trait Pipe {
    /// Human readable name of the step
    fn description(&self) -> &str;

    fn run(&self, ctx: &mut Context) -> Outcome;
}

/// Generates release notes from the commits since the previous release
pub struct ChangelogPipe<G> {
    git: G,
}

impl<G: GitCommand> ChangelogPipe<G> {
    pub fn new(git: G) -> Self {
        ChangelogPipe { git }
    }

    /// Build the changelog text for `ctx` without touching it
    ///
    /// Patterns are compiled before git is queried, so a malformed pattern
    /// fails the step without any partial result.
    pub fn generate(&self, ctx: &Context) -> Result<(String, Vec<BoundaryWarning>)> {
        let tag = ctx.current_tag.as_str();
        let mut warnings = Vec::new();

        let filter = ExclusionFilter::new(ctx.config.exclusion_patterns())?;

        let reference = resolve_previous(&self.git, tag)?;
        if let Reference::RootFallback(root) = &reference {
            warnings.push(BoundaryWarning::FirstRelease {
                tag: tag.to_string(),
                root: root.clone(),
            });
        }

        let log = fetch_log(&self.git, &reference, tag)?;
        let entries = split_entries(&log);
        let total = entries.len();

        let kept = filter.apply(entries);
        if kept.is_empty() {
            warnings.push(BoundaryWarning::EmptyChangelog {
                tag: tag.to_string(),
                excluded: total,
            });
        }

        info!(
            tag,
            previous = reference.sha(),
            entries = kept.len(),
            excluded = total - kept.len(),
            "changelog generated"
        );

        Ok((format_changelog(&kept), warnings))
    }
}

impl<G: GitCommand> Pipe for ChangelogPipe<G> {
    fn description(&self) -> &str {
        "Generating changelog"
    }

    fn run(&self, ctx: &mut Context) -> Outcome {
        if ctx.has_release_notes() {
            let reason = "release notes already provided via --release-notes";
            info!(reason, "skipping changelog");
            return Outcome::Skipped(reason.to_string());
        }
        if ctx.snapshot {
            let reason = "not available for snapshots";
            info!(reason, "skipping changelog");
            return Outcome::Skipped(reason.to_string());
        }

        match self.generate(ctx) {
            Ok((notes, warnings)) => {
                ctx.release_notes = Some(notes);
                ctx.warnings.extend(warnings);
                Outcome::Success
            }
            Err(e) => {
                warn!(error = %e, "changelog generation failed");
                Outcome::Failed(e)
            }
        }
    }
}
