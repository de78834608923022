use tracing::{debug, warn};

use crate::domain::Reference;
use crate::error::{ChangelogError, Result};
use crate::git::{clean, GitCommand};

/// Find the lower bound of the changelog range for `tag`
///
/// Looks up the nearest tag reachable from the parent of `tag`. When there
/// is none (first release), falls back to the repository's root commit so
/// the changelog covers the full history. A failing fallback is fatal.
pub fn resolve_previous<G: GitCommand>(git: &G, tag: &str) -> Result<Reference> {
    let parent = format!("{}^", tag);

    match clean(git.run(&["describe", "--tags", "--abbrev=0", parent.as_str()])) {
        Ok(previous) => {
            debug!(tag, previous = %previous, "found previous release tag");
            Ok(Reference::PriorTag(previous))
        }
        Err(lookup) => {
            warn!(tag, error = %lookup, "no previous tag, falling back to root commit");

            let root = clean(git.run(&["rev-list", "--max-parents=0", "HEAD"]))
                .map_err(|e| ChangelogError::resolution(tag, e))?;

            Ok(Reference::RootFallback(root))
        }
    }
}
