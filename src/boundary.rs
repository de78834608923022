use std::fmt;

/// Non-fatal conditions met while generating a changelog.
/// These are reported to the user but never fail the step.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No earlier tag exists, the changelog covers the whole history
    FirstRelease { tag: String, root: String },
    /// Nothing is left to list after filtering
    EmptyChangelog { tag: String, excluded: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FirstRelease { tag, root } => {
                let short_root = root
                    .char_indices()
                    .nth(7)
                    .map_or(root.as_str(), |(end, _)| &root[..end]);
                write!(
                    f,
                    "No release before '{}', listing all commits since root commit {}",
                    tag, short_root
                )
            }
            BoundaryWarning::EmptyChangelog { tag, excluded } => {
                if *excluded == 0 {
                    write!(f, "No commits found for '{}'", tag)
                } else {
                    write!(
                        f,
                        "Changelog for '{}' is empty ({} commits excluded by filters)",
                        tag, excluded
                    )
                }
            }
        }
    }
}
