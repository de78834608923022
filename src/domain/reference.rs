/// Lower bound of the changelog range
///
/// `PriorTag` is a real release tag, so the log is queried as the range
/// `<tag>..<current>`. `RootFallback` is the repository's first commit,
/// used when no earlier release exists; it is not an exclusion marker, so
/// the log is queried with both endpoints as separate arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    PriorTag(String),
    RootFallback(String),
}

impl Reference {
    /// The tag name or commit id this reference points at
    pub fn sha(&self) -> &str {
        match self {
            Reference::PriorTag(sha) | Reference::RootFallback(sha) => sha,
        }
    }

    /// Whether this reference is a prior release tag
    pub fn is_tag(&self) -> bool {
        matches!(self, Reference::PriorTag(_))
    }
}
