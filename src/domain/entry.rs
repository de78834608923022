/// One line of `git log --pretty=oneline --abbrev-commit` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry<'a> {
    line: &'a str,
}

impl<'a> CommitEntry<'a> {
    pub fn new(line: &'a str) -> Self {
        CommitEntry { line }
    }

    /// Leading token, the abbreviated commit hash
    pub fn hash(&self) -> &'a str {
        self.line
            .split_once(' ')
            .map_or(self.line, |(hash, _)| hash)
    }

    /// Everything after the first space, spacing untouched
    ///
    /// Empty when the line holds only the hash.
    pub fn subject(&self) -> &'a str {
        self.line.split_once(' ').map_or("", |(_, rest)| rest)
    }
}
