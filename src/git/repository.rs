use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// libgit2 view of the repository used to build the pipeline context
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Working tree root, or the git directory for bare repositories
    pub fn workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }

    /// Nearest tag reachable from HEAD, like `git describe --tags --abbrev=0`
    ///
    /// Returns `Ok(None)` when no tag can describe HEAD. Fails when HEAD
    /// does not point at a commit (e.g. an empty repository).
    pub fn current_tag(&self) -> Result<Option<String>> {
        let head = self.repo.head()?.peel_to_commit()?;

        let mut opts = DescribeOptions::new();
        opts.describe_tags();

        let describe = match head.as_object().describe(&opts) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound || e.class() == ErrorClass::Describe => {
                debug!(error = %e, "no tag describes HEAD");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        Ok(Some(describe.format(Some(&format))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChangelogError;
    use git2::{Oid, Signature};

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn tag(repo: &Git2Repo, name: &str, oid: Oid) {
        let obj = repo.find_object(oid, None).unwrap();
        repo.tag_lightweight(name, &obj, false).unwrap();
    }

    #[test]
    fn test_current_tag_on_tagged_head() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&repo, "feat: first");
        tag(&repo, "v0.1.0", first);

        let repo = Git2Repository::from_git2(repo);
        assert_eq!(repo.current_tag().unwrap(), Some("v0.1.0".to_string()));
    }

    #[test]
    fn test_current_tag_uses_nearest_tag() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let first = commit(&repo, "feat: first");
        tag(&repo, "v0.1.0", first);
        let second = commit(&repo, "feat: second");
        tag(&repo, "v0.2.0", second);
        commit(&repo, "fix: untagged");

        let repo = Git2Repository::from_git2(repo);
        assert_eq!(repo.current_tag().unwrap(), Some("v0.2.0".to_string()));
    }

    #[test]
    fn test_current_tag_without_tags() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit(&repo, "feat: first");

        let repo = Git2Repository::from_git2(repo);
        assert_eq!(repo.current_tag().unwrap(), None);
    }

    #[test]
    fn test_current_tag_empty_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        let repo = Git2Repository::from_git2(repo);
        let err = repo.current_tag().unwrap_err();
        assert!(
            matches!(err, ChangelogError::Repository(_)),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_open_discovers_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        let repo = Git2Repository::open(&nested).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}
