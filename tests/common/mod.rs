//! Shared test utilities for integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::path::Path;

use git2::{Oid, Repository, Signature, Time};

/// Commit time of the first fixture commit; each later one is a minute newer.
const BASE_TIME: i64 = 1_700_000_000;

/// A throwaway git repository with a linear history.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
    commits: Cell<i64>,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self {
            dir,
            repo,
            commits: Cell::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Signature dated after every earlier one, so log order never ties.
    fn signature(&self) -> Signature<'static> {
        let n = self.commits.get();
        self.commits.set(n + 1);
        let time = Time::new(BASE_TIME + n * 60, 0);
        Signature::new("Test User", "test@example.com", &time).expect("Failed to create signature")
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let file_path = self.dir.path().join("history.txt");
        let mut content = std::fs::read_to_string(&file_path).unwrap_or_default();
        content.push_str(message);
        content.push('\n');
        std::fs::write(&file_path, content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("history.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a lightweight tag pointing to the given OID.
    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag_lightweight(name, &obj, false)
            .expect("Failed to create lightweight tag");
    }

    /// Create an annotated tag pointing to the given OID.
    pub fn tag_annotated(&self, name: &str, oid: Oid, message: &str) {
        let sig = self.signature();
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag(name, &obj, &sig, message, false)
            .expect("Failed to create annotated tag");
    }

    /// Abbreviated id, as `git log --abbrev-commit` prints it.
    pub fn short_id(&self, oid: Oid) -> String {
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        obj.short_id()
            .expect("Failed to abbreviate id")
            .as_str()
            .expect("Abbreviated id is not UTF-8")
            .to_string()
    }
}
