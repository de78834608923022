use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{ChangelogError, Result};
use crate::git::GitCommand;

/// Mock adapter for testing without a repository
///
/// Responses are keyed by the full argument vector. Unknown argument
/// vectors fail like an unknown revision would. Every call is recorded.
pub struct MockGit {
    responses: HashMap<Vec<String>, std::result::Result<String, String>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockGit {
    /// Create a new mock with no responses
    pub fn new() -> Self {
        MockGit {
            responses: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Answer `args` with `output`
    pub fn respond(&mut self, args: &[&str], output: impl Into<String>) {
        self.responses.insert(to_key(args), Ok(output.into()));
    }

    /// Fail `args` with `message`
    pub fn fail(&mut self, args: &[&str], message: impl Into<String>) {
        self.responses.insert(to_key(args), Err(message.into()));
    }

    /// Argument vectors received so far, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCommand for MockGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let key = to_key(args);
        self.calls.borrow_mut().push(key.clone());

        match self.responses.get(&key) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(message)) => Err(ChangelogError::git(args, message.clone())),
            None => Err(ChangelogError::git(args, "fatal: unexpected git invocation\n")),
        }
    }
}

fn to_key(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
