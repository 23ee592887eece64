// SPDX-License-Identifier: GPL-2.0-only

//! Classify the stderr text of failed `git` commands.

use std::fmt;

use regex::Regex;
use serde::Serialize;

/// Known categories of `git` failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    RepositoryLocked,
    AuthenticationFailed,
    NotAGitRepository,
    BadConfigFile,
    CannotCreatePipe,
    RepositoryNotFound,
    CannotAccessRemote,
    BranchNotFullyMerged,
    NoRemoteReference,
    BranchAlreadyExists,
    InvalidBranchName,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::RepositoryLocked => "repository-locked",
            ErrorCode::AuthenticationFailed => "authentication-failed",
            ErrorCode::NotAGitRepository => "not-a-git-repository",
            ErrorCode::BadConfigFile => "bad-config-file",
            ErrorCode::CannotCreatePipe => "cannot-create-pipe",
            ErrorCode::RepositoryNotFound => "repository-not-found",
            ErrorCode::CannotAccessRemote => "cannot-access-remote",
            ErrorCode::BranchNotFullyMerged => "branch-not-fully-merged",
            ErrorCode::NoRemoteReference => "no-remote-reference",
            ErrorCode::BranchAlreadyExists => "branch-already-exists",
            ErrorCode::InvalidBranchName => "invalid-branch-name",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// Checked in order; the first match wins.
    static ref ERROR_PATTERNS: Vec<(Regex, ErrorCode)> = [
        (
            "Another git process seems to be running in this repository|If no other git process is currently running",
            ErrorCode::RepositoryLocked,
        ),
        ("Authentication failed", ErrorCode::AuthenticationFailed),
        ("(?i)Not a git repository", ErrorCode::NotAGitRepository),
        ("bad config file", ErrorCode::BadConfigFile),
        (
            "cannot make pipe for command substitution|cannot create standard input pipe",
            ErrorCode::CannotCreatePipe,
        ),
        ("Repository not found", ErrorCode::RepositoryNotFound),
        ("unable to access", ErrorCode::CannotAccessRemote),
        ("branch '.+' is not fully merged", ErrorCode::BranchNotFullyMerged),
        ("Couldn't find remote ref", ErrorCode::NoRemoteReference),
        ("A branch named '.+' already exists", ErrorCode::BranchAlreadyExists),
        ("'.+' is not a valid branch name", ErrorCode::InvalidBranchName),
    ]
    .into_iter()
    .map(|(pattern, code)| (Regex::new(pattern).expect("error pattern is valid"), code))
    .collect();
}

/// Map stderr text from `git` to a known [`ErrorCode`].
///
/// Returns `None` when the failure is unclassified.
pub fn classify(stderr: &str) -> Option<ErrorCode> {
    ERROR_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(stderr))
        .map(|(_, code)| *code)
}
