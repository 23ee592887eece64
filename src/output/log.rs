// SPDX-License-Identifier: GPL-2.0-only

//! Decode `git log` output rendered with [`LOG_FORMAT`].

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

#[cfg(doc)]
use crate::args::LOG_FORMAT;
use crate::{args::RECORD_SEPARATOR, error::GitFailure};

/// Exit status of `git log` meaning the branch has no commits yet.
pub const NO_COMMITS_EXIT_CODE: i32 = 1;

lazy_static! {
    static ref COMMIT_RECORD: Regex = Regex::new(
        r"(?x)
        ^(?P<hash>[0-9a-f]{40})(?:\x20(?P<refs>[^\n]*))?\n
        (?P<date>[0-9]+)\n
        (?P<email>[^\n]*)
        # Trailing parts vanish when the record is trimmed and the message is empty.
        (?:\n(?P<parents>[0-9a-f]{40}(?:\x20[0-9a-f]{40})*)?
        (?:\n(?s:(?P<body>.*)))?)?$"
    )
    .expect("commit record pattern is valid");
}

/// A commit decoded from one `git log` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Full 40 character lowercase hex object id.
    pub hash: String,

    /// Raw message. The first line is the subject.
    pub message: String,

    /// Parent hashes in order. Empty for a root commit.
    pub parents: Vec<String>,

    /// Ref decorations, e.g. `HEAD -> main` or `tag: v1.0`.
    ///
    /// `None` when git printed no decoration text for the commit.
    pub refs: Option<Vec<String>>,

    pub author_email: String,
    pub author_date: DateTime<Utc>,
}

impl Commit {
    /// First line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hash, self.subject())
    }
}

/// Decode a single log record, without its separator.
///
/// Surrounding whitespace is ignored. Returns `None` if the record does not have
/// the expected shape.
pub fn parse_commit(record: &str) -> Option<Commit> {
    let captures = COMMIT_RECORD.captures(record.trim())?;

    let timestamp = captures["date"].parse::<i64>().ok()?;
    let author_date = Utc.timestamp_opt(timestamp, 0).single()?;

    let refs = captures
        .name("refs")
        .map(|refs| refs.as_str().trim())
        .filter(|refs| !refs.is_empty())
        .map(|refs| refs.split(", ").map(String::from).collect());

    let parents = captures
        .name("parents")
        .map_or("", |parents| parents.as_str())
        .split_whitespace()
        .map(String::from)
        .collect();

    Some(Commit {
        hash: captures["hash"].to_string(),
        message: captures
            .name("body")
            .map_or("", |body| body.as_str())
            .trim_end()
            .to_string(),
        parents,
        refs,
        author_email: captures["email"].to_string(),
        author_date,
    })
}

/// Iterator over the commits in `git log` output.
///
/// Iteration ends at the end of input or at the first record that does not decode,
/// whichever comes first. Commits decoded before a malformed record are still
/// yielded.
pub struct LogEntries<'a> {
    remaining: &'a str,
}

impl<'a> LogEntries<'a> {
    pub fn new(log: &'a str) -> Self {
        Self { remaining: log }
    }
}

impl Iterator for LogEntries<'_> {
    type Item = Commit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let (record, rest) = match self.remaining.find(RECORD_SEPARATOR) {
            Some(offset) => (
                &self.remaining[..offset],
                &self.remaining[offset + RECORD_SEPARATOR.len()..],
            ),
            None => (self.remaining, ""),
        };
        match parse_commit(record) {
            Some(commit) => {
                self.remaining = rest;
                Some(commit)
            }
            None => {
                if !record.trim().is_empty() {
                    debug!(record, "stopped decoding log at malformed record");
                }
                self.remaining = "";
                None
            }
        }
    }
}

/// Decode `git log` output into commits, newest first unless `--reverse` was used.
pub fn parse_log(log: &str) -> Vec<Commit> {
    LogEntries::new(log).collect()
}

/// Decode a completed `git log` invocation, given its exit status and output.
///
/// [`NO_COMMITS_EXIT_CODE`] is reported by git for a branch without any commits
/// and yields an empty list. Other failures are returned as a classified
/// [`GitFailure`].
pub fn parse_log_output(
    exit_code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> Result<Vec<Commit>, GitFailure> {
    match exit_code {
        Some(0) => Ok(parse_log(stdout)),
        Some(NO_COMMITS_EXIT_CODE) => {
            debug!("no commits yet");
            Ok(Vec::new())
        }
        _ => Err(GitFailure::new("log", exit_code, stdout, stderr)),
    }
}
