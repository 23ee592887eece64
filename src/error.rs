// SPDX-License-Identifier: GPL-2.0-only

//! Error types for building git invocations and decoding git output.

use bstr::ByteSlice;
use serde::Serialize;
use thiserror::Error;

use crate::output::{classify, ErrorCode};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument `{0}`: {1}")]
    InvalidArgument(&'static str, &'static str),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("truncated status entry `{0}`")]
    TruncatedStatusEntry(String),

    #[error("status entry `{0}` lacks the space after its change codes")]
    MissingStatusSeparator(String),

    #[error("status entry `{0}` has an empty path")]
    EmptyStatusPath(String),

    #[error("unknown change type `{}`", .0.escape_ascii())]
    UnknownChangeType(u8),

    #[error("non-UTF-8 path `{0}`")]
    NonUtf8Path(String),

    #[error("malformed count-objects line `{0}`")]
    MalformedCount(String),

    #[error("invalid value `{1}` for `{0}`")]
    InvalidFieldValue(String, String),

    #[error("failed to parse git version: {0}")]
    Version(String),

    #[error(transparent)]
    Git(#[from] GitFailure),
}

/// A `git` invocation that exited unsuccessfully.
///
/// The execution layer builds one of these from the exit status and captured
/// streams of a failed command. The stderr text is classified on construction so
/// callers can decide, for example, whether retrying is worthwhile.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("`git {command}`: {}", .stderr.trim_end())]
pub struct GitFailure {
    pub command: String,

    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,

    pub stdout: String,
    pub stderr: String,
    pub code: Option<ErrorCode>,
}

impl GitFailure {
    pub fn new(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        let stderr = stderr.into();
        let code = classify(&stderr);
        Self {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr,
            code,
        }
    }

    /// Build from raw captured streams, replacing invalid UTF-8.
    pub fn from_bytes(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: &[u8],
        stderr: &[u8],
    ) -> Self {
        Self::new(
            command,
            exit_code,
            stdout.to_str_lossy(),
            stderr.to_str_lossy(),
        )
    }
}
