// SPDX-License-Identifier: GPL-2.0-only

//! Render typed requests into `git` argument vectors.
//!
//! Each function here corresponds to a single `git` command. The result is an
//! [`Invocation`] whose arguments are discrete tokens meant to be handed to the
//! process API directly, one argument per token, never through a shell.
//!
//! User-supplied values (paths, config values, archive options) are passed through
//! [`quote()`] before being placed in the vector.

mod archive;
mod checkout;
mod commit;
mod log;
mod quote;

use std::fmt;

use serde::Serialize;
use tracing::trace;

pub use self::{
    archive::{archive, archive_format_list, ArchiveOptions},
    checkout::{checkout, checkout_new_branch, CheckoutOptions},
    commit::{commit, CommitOptions},
    log::{log, LogOptions, LOG_FORMAT, RECORD_SEPARATOR},
    quote::quote,
};
use crate::error::{Error, Result};

/// Arguments for one `git` invocation, plus any data to write to its stdin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Invocation {
    args: Vec<String>,
    stdin: Option<String>,
}

impl Invocation {
    fn new(command: &str) -> Self {
        Self {
            args: vec![command.to_string()],
            stdin: None,
        }
    }

    fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    fn push_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `--` followed by each path, quoted.
    fn pathspecs<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.arg("--");
        for path in paths {
            let path = quote(path.as_ref()).into_owned();
            self.args.push(path);
        }
        self
    }

    fn with_stdin(&mut self, input: impl Into<String>) -> &mut Self {
        self.stdin = Some(input.into());
        self
    }

    fn finish(&mut self) -> Self {
        let invocation = std::mem::take(self);
        trace!(%invocation, "rendered git invocation");
        invocation
    }

    /// Arguments to pass to `git`, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Data the caller must write to the child's stdin, if any.
    pub fn stdin(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Machine-readable, lock-free status including untracked files.
///
/// Output is decoded with [`crate::output::parse_status`].
pub fn status() -> Invocation {
    let mut invocation = Invocation::new("--no-optional-locks");
    invocation.push_args(["status", "-z", "-u"]).finish()
}

pub fn init() -> Invocation {
    Invocation::new("init").finish()
}

/// Output is decoded with [`crate::output::parse_version`].
pub fn version() -> Invocation {
    Invocation::new("version").finish()
}

/// Verbose object counts.
///
/// Output is decoded with [`crate::output::parse_count_objects`].
pub fn count_objects() -> Invocation {
    Invocation::new("count-objects").arg("-v").finish()
}

/// Stage the given paths, or every change in the work tree if there are none.
pub fn add<I, S>(paths: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paths = paths.into_iter().peekable();
    let mut invocation = Invocation::new("add");
    if paths.peek().is_some() {
        invocation.pathspecs(paths);
    } else {
        invocation.arg("--all");
    }
    invocation.finish()
}

/// Remove paths from the index and work tree.
///
/// Unlike [`add()`], a path list is mandatory; `None` is rejected rather than
/// being interpreted as "everything".
pub fn remove<I, S>(paths: Option<I>) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths = paths.ok_or(Error::InvalidArgument("paths", "a path list is required"))?;
    Ok(Invocation::new("rm").pathspecs(paths).finish())
}

/// Get or set a config value.
///
/// `scope` is rendered as a `--<scope>` flag, e.g. `global` or `local`. An empty
/// `value` is treated as absent, turning the invocation into a lookup.
pub fn config(key: &str, value: Option<&str>, scope: Option<&str>) -> Invocation {
    let mut invocation = Invocation::new("config");
    if let Some(scope) = scope.filter(|scope| !scope.is_empty()) {
        invocation.arg(format!("--{scope}"));
    }
    invocation.arg(key);
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        invocation.arg(quote(value));
    }
    invocation.finish()
}

fn require_non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::InvalidArgument(name, "must not be blank"))
    } else {
        Ok(())
    }
}
