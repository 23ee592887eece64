// SPDX-License-Identifier: GPL-2.0-only

//! Talk to git, the stupid content tracker, without talking to it.
//!
//! This crate sits on both sides of a `git` invocation but never performs one. The
//! [`args`] module renders typed requests into the exact argument vector `git` must
//! receive, and the [`output`] module decodes the machine-oriented text `git` prints
//! back into typed records. Spawning the process, wiring its streams and waiting for
//! it to exit are left to the caller.
//!
//! ```
//! use gitline::{args, output};
//!
//! let invocation = args::status();
//! assert_eq!(invocation.args(), ["--no-optional-locks", "status", "-z", "-u"]);
//!
//! let statuses = output::parse_status(b"?? file.txt\0").unwrap();
//! assert_eq!(statuses.len(), 1);
//! ```

#[macro_use]
extern crate lazy_static;

pub mod args;
mod error;
pub mod output;

pub use self::{
    error::{Error, GitFailure, Result},
    output::{ChangeType, Commit, ErrorCode, FileStatus, GitVersion, ObjectCount},
};
