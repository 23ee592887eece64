// SPDX-License-Identifier: GPL-2.0-only

//! Decode the output of `git` commands rendered by [`crate::args`].
//!
//! Every decoder is a pure function over text (or bytes, for NUL-delimited output)
//! that was captured from a completed invocation.

mod archive;
mod classify;
mod count;
mod log;
mod status;
mod version;

pub use self::{
    archive::parse_archive_format_list,
    classify::{classify, ErrorCode},
    count::{parse_count_objects, ObjectCount},
    log::{parse_commit, parse_log, parse_log_output, Commit, LogEntries, NO_COMMITS_EXIT_CODE},
    status::{parse_status, parse_status_entry, ChangeType, FileStatus, StatusEntries, StatusStep},
    version::{parse_version, GitVersion},
};
