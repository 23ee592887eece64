// SPDX-License-Identifier: GPL-2.0-only

use std::num::NonZeroUsize;

use super::Invocation;

/// Pretty format requested from `git log`.
///
/// One field per line: full hash followed by ref decorations, author timestamp in
/// seconds since the epoch, author email, space separated parent hashes, and the raw
/// body. Each record is terminated by [`RECORD_SEPARATOR`]. The log decoder in
/// [`crate::output::parse_log`] is matched to exactly this shape, so the two must
/// change together.
pub const LOG_FORMAT: &str = "%H %D%n%at%n%ae%n%P%n%B%x00%x00";

/// Terminator `git` emits after each record rendered with [`LOG_FORMAT`].
pub const RECORD_SEPARATOR: &str = "\0\0";

/// Options for [`log()`].
#[derive(Clone, Debug, Default)]
pub struct LogOptions {
    max_entries: Option<NonZeroUsize>,
    reverse: bool,
    all: bool,
}

impl LogOptions {
    /// Limit the number of commits output. Git's default applies if unset.
    pub fn max_entries(&mut self, max_entries: NonZeroUsize) -> &mut Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Output commits oldest first.
    pub fn reverse(&mut self, reverse: bool) -> &mut Self {
        self.reverse = reverse;
        self
    }

    /// Walk all refs instead of only `HEAD`.
    pub fn all(&mut self, all: bool) -> &mut Self {
        self.all = all;
        self
    }
}

/// Commit log in a shape [`crate::output::parse_log`] understands.
///
/// When `paths` is provided, history is limited to commits touching those paths.
pub fn log<SpecIter, SpecArg>(options: &LogOptions, paths: Option<SpecIter>) -> Invocation
where
    SpecIter: IntoIterator<Item = SpecArg>,
    SpecArg: AsRef<str>,
{
    let mut invocation = Invocation::new("log");
    invocation.arg(format!("--pretty=format:{LOG_FORMAT}"));
    if let Some(max_entries) = options.max_entries {
        invocation.arg(format!("--max-count={max_entries}"));
    }
    if options.reverse {
        invocation.arg("--reverse");
    }
    if options.all {
        invocation.arg("--all");
    }
    if let Some(paths) = paths {
        invocation.pathspecs(paths);
    }
    invocation.finish()
}
