// SPDX-License-Identifier: GPL-2.0-only

use super::Invocation;

/// Options for [`commit()`].
#[derive(Clone, Debug, Default)]
pub struct CommitOptions {
    all: bool,
    amend: bool,
    signoff: bool,
    gpg_sign: bool,
    allow_empty: bool,
}

impl CommitOptions {
    /// Stage modified and deleted tracked files before committing.
    pub fn all(&mut self, all: bool) -> &mut Self {
        self.all = all;
        self
    }

    pub fn amend(&mut self, amend: bool) -> &mut Self {
        self.amend = amend;
        self
    }

    /// Add a `Signed-off-by` trailer.
    pub fn signoff(&mut self, signoff: bool) -> &mut Self {
        self.signoff = signoff;
        self
    }

    /// GPG-sign the commit.
    pub fn gpg_sign(&mut self, gpg_sign: bool) -> &mut Self {
        self.gpg_sign = gpg_sign;
        self
    }

    /// Allow a commit that records no changes.
    pub fn allow_empty(&mut self, allow_empty: bool) -> &mut Self {
        self.allow_empty = allow_empty;
        self
    }
}

/// Quiet commit reading its message from stdin.
///
/// The message travels as the invocation's stdin payload, verbatim, so it is never
/// subject to argument quoting. An empty message is accepted.
pub fn commit(message: &str, options: &CommitOptions) -> Invocation {
    let mut invocation = Invocation::new("commit");
    invocation.push_args(["--quiet", "--allow-empty-message", "--file", "-"]);
    if options.all {
        invocation.arg("--all");
    }
    if options.amend {
        invocation.arg("--amend");
    }
    if options.signoff {
        invocation.arg("--signoff");
    }
    if options.gpg_sign {
        invocation.arg("-S");
    }
    if options.allow_empty {
        invocation.arg("--allow-empty");
    }
    invocation.with_stdin(message).finish()
}
