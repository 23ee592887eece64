// SPDX-License-Identifier: GPL-2.0-only

use super::{require_non_blank, Invocation};
use crate::error::{Error, Result};

/// Options for [`checkout()`].
#[derive(Clone, Debug, Default)]
pub struct CheckoutOptions {
    track: bool,
}

impl CheckoutOptions {
    /// Set up upstream tracking when checking out a remote branch.
    pub fn track(&mut self, track: bool) -> &mut Self {
        self.track = track;
        self
    }
}

/// Check out a treeish, or restore `paths` from it.
pub fn checkout<SpecIter, SpecArg>(
    treeish: &str,
    paths: Option<SpecIter>,
    options: &CheckoutOptions,
) -> Result<Invocation>
where
    SpecIter: IntoIterator<Item = SpecArg>,
    SpecArg: AsRef<str>,
{
    if treeish.is_empty() {
        return Err(Error::InvalidArgument("treeish", "must not be empty"));
    }
    let mut invocation = Invocation::new("checkout");
    invocation.arg("-q");
    if options.track {
        invocation.arg("--track");
    }
    invocation.arg(treeish);
    if let Some(paths) = paths {
        invocation.pathspecs(paths);
    }
    Ok(invocation.finish())
}

/// Create and check out a branch.
///
/// With `force`, an existing branch of the same name is reset to `start_point`.
pub fn checkout_new_branch(
    branch_name: &str,
    force: bool,
    start_point: Option<&str>,
) -> Result<Invocation> {
    require_non_blank("branch_name", branch_name)?;
    let mut invocation = Invocation::new("checkout");
    invocation
        .arg("-q")
        .arg(if force { "-B" } else { "-b" })
        .arg(branch_name);
    if let Some(start_point) = start_point.filter(|s| !s.trim().is_empty()) {
        invocation.arg(start_point);
    }
    Ok(invocation.finish())
}
