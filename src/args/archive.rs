// SPDX-License-Identifier: GPL-2.0-only

use super::{quote, require_non_blank, Invocation};
use crate::error::Result;

/// Options for [`archive()`].
#[derive(Clone, Debug, Default)]
pub struct ArchiveOptions {
    format: Option<String>,
    prefix: Option<String>,
    worktree_attributes: bool,
    extra: Vec<String>,
    remote: Option<String>,
    exec: Option<String>,
    paths: Option<Vec<String>>,
}

impl ArchiveOptions {
    /// Archive format, e.g. `tar` or `zip`. See [`archive_format_list()`].
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.format = Some(format.into());
        self
    }

    /// Prepend `prefix` to each path in the archive.
    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Look for attributes in the work tree's `.gitattributes` files.
    pub fn worktree_attributes(&mut self, worktree_attributes: bool) -> &mut Self {
        self.worktree_attributes = worktree_attributes;
        self
    }

    /// Backend-specific single-dash option, given without its dash, e.g. `9` for
    /// maximum compression.
    pub fn extra(&mut self, extra: impl Into<String>) -> &mut Self {
        self.extra.push(extra.into());
        self
    }

    /// Retrieve the archive from a remote repository.
    pub fn remote(&mut self, remote: impl Into<String>) -> &mut Self {
        self.remote = Some(remote.into());
        self
    }

    /// Path to `git-upload-archive` on the remote side.
    pub fn exec(&mut self, exec: impl Into<String>) -> &mut Self {
        self.exec = Some(exec.into());
        self
    }

    /// Limit the archive to these paths.
    pub fn paths<SpecIter, SpecArg>(&mut self, paths: SpecIter) -> &mut Self
    where
        SpecIter: IntoIterator<Item = SpecArg>,
        SpecArg: Into<String>,
    {
        self.paths
            .get_or_insert_with(Vec::new)
            .extend(paths.into_iter().map(Into::into));
        self
    }
}

/// List the archive formats `git archive` supports, one per line.
///
/// Output is decoded with [`crate::output::parse_archive_format_list`].
pub fn archive_format_list() -> Invocation {
    Invocation::new("archive").arg("--list").finish()
}

/// Write an archive of `treeish` to the file at `output`.
pub fn archive(treeish: &str, output: &str, options: &ArchiveOptions) -> Result<Invocation> {
    require_non_blank("treeish", treeish)?;
    require_non_blank("output", output)?;

    let non_empty = |value: &Option<String>| value.clone().filter(|value| !value.is_empty());

    let mut invocation = Invocation::new("archive");
    if let Some(format) = non_empty(&options.format) {
        invocation.arg(format!("--format={}", quote(&format)));
    }
    if let Some(prefix) = non_empty(&options.prefix) {
        invocation.arg(format!("--prefix={}", quote(&prefix)));
    }
    invocation.arg(format!("--output={}", quote(output)));
    if options.worktree_attributes {
        invocation.arg("--worktree-attributes");
    }
    for extra in &options.extra {
        invocation.arg(format!("-{extra}"));
    }
    if let Some(remote) = non_empty(&options.remote) {
        invocation.arg(format!("--remote={}", quote(&remote)));
    }
    if let Some(exec) = non_empty(&options.exec) {
        invocation.arg(format!("--exec={}", quote(&exec)));
    }
    invocation.arg(treeish);
    if let Some(paths) = &options.paths {
        invocation.pathspecs(paths);
    }
    Ok(invocation.finish())
}
