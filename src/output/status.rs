// SPDX-License-Identifier: GPL-2.0-only

//! Interrogate worktree status.
//!
//! Decodes the output of `git status -z` (porcelain v1, NUL terminated). Each entry
//! looks like:
//!
//! ```text
//! XY PATH\0
//! XY ORIG_PATH\0PATH\0      (when X is R or C)
//! ```

use std::path::PathBuf;

use bstr::ByteSlice;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Change code for one side (index or work tree) of a status entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeType {
    Unmodified,
    Untracked,
    Ignored,
    Added,
    Modified,
    TypeChanged,
    Deleted,
    Renamed,
    Copied,

    /// Updated but unmerged.
    Unmerged,
}

impl ChangeType {
    pub fn from_byte(c: u8) -> Result<ChangeType> {
        match c {
            b' ' => Ok(ChangeType::Unmodified),
            b'?' => Ok(ChangeType::Untracked),
            b'!' => Ok(ChangeType::Ignored),
            b'A' => Ok(ChangeType::Added),
            b'M' => Ok(ChangeType::Modified),
            b'T' => Ok(ChangeType::TypeChanged),
            b'D' => Ok(ChangeType::Deleted),
            b'R' => Ok(ChangeType::Renamed),
            b'C' => Ok(ChangeType::Copied),
            b'U' => Ok(ChangeType::Unmerged),
            c => Err(Error::UnknownChangeType(c)),
        }
    }

    /// The status code character git uses for this change.
    pub fn as_char(self) -> char {
        match self {
            ChangeType::Unmodified => ' ',
            ChangeType::Untracked => '?',
            ChangeType::Ignored => '!',
            ChangeType::Added => 'A',
            ChangeType::Modified => 'M',
            ChangeType::TypeChanged => 'T',
            ChangeType::Deleted => 'D',
            ChangeType::Renamed => 'R',
            ChangeType::Copied => 'C',
            ChangeType::Unmerged => 'U',
        }
    }

    /// Entries with this index status carry the path they were renamed or copied from.
    fn has_original_path(self) -> bool {
        matches!(self, ChangeType::Renamed | ChangeType::Copied)
    }
}

/// Status of one path in the index and work tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    /// Index (staged) status.
    pub x: ChangeType,

    /// Work tree status.
    pub y: ChangeType,

    pub path: PathBuf,

    /// Only set when `x` is [`ChangeType::Renamed`] or [`ChangeType::Copied`].
    pub original_path: Option<PathBuf>,
}

/// Result of decoding one status entry.
#[derive(Debug)]
pub struct StatusStep<'a> {
    /// `None` when the entry was a nested repository rather than a trackable file.
    pub status: Option<FileStatus>,

    /// Input following the decoded entry.
    pub remaining: &'a [u8],
}

/// Decode the entry at the start of `input`.
///
/// Returns `Ok(None)` once `input` is exhausted. Entries whose path ends in `/`
/// denote a nested repository; they are consumed but produce no [`FileStatus`].
pub fn parse_status_entry(input: &[u8]) -> Result<Option<StatusStep<'_>>> {
    if input.is_empty() {
        return Ok(None);
    }

    //     +--- staged status, aka index status
    //     |+-- unstaged status, aka worktree status
    //     ||
    // b"XY PATH\0"
    //   012
    if input.len() < 3 {
        return Err(Error::TruncatedStatusEntry(input.to_str_lossy().into_owned()));
    }
    let x = ChangeType::from_byte(input[0])?;
    let y = ChangeType::from_byte(input[1])?;
    if input[2] != b' ' {
        let entry = input.find_byte(0).map_or(input, |nul| &input[..nul]);
        return Err(Error::MissingStatusSeparator(
            entry.to_str_lossy().into_owned(),
        ));
    }
    let mut rest = &input[3..];

    let original_path = if x.has_original_path() {
        let (original_path, after) = split_nul(input, rest)?;
        rest = after;
        Some(original_path)
    } else {
        None
    };

    let (path, remaining) = split_nul(input, rest)?;
    if path.is_empty() {
        return Err(Error::EmptyStatusPath(
            input[..input.len() - remaining.len()]
                .to_str_lossy()
                .into_owned(),
        ));
    }

    let status = if path.ends_with(b"/") {
        debug!(path = %path.as_bstr(), "skipping nested repository");
        None
    } else {
        Some(FileStatus {
            x,
            y,
            path: to_path_buf(path)?,
            original_path: original_path.map(to_path_buf).transpose()?,
        })
    };

    Ok(Some(StatusStep { status, remaining }))
}

fn split_nul<'a>(entry: &[u8], data: &'a [u8]) -> Result<(&'a [u8], &'a [u8])> {
    let null_offset = data
        .find_byte(0)
        .ok_or_else(|| Error::TruncatedStatusEntry(entry.to_str_lossy().into_owned()))?;
    Ok((&data[..null_offset], &data[null_offset + 1..]))
}

fn to_path_buf(path: &[u8]) -> Result<PathBuf> {
    path.to_path()
        .map(PathBuf::from)
        .map_err(|_| Error::NonUtf8Path(path.to_str_lossy().into_owned()))
}

/// Iterate the [`FileStatus`] entries of `git status -z` output.
///
/// Nested repositories are skipped. Iteration ends after the first error.
pub struct StatusEntries<'a> {
    remaining: &'a [u8],
}

impl<'a> StatusEntries<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { remaining: data }
    }
}

impl Iterator for StatusEntries<'_> {
    type Item = Result<FileStatus>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match parse_status_entry(self.remaining) {
                Ok(Some(StatusStep { status, remaining })) => {
                    self.remaining = remaining;
                    if let Some(status) = status {
                        return Some(Ok(status));
                    }
                }
                Ok(None) => return None,
                Err(e) => {
                    self.remaining = &[];
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Decode all entries of `git status -z` output.
pub fn parse_status(data: &[u8]) -> Result<Vec<FileStatus>> {
    StatusEntries::new(data).collect()
}
