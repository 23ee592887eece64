// SPDX-License-Identifier: GPL-2.0-only

//! Decode `git archive --list` output.

/// Split the supported archive formats, one per line.
///
/// Lines may end in `\n` or `\r\n`. Blank lines are dropped and order is kept.
pub fn parse_archive_format_list(output: &str) -> Vec<String> {
    output
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}
