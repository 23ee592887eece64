// SPDX-License-Identifier: GPL-2.0-only

//! [`clap::Arg`] definitions common to several gitline commands.

use std::num::NonZeroUsize;

use clap::{Arg, ArgAction};

/// Trailing pathspec arguments.
pub(crate) fn paths_arg() -> Arg {
    Arg::new("paths")
        .help("Limit the command to these paths")
        .value_name("path")
        .num_args(1..)
        .action(ArgAction::Append)
        .value_parser(clap::value_parser!(String))
        .value_hint(clap::ValueHint::AnyPath)
}

/// Optional input file, read from stdin when absent or `-`.
pub(crate) fn input_arg() -> Arg {
    Arg::new("file")
        .help("File holding the captured git output [default: stdin]")
        .value_name("file")
        .value_parser(clap::value_parser!(std::path::PathBuf))
        .value_hint(clap::ValueHint::FilePath)
}

/// A boolean `--long` flag.
pub(crate) fn flag(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).help(help).action(ArgAction::SetTrue)
}

/// Get a `&str` from a `clap::ArgMatches` instance for the given `id`.
///
/// `ArgMatches::get_one::<String>()` returns `Option<&String>`, which usually needs
/// to be mapped to `Option<&str>` anyway.
pub(crate) fn get_one_str<'a>(matches: &'a clap::ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(|s| s.as_str())
}

/// Get all values of a multi-valued `String` argument.
pub(crate) fn get_many_str<'a>(
    matches: &'a clap::ArgMatches,
    id: &str,
) -> Option<impl Iterator<Item = &'a str>> {
    matches
        .get_many::<String>(id)
        .map(|values| values.map(|s| s.as_str()))
}

/// For use with `clap::Arg::value_parser()` to parse a positive count.
///
/// The error message is preferable to the one reported by
/// `str::parse::<NonZeroUsize>()`.
pub(crate) fn parse_positive(s: &str) -> anyhow::Result<NonZeroUsize> {
    s.parse::<NonZeroUsize>()
        .map_err(|_| anyhow::anyhow!("'{s}' is not a positive integer"))
}

/// For use with `clap::Arg::value_parser()` to parse a process exit code.
pub(crate) fn parse_exit_code(s: &str) -> anyhow::Result<i32> {
    s.parse::<i32>()
        .map_err(|_| anyhow::anyhow!("'{s}' is not an exit code"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_counts() {
        assert_eq!(parse_positive("32").unwrap().get(), 32);
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-1").is_err());
        assert_eq!(
            parse_positive("x").unwrap_err().to_string(),
            "'x' is not a positive integer"
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(parse_exit_code("128").unwrap(), 128);
        assert!(parse_exit_code("").is_err());
    }
}
