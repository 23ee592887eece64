// SPDX-License-Identifier: GPL-2.0-only

//! Color output support.

use clap::{Arg, ArgMatches};
use termcolor::{ColorChoice, StandardStream};

/// The global `--color` option.
pub(crate) fn get_color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .help("When to colorize output: auto, always, ansi, never")
        .long_help(
            "Specify WHEN to colorize the output.\n\
             \n\
             'auto' (the default) enables colored output only when \
             outputting to a terminal or TTY.\n\
             \n\
             'always' and 'never' unconditionally enable/disable \
             colored output, respectively.\n\
             \n\
             'ansi' forces color to be output using ANSI escape sequences, \
             even in a Windows console.",
        )
        .global(true)
        .hide_default_value(true)
        .hide_possible_values(true)
        .value_name("when")
        .value_parser(["auto", "always", "ansi", "never"])
        .num_args(1)
        .default_value("auto")
        .overrides_with("color")
}

pub(crate) fn get_color_stderr(matches: Option<&ArgMatches>) -> StandardStream {
    StandardStream::stderr(get_color_choice(matches, atty::Stream::Stderr))
}

/// Map the `--color` option to a [`ColorChoice`] for `stream`.
///
/// Without matches, e.g. when argument parsing has not happened yet, `auto` is assumed.
pub(crate) fn get_color_choice(matches: Option<&ArgMatches>, stream: atty::Stream) -> ColorChoice {
    let when = matches
        .and_then(|matches| matches.get_one::<String>("color"))
        .map_or("auto", String::as_str);
    match when {
        "always" => ColorChoice::Always,
        "ansi" => ColorChoice::AlwaysAnsi,
        "auto" => {
            if atty::is(stream) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
        _ => ColorChoice::Never,
    }
}
