// SPDX-License-Identifier: GPL-2.0-only

//! `gitline` command line interface.

mod argset;
mod cmd;
mod color;


use clap::crate_version;
use termcolor::WriteColor;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives.
const LOG_ENV: &str = "GITLINE_LOG";

fn get_base_command() -> clap::Command {
    clap::Command::new("gitline")
        .about("Build git argument vectors and decode git's machine-readable output.")
        .version(crate_version!())
        .max_term_width(88)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand_value_name("command")
        .subcommand_help_heading("COMMANDS")
        .arg(color::get_color_arg())
        .subcommands(cmd::GITLINE_COMMANDS.iter().map(|command| (command.make)()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ! {
    init_tracing();

    let matches = get_base_command().get_matches();
    let result = match matches.subcommand() {
        Some((command_name, cmd_matches)) => match cmd::get_command(command_name) {
            Some(command) => (command.run)(cmd_matches),
            None => Err(anyhow::anyhow!("unknown command `{command_name}`")),
        },
        None => Err(anyhow::anyhow!("no command given")),
    };

    if let Err(e) = result {
        let mut stderr = color::get_color_stderr(Some(&matches));
        // Nothing sensible remains to be done if stderr itself fails.
        let _ = print_error_message(&mut stderr, &e);
        std::process::exit(2)
    } else {
        std::process::exit(0)
    }
}

/// Print `err` and its causes, highlighting back-quoted spans.
fn print_error_message(stderr: &mut impl WriteColor, err: &anyhow::Error) -> std::io::Result<()> {
    let mut color = termcolor::ColorSpec::new();
    stderr.set_color(color.set_fg(Some(termcolor::Color::Red)).set_bold(true))?;
    write!(stderr, "error: ")?;
    stderr.set_color(color.set_fg(None).set_bold(false))?;

    let err_string = format!("{err:#}");
    let mut remainder: &str = &err_string;
    loop {
        let parts: Vec<&str> = remainder.splitn(3, '`').collect();
        match parts.as_slice() {
            [] => {
                writeln!(stderr)?;
                break;
            }
            [text] => {
                writeln!(stderr, "{text}")?;
                break;
            }
            [text, unmatched] => {
                writeln!(stderr, "{text}`{unmatched}")?;
                break;
            }
            [text, quoted, rest, ..] => {
                write!(stderr, "{text}`")?;
                stderr.set_color(color.set_fg(Some(termcolor::Color::Yellow)))?;
                write!(stderr, "{quoted}")?;
                stderr.set_color(color.set_fg(None))?;
                write!(stderr, "`")?;
                remainder = *rest;
            }
        }
    }
    stderr.reset()
}

#[cfg(test)]
mod tests {
    use termcolor::{Buffer, Color, ColorSpec};

    use super::*;

    #[test]
    fn command_table_is_consistent() {
        get_base_command().debug_assert();
        for command in cmd::GITLINE_COMMANDS {
            assert_eq!((command.make)().get_name(), command.name);
        }
    }

    #[test]
    fn plain_error_message() {
        let mut buf = Buffer::no_color();
        let err = anyhow::anyhow!("status entry `?? \0` has an empty path").context("decoding");
        print_error_message(&mut buf, &err).unwrap();
        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "error: decoding: status entry `?? \0` has an empty path\n"
        );
    }

    #[test]
    fn quoted_spans_are_highlighted() {
        let mut buf = Buffer::ansi();
        print_error_message(&mut buf, &anyhow::anyhow!("unknown command `x`")).unwrap();
        let output = String::from_utf8(buf.into_inner()).unwrap();

        let mut expected = Buffer::ansi();
        expected
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))
            .unwrap();
        let yellow = String::from_utf8(expected.into_inner()).unwrap();
        assert!(output.contains(&format!("`{yellow}x")));
    }
}
