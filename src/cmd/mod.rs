// SPDX-License-Identifier: GPL-2.0-only

//! gitline subcommand implementations.
//!
//! Each subcommand is in its own module. The [`GITLINE_COMMANDS`] slice constant
//! contains a [`GitlineCommand`] instance for each subcommand.

pub(crate) mod decode;
pub(crate) mod render;
pub(crate) mod version;

/// Entry point for a gitline subcommand.
pub(crate) struct GitlineCommand {
    /// Name of command.
    pub name: &'static str,

    /// Function pointer for making the [`clap::Command`] for the subcommand.
    pub make: fn() -> clap::Command,

    /// Function pointer for running the subcommand.
    pub run: fn(&clap::ArgMatches) -> anyhow::Result<()>,
}

/// Builtin [`GitlineCommand`]'s.
///
/// This is used in `main` for command line argument parsing and eventual dispatch
/// of a subcommand.
pub(crate) const GITLINE_COMMANDS: &[GitlineCommand] = &[
    decode::GITLINE_COMMAND,
    render::GITLINE_COMMAND,
    version::GITLINE_COMMAND,
];

pub(crate) fn get_command(name: &str) -> Option<&'static GitlineCommand> {
    GITLINE_COMMANDS.iter().find(|command| command.name == name)
}

/// Write `value` to stdout as pretty-printed JSON.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    use std::io::Write;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
