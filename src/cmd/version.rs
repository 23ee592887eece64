// SPDX-License-Identifier: GPL-2.0-only

//! `gitline version` implementation.

use anyhow::Result;

pub(super) const GITLINE_COMMAND: super::GitlineCommand = super::GitlineCommand {
    name: "version",
    make,
    run,
};

fn make() -> clap::Command {
    clap::Command::new(GITLINE_COMMAND.name).about("Print version information and exit")
}

fn run(_: &clap::ArgMatches) -> Result<()> {
    println!("gitline {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
