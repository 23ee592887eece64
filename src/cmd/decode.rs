// SPDX-License-Identifier: GPL-2.0-only

//! `gitline decode` implementation.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use bstr::ByteSlice;
use clap::{Arg, ArgMatches};
use gitline::{output, GitVersion};
use serde::Serialize;

use super::print_json;
use crate::argset;

pub(super) const GITLINE_COMMAND: super::GitlineCommand = super::GitlineCommand {
    name: "decode",
    make,
    run,
};

fn make() -> clap::Command {
    clap::Command::new(GITLINE_COMMAND.name)
        .about("Decode captured git output as JSON")
        .long_about(
            "Decode the captured output of a git command and print it as JSON.\n\
             \n\
             The output is read from FILE, or from stdin when FILE is absent or \
             '-'. Log output must have been produced with the format printed by \
             'gitline render log'.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            clap::Command::new("log")
                .about("Decode 'git log' output into commits")
                .arg(argset::input_arg())
                .arg(
                    Arg::new("exit-code")
                        .long("exit-code")
                        .help("Exit status of the git log process")
                        .value_name("code")
                        .allow_negative_numbers(true)
                        .value_parser(argset::parse_exit_code),
                )
                .arg(
                    Arg::new("stderr")
                        .long("stderr")
                        .help("File holding the stderr of the git log process")
                        .value_name("file")
                        .requires("exit-code")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(clap::ValueHint::FilePath),
                ),
        )
        .subcommand(
            clap::Command::new("status")
                .about("Decode 'git status -z' output into file statuses")
                .arg(argset::input_arg()),
        )
        .subcommand(
            clap::Command::new("count-objects")
                .about("Decode 'git count-objects' output")
                .arg(argset::input_arg()),
        )
        .subcommand(
            clap::Command::new("archive-formats")
                .about("Decode 'git archive --list' output")
                .arg(argset::input_arg()),
        )
        .subcommand(
            clap::Command::new("version")
                .about("Decode 'git version' output")
                .arg(argset::input_arg()),
        )
        .subcommand(
            clap::Command::new("error")
                .about("Classify the stderr of a failed git command")
                .arg(argset::input_arg()),
        )
}

#[derive(Serialize)]
struct VersionReport<'a> {
    version: &'a str,
    parsed: Option<GitVersion>,
}

fn run(matches: &ArgMatches) -> Result<()> {
    let (decoder, matches) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("no decoder given"))?;
    let input = read_input(matches.get_one::<PathBuf>("file").map(PathBuf::as_path))?;

    match decoder {
        "log" => {
            let log = input.to_str_lossy();
            let commits = if let Some(&exit_code) = matches.get_one::<i32>("exit-code") {
                let stderr = match matches.get_one::<PathBuf>("stderr") {
                    Some(path) => read_file(path)?.to_str_lossy().into_owned(),
                    None => String::new(),
                };
                output::parse_log_output(Some(exit_code), &log, &stderr)?
            } else {
                output::parse_log(&log)
            };
            print_json(&commits)
        }
        "status" => {
            let statuses = output::parse_status(&input).context("decoding status output")?;
            print_json(&statuses)
        }
        "count-objects" => {
            let count = output::parse_count_objects(&input.to_str_lossy())
                .context("decoding count-objects output")?;
            print_json(&count)
        }
        "archive-formats" => print_json(&output::parse_archive_format_list(&input.to_str_lossy())),
        "version" => {
            let text = input.to_str_lossy();
            print_json(&VersionReport {
                version: output::parse_version(&text),
                parsed: text.parse::<GitVersion>().ok(),
            })
        }
        "error" => print_json(&output::classify(&input.to_str_lossy())),
        _ => Err(anyhow!("unknown decoder `{decoder}`")),
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path.filter(|path| path.as_os_str() != "-") {
        Some(path) => read_file(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading `{}`", path.display()))
}
