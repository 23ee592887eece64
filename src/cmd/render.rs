// SPDX-License-Identifier: GPL-2.0-only

//! `gitline render` implementation.

use std::{io::Write, num::NonZeroUsize};

use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches};
use gitline::args::{self, ArchiveOptions, CheckoutOptions, CommitOptions, Invocation, LogOptions};

use super::print_json;
use crate::argset::{self, flag, get_many_str, get_one_str};

pub(super) const GITLINE_COMMAND: super::GitlineCommand = super::GitlineCommand {
    name: "render",
    make,
    run,
};

fn make() -> clap::Command {
    clap::Command::new(GITLINE_COMMAND.name)
        .about("Print the git arguments for a request")
        .long_about(
            "Print the argument vector git must receive for a request, one \
             argument per line.\n\
             \n\
             For requests that feed data to git's stdin, that data follows the \
             arguments after a '--- stdin ---' line.",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(flag("json", "Print the invocation as JSON").global(true))
        .subcommand(clap::Command::new("status").about("Machine-readable worktree status"))
        .subcommand(clap::Command::new("init").about("Create a repository"))
        .subcommand(clap::Command::new("version").about("Report the git version"))
        .subcommand(clap::Command::new("count-objects").about("Object database statistics"))
        .subcommand(clap::Command::new("archive-formats").about("List archive formats"))
        .subcommand(
            clap::Command::new("log")
                .about("Commit history in a decodable format")
                .arg(
                    Arg::new("max-count")
                        .long("max-count")
                        .short('n')
                        .help("Limit the number of commits")
                        .value_name("n")
                        .value_parser(argset::parse_positive),
                )
                .arg(flag("reverse", "Oldest commits first"))
                .arg(flag("all", "Include commits from all refs"))
                .arg(argset::paths_arg()),
        )
        .subcommand(
            clap::Command::new("commit")
                .about("Record a commit with a message fed through stdin")
                .arg(
                    Arg::new("message")
                        .help("Commit message")
                        .value_name("message")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(flag("all", "Stage modified and deleted files first"))
                .arg(flag("amend", "Replace the tip of the current branch"))
                .arg(flag("signoff", "Add a Signed-off-by trailer"))
                .arg(flag("gpg-sign", "GPG-sign the commit").short('S'))
                .arg(flag("allow-empty", "Allow a commit without changes")),
        )
        .subcommand(
            clap::Command::new("add")
                .about("Stage paths, or everything when none are given")
                .arg(argset::paths_arg()),
        )
        .subcommand(
            clap::Command::new("rm")
                .about("Remove paths from the index and work tree")
                .arg(argset::paths_arg()),
        )
        .subcommand(
            clap::Command::new("config")
                .about("Get or set a config value")
                .arg(Arg::new("key").value_name("key").required(true))
                .arg(Arg::new("value").value_name("value"))
                .arg(
                    Arg::new("scope")
                        .long("scope")
                        .help("Config scope, e.g. 'global' or 'local'")
                        .value_name("scope"),
                ),
        )
        .subcommand(
            clap::Command::new("checkout")
                .about("Check out a treeish, or restore paths from it")
                .arg(
                    Arg::new("treeish")
                        .value_name("treeish")
                        .required(true),
                )
                .arg(flag("track", "Set up upstream tracking"))
                .arg(argset::paths_arg()),
        )
        .subcommand(
            clap::Command::new("new-branch")
                .about("Create and check out a branch")
                .arg(Arg::new("name").value_name("name").required(true))
                .arg(Arg::new("start-point").value_name("start-point"))
                .arg(flag("force", "Reset the branch if it already exists").short('f')),
        )
        .subcommand(
            clap::Command::new("archive")
                .about("Write an archive of a treeish to a file")
                .arg(
                    Arg::new("treeish")
                        .value_name("treeish")
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("File to write the archive to")
                        .value_name("file")
                        .required(true)
                        .value_hint(clap::ValueHint::FilePath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Archive format, see 'git archive --list'")
                        .value_name("format"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .help("Prepend PREFIX to each filename in the archive")
                        .value_name("prefix"),
                )
                .arg(flag(
                    "worktree-attributes",
                    "Look for attributes in the work tree too",
                ))
                .arg(
                    Arg::new("extra")
                        .long("extra")
                        .help("Extra single-dash option for the archiver, e.g. '9'")
                        .value_name("option")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    Arg::new("remote")
                        .long("remote")
                        .help("Retrieve the archive from a remote repository")
                        .value_name("repo"),
                )
                .arg(
                    Arg::new("exec")
                        .long("exec")
                        .help("Path to git-upload-archive on the remote")
                        .value_name("path"),
                )
                .arg(argset::paths_arg()),
        )
}

fn run(matches: &ArgMatches) -> Result<()> {
    let json = matches.get_flag("json");
    let (request, matches) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("no request given"))?;

    let invocation = match request {
        "status" => args::status(),
        "init" => args::init(),
        "version" => args::version(),
        "count-objects" => args::count_objects(),
        "archive-formats" => args::archive_format_list(),
        "log" => {
            let mut options = LogOptions::default();
            if let Some(&max_entries) = matches.get_one::<NonZeroUsize>("max-count") {
                options.max_entries(max_entries);
            }
            options
                .reverse(matches.get_flag("reverse"))
                .all(matches.get_flag("all"));
            args::log(&options, get_many_str(matches, "paths"))
        }
        "commit" => {
            let message = get_one_str(matches, "message").unwrap_or_default();
            let mut options = CommitOptions::default();
            options
                .all(matches.get_flag("all"))
                .amend(matches.get_flag("amend"))
                .signoff(matches.get_flag("signoff"))
                .gpg_sign(matches.get_flag("gpg-sign"))
                .allow_empty(matches.get_flag("allow-empty"));
            args::commit(message, &options)
        }
        "add" => args::add(get_many_str(matches, "paths").into_iter().flatten()),
        "rm" => args::remove(get_many_str(matches, "paths"))?,
        "config" => args::config(
            get_one_str(matches, "key").unwrap_or_default(),
            get_one_str(matches, "value"),
            get_one_str(matches, "scope"),
        ),
        "checkout" => {
            let mut options = CheckoutOptions::default();
            options.track(matches.get_flag("track"));
            args::checkout(
                get_one_str(matches, "treeish").unwrap_or_default(),
                get_many_str(matches, "paths"),
                &options,
            )?
        }
        "new-branch" => args::checkout_new_branch(
            get_one_str(matches, "name").unwrap_or_default(),
            matches.get_flag("force"),
            get_one_str(matches, "start-point"),
        )?,
        "archive" => {
            let mut options = ArchiveOptions::default();
            if let Some(format) = get_one_str(matches, "format") {
                options.format(format);
            }
            if let Some(prefix) = get_one_str(matches, "prefix") {
                options.prefix(prefix);
            }
            options.worktree_attributes(matches.get_flag("worktree-attributes"));
            for extra in get_many_str(matches, "extra").into_iter().flatten() {
                options.extra(extra);
            }
            if let Some(remote) = get_one_str(matches, "remote") {
                options.remote(remote);
            }
            if let Some(exec) = get_one_str(matches, "exec") {
                options.exec(exec);
            }
            if let Some(paths) = get_many_str(matches, "paths") {
                options.paths(paths);
            }
            args::archive(
                get_one_str(matches, "treeish").unwrap_or_default(),
                get_one_str(matches, "output").unwrap_or_default(),
                &options,
            )?
        }
        _ => return Err(anyhow!("unknown request `{request}`")),
    };

    if json {
        print_json(&invocation)
    } else {
        print_invocation(&invocation)
    }
}

fn print_invocation(invocation: &Invocation) -> Result<()> {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for arg in invocation.args() {
        writeln!(stdout, "{arg}")?;
    }
    if let Some(input) = invocation.stdin() {
        writeln!(stdout, "--- stdin ---")?;
        write!(stdout, "{input}")?;
        if !input.ends_with('\n') {
            writeln!(stdout)?;
        }
    }
    Ok(())
}
