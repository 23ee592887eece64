// SPDX-License-Identifier: GPL-2.0-only

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const HASH: &str = "52c293a05038d865604c2284aa8698bd087915a1";
const PARENT: &str = "8e5a374372b8393906c7e380dbb09349c5385554";

fn gitline() -> Command {
    let mut cmd = Command::cargo_bin("gitline").unwrap();
    cmd.env_remove("GITLINE_LOG");
    cmd
}

#[test]
fn version_command() {
    gitline()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gitline "));
}

#[test]
fn no_command_shows_help() {
    gitline()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn render_status() {
    gitline()
        .args(["render", "status"])
        .assert()
        .success()
        .stdout("--no-optional-locks\nstatus\n-z\n-u\n");
}

#[test]
fn render_log_with_limit() {
    gitline()
        .args(["render", "log", "-n", "32", "--reverse"])
        .assert()
        .success()
        .stdout("log\n--pretty=format:%H %D%n%at%n%ae%n%P%n%B%x00%x00\n--max-count=32\n--reverse\n");
}

#[test]
fn render_log_rejects_zero_limit() {
    gitline()
        .args(["render", "log", "--max-count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a positive integer"));
}

#[test]
fn render_commit_with_stdin_payload() {
    gitline()
        .args(["render", "commit", "Fix \"quoted\" things", "--amend"])
        .assert()
        .success()
        .stdout(
            "commit\n--quiet\n--allow-empty-message\n--file\n-\n--amend\n\
             --- stdin ---\nFix \"quoted\" things\n",
        );
}

#[test]
fn render_add_json() {
    gitline()
        .args(["render", "--json", "add", "my file.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""\"my file.txt\"""#))
        .stdout(predicate::str::contains(r#""stdin": null"#));
}

#[test]
fn render_rm_requires_paths() {
    gitline()
        .args(["render", "rm"])
        .assert()
        .code(2)
        .stderr("error: invalid argument `paths`: a path list is required\n");
}

#[test]
fn render_checkout_rejects_empty_treeish() {
    gitline()
        .args(["render", "checkout", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("`treeish`"));
}

#[test]
fn render_archive() {
    gitline()
        .args([
            "render",
            "archive",
            "HEAD",
            "--output",
            "out dir/a.zip",
            "--format",
            "zip",
            "--extra",
            "9",
        ])
        .assert()
        .success()
        .stdout("archive\n--format=zip\n--output=\"out dir/a.zip\"\n-9\nHEAD\n");
}

#[test]
fn decode_status_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.out");
    std::fs::write(&path, b"R  new.txt\0old.txt\0?? a.txt\0").unwrap();

    gitline()
        .args(["decode", "status"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""x": "renamed""#))
        .stdout(predicate::str::contains(r#""original_path": "new.txt""#))
        .stdout(predicate::str::contains(r#""path": "a.txt""#));
}

#[test]
fn decode_truncated_status_from_stdin() {
    gitline()
        .args(["decode", "status", "-"])
        .write_stdin("?? file.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("decoding status output: truncated status entry"));
}

#[test]
fn decode_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    gitline()
        .args(["decode", "version"])
        .arg(dir.path().join("absent"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reading `"));
}

#[test]
fn decode_log() {
    let log = format!("{HASH}\n1234567\njohn.doe@mail.com\n{PARENT}\nThis is a commit message.\0\0");
    gitline()
        .args(["decode", "log"])
        .write_stdin(log)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(r#""hash": "{HASH}""#)))
        .stdout(predicate::str::contains(r#""author_email": "john.doe@mail.com""#))
        .stdout(predicate::str::contains(r#""author_date": "1970-01-15T06:56:07Z""#))
        .stdout(predicate::str::contains(r#""refs": null"#));
}

#[test]
fn decode_log_without_commits() {
    gitline()
        .args(["decode", "log", "--exit-code", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn decode_failed_log() {
    let mut stderr = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        stderr,
        "fatal: not a git repository (or any of the parent directories): .git"
    )
    .unwrap();

    gitline()
        .args(["decode", "log", "--exit-code", "128", "--stderr"])
        .arg(stderr.path())
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("`git log`: fatal: not a git repository"));
}

#[test]
fn decode_count_objects() {
    gitline()
        .args(["decode", "count-objects"])
        .write_stdin("count: 12\nsize: 48\nin-pack: 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""loose_object_count": 12"#))
        .stdout(predicate::str::contains(r#""in_pack_count": 3"#))
        .stdout(predicate::str::contains(r#""pack_count": null"#));
}

#[test]
fn decode_count_objects_missing_size() {
    gitline()
        .args(["decode", "count-objects"])
        .write_stdin("count: 12\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required field `size`"));
}

#[test]
fn decode_archive_formats() {
    gitline()
        .args(["decode", "archive-formats"])
        .write_stdin("tar\ntgz\ntar.gz\nzip\n")
        .assert()
        .success()
        .stdout("[\n  \"tar\",\n  \"tgz\",\n  \"tar.gz\",\n  \"zip\"\n]\n");
}

#[test]
fn decode_version() {
    gitline()
        .args(["decode", "version"])
        .write_stdin("git version 2.18.0.windows.1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version": "2.18.0.windows.1""#))
        .stdout(predicate::str::contains(r#""minor": 18"#));
}

#[test]
fn decode_error() {
    gitline()
        .args(["decode", "error"])
        .write_stdin("fatal: A branch named 'main' already exists.\n")
        .assert()
        .success()
        .stdout("\"branch-already-exists\"\n");

    gitline()
        .args(["decode", "error"])
        .write_stdin("something else\n")
        .assert()
        .success()
        .stdout("null\n");
}
