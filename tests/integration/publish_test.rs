//! End-to-end publish runs against real repositories
//!
//! Each test builds a sources repository with a nested output repository,
//! both pushing to local bare remotes, and drives the real binary.

use assert_cmd::cargo;
use predicates::prelude::*;
use regex::Regex;

use crate::common::git_repo::{PublishFixture, git};

fn sitepub_in(fixture: &PublishFixture) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("sitepub"));
    cmd.current_dir(fixture.root());
    cmd
}

fn commit_pattern() -> Regex {
    Regex::new(r"^Site updated: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap()
}

/// Push an extra commit to the output remote from a second clone
fn publish_from_another_clone(fixture: &PublishFixture) {
    let scratch = fixture.root().parent().unwrap();
    let other = scratch.join("other");
    let remote = scratch.join("remotes/output.git");
    git(
        scratch,
        &["clone", "--quiet", "--branch", "master", remote.to_str().unwrap(), other.to_str().unwrap()],
    );
    git(&other, &["config", "user.name", "Other"]);
    git(&other, &["config", "user.email", "other@example.com"]);
    git(&other, &["config", "commit.gpgsign", "false"]);
    std::fs::write(other.join("elsewhere.html"), "x").unwrap();
    git(&other, &["add", "--all"]);
    git(&other, &["commit", "--quiet", "-m", "elsewhere"]);
    git(&other, &["push", "--quiet", "origin", "HEAD:master"]);
}

#[test]
fn declining_first_gate_changes_nothing() {
    let fixture = PublishFixture::new();
    let output_head = fixture.remote_head("output.git", "master");
    let sources_head = fixture.remote_head("sources.git", "main");

    sitepub_in(&fixture)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Publish cancelled"));

    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
    assert_eq!(fixture.remote_head("sources.git", "main"), sources_head);
    assert!(fixture.public().join("stale.html").exists());
    assert!(!fixture.public().join("hello.html").exists());
}

#[test]
fn empty_answer_declines() {
    let fixture = PublishFixture::new();
    let output_head = fixture.remote_head("output.git", "master");

    sitepub_in(&fixture).write_stdin("").assert().success();

    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
}

#[test]
fn full_publish_updates_both_remotes() {
    let fixture = PublishFixture::new();

    sitepub_in(&fixture)
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Published:"));

    let files = fixture.remote_files("output.git", "master");
    assert_eq!(files, vec!["hello.html".to_string()]);
    assert!(commit_pattern().is_match(&fixture.remote_subject("output.git", "master")));

    assert_eq!(fixture.remote_commit_count("sources.git", "main"), 2);
    assert!(commit_pattern().is_match(&fixture.remote_subject("sources.git", "main")));

    // The sources repository records the published output commit
    let recorded = git(fixture.root(), &["rev-parse", "HEAD:public"]);
    assert_eq!(
        String::from_utf8_lossy(&recorded.stdout).trim(),
        fixture.remote_head("output.git", "master")
    );
}

#[test]
fn declining_second_gate_publishes_output_only() {
    let fixture = PublishFixture::new();
    let sources_head = fixture.remote_head("sources.git", "main");

    sitepub_in(&fixture)
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("sources repository not updated"));

    assert_eq!(fixture.remote_commit_count("output.git", "master"), 2);
    assert_eq!(fixture.remote_files("output.git", "master"), vec!["hello.html".to_string()]);
    assert_eq!(fixture.remote_head("sources.git", "main"), sources_head);
    let local = git(fixture.root(), &["rev-parse", "HEAD"]);
    assert_eq!(String::from_utf8_lossy(&local.stdout).trim(), sources_head);
}

#[test]
fn second_run_without_changes_is_a_noop() {
    let fixture = PublishFixture::new();

    sitepub_in(&fixture).arg("--yes").assert().success();
    let output_head = fixture.remote_head("output.git", "master");
    let sources_head = fixture.remote_head("sources.git", "main");

    sitepub_in(&fixture)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing new to commit"));

    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
    assert_eq!(fixture.remote_head("sources.git", "main"), sources_head);
}

#[test]
fn rerun_catches_up_skipped_sources_update() {
    let fixture = PublishFixture::new();

    sitepub_in(&fixture).write_stdin("y\nn\n").assert().success();
    let output_head = fixture.remote_head("output.git", "master");

    sitepub_in(&fixture).arg("--yes").assert().success();

    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
    assert_eq!(fixture.remote_commit_count("sources.git", "main"), 2);
}

#[test]
fn new_post_is_published() {
    let fixture = PublishFixture::new();
    sitepub_in(&fixture).arg("--yes").assert().success();

    fixture.write_file("source/goroutines.md", "# Goroutines\n");
    sitepub_in(&fixture).arg("--yes").assert().success();

    let files = fixture.remote_files("output.git", "master");
    assert_eq!(files, vec!["goroutines.html".to_string(), "hello.html".to_string()]);
    assert_eq!(fixture.remote_commit_count("sources.git", "main"), 3);
}

#[test]
fn undecodable_answer_declines() {
    let fixture = PublishFixture::new();
    let output_head = fixture.remote_head("output.git", "master");

    sitepub_in(&fixture)
        .write_stdin(vec![0xff, b'\n'])
        .assert()
        .success()
        .stdout(predicate::str::contains("Publish cancelled"));

    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
}

#[test]
fn unsynced_output_without_repository_is_fatal() {
    let fixture = PublishFixture::with_config(|config| {
        config.output.sync = false;
    });
    std::fs::remove_dir_all(fixture.public().join(".git")).unwrap();
    let output_head = fixture.remote_head("output.git", "master");
    let sources_head = fixture.remote_head("sources.git", "main");

    sitepub_in(&fixture)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a git repository"));

    assert_eq!(fixture.remote_branches("sources.git"), vec!["main".to_string()]);
    assert_eq!(fixture.remote_head("sources.git", "main"), sources_head);
    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
    assert!(fixture.public().join("stale.html").exists());
}

#[test]
fn generator_failure_publishes_nothing() {
    let fixture = PublishFixture::with_config(|config| {
        config.generator.args = vec!["-c".to_string(), "echo 'bad front matter' >&2; exit 3".to_string()];
    });
    let output_head = fixture.remote_head("output.git", "master");
    let sources_head = fixture.remote_head("sources.git", "main");

    sitepub_in(&fixture)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site generator failed"))
        .stderr(predicate::str::contains("bad front matter"));

    assert_eq!(fixture.remote_head("output.git", "master"), output_head);
    assert_eq!(fixture.remote_head("sources.git", "main"), sources_head);
}

#[test]
fn missing_generator_is_fatal() {
    let fixture = PublishFixture::with_config(|config| {
        config.generator.command = "sitepub-test-no-such-generator".to_string();
    });

    sitepub_in(&fixture)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start"));
}

#[test]
fn cname_is_published() {
    let fixture = PublishFixture::with_config(|config| {
        config.output.cname = Some("CNAME".into());
    });

    sitepub_in(&fixture).arg("--yes").assert().success();

    let files = fixture.remote_files("output.git", "master");
    assert_eq!(files, vec!["CNAME".to_string(), "hello.html".to_string()]);
}

#[test]
fn diverged_output_remote_is_fatal() {
    let fixture = PublishFixture::with_config(|config| {
        config.output.sync = false;
    });

    publish_from_another_clone(&fixture);
    let sources_head = fixture.remote_head("sources.git", "main");

    sitepub_in(&fixture)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("push to origin/master was rejected"));

    assert_eq!(fixture.remote_head("sources.git", "main"), sources_head);
}

#[test]
fn sync_recovers_from_diverged_output_remote() {
    let fixture = PublishFixture::new();

    publish_from_another_clone(&fixture);

    sitepub_in(&fixture).arg("--yes").assert().success();

    assert_eq!(fixture.remote_commit_count("output.git", "master"), 3);
    assert_eq!(fixture.remote_files("output.git", "master"), vec!["hello.html".to_string()]);
}

#[test]
fn json_report() {
    let fixture = PublishFixture::new();

    let assert = sitepub_in(&fixture).args(["--json", "--yes"]).assert().success();
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(
        report["completed"],
        serde_json::json!([
            "sync_output_ref",
            "clean_output",
            "generate",
            "publish_output",
            "publish_sources"
        ])
    );
    assert_eq!(report["generated_files"], 1);
    assert_eq!(report["output"]["branch"], "master");
    assert_eq!(report["sources"]["branch"], "main");
    assert_eq!(report["sources"]["commit"], "committed");
}
