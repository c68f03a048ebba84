#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn neighborfit_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("neighborfit").expect("binary should compile");
    cmd.env("HOME", dir.path()).env_remove("RUST_LOG");
    cmd.arg("--config-dir").arg(dir.path());
    cmd
}

fn write_config(dir: &TempDir, body: &str) {
    fs::write(dir.path().join("neighborfit.toml"), body).expect("repo config should write");
}

#[test]
fn survey_prompts_every_question_and_prints_matches() {
    let dir = TempDir::new().expect("temp dir should be created");

    neighborfit_in(&dir)
        .arg("survey")
        .write_stdin("10\n10\n\n\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Short Commute"))
        .stderr(predicate::str::contains("Shopping"))
        .stdout(predicate::str::contains(
            "## Downtown Arts District (Best Match)",
        ))
        .stdout(predicate::str::contains("Metro City | 8/10 | Excellent Match"));
}

#[test]
fn survey_reasks_after_invalid_answer() {
    let dir = TempDir::new().expect("temp dir should be created");

    neighborfit_in(&dir)
        .arg("survey")
        .write_stdin("0\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("weight must be between 1 and 10 (got 0)"))
        .stdout(predicate::str::contains("# Your Neighborhood Matches"));
}

#[test]
fn survey_without_prompt_uses_presets() {
    let dir = TempDir::new().expect("temp dir should be created");

    neighborfit_in(&dir)
        .args(["survey", "--no-prompt", "--set", "safety=10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Short Commute").not())
        .stdout(predicate::str::contains("- Safety: 9/10 (High Priority)"));
}

#[test]
fn config_defaults_seed_the_survey() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(
        &dir,
        r#"
[survey.defaults]
commute = 1
nightlife = 1
familyFriendly = 1
affordability = 1
walkability = 1
dining = 1
safety = 10
culture = 1
outdoors = 1
shopping = 1
"#,
    );

    neighborfit_in(&dir)
        .arg("matches")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "## Maple Grove Suburbs (Best Match)",
        ))
        .stdout(predicate::str::contains("Top matching categories: Safety"));
}

#[test]
fn global_config_applies_without_project_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let global_dir = dir.path().join(".config/neighborfit");
    fs::create_dir_all(&global_dir).expect("global config dir should create");
    fs::write(
        global_dir.join("config.toml"),
        "[report]\nformat = \"json\"\n",
    )
    .expect("global config should write");

    let output = neighborfit_in(&dir)
        .arg("catalog")
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value.as_array().map(Vec::len), Some(5));
}

#[test]
fn config_report_format_switches_to_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, "[report]\nformat = \"json\"\n");

    let output = neighborfit_in(&dir)
        .arg("catalog")
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value.as_array().map(Vec::len), Some(5));
}

#[test]
fn format_flag_overrides_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, "[report]\nformat = \"json\"\n");

    neighborfit_in(&dir)
        .args(["catalog", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Neighborhood Catalog"));
}

#[test]
fn local_override_wins_over_repo_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, "[report]\nformat = \"json\"\n");
    fs::create_dir_all(dir.path().join(".neighborfit")).expect("local dir should create");
    fs::write(
        dir.path().join(".neighborfit/local.toml"),
        "[report]\nformat = \"md\"\n",
    )
    .expect("local override should write");

    neighborfit_in(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Neighborhood Catalog"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_config(&dir, "[survey.defaults]\nsafety = 0\n");

    neighborfit_in(&dir)
        .arg("matches")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn session_walks_survey_matches_and_research() {
    let dir = TempDir::new().expect("temp dir should be created");

    neighborfit_in(&dir)
        .arg("session")
        .write_stdin("matches\nset safety 10\nsubmit\nresearch validation\nsurvey\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Lifestyle Preferences Survey"))
        .stdout(predicate::str::contains("error: matches are unavailable"))
        .stdout(predicate::str::contains("Safety = 10"))
        .stdout(predicate::str::contains("# Your Neighborhood Matches"))
        .stdout(predicate::str::contains("## Testing & Validation Results"))
        .stdout(predicate::str::contains("- Safety (safety): 10"));
}

#[test]
fn session_rejects_set_outside_survey() {
    let dir = TempDir::new().expect("temp dir should be created");

    neighborfit_in(&dir)
        .arg("session")
        .write_stdin("research\nset dining 9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: the survey is not open"));
}
