use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Command running in an empty directory with no settings file in reach.
fn isolated_cmd() -> (TempDir, Command) {
    let tmp = tempdir().expect("tempdir");
    let mut cmd = cargo_bin_cmd!("gquery-rs");
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .env("HOME", tmp.path())
        .env_remove("GQUERY_SETTINGS_PATH")
        .env_remove("GQUERY_ENGINE")
        .env_remove("GQUERY_DEBUG")
        .env_remove("RUST_LOG");
    (tmp, cmd)
}

#[test]
fn cli_quick_preset_prints_google_blocks() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.args(["--org", "Acme", "--domain", "acme.com"]);

    let expected = "\
[GOOGLE] site:acme.com
   → https://www.google.com/search?q=site%3Aacme.com

[GOOGLE] \"Acme\" site:acme.com
   → https://www.google.com/search?q=%22Acme%22%20site%3Aacme.com

[GOOGLE] \"Acme\" \"acme.com\"
   → https://www.google.com/search?q=%22Acme%22%20%22acme.com%22

";
    cmd.assert().success().stdout(expected);
}

#[test]
fn cli_engine_and_dates() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.args([
        "--org",
        "Acme",
        "--domain",
        "acme.com",
        "--preset",
        "leaks_news",
        "--engine",
        "ddg",
        "--after",
        "2020-01-01",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "[DDG] \"Acme\" \"breach\" after:2020-01-01\n   → https://duckduckgo.com/?q=",
        ))
        .stdout(predicate::str::contains("GOOGLE").not());
}

#[test]
fn cli_custom_queries_are_deduplicated() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.args([
        "--org",
        "Acme",
        "--domain",
        "acme.com",
        "--custom",
        "site:acme.com",
        "inurl:wp-admin",
        "inurl:wp-admin",
    ]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("[GOOGLE] site:acme.com\n").count(), 1);
    assert_eq!(stdout.matches("[GOOGLE] inurl:wp-admin\n").count(), 1);
    assert_eq!(stdout.matches("[GOOGLE] ").count(), 4);
}

#[test]
fn cli_unknown_preset_fails_without_output() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.args(["--org", "Acme", "--domain", "acme.com", "--preset", "quick", "bogus"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown preset `bogus`"));
}

#[test]
fn cli_missing_domain_is_rejected() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.args(["--org", "Acme"]);

    cmd.assert().failure().stderr(predicate::str::contains("--domain"));
}

#[test]
fn cli_empty_org_is_rejected() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.args(["--org", "", "--domain", "acme.com"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing required value: org"));
}

#[test]
fn cli_list_presets() {
    let (_tmp, mut cmd) = isolated_cmd();
    cmd.arg("--list-presets");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("quick\n  site:{domain}\n"))
        .stdout(predicate::str::contains("cloud_storage\n"));
}

#[test]
fn cli_settings_file_supplies_defaults_and_presets() {
    let (tmp, mut cmd) = isolated_cmd();
    let settings = r#"
search:
  default_engine: bing
  default_presets: [jobs]
presets:
  jobs:
    - '"{org}" careers site:{domain}'
"#;
    fs::write(tmp.path().join("gquery.yml"), settings).expect("write settings");

    cmd.args(["--org", "Acme", "--domain", "acme.com"]);

    cmd.assert().success().stdout(
        "[BING] \"Acme\" careers site:acme.com\n   \
         → https://www.bing.com/search?q=%22Acme%22%20careers%20site%3Aacme.com\n\n",
    );
}

#[test]
fn cli_settings_with_bad_template_fails() {
    let (tmp, mut cmd) = isolated_cmd();
    let config_path = tmp.path().join("custom.yml");
    fs::write(&config_path, "presets:\n  bad:\n    - 'site:{tld}'\n").expect("write settings");

    cmd.arg("--config")
        .arg(&config_path)
        .args(["--org", "Acme", "--domain", "acme.com"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid preset `bad`"));
}
