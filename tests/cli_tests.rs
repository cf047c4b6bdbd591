use assert_cmd::Command;
use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    tweet_path: PathBuf,
    keyword_path: PathBuf,
}

impl TestContext {
    fn new(tweets: &str, keywords: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tweet_path = dir.path().join("tweets.txt");
        let keyword_path = dir.path().join("keywords.txt");

        let mut tweet_file = File::create(&tweet_path).unwrap();
        write!(tweet_file, "{}", tweets).unwrap();
        let mut keyword_file = File::create(&keyword_path).unwrap();
        write!(keyword_file, "{}", keywords).unwrap();

        Self {
            _dir: dir,
            tweet_path,
            keyword_path,
        }
    }
}

fn moodzone_cmd() -> Command {
    Command::cargo_bin("moodzone").expect("binary builds")
}

#[test]
fn test_cli_renders_all_four_timezones() {
    let ctx = TestContext::new(
        "[30.0, -80.0] u1 2020 00:00 I am happy today\n",
        "happy,3\nsad,-2\n",
    );

    let output = moodzone_cmd()
        .arg(&ctx.tweet_path)
        .arg(&ctx.keyword_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["Eastern", "Central", "Mountain", "Pacific"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }

    let eastern_row = Regex::new(r"Eastern\s*\|\s*3\.0000\s*\|\s*1").unwrap();
    assert!(eastern_row.is_match(&stdout), "STDOUT:\n{stdout}");

    let empty_row = Regex::new(r"Pacific\s*\|\s*none\s*\|\s*0").unwrap();
    assert!(empty_row.is_match(&stdout), "STDOUT:\n{stdout}");
}

#[test]
fn test_cli_json_output() {
    let ctx = TestContext::new(
        "[30.0, -80.0] u1 2020 00:00 I am happy today\n",
        "happy,3\nsad,-2\n",
    );

    let output = moodzone_cmd()
        .arg(&ctx.tweet_path)
        .arg(&ctx.keyword_path)
        .arg("--json")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    let rows = parsed.as_array().expect("JSON array");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["timezone"], "Eastern");
    assert_eq!(rows[0]["averageHappiness"], 3.0);
    assert_eq!(rows[0]["tweetCount"], 1);
    assert!(rows[1]["averageHappiness"].is_null());
    assert_eq!(rows[3]["timezone"], "Pacific");
}

#[test]
fn test_cli_missing_tweet_file() {
    let ctx = TestContext::new("", "happy,3\n");

    let output = moodzone_cmd()
        .arg("definitely/does/not/exist.txt")
        .arg(&ctx.keyword_path)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No results"), "STDOUT:\n{stdout}");
}

#[test]
fn test_cli_bad_keyword_value_exits_nonzero() {
    let ctx = TestContext::new(
        "[30.0, -80.0] u1 2020 00:00 happy\n",
        "happy,x\n",
    );

    let output = moodzone_cmd()
        .arg(&ctx.tweet_path)
        .arg(&ctx.keyword_path)
        .args(["--attempts", "1"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Content Validation"), "STDERR:\n{stderr}");
}
