use std::path::Path;
use std::process::{Command, Output};

fn name_sorter(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_name-sorter"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run name-sorter")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn text_mode_prints_sorted_names_from_file_and_flags() {
    let dir = tempfile::tempdir().expect("create tempdir");
    std::fs::write(dir.path().join("in.txt"), "bob\n\n  Alice \nBob\n").unwrap();

    let out = name_sorter(dir.path(), &["--text", "--load", "in.txt", "--add", "anna"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), ["Alice", "anna", "bob", "Bob"]);
}

#[test]
fn bare_save_writes_default_file_in_configured_dir() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let config = dir.path().join("config.json");
    let save_dir = dir.path().join("lists");
    std::fs::create_dir(&save_dir).unwrap();
    std::fs::write(
        &config,
        serde_json::json!({ "save_dir": save_dir }).to_string(),
    )
    .unwrap();

    let out = name_sorter(
        dir.path(),
        &[
            "--silent",
            "--config",
            config.to_str().unwrap(),
            "--add",
            "zed",
            "--add",
            "amy",
            "--save",
        ],
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let written = std::fs::read_to_string(save_dir.join("sorted_names.txt")).unwrap();
    assert_eq!(written.lines().collect::<Vec<_>>(), ["amy", "zed"]);
}

#[test]
fn json_mode_reports_failures_and_exits_nonzero() {
    let dir = tempfile::tempdir().expect("create tempdir");
    std::fs::write(dir.path().join("blank.txt"), "\n   \n").unwrap();

    let out = name_sorter(dir.path(), &["--json", "--load", "blank.txt", "--add", " "]);
    assert!(!out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON on stdout");
    assert_eq!(doc["count"], 0);
    assert_eq!(doc["messages"][0]["error"], "NoValidNames");
    assert_eq!(doc["messages"][1]["error"], "EmptyName");
    assert_eq!(doc["messages"][1]["message"], "Please enter a valid name (non-empty)");
}

#[test]
fn silent_mode_prints_only_errors() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let out = name_sorter(dir.path(), &["--silent", "--save", "out.txt"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("No names to save!"));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn failure_message_appears_once_on_stderr_without_escape_codes() {
    let dir = tempfile::tempdir().expect("create tempdir");
    for mode in ["--text", "--silent"] {
        let out = name_sorter(dir.path(), &[mode, "--save", "out.txt"]);
        assert!(!out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert_eq!(stderr.matches("No names to save!").count(), 1, "{mode}: {stderr}");
        assert!(!stderr.contains('\u{1b}'), "{mode}: {stderr}");
    }
}
