use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PASSPHRASE: &str = "correct horse battery";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_moodlog"))
}

/// Isolated HOME and XDG directories for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("data")).expect("create data dir");
        Self { dir }
    }

    fn journal_path(&self) -> PathBuf {
        self.dir.path().join("data").join("moodlog").join("journal.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("moodlog").join("config.toml")
    }

    fn command(&self, passphrase: Option<&str>, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .stdin(Stdio::null())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("NO_COLOR", "1")
            .env_remove("MOODLOG_PATH")
            .env_remove("MOODLOG_CONFIG")
            .env_remove("MOODLOG_NEW_PASSPHRASE")
            .env_remove("MOODLOG_LOG");
        match passphrase {
            Some(value) => cmd.env("MOODLOG_PASSPHRASE", value),
            None => cmd.env_remove("MOODLOG_PASSPHRASE"),
        };
        cmd
    }

    fn run(&self, passphrase: Option<&str>, args: &[&str]) -> Output {
        self.command(passphrase, args).output().expect("run moodlog")
    }

    fn init(&self) {
        let output = self.run(Some(PASSPHRASE), &["init", "--no-input"]);
        assert_success(&output);
    }

    fn add(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["add", "--json", "--no-input"];
        full.extend_from_slice(args);
        let output = self.run(Some(PASSPHRASE), &full);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("add prints JSON")
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(Some(PASSPHRASE), args);
        assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("command prints JSON")
    }
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: status={:?}\nstdout={}\nstderr={}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read journal file")
}

#[test]
fn test_init_creates_encrypted_journal_and_config() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let contents = read_file(&sandbox.journal_path());
    let envelope: serde_json::Value = serde_json::from_str(&contents).expect("envelope JSON");
    assert_eq!(envelope["version"], 1);
    assert!(envelope["ciphertext"].as_str().is_some_and(|c| !c.is_empty()));

    let config = read_file(&sandbox.config_path());
    assert!(config.contains("[journal]"));
    assert!(config.contains("journal.json"));
}

#[test]
fn test_init_refuses_existing_journal() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let output = sandbox.run(Some(PASSPHRASE), &["init", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("already exists"));
}

#[test]
fn test_init_rejects_short_passphrase() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(Some("short"), &["init", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("at least 8 characters"));
    assert!(!sandbox.journal_path().exists());
}

#[test]
fn test_add_then_day_and_list() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let first = sandbox.add(&["--rating", "7", "--label", "Calm", "--date", "2024-01-05"]);
    let second = sandbox.add(&[
        "--rating",
        "3",
        "--label",
        "Tired",
        "--note",
        "late meeting",
        "--important",
        "--date",
        "2024-01-05",
    ]);
    sandbox.add(&["--rating", "9", "--label", "Great", "--date", "2024-01-06"]);

    assert_ne!(first["id"], second["id"]);
    assert_eq!(second["mood"], "Kinda low energy / not great.");

    let day = sandbox.json(&["day", "2024-01-05", "--json", "--no-input"]);
    assert_eq!(day["count"], 2);
    assert_eq!(day["any_important"], true);
    assert_eq!(day["latest"]["label"], "Tired");

    let list = sandbox.json(&["list", "--json", "--no-input"]);
    let labels: Vec<&str> = list
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["label"].as_str())
        .collect();
    assert_eq!(labels, vec!["Great", "Tired", "Calm"]);

    let journal = read_file(&sandbox.journal_path());
    assert!(!journal.contains("late meeting"));
    assert!(!journal.contains("Tired"));
}

#[test]
fn test_wrong_passphrase_exits_with_auth_failure() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let before = read_file(&sandbox.journal_path());

    let output = sandbox.run(Some("not the passphrase"), &["list", "--no-input"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Incorrect passphrase"));
    assert_eq!(read_file(&sandbox.journal_path()), before);
}

#[test]
fn test_missing_passphrase_without_tty_is_invalid_input() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let output = sandbox.run(None, &["list", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("MOODLOG_PASSPHRASE"));
}

#[test]
fn test_missing_journal_exits_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(Some(PASSPHRASE), &["list", "--no-input"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("moodlog init"));

    let missing = sandbox.dir.path().join("nope.json");
    let output = sandbox.run(
        Some(PASSPHRASE),
        &["--file", missing.to_str().unwrap(), "list", "--no-input"],
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("No journal found"));
}

#[test]
fn test_invalid_rating_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let output = sandbox.run(Some(PASSPHRASE), &["add", "--rating", "11", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Rating"));
}

#[test]
fn test_edit_updates_and_missing_id_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let added = sandbox.add(&["--rating", "4", "--label", "Meh", "--date", "2024-02-01"]);
    let id = added["id"].as_i64().expect("numeric id").to_string();

    let edited = sandbox.json(&[
        "edit",
        &id,
        "--rating",
        "8",
        "--note",
        "  better after lunch  ",
        "--json",
        "--no-input",
    ]);
    assert_eq!(edited["rating"], 8);
    assert_eq!(edited["note"], "better after lunch");
    assert_eq!(edited["label"], "Meh");
    assert_eq!(edited["date"], "2024-02-01");

    let before = read_file(&sandbox.journal_path());
    let output = sandbox.run(Some(PASSPHRASE), &["edit", "12345", "--rating", "1", "--no-input"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(read_file(&sandbox.journal_path()), before);

    let output = sandbox.run(Some(PASSPHRASE), &["edit", &id, "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_delete_requires_confirmation_without_tty() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let added = sandbox.add(&["--rating", "5", "--date", "2024-03-01"]);
    let id = added["id"].as_i64().expect("numeric id").to_string();

    let output = sandbox.run(Some(PASSPHRASE), &["delete", &id, "--no-input"]);
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(Some(PASSPHRASE), &["delete", &id, "--yes", "--no-input"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("status=ok"));

    let list = sandbox.json(&["list", "--json", "--no-input"]);
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_search_and_stats() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.add(&["--rating", "8", "--note", "Beach walk", "--date", "2024-01-01"]);
    sandbox.add(&["--rating", "6", "--date", "2024-01-02"]);
    sandbox.add(&["--rating", "4", "--note", "rainy BEACH", "--date", "2024-01-04"]);
    sandbox.add(&["--rating", "7", "--date", "2024-01-05"]);
    sandbox.add(&["--rating", "2", "--date", "2024-02-01"]);

    let results = sandbox.json(&["search", "beach", "--json", "--no-input"]);
    let notes: Vec<&str> = results
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["note"].as_str())
        .collect();
    assert_eq!(notes, vec!["rainy BEACH", "Beach walk"]);

    let stats = sandbox.json(&["stats", "--month", "2024-01", "--json", "--no-input"]);
    assert_eq!(stats["month"], "2024-01");
    assert_eq!(stats["count"], 4);
    assert_eq!(stats["average"], 6.25);
    assert_eq!(stats["streaks"]["longest"], 2);
    assert_eq!(stats["total_entries"], 5);

    let empty = sandbox.json(&["stats", "--month", "2023-06", "--json", "--no-input"]);
    assert_eq!(empty["count"], 0);
    assert!(empty["average"].is_null());
}

#[test]
fn test_clear_day_and_all() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.add(&["--rating", "5", "--date", "2024-01-05"]);
    sandbox.add(&["--rating", "6", "--date", "2024-01-05"]);
    sandbox.add(&["--rating", "7", "--date", "2024-01-06"]);

    let output = sandbox.run(
        Some(PASSPHRASE),
        &["clear", "--day", "2024-01-05", "--yes", "--no-input"],
    );
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("removed=2"));

    let list = sandbox.json(&["list", "--json", "--no-input"]);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let output = sandbox.run(Some(PASSPHRASE), &["clear", "--all", "--yes", "--no-input"]);
    assert_success(&output);
    let list = sandbox.json(&["list", "--json", "--no-input"]);
    assert_eq!(list.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_passwd_rotates_passphrase() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.add(&["--rating", "7", "--label", "Calm", "--date", "2024-01-05"]);

    let output = sandbox
        .command(Some(PASSPHRASE), &["passwd", "--no-input"])
        .env("MOODLOG_NEW_PASSPHRASE", "an even better passphrase")
        .output()
        .expect("run moodlog");
    assert_success(&output);

    let output = sandbox.run(Some(PASSPHRASE), &["list", "--no-input"]);
    assert_eq!(output.status.code(), Some(5));

    let output = sandbox.run(Some("an even better passphrase"), &["list", "--json", "--no-input"]);
    assert_success(&output);
    let list: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(list[0]["label"], "Calm");
}

#[test]
fn test_passwd_rejects_weak_new_passphrase() {
    let sandbox = Sandbox::new();
    sandbox.init();
    let before = read_file(&sandbox.journal_path());

    let output = sandbox
        .command(Some(PASSPHRASE), &["passwd", "--no-input"])
        .env("MOODLOG_NEW_PASSPHRASE", "tiny")
        .output()
        .expect("run moodlog");
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(read_file(&sandbox.journal_path()), before);
}

#[test]
fn test_migrate_encrypts_legacy_journal() {
    let sandbox = Sandbox::new();
    let legacy = sandbox.dir.path().join("mood-entries.json");
    std::fs::write(
        &legacy,
        r#"[{"id":1,"date":"2024-01-05","rating":6,"label":"Meh","note":"old diary","important":false,"timestamp":1,"time":"09:00"}]"#,
    )
    .expect("write legacy journal");
    let legacy_arg = legacy.to_str().unwrap();

    let output = sandbox.run(
        Some(PASSPHRASE),
        &["--file", legacy_arg, "migrate", "--no-input"],
    );
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("entries=1"));

    let contents = read_file(&legacy);
    assert!(contents.contains("ciphertext"));
    assert!(!contents.contains("old diary"));

    let output = sandbox.run(
        Some(PASSPHRASE),
        &["--file", legacy_arg, "search", "diary", "--json", "--no-input"],
    );
    assert_success(&output);
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(results[0]["id"], 1);

    let output = sandbox.run(
        Some(PASSPHRASE),
        &["--file", legacy_arg, "migrate", "--no-input"],
    );
    assert_success(&output);
}

#[test]
fn test_completions_generate() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(None, &["completions", "bash"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("moodlog"));
}
