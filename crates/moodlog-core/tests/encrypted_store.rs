use std::fs;

use chrono::NaiveDate;
use moodlog_core::journal::{monthly_summary, search, streaks, Streaks};
use moodlog_core::storage::StoredFormat;
use moodlog_core::{EntryPatch, JournalFile, JournalStore, LocalFile, MoodlogError, NewEntry};
use tempfile::tempdir;

const PASSPHRASE: &str = "test-passphrase-secure-123";

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
}

#[test]
fn test_local_file_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("journal.json");

    let mut store = JournalStore::new();
    store
        .connect(LocalFile::new(&path), PASSPHRASE)
        .expect("connect new file");
    store
        .add(NewEntry::new(day("2024-01-01"), 4, "stressed").with_note("had a rough day at work"))
        .expect("add");
    store
        .add(NewEntry::new(day("2024-01-02"), 8, "better").important(true))
        .expect("add");
    let written = store.entries().to_vec();

    let mut reopened = JournalStore::new();
    let format = reopened
        .connect(LocalFile::new(&path), PASSPHRASE)
        .expect("reopen");
    assert_eq!(format, StoredFormat::Sealed);
    assert_eq!(reopened.entries(), written.as_slice());
}

#[test]
fn test_file_does_not_contain_plaintext() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("journal.json");

    let mut store = JournalStore::new();
    store.connect(LocalFile::new(&path), PASSPHRASE).expect("connect");
    store
        .add(NewEntry::new(day("2024-01-01"), 5, "PLAINTEXT_LABEL").with_note("PLAINTEXT_MARKER_123"))
        .expect("add");

    let on_disk = fs::read_to_string(&path).expect("read");
    assert!(!on_disk.contains("PLAINTEXT_MARKER_123"));
    assert!(!on_disk.contains("PLAINTEXT_LABEL"));
    assert!(!on_disk.contains(PASSPHRASE));
}

#[test]
fn test_wrong_passphrase_fails_and_leaves_file_alone() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("journal.json");

    let mut store = JournalStore::new();
    store.connect(LocalFile::new(&path), PASSPHRASE).expect("connect");
    store
        .add(NewEntry::new(day("2024-01-01"), 5, "Meh"))
        .expect("add");
    let before = fs::read(&path).expect("read");

    let mut intruder = JournalStore::new();
    let result = intruder.connect(LocalFile::new(&path), "wrong-passphrase-456");
    assert!(matches!(
        result,
        Err(MoodlogError::IncorrectPassphraseOrCorruptFile)
    ));
    assert!(intruder.entries().is_empty());
    assert!(matches!(
        intruder.add(NewEntry::new(day("2024-01-02"), 5, "Meh")),
        Err(MoodlogError::NotReady)
    ));
    assert_eq!(fs::read(&path).expect("read"), before);
}

#[test]
fn test_legacy_file_opens_and_upgrades_on_save() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("mood-entries.json");
    fs::write(
        &path,
        r#"[
  {"id": 1704103200000, "date": "2024-01-01", "rating": 3, "label": "Meh",
   "note": "legacy note", "important": false, "timestamp": 1704103200000, "time": "09:00"}
]"#,
    )
    .expect("write legacy");

    let mut store = JournalStore::new();
    let format = store
        .connect(LocalFile::new(&path), PASSPHRASE)
        .expect("legacy connect");
    assert_eq!(format, StoredFormat::Legacy);
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].note, "legacy note");

    store.save().expect("upgrade");
    let on_disk = fs::read_to_string(&path).expect("read");
    assert!(on_disk.contains("\"ciphertext\""));
    assert!(!on_disk.contains("legacy note"));

    let mut reopened = JournalStore::new();
    reopened
        .connect(LocalFile::new(&path), PASSPHRASE)
        .expect("reopen upgraded");
    assert_eq!(reopened.entries()[0].note, "legacy note");
}

#[test]
fn test_malformed_legacy_array_is_not_emptied() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("journal.json");
    fs::write(&path, r#"[{"id": "oops"}]"#).expect("write");

    let mut store = JournalStore::new();
    let result = store.connect(LocalFile::new(&path), PASSPHRASE);
    assert!(matches!(result, Err(MoodlogError::DecodeFailed(_))));
    assert!(!store.is_connected());
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        r#"[{"id": "oops"}]"#
    );
}

#[test]
fn test_rotation_with_local_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("journal.json");
    let new_passphrase = "a brand new passphrase";

    let mut store = JournalStore::new();
    store.connect(LocalFile::new(&path), PASSPHRASE).expect("connect");
    store
        .add(NewEntry::new(day("2024-01-01"), 5, "Meh"))
        .expect("add");
    let before = store.entries().to_vec();

    store
        .rotate_passphrase(PASSPHRASE, new_passphrase, new_passphrase)
        .expect("rotate");

    let mut with_new = JournalStore::new();
    with_new
        .connect(LocalFile::new(&path), new_passphrase)
        .expect("new passphrase opens");
    assert_eq!(with_new.entries(), before.as_slice());

    let mut with_old = JournalStore::new();
    assert!(with_old.connect(LocalFile::new(&path), PASSPHRASE).is_err());

    // Mutations after rotation keep using the new passphrase.
    store
        .update(before[0].id, &EntryPatch::new().rating(9))
        .expect("update");
    let mut again = JournalStore::new();
    again
        .connect(LocalFile::new(&path), new_passphrase)
        .expect("still new passphrase");
    assert_eq!(again.entries()[0].rating, 9);
}

#[test]
fn test_views_over_store_entries() {
    let dir = tempdir().expect("tempdir");
    let file = LocalFile::new(dir.path().join("journal.json"));
    assert!(file.read().expect("read missing").is_empty());

    let mut store = JournalStore::new();
    store.connect(file, PASSPHRASE).expect("connect");
    for (date, rating, label) in [
        ("2024-01-01", 4, "stressed"),
        ("2024-01-02", 8, "good"),
        ("2024-01-03", 6, "fine"),
        ("2024-01-05", 7, "rested"),
    ] {
        store
            .add(NewEntry::new(day(date), rating, label))
            .expect("add");
    }

    assert_eq!(
        streaks(store.entries(), day("2024-01-05")),
        Streaks {
            current: 1,
            longest: 3
        }
    );
    let january = monthly_summary(store.entries(), 2024, 1);
    assert_eq!(january.count, 4);
    assert_eq!(january.average, Some(6.25));

    let results = search(store.entries(), "STRESS");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "stressed");
}
