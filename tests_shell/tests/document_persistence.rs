//! Document Persistence Tests
//!
//! Validates saving and loading across application visits: the on-disk
//! byte layout, fresh-buffer semantics, degradation without storage, and
//! the same behavior over a real directory store.

use input_keys::NamedKey;
use line_buffer::codec;
use shell_core::apps::{editor, notepad};
use tests_shell::{run_scripted, run_scripted_without_storage};

/// Test: a notepad save persists the full document
#[test]
fn test_notepad_save_persists_lines() {
    let (_, fake) = run_scripted(|fake| {
        fake.script_text("n");
        fake.script_text("first line");
        fake.script_named(NamedKey::Enter);
        fake.script_text("second line");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert_eq!(
        fake.file_lines(notepad::DOC_PATH),
        Some(vec!["first line".to_string(), "second line".to_string()])
    );
}

/// Test: stored bytes use the UTF-16LE layout with CRLF terminators
#[test]
fn test_stored_bytes_use_wire_layout() {
    let (_, fake) = run_scripted(|fake| {
        fake.script_text("n");
        fake.script_text("Hi");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    let bytes = fake.file_bytes(notepad::DOC_PATH).unwrap();
    assert_eq!(bytes, codec::encode_lines(&["Hi"]).as_slice());
    // 'H', 'i', CR, LF as little-endian UTF-16 units.
    assert_eq!(bytes, &[0x48, 0x00, 0x69, 0x00, 0x0D, 0x00, 0x0A, 0x00]);
}

/// Test: each notepad visit starts from an empty buffer
///
/// A save in the second visit overwrites the first document with a fresh
/// empty one, proving nothing leaked between visits. An empty buffer is
/// one empty line, which encodes to a bare terminator pair and decodes to
/// no lines at all.
#[test]
fn test_notepad_visits_start_fresh() {
    let (_, fake) = run_scripted(|fake| {
        fake.script_text("n");
        fake.script_text("kept in memory only");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("n");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    let bytes = fake.file_bytes(notepad::DOC_PATH).unwrap();
    assert_eq!(bytes, codec::encode_lines(&[""]).as_slice());
    assert_eq!(fake.file_lines(notepad::DOC_PATH), Some(vec![]));
}

/// Test: the editor loads what an earlier visit saved
#[test]
fn test_editor_reads_back_saved_document() {
    let (_, fake) = run_scripted(|fake| {
        // First visit edits the seed and saves.
        fake.script_text("e");
        fake.script_text("X");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        // Second visit saves whatever it loaded, untouched.
        fake.script_text("e");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    let stored = fake.file_lines(editor::DOC_PATH).unwrap();
    assert_eq!(stored[0], "XThis is a sample file.");
    assert_eq!(stored.len(), 2);
}

/// Test: the editor seeds sample text when nothing is stored
#[test]
fn test_editor_seeds_on_first_visit() {
    let (shell, fake) = run_scripted(|fake| {
        fake.script_text("e");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    let stored = fake.file_lines(editor::DOC_PATH).unwrap();
    assert_eq!(stored, editor::SEED_LINES);
    assert!(shell
        .log()
        .iter()
        .any(|e| e.message == "seed document used"));
}

/// Test: without storage, saves fail inline and the session continues
#[test]
fn test_session_survives_missing_storage() {
    let (shell, fake) = run_scripted_without_storage(|fake| {
        fake.script_text("n");
        fake.script_text("unsaved");
        fake.script_named(NamedKey::F2);
        fake.script_text("more");
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert!(!fake.script_exhausted());
    let failure = shell
        .log()
        .iter()
        .find(|e| e.message == "save failed")
        .unwrap();
    assert_eq!(failure.field("reason"), Some("storage capability absent"));
}

/// Test: a failing device reports failure but keeps the session alive
#[test]
fn test_session_survives_write_failure() {
    let (shell, fake) = run_scripted(|fake| {
        fake.fail_writes();
        fake.script_text("n");
        fake.script_text("doomed");
        fake.script_named(NamedKey::F2);
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert!(fake.file_bytes(notepad::DOC_PATH).is_none());
    assert!(shell.log().iter().any(|e| e.message == "save failed"));
}

/// Test: the whole flow holds over a real directory store
///
/// Same session as the in-memory round trip, but persisted through the
/// host's directory-backed store.
#[test]
fn test_round_trip_over_directory_store() {
    use shell_core::Shell;
    use shell_host::{DirStore, HostPlatform};

    let dir = tempfile::tempdir().unwrap();
    let mut platform = HostPlatform::with_storage(DirStore::new(dir.path()).unwrap());

    let keys = platform.keys_mut();
    keys.push_text("n");
    keys.push_text("written via host");
    keys.push_named(NamedKey::F2);
    keys.push_named(NamedKey::Escape);
    keys.push_text("q");

    let mut shell = Shell::new();
    shell.run(&mut platform);

    let on_disk = std::fs::read(dir.path().join("notepad.txt")).unwrap();
    assert_eq!(on_disk, codec::encode_lines(&["written via host"]));
}
