//! Session Flow Tests
//!
//! Validates the shell state machine over whole scripted sessions: every
//! application hands the screen back to the menu, quit is immediate, and
//! no loop reads more keys than its script grants.

use input_keys::NamedKey;
use shell_core::ShellState;
use tests_shell::run_scripted;

/// Test: Q at the menu terminates without touching later keys
///
/// Keys queued after the quit must remain unread; the session consumed
/// exactly one key.
#[test]
fn test_quit_reads_nothing_past_the_q() {
    let (shell, fake) = run_scripted(|fake| {
        fake.script_text("q");
        fake.script_text("xyz");
    });

    assert_eq!(shell.state(), ShellState::Terminated);
    assert_eq!(fake.remaining_keys(), 3);
    assert!(!fake.script_exhausted());
}

/// Test: every application round-trips back to the menu
///
/// One visit to each application, each left with Escape, then quit. The
/// script must be consumed exactly.
#[test]
fn test_every_app_returns_to_menu() {
    let (shell, fake) = run_scripted(|fake| {
        fake.script_text("n");
        fake.script_named(NamedKey::Escape);
        fake.script_text("c");
        fake.script_named(NamedKey::Escape);
        fake.script_text("e");
        fake.script_named(NamedKey::Escape);
        fake.script_text("d");
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert_eq!(shell.state(), ShellState::Terminated);
    assert_eq!(fake.remaining_keys(), 0);
    assert!(!fake.script_exhausted());

    let visited: Vec<_> = shell
        .log()
        .iter()
        .filter(|e| e.message == "application entered")
        .filter_map(|e| e.field("app"))
        .collect();
    assert_eq!(visited, vec!["notepad", "calculator", "editor", "donut"]);
}

/// Test: hotkeys are case-insensitive at the shell level
#[test]
fn test_uppercase_hotkeys_launch_apps() {
    let (shell, fake) = run_scripted(|fake| {
        fake.script_text("N");
        fake.script_named(NamedKey::Escape);
        fake.script_text("Q");
    });

    assert_eq!(shell.state(), ShellState::Terminated);
    assert!(!fake.script_exhausted());
    assert!(shell
        .log()
        .iter()
        .any(|e| e.field("app") == Some("notepad")));
}

/// Test: unrecognized menu keys neither launch nor quit
#[test]
fn test_unknown_menu_keys_are_ignored() {
    let (shell, fake) = run_scripted(|fake| {
        fake.script_text("zk7");
        fake.script_named(NamedKey::Enter);
        fake.script_text("q");
    });

    assert_eq!(shell.state(), ShellState::Terminated);
    assert!(!fake.script_exhausted());
    assert!(!shell
        .log()
        .iter()
        .any(|e| e.message == "application entered"));
}

/// Test: arrows roam the overlay cursor and clamp at the edges
///
/// The cursor starts at the center; a long run of Rights must stop at the
/// last column, and the session still quits cleanly.
#[test]
fn test_overlay_cursor_clamps_at_screen_edge() {
    let (shell, fake) = run_scripted(|fake| {
        for _ in 0..60 {
            fake.script_named(NamedKey::Right);
        }
        fake.script_text("q");
    });

    assert_eq!(shell.cursor().x, 79);
    assert_eq!(shell.cursor().y, 12);
    assert!(!fake.script_exhausted());
}

/// Test: the farewell screen ends every session
#[test]
fn test_farewell_screen_after_quit() {
    let (_, fake) = run_scripted(|fake| {
        fake.script_text("d");
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert!(fake.grid().row_text(0).starts_with("Goodbye from GlyphOS!"));
    // The farewell clear leaves no application chrome behind.
    assert_eq!(fake.grid().glyph_at(5, 2), Some(' '));
}

/// Test: entering the donut and leaving still paces frames
///
/// Two ignored keys means two rendered frames, each paced at 50ms.
#[test]
fn test_donut_session_paces_frames() {
    let (_, fake) = run_scripted(|fake| {
        fake.script_text("d");
        fake.script_text("..");
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert_eq!(fake.sleeps(), &[50, 50]);
}

/// Test: a session quits from the menu after visiting an app twice
#[test]
fn test_repeated_visits_are_independent() {
    let (shell, fake) = run_scripted(|fake| {
        fake.script_text("n");
        fake.script_text("abc");
        fake.script_named(NamedKey::Escape);
        fake.script_text("n");
        fake.script_named(NamedKey::Escape);
        fake.script_text("q");
    });

    assert!(!fake.script_exhausted());
    let visits = shell
        .log()
        .iter()
        .filter(|e| e.message == "application entered")
        .count();
    assert_eq!(visits, 2);
    assert_eq!(shell.state(), ShellState::Terminated);
}
