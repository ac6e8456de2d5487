//! # Shell Demo
//!
//! Replays a full scripted session through the shell: the notepad writes a
//! document, the calculator folds an expression, the editor loads and saves
//! the sample file, the donut spins a few frames, and the menu quits.
//!
//! This is a HOST application, so it is allowed to print. Screens are
//! rendered after each application returns; documents land in a temp
//! directory so persistence can be shown at the end.

use std::fs;

use event_log::EventLog;
use input_keys::NamedKey;
use shell_core::apps::{calculator, donut, editor, notepad};
use shell_core::Shell;
use shell_host::{render_grid, DirStore, HostPlatform};

fn print_screen(title: &str, platform: &HostPlatform) {
    println!("{}", "=".repeat(80));
    println!("{title}");
    println!("{}", "=".repeat(80));
    print!("{}", render_grid(platform.grid()));
}

fn main() {
    println!("=== GlyphOS Shell Demo ===\n");
    println!("A scripted session through every application:");
    println!("- Notepad writes and saves a document");
    println!("- Calculator folds an expression left to right");
    println!("- Editor loads, edits, and saves the sample file");
    println!("- Donut renders a few frames");
    println!("- The menu quits to the farewell screen");
    println!();

    let store_root = std::env::temp_dir().join("glyphos_demo");
    let _ = fs::remove_dir_all(&store_root);
    let store = DirStore::new(&store_root).expect("Failed to create demo storage");
    println!("Documents stored under {}\n", store_root.display());

    let mut platform = HostPlatform::with_storage(store);
    let mut log = EventLog::new(64);

    // Notepad: two lines, saved, then back to the menu.
    let keys = platform.keys_mut();
    keys.push_text("Hello from the demo.");
    keys.push_named(NamedKey::Enter);
    keys.push_text("This line is persisted.");
    keys.push_named(NamedKey::F2);
    keys.push_named(NamedKey::Escape);
    notepad::run(&mut platform, &mut log);
    print_screen("Notepad, after saving", &platform);

    // Calculator: the classic no-precedence fold.
    let keys = platform.keys_mut();
    keys.push_text("5+3*2");
    keys.push_named(NamedKey::Enter);
    keys.push_named(NamedKey::Escape);
    calculator::run(&mut platform, &mut log);
    print_screen("Calculator, 5+3*2 folded left to right", &platform);

    // Editor: seed text on first visit, edited and saved.
    let keys = platform.keys_mut();
    keys.push_text("NEW ");
    keys.push_named(NamedKey::F2);
    keys.push_named(NamedKey::Escape);
    editor::run(&mut platform, &mut log);
    print_screen("Editor, seeded document edited and saved", &platform);

    // Donut: two frames, then Escape.
    let keys = platform.keys_mut();
    keys.push_text("..");
    keys.push_named(NamedKey::Escape);
    donut::run(&mut platform, &mut log);
    print_screen("Donut, after two frames", &platform);

    // Full shell session ending in quit.
    let mut shell = Shell::new();
    platform.keys_mut().push_text("q");
    shell.run(&mut platform);
    print_screen("Farewell screen", &platform);

    println!("\nSession log:");
    for entry in log.iter().chain(shell.log().iter()) {
        let fields: Vec<String> = entry
            .fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        println!("  [{}] {} {}", entry.level, entry.message, fields.join(" "));
    }

    println!("\nStored documents:");
    for name in ["notepad.txt", "sample.txt"] {
        let bytes = fs::read(store_root.join(name)).expect("Stored document missing");
        println!("  {} ({} bytes on disk)", name, bytes.len());
    }

    println!("\nKey points:");
    println!("- Applications draw cells; only the host prints");
    println!("- Storage is a capability; without it the same session still runs");
    println!("- Documents persist in the on-disk layout across visits");
}
