//! In-memory platform for tests.
//!
//! Everything is deterministic: keys come from a script, the console is a
//! plain cell grid, the clock is frozen until moved, storage is a map of
//! encoded documents, and sleeps are recorded instead of slept.

use std::collections::HashMap;
use std::collections::VecDeque;

use input_keys::{KeyEvent, NamedKey};
use line_buffer::codec;
use text_grid::{Style, TextGrid, GRID_HEIGHT, GRID_WIDTH};

use super::{
    ClockTime, FileStore, FramePacer, KeySource, ShellPlatform, StorageError, TextConsole,
    WallClock,
};

/// Deterministic [`ShellPlatform`] backed entirely by memory.
///
/// Created with storage present ([`FakePlatform::new`]) or withheld
/// ([`FakePlatform::without_storage`]). Keys are queued up front with
/// [`script_key`](FakePlatform::script_key) and friends. A drained script
/// alternates Escape and `q` on blocking reads, which exits any
/// application and then quits the menu, so an underrun can never hang a
/// test; the overrun itself is recorded for assertions.
pub struct FakePlatform {
    console: GridConsole,
    keys: ScriptedKeys,
    clock: FixedClock,
    storage: Option<MemoryStore>,
    pacer: RecordingPacer,
}

impl FakePlatform {
    /// Fake with an empty in-memory file store.
    pub fn new() -> Self {
        Self {
            console: GridConsole::new(),
            keys: ScriptedKeys::new(),
            clock: FixedClock::new(),
            storage: Some(MemoryStore::new()),
            pacer: RecordingPacer::new(),
        }
    }

    /// Fake with the storage capability withheld entirely.
    pub fn without_storage() -> Self {
        Self {
            storage: None,
            ..Self::new()
        }
    }

    /// Queue one key press.
    pub fn script_key(&mut self, event: KeyEvent) {
        self.keys.events.push_back(event);
    }

    /// Queue a named key press.
    pub fn script_named(&mut self, key: NamedKey) {
        self.script_key(KeyEvent::Named(key));
    }

    /// Queue each visible character of `text` as a key press.
    ///
    /// Characters outside the visible ASCII range are skipped.
    pub fn script_text(&mut self, text: &str) {
        for c in text.chars() {
            if let Some(event) = KeyEvent::from_char(c) {
                self.script_key(event);
            }
        }
    }

    /// The cell grid the console writes into.
    pub fn grid(&self) -> &TextGrid {
        &self.console.grid
    }

    /// Last caret position set through the console, if any.
    pub fn caret(&self) -> Option<(usize, usize)> {
        self.console.caret
    }

    /// Number of full-screen clears so far.
    pub fn cleared(&self) -> usize {
        self.console.cleared
    }

    /// True if `read_key` was called after the script ran dry.
    pub fn script_exhausted(&self) -> bool {
        self.keys.exhausted
    }

    /// Keys still queued.
    pub fn remaining_keys(&self) -> usize {
        self.keys.events.len()
    }

    /// Freeze the clock at the given time of day.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.clock.time = ClockTime::new(hour, minute, second);
    }

    /// Raw stored bytes for `path`, if storage exists and holds the file.
    pub fn file_bytes(&self, path: &str) -> Option<&[u8]> {
        self.storage
            .as_ref()
            .and_then(|store| store.files.get(path))
            .map(|bytes| bytes.as_slice())
    }

    /// Stored document decoded back to lines, if present.
    pub fn file_lines(&self, path: &str) -> Option<Vec<String>> {
        self.file_bytes(path).map(codec::decode_lines)
    }

    /// Seed a document into storage. Ignored when storage is withheld.
    pub fn put_document(&mut self, path: &str, lines: &[&str]) {
        if let Some(store) = self.storage.as_mut() {
            store.files.insert(path.to_string(), codec::encode_lines(lines));
        }
    }

    /// Make every subsequent write fail with a device error.
    pub fn fail_writes(&mut self) {
        if let Some(store) = self.storage.as_mut() {
            store.fail_writes = true;
        }
    }

    /// Every `sleep_ms` duration requested, in order.
    pub fn sleeps(&self) -> &[u64] {
        &self.pacer.slept
    }

    /// Total milliseconds requested across all sleeps.
    pub fn total_slept_ms(&self) -> u64 {
        self.pacer.slept.iter().sum()
    }
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellPlatform for FakePlatform {
    fn console(&mut self) -> &mut dyn TextConsole {
        &mut self.console
    }

    fn keys(&mut self) -> &mut dyn KeySource {
        &mut self.keys
    }

    fn clock(&mut self) -> &mut dyn WallClock {
        &mut self.clock
    }

    fn storage(&mut self) -> Option<&mut dyn FileStore> {
        self.storage
            .as_mut()
            .map(|store| store as &mut dyn FileStore)
    }

    fn pacer(&mut self) -> &mut dyn FramePacer {
        &mut self.pacer
    }
}

struct GridConsole {
    grid: TextGrid,
    caret: Option<(usize, usize)>,
    cleared: usize,
}

impl GridConsole {
    fn new() -> Self {
        Self {
            grid: TextGrid::new(),
            caret: None,
            cleared: 0,
        }
    }
}

impl TextConsole for GridConsole {
    fn clear(&mut self, style: Style) {
        self.grid.clear(style);
        self.cleared += 1;
    }

    fn write_text(&mut self, x: usize, y: usize, style: Style, text: &str) -> usize {
        self.grid.write_text(x, y, style, text)
    }

    fn set_cursor(&mut self, x: usize, y: usize) {
        if x < GRID_WIDTH && y < GRID_HEIGHT {
            self.caret = Some((x, y));
        }
    }
}

struct ScriptedKeys {
    events: VecDeque<KeyEvent>,
    exhausted: bool,
    fallback_flip: bool,
}

impl ScriptedKeys {
    fn new() -> Self {
        Self {
            events: VecDeque::new(),
            exhausted: false,
            fallback_flip: false,
        }
    }

    // Escape on odd overruns, `q` on even ones: exits any application,
    // then quits the menu.
    fn fallback_read(&mut self) -> KeyEvent {
        self.exhausted = true;
        self.fallback_flip = !self.fallback_flip;
        if self.fallback_flip {
            KeyEvent::Named(NamedKey::Escape)
        } else {
            KeyEvent::Printable('q')
        }
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> KeyEvent {
        match self.events.pop_front() {
            Some(event) => event,
            None => self.fallback_read(),
        }
    }

    fn poll_key(&mut self) -> Option<KeyEvent> {
        match self.events.pop_front() {
            Some(event) => Some(event),
            None => {
                self.exhausted = true;
                Some(KeyEvent::Named(NamedKey::Escape))
            }
        }
    }
}

struct FixedClock {
    time: ClockTime,
}

impl FixedClock {
    fn new() -> Self {
        Self {
            time: ClockTime::new(12, 0, 0),
        }
    }
}

impl WallClock for FixedClock {
    fn now(&mut self) -> ClockTime {
        self.time
    }
}

struct MemoryStore {
    files: HashMap<String, Vec<u8>>,
    fail_writes: bool,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            fail_writes: false,
        }
    }
}

impl FileStore for MemoryStore {
    fn write_lines(&mut self, path: &str, lines: &[String]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Device("injected write failure".to_string()));
        }
        self.files
            .insert(path.to_string(), codec::encode_lines(lines));
        Ok(())
    }

    fn read_lines(&mut self, path: &str) -> Result<Vec<String>, StorageError> {
        match self.files.get(path) {
            Some(bytes) => Ok(codec::decode_lines(bytes)),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }
}

struct RecordingPacer {
    slept: Vec<u64>,
}

impl RecordingPacer {
    fn new() -> Self {
        Self { slept: Vec::new() }
    }
}

impl FramePacer for RecordingPacer {
    fn sleep_ms(&mut self, millis: u64) {
        self.slept.push(millis);
    }
}
