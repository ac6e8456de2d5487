//! # Shell Host
//!
//! Standard-library bindings for the shell's platform capabilities, plus a
//! plain-text renderer for the cell grid.
//!
//! ## Philosophy
//!
//! - **Rendering is a host concern**: the shell writes cells, the host
//!   decides how those cells reach a human.
//! - **The host is allowed to print**: nothing inside `shell_core` ever
//!   does.
//! - **No terminal state**: the renderer emits plain rows, not ANSI. A
//!   raw-mode interactive front end would be a different host.
//!
//! ## Responsibilities
//!
//! - Bind the wall clock to system time
//! - Bind storage to a directory of encoded documents
//! - Bind frame pacing to thread sleeps
//! - Replay prepared key scripts through the blocking key interface
//! - Render grid snapshots as printable text
//!
//! Keyboard input is replayed from scripts rather than read from a
//! terminal. Live input needs raw mode and that belongs to a dedicated
//! interactive host.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use input_keys::{KeyEvent, NamedKey};
use line_buffer::codec;
use shell_core::platform::{
    ClockTime, FileStore, FramePacer, KeySource, ShellPlatform, StorageError, TextConsole,
    WallClock,
};
use text_grid::{Style, TextGrid, GRID_HEIGHT, GRID_WIDTH};

/// Render the whole grid as newline-terminated rows.
pub fn render_grid(grid: &TextGrid) -> String {
    let mut out = String::with_capacity((GRID_WIDTH + 1) * GRID_HEIGHT);
    for y in 0..GRID_HEIGHT {
        out.push_str(&grid.row_text(y));
        out.push('\n');
    }
    out
}

/// Grid-backed console for the host.
pub struct HostConsole {
    grid: TextGrid,
    caret: Option<(usize, usize)>,
}

impl HostConsole {
    pub fn new() -> Self {
        Self {
            grid: TextGrid::new(),
            caret: None,
        }
    }

    pub fn grid(&self) -> &TextGrid {
        &self.grid
    }

    pub fn caret(&self) -> Option<(usize, usize)> {
        self.caret
    }
}

impl Default for HostConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TextConsole for HostConsole {
    fn clear(&mut self, style: Style) {
        self.grid.clear(style);
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

/// Key source fed from a prepared script.
///
/// A drained queue alternates Escape and `q` on blocking reads, which
/// exits any application and then quits the menu, so a session whose
/// script ends early still reaches the farewell screen.
pub struct QueuedKeys {
    queue: VecDeque<KeyEvent>,
    fallback_flip: bool,
}

impl QueuedKeys {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            fallback_flip: false,
        }
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.queue.push_back(event);
    }

    pub fn push_named(&mut self, key: NamedKey) {
        self.push(KeyEvent::Named(key));
    }

    /// Queue each visible character of `text`; others are skipped.
    pub fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if let Some(event) = KeyEvent::from_char(c) {
                self.push(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for QueuedKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for QueuedKeys {
    fn read_key(&mut self) -> KeyEvent {
        match self.queue.pop_front() {
            Some(event) => event,
            None => {
                self.fallback_flip = !self.fallback_flip;
                if self.fallback_flip {
                    KeyEvent::Named(NamedKey::Escape)
                } else {
                    KeyEvent::Printable('q')
                }
            }
        }
    }

    fn poll_key(&mut self) -> Option<KeyEvent> {
        // An empty queue polls as Escape so an underrun cannot leave the
        // animation spinning with real sleeps.
        self.queue
            .pop_front()
            .or(Some(KeyEvent::Named(NamedKey::Escape)))
    }
}

/// Wall clock bound to system time, reported as UTC.
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&mut self) -> ClockTime {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = since_epoch.as_secs();
        ClockTime::new(
            ((secs / 3600) % 24) as u8,
            ((secs / 60) % 60) as u8,
            (secs % 60) as u8,
        )
    }
}

/// Frame pacer bound to real thread sleeps.
pub struct ThreadPacer;

impl FramePacer for ThreadPacer {
    fn sleep_ms(&mut self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}

/// File store over a directory of documents in the on-disk byte layout.
///
/// Document paths like `\notepad.txt` resolve to files directly under the
/// root directory.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches(['\\', '/']))
    }
}

impl FileStore for DirStore {
    fn write_lines(&mut self, path: &str, lines: &[String]) -> Result<(), StorageError> {
        fs::write(self.resolve(path), codec::encode_lines(lines))
            .map_err(|e| StorageError::Device(e.to_string()))
    }

    fn read_lines(&mut self, path: &str) -> Result<Vec<String>, StorageError> {
        match fs::read(self.resolve(path)) {
            Ok(bytes) => Ok(codec::decode_lines(&bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()))
            }
            Err(e) => Err(StorageError::Device(e.to_string())),
        }
    }
}

/// A [`ShellPlatform`] over the standard library.
pub struct HostPlatform {
    console: HostConsole,
    keys: QueuedKeys,
    clock: SystemClock,
    storage: Option<DirStore>,
    pacer: ThreadPacer,
}

impl HostPlatform {
    /// Host without storage. Saves fail inline, sessions still run.
    pub fn new() -> Self {
        Self {
            console: HostConsole::new(),
            keys: QueuedKeys::new(),
            clock: SystemClock,
            storage: None,
            pacer: ThreadPacer,
        }
    }

    /// Host persisting documents through `store`.
    pub fn with_storage(store: DirStore) -> Self {
        Self {
            storage: Some(store),
            ..Self::new()
        }
    }

    /// The key script to feed the next loops.
    pub fn keys_mut(&mut self) -> &mut QueuedKeys {
        &mut self.keys
    }

    /// Current grid snapshot, for rendering.
    pub fn grid(&self) -> &TextGrid {
        self.console.grid()
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellPlatform for HostPlatform {
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
