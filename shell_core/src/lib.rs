//! # Shell Core
//!
//! The GlyphOS application shell: a menu dispatcher over four cooperative
//! text-mode applications that share one 80x25 screen and one keyboard.
//!
//! ## Philosophy
//!
//! - **One thread, explicit handoff**: exactly one loop owns the screen and
//!   the keyboard at any time. Entering an application hands both over;
//!   leaving hands them back. There is no concurrency to reason about.
//! - **Capabilities, not bindings**: every platform touchpoint (console,
//!   keys, clock, storage, frame pacing) is a trait. Production hosts bind
//!   firmware or OS services; tests bind deterministic fakes.
//! - **Degrade, don't die**: storage is an optional capability. When it is
//!   absent, saves report failure inline and editing continues in memory.
//! - **Pure transitions**: key handling is a pure function from state and
//!   key to an action. The run loops perform the I/O the actions name.
//!
//! ## Non-Goals
//!
//! - Process isolation or preemptive multitasking
//! - Pixel graphics, mouse input, networking
//! - A command interpreter or terminal emulator

pub mod apps;
pub mod chrome;
pub mod platform;
pub mod shell;

pub use platform::{
    ClockTime, FakePlatform, FileStore, FramePacer, KeySource, ShellPlatform, StorageError,
    TextConsole, WallClock,
};
pub use shell::{menu_transition, MenuOutcome, OverlayCursor, Shell, ShellState};
