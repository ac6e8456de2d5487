//! Shared helpers for shell integration tests.
//!
//! ## Test Philosophy
//!
//! - **Whole sessions, scripted key for key**: tests drive `Shell::run`
//!   from the first draw to the farewell screen
//! - **Deterministic platforms**: every capability is an in-memory fake
//! - **No hidden reads**: a session must consume exactly the keys its
//!   script grants, and script overruns fail tests

use shell_core::platform::FakePlatform;
use shell_core::Shell;

/// Run one scripted session to completion.
///
/// The closure seeds the platform (keys, documents, clock) before the
/// shell starts. Returns the shell and platform for inspection.
pub fn run_scripted(script: impl FnOnce(&mut FakePlatform)) -> (Shell, FakePlatform) {
    let mut fake = FakePlatform::new();
    script(&mut fake);

    let mut shell = Shell::new();
    shell.run(&mut fake);
    (shell, fake)
}

/// Like [`run_scripted`], but with the storage capability withheld.
pub fn run_scripted_without_storage(
    script: impl FnOnce(&mut FakePlatform),
) -> (Shell, FakePlatform) {
    let mut fake = FakePlatform::without_storage();
    script(&mut fake);

    let mut shell = Shell::new();
    shell.run(&mut fake);
    (shell, fake)
}
