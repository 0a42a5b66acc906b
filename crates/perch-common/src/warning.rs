//! Positioner warnings with colored terminal output.
//!
//! Provides deduplication so that a host re-running the positioner on every
//! scroll event does not spam the same warning. Used by the DOM and position
//! crates to report suspicious (but not fatal) geometry.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious geometry (prints once per unique message).
///
/// Returns `true` if this call printed the warning, `false` if the same
/// component/message pair was already reported.
///
/// # Example
/// ```ignore
/// warn_once("Position", "arrow offset 130% lies outside the overlay");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[Perch {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Whether `warn_once` has already reported this component/message pair.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call when the host tears down a document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
