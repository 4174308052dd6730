//! Style-mapping warnings with colored terminal output.
//!
//! Each distinct message is printed once per process, so a
//! tree full of nodes sharing one malformed style does not flood stderr.
//! Output can be silenced with the [`QUIET_ENV`] environment variable.

use std::collections::HashSet;
use std::env;
use std::ffi::OsStr;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Environment variable that suppresses warning output.
///
/// Any non-empty value other than `0` counts as set.
pub const QUIET_ENV: &str = "WALLABY_QUIET";

/// Warnings already reported, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Whether a [`QUIET_ENV`] value asks for silence.
fn quiet_value(value: &OsStr) -> bool {
    !value.is_empty() && value != "0"
}

/// Whether [`QUIET_ENV`] asks for silence.
#[must_use]
pub fn is_quiet() -> bool {
    env::var_os(QUIET_ENV).is_some_and(|value| quiet_value(&value))
}

/// Report a warning, printing it only the first time it is seen.
///
/// The message is still recorded when output is suppressed.
///
/// # Example
/// ```ignore
/// warn_once("style", "`transform` is not a list; passing it through");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let is_new = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if is_new && !is_quiet() {
        eprintln!("{}", format!("[Wallaby {component}] warning: {message}").yellow());
    }
}

/// Whether `message` has already been reported for `component`.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}
