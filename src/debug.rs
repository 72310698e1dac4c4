//! Process-wide switch for logging structural values.
//!
//! The switch starts from the `ROSARY_DEBUG` environment variable
//! (`1`, `true`, `yes` or `on`, case-insensitive) and can be flipped at
//! runtime with [`set_enabled`]. When it is on, [`inspect`] emits the
//! value through [`tracing`] at `DEBUG` level under the `rosary` target.
//! The crate never installs a subscriber.
//!
//! # Examples
//!
//! ```rust
//! use rosary::debug;
//! use rosary::persistent::PersistentList;
//!
//! let list = debug::inspect("before", PersistentList::from(vec![3, 1, 2]));
//! let sorted = debug::inspect("after", list.sort());
//! assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
//! ```

use std::fmt::Display;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable read once to initialise the switch.
pub const ENVIRONMENT_VARIABLE: &str = "ROSARY_DEBUG";

fn switch() -> &'static AtomicBool {
    static SWITCH: OnceLock<AtomicBool> = OnceLock::new();
    SWITCH.get_or_init(|| {
        let enabled = std::env::var(ENVIRONMENT_VARIABLE)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        AtomicBool::new(enabled)
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Returns whether structural values are currently logged.
#[must_use]
pub fn is_enabled() -> bool {
    switch().load(Ordering::Relaxed)
}

/// Turns logging of structural values on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    switch().store(enabled, Ordering::Relaxed);
}

/// Logs `label: value` when the switch is on, then hands `value` back.
pub fn inspect<T: Display>(label: &str, value: T) -> T {
    if is_enabled() {
        tracing::debug!(target: "rosary", "{label}: {value}");
    }
    value
}
