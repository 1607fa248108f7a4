//! Console Logging
//!
//! Thin wrappers over the browser console. Only UI-side code logs here;
//! the list and message modules stay free of DOM calls.

use crate::list::TripList;

/// Log a line tagged with a subsystem, e.g. `[LIST] added ...`
pub fn log(tag: &str, msg: &str) {
    web_sys::console::log_1(&format!("[{}] {}", tag, msg).into());
}

pub fn warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", tag, msg).into());
}

/// Dump the list as JSON, debug builds only
pub fn debug_state(list: &TripList) {
    if !cfg!(debug_assertions) {
        return;
    }
    match serde_json::to_string(list) {
        Ok(json) => web_sys::console::debug_1(&format!("[STATE] {}", json).into()),
        Err(e) => warn("STATE", &format!("failed to serialize list: {}", e)),
    }
}
