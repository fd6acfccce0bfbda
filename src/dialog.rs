//! Browser Dialogs
//!
//! Thin wrappers over the window confirm/alert prompts. A missing window
//! (or a blocked dialog) degrades to "not confirmed" / no-op.

/// Blocking yes/no prompt
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking notice prompt
pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}
