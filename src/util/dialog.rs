//! Native browser dialogs.

/// Blocking confirm dialog; treats any failure as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
