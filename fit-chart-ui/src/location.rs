//! URL fragment access, used to remember the selected tab.

/// The current fragment without the leading `#`, or an empty string.
pub fn fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

pub fn set_fragment(value: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(value) {
            log::warn!("[FIT] could not set URL fragment: {:?}", e);
        }
    }
}
