//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Reload the current page.
///
/// The only way to retry after a failed fetch.
pub fn reload_page() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
