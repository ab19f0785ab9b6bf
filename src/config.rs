//! Application configuration.
//!
//! Centralizes the compile-time constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the page title.
pub const APP_NAME: &str = "Users";

/// Id of the host page element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";

// =============================================================================
// Network Configuration
// =============================================================================

/// Users collection endpoint. Fetched once per mount.
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

// =============================================================================
// UI Configuration
// =============================================================================

/// Duration of the detail panel fade/slide-in, in milliseconds.
pub const PANEL_TRANSITION_MS: u32 = 300;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
