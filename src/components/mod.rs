//! UI components built with Leptos.
//!
//! - [`UsersView`] - Users table with hover detail panels
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
mod users;

pub use users::UsersView;
