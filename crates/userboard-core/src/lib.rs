//! Platform-independent core of the users board.
//!
//! - [`model`] - User records and JSON decoding
//! - [`state`] - One-shot [`ViewState`] machine, [`UserSource`] seam, [`MountGuard`]
//! - [`hover`] - Per-category [`HoverSelection`]
//! - [`render`] - Pure [`render`](render::render) from state to [`Screen`]
//! - [`error`] - [`FetchError`] taxonomy

pub mod error;
pub mod hover;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod render;
pub mod state;

pub use error::FetchError;
pub use hover::{DetailCategory, HoverSelection};
pub use model::{Address, Company, Geo, User, UserId, parse_users};
pub use render::{AddressPanel, CompanyPanel, Screen, UserRow, WebsiteLink, render, website_href};
pub use state::{MountGuard, UserSource, ViewState};
