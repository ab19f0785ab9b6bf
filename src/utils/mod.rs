//! Browser-side utilities.
//!
//! Provides:
//! - [`dom`] - Window access and page reload
//! - [`HttpUserSource`] - Users fetch over the Fetch API

pub mod dom;
mod fetch;

#[cfg_attr(feature = "mock", allow(unused_imports))]
pub use fetch::HttpUserSource;
