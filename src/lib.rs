//! Users board: a single-page Leptos app listing users fetched from a
//! remote endpoint, with hover detail panels for address and company.

mod app;
mod components;
mod config;
mod utils;

pub use app::App;
pub use config::ROOT_ELEMENT_ID;
