//! Interactive storefront rendered in the terminal

pub mod app;
pub mod components;
pub mod pages;
pub mod router;

pub use app::run_storefront;
