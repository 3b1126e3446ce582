//! UI components for the interactive storefront
//!
//! This module contains reusable UI components shared by the pages.

pub mod nav_bar;
pub mod nav_button;
pub mod top_nav;

pub use nav_bar::NavBar;
pub use nav_button::NavButton;
pub use top_nav::TopNav;
