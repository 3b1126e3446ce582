//! Router module for path-based navigation
//!
//! A [`RouteTable`] maps normalized paths to content and a [`Router`] owns
//! the single "current path" value that navigation overwrites.

pub mod core;
pub mod route;
pub mod table;

// Re-export commonly used types
pub use self::core::{Outlet, Router, RouterError, RouterResult, RouterState};
pub use route::{Content, Route, RoutePath};
pub use table::RouteTable;
