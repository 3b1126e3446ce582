//! Router integration for the interactive storefront
//!
//! The routing logic itself lives in `ipsum_core::router`; this module wraps
//! it for use from components.

pub mod integration;

pub use integration::RouterHandle;
