//! Configuration types for the storefront
//!
//! Only exports pure data types. Discovery and file loading live in the CLI.

pub mod types;

pub use types::{HistoryConfig, StorefrontConfig};
