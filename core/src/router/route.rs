//! Route definitions and utilities
//!
//! This module defines the path type used to address screens and the
//! route entries stored in a route table.

use crate::storefront::Landing;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Normalized location of a screen, always starting with `/`
///
/// Bare segments are prefixed with a slash, so `""` addresses the root and
/// `"women"` addresses `/women`. A trailing slash on a non-root path is
/// dropped. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Create a new normalized path
    pub fn new(path: impl AsRef<str>) -> Self {
        let segment = path.as_ref().trim().trim_end_matches('/');
        if segment.is_empty() {
            Self::root()
        } else if segment.starts_with('/') {
            Self(segment.to_string())
        } else {
            Self(format!("/{}", segment))
        }
    }

    /// The root path `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RoutePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&RoutePath> for RoutePath {
    fn from(path: &RoutePath) -> Self {
        path.clone()
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What a route displays
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// The storefront landing screen
    Landing(Landing),
    /// A single static heading
    Heading(String),
}

impl Content {
    pub fn heading(text: impl Into<String>) -> Self {
        Content::Heading(text.into())
    }
}

/// Route definition: a unique path and the content it renders
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Unique path for this route
    pub path: RoutePath,
    /// Human-readable name, shown in route listings
    pub name: String,
    /// Content rendered when this route is active
    pub content: Content,
}

impl Route {
    /// Create a new route for the given path
    pub fn new(path: impl Into<RoutePath>, name: impl Into<String>, content: Content) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            content,
        }
    }
}
