//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::route::{Route, RoutePath};
use super::table::RouteTable;
use crate::config::HistoryConfig;
use crate::trigger::{NavigationRequest, Navigator};
use tracing::{debug, warn};

/// Structured error type for router operations
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route path '{0}' is defined more than once")]
    DuplicatePath(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Result of resolving the current path against the route table
#[derive(Debug, Clone, PartialEq)]
pub enum Outlet<'a> {
    /// An entry matched the path exactly
    Matched(&'a Route),
    /// No entry matched; the path is kept for display
    NotFound(RoutePath),
}

impl<'a> Outlet<'a> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outlet::Matched(_))
    }

    pub fn route(&self) -> Option<&'a Route> {
        match self {
            Outlet::Matched(route) => Some(*route),
            Outlet::NotFound(_) => None,
        }
    }
}

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active path
    pub current_path: RoutePath,
    /// Navigation history (most recent first)
    pub history: Vec<RoutePath>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    /// Create a new router state with the given initial path
    pub fn new(initial_path: RoutePath) -> Self {
        Self {
            current_path: initial_path,
            history: Vec::new(),
            max_history: HistoryConfig::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Move to a new path, returning whether the path changed
    pub fn navigate_to(&mut self, path: RoutePath) -> bool {
        if self.current_path == path {
            return false;
        }

        if self.max_history > 0 {
            self.history.insert(0, self.current_path.clone());
            self.history.truncate(self.max_history);
        }

        self.current_path = path;
        true
    }

    /// Go back to the previous path in history
    pub fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current_path = self.history.remove(0);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_path(&self) -> &RoutePath {
        &self.current_path
    }
}

/// Owns the route table and the single mutable "current path" value
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    state: RouterState,
}

impl Router {
    /// Create a router positioned at `initial_path`
    ///
    /// The initial path does not have to exist in the table; an unknown
    /// path resolves to [`Outlet::NotFound`].
    pub fn new(table: RouteTable, initial_path: impl Into<RoutePath>) -> Self {
        let initial_path = initial_path.into();
        if !table.contains(&initial_path) {
            warn!(path = %initial_path, "initial path has no matching route");
        }

        Self {
            table,
            state: RouterState::new(initial_path),
        }
    }

    /// Apply history settings
    pub fn with_history(mut self, history: &HistoryConfig) -> Self {
        self.state.max_history = if history.enabled {
            history.max_entries
        } else {
            0
        };
        self.state.history.truncate(self.state.max_history);
        self
    }

    /// Overwrite the current path; returns `false` when it was already active
    pub fn navigate(&mut self, path: impl Into<RoutePath>) -> bool {
        let path = path.into();
        if !self.table.contains(&path) {
            warn!(path = %path, "navigating to a path with no matching route");
        }

        let changed = self.state.navigate_to(path);
        debug!(path = %self.state.current_path, changed, "navigate");
        changed
    }

    /// Exact-match lookup against the route table
    pub fn match_path(&self, path: impl Into<RoutePath>) -> Option<&Route> {
        self.table.match_path(&path.into())
    }

    /// Resolve the current path
    pub fn outlet(&self) -> Outlet<'_> {
        match self.table.match_path(self.state.current_path()) {
            Some(route) => Outlet::Matched(route),
            None => Outlet::NotFound(self.state.current_path().clone()),
        }
    }

    /// Go back to the previous path
    pub fn go_back(&mut self) -> bool {
        let moved = self.state.go_back();
        if moved {
            debug!(path = %self.state.current_path, "went back");
        }
        moved
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn current_path(&self) -> &RoutePath {
        self.state.current_path()
    }

    /// Previous paths, most recent first
    pub fn history(&self) -> &[RoutePath] {
        &self.state.history
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}

impl Navigator for Router {
    fn dispatch(&mut self, request: NavigationRequest) {
        self.navigate(request.target_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Content;

    fn table() -> RouteTable {
        RouteTable::new(vec![
            Route::new("/", "Home", Content::heading("Home")),
            Route::new("/women", "Women", Content::heading("Women")),
            Route::new("/men", "Men", Content::heading("Men")),
        ])
        .unwrap()
    }

    #[test]
    fn test_navigate_overwrites_current_path() {
        let mut router = Router::new(table(), "/");
        assert!(router.navigate("women"));
        assert_eq!(router.current_path().as_str(), "/women");
        assert_eq!(
            router.outlet().route().map(|r| &r.content),
            Some(&Content::heading("Women"))
        );
    }

    #[test]
    fn test_navigate_twice_is_idempotent() {
        let mut router = Router::new(table(), "/");
        assert!(router.navigate("/men"));
        let first = router.outlet().route().cloned();

        assert!(!router.navigate("/men"));
        assert_eq!(router.outlet().route().cloned(), first);
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_unknown_path_resolves_to_not_found() {
        let mut router = Router::new(table(), "/");
        router.navigate("/kids");
        assert_eq!(router.outlet(), Outlet::NotFound(RoutePath::new("/kids")));
        assert!(router.match_path("/kids").is_none());
    }

    #[test]
    fn test_unknown_initial_path_is_accepted() {
        let router = Router::new(table(), "/sale");
        assert!(!router.outlet().is_matched());
    }

    #[test]
    fn test_history_go_back() {
        let mut router = Router::new(table(), "/");
        assert!(!router.can_go_back());

        router.navigate("women");
        router.navigate("men");
        assert_eq!(
            router.history(),
            &[RoutePath::new("/women"), RoutePath::root()]
        );

        assert!(router.go_back());
        assert_eq!(router.current_path().as_str(), "/women");
        assert!(router.go_back());
        assert!(router.current_path().is_root());
        assert!(!router.go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let history = HistoryConfig {
            enabled: true,
            max_entries: 2,
        };
        let mut router = Router::new(table(), "/").with_history(&history);
        router.navigate("women");
        router.navigate("men");
        router.navigate("/");
        router.navigate("women");
        assert_eq!(router.history().len(), 2);
        assert_eq!(router.history()[0], RoutePath::root());
    }

    #[test]
    fn test_history_disabled() {
        let history = HistoryConfig {
            enabled: false,
            max_entries: 10,
        };
        let mut router = Router::new(table(), "/").with_history(&history);
        router.navigate("women");
        assert!(!router.can_go_back());
        assert!(!router.go_back());
        assert_eq!(router.current_path().as_str(), "/women");
    }

    #[test]
    fn test_router_error_messages() {
        assert_eq!(RouterError::NoRoutes.to_string(), "No routes configured");
        assert_eq!(
            RouterError::DuplicatePath("/men".to_string()).to_string(),
            "Route path '/men' is defined more than once"
        );
    }
}
