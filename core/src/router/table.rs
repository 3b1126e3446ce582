//! Static route table with exact-match lookup

use super::core::{RouterError, RouterResult};
use super::route::{Route, RoutePath};
use std::collections::HashMap;

/// Immutable mapping from path to route, built once at startup
///
/// Entries keep their declaration order for listings. Every lookup is an
/// exact match on the normalized path, the root included.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: HashMap<RoutePath, usize>,
}

impl RouteTable {
    /// Build a table, rejecting empty tables and duplicate paths
    pub fn new(routes: Vec<Route>) -> RouterResult<Self> {
        if routes.is_empty() {
            return Err(RouterError::NoRoutes);
        }

        let mut index = HashMap::with_capacity(routes.len());
        for (position, route) in routes.iter().enumerate() {
            if index.insert(route.path.clone(), position).is_some() {
                return Err(RouterError::DuplicatePath(route.path.to_string()));
            }
        }

        Ok(Self { routes, index })
    }

    /// Exact-match lookup
    pub fn match_path(&self, path: &RoutePath) -> Option<&Route> {
        self.index.get(path).map(|&position| &self.routes[position])
    }

    pub fn contains(&self, path: &RoutePath) -> bool {
        self.index.contains_key(path)
    }

    /// Routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Content;

    fn sample_routes() -> Vec<Route> {
        vec![
            Route::new("/", "Home", Content::heading("Home")),
            Route::new("/women", "Women", Content::heading("Women")),
            Route::new("/men", "Men", Content::heading("Men")),
        ]
    }

    #[test]
    fn test_every_route_matches_itself() {
        let table = RouteTable::new(sample_routes()).unwrap();
        for route in table.routes() {
            assert_eq!(table.match_path(&route.path), Some(route));
        }
    }

    #[test]
    fn test_unknown_path_has_no_match() {
        let table = RouteTable::new(sample_routes()).unwrap();
        assert!(table.match_path(&RoutePath::new("/kids")).is_none());
        assert!(table.match_path(&RoutePath::new("/women/shoes")).is_none());
        assert!(table.match_path(&RoutePath::new("/Women")).is_none());
    }

    #[test]
    fn test_root_match_is_exact() {
        let routes = vec![Route::new("/", "Home", Content::heading("Home"))];
        let table = RouteTable::new(routes).unwrap();
        assert!(table.match_path(&RoutePath::root()).is_some());
        assert!(table.match_path(&RoutePath::new("/men")).is_none());
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let mut routes = sample_routes();
        routes.push(Route::new("men/", "Men again", Content::heading("Men")));

        let err = RouteTable::new(routes).unwrap_err();
        assert!(matches!(err, RouterError::DuplicatePath(ref p) if p == "/men"));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            RouteTable::new(Vec::new()),
            Err(RouterError::NoRoutes)
        ));
    }

    #[test]
    fn test_declaration_order_kept() {
        let table = RouteTable::new(sample_routes()).unwrap();
        let paths: Vec<&str> = table.routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/women", "/men"]);
        assert_eq!(table.len(), 3);
    }
}
