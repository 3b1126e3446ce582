//! Storefront composition: the canonical route table, landing content and
//! the persistent navigation bar.

use crate::config::{HistoryConfig, StorefrontConfig};
use crate::error::Result;
use crate::router::{Content, Outlet, Route, RoutePath, RouteTable, Router, RouterResult};
use crate::trigger::NavigationTrigger;

/// Tagline shown on the landing screen, one line per heading
pub const TAGLINE: &[&str] = &["Modern Clothing", "For", "Today's People"];

/// Placeholder shown where the product carousel will go
pub const CAROUSEL_PLACEHOLDER: &str = "carousel";

/// Content of the landing screen
#[derive(Debug, Clone, PartialEq)]
pub struct Landing {
    pub tagline: Vec<String>,
    /// Shop-by-department calls to action
    pub triggers: Vec<NavigationTrigger>,
    pub carousel: String,
}

impl Default for Landing {
    fn default() -> Self {
        Self {
            tagline: TAGLINE.iter().map(|line| line.to_string()).collect(),
            triggers: vec![
                NavigationTrigger::horizontal("women", "Shop Women"),
                NavigationTrigger::horizontal("men", "Shop Men"),
            ],
            carousel: CAROUSEL_PLACEHOLDER.to_string(),
        }
    }
}

/// The route table every storefront serves: landing, women, men
pub fn route_table() -> RouterResult<RouteTable> {
    RouteTable::new(vec![
        Route::new("/", "Storefront", Content::Landing(Landing::default())),
        Route::new("/women", "Women", Content::heading("Women")),
        Route::new("/men", "Men", Content::heading("Men")),
    ])
}

/// A fully assembled storefront
#[derive(Debug, Clone)]
pub struct Storefront {
    pub name: String,
    pub table: RouteTable,
    /// Round triggers rendered under every screen
    pub nav_bar: Vec<NavigationTrigger>,
    pub initial_route: RoutePath,
    pub history: HistoryConfig,
}

impl Storefront {
    /// Assemble the storefront described by `config`
    ///
    /// Fails on invalid configuration or when the route table cannot be built.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        config.validate()?;

        let nav_bar = config
            .nav_labels
            .iter()
            .map(|label| NavigationTrigger::round("", label.clone()))
            .collect();

        Ok(Self {
            name: config.store_name.clone(),
            table: route_table()?,
            nav_bar,
            initial_route: config.initial_route.clone(),
            history: config.history.clone(),
        })
    }

    /// A router over this storefront's table, positioned at the initial route
    pub fn router(&self) -> Router {
        Router::new(self.table.clone(), self.initial_route.clone()).with_history(&self.history)
    }

    /// Triggers that can take focus on the screen showing `outlet`:
    /// page triggers first, then the navigation bar
    pub fn focus_order(&self, outlet: &Outlet<'_>) -> Vec<NavigationTrigger> {
        let mut triggers = match outlet.route().map(|route| &route.content) {
            Some(Content::Landing(landing)) => landing.triggers.clone(),
            _ => Vec::new(),
        };
        triggers.extend(self.nav_bar.iter().cloned());
        triggers
    }
}
