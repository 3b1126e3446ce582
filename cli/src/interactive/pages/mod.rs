//! Page components for the interactive storefront
//!
//! This module contains the page components the app shell swaps between
//! as the current path changes.

pub mod heading;
pub mod landing;
pub mod not_found;

pub use heading::HeadingPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;

use ipsum_core::{Content, Landing, Outlet, RoutePath};

/// Owned snapshot of what the current path resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Landing(Landing),
    Heading(String),
    NotFound(RoutePath),
}

impl From<&Outlet<'_>> for PageView {
    fn from(outlet: &Outlet<'_>) -> Self {
        match outlet {
            Outlet::Matched(route) => match &route.content {
                Content::Landing(landing) => PageView::Landing(landing.clone()),
                Content::Heading(text) => PageView::Heading(text.clone()),
            },
            Outlet::NotFound(path) => PageView::NotFound(path.clone()),
        }
    }
}

impl PageView {
    /// Number of focusable triggers the page itself contributes
    pub fn trigger_count(&self) -> usize {
        match self {
            PageView::Landing(landing) => landing.triggers.len(),
            PageView::Heading(_) | PageView::NotFound(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipsum_core::{Storefront, StorefrontConfig};

    #[test]
    fn test_page_view_from_outlet() {
        let storefront = Storefront::from_config(&StorefrontConfig::default()).unwrap();
        let mut router = storefront.router();

        let landing = PageView::from(&router.outlet());
        assert_eq!(landing.trigger_count(), 2);

        router.navigate("women");
        assert_eq!(
            PageView::from(&router.outlet()),
            PageView::Heading("Women".to_string())
        );

        router.navigate("sale");
        let missing = PageView::from(&router.outlet());
        assert_eq!(missing, PageView::NotFound(RoutePath::new("/sale")));
        assert_eq!(missing.trigger_count(), 0);
    }
}
