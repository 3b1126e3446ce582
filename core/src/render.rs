//! Plain-text rendering of storefront screens
//!
//! Used by headless commands and tests; the terminal UI renders the same
//! structure with styled components.

use crate::router::{Content, Outlet};
use crate::storefront::Storefront;
use crate::trigger::{NavigationTrigger, TriggerVariant};

const TRIGGER_SEPARATOR: &str = "  ";

/// Text face of a trigger: `( label )` for round, `[ label ]` for horizontal
pub fn trigger_text(trigger: &NavigationTrigger) -> String {
    match trigger.variant {
        TriggerVariant::Round => format!("( {} )", trigger.label),
        TriggerVariant::Horizontal => format!("[ {} ]", trigger.label),
    }
}

/// A row of triggers on one line
pub fn trigger_row(triggers: &[NavigationTrigger]) -> String {
    triggers
        .iter()
        .map(trigger_text)
        .collect::<Vec<_>>()
        .join(TRIGGER_SEPARATOR)
}

/// Line shown when no route matches
pub fn not_found_text(path: &str) -> String {
    format!("No matching route: {}", path)
}

/// Lines for the page content alone
pub fn render_page(storefront: &Storefront, outlet: &Outlet<'_>) -> Vec<String> {
    match outlet {
        Outlet::Matched(route) => match &route.content {
            Content::Landing(landing) => {
                let mut lines = vec![storefront.name.clone()];
                lines.extend(landing.tagline.iter().cloned());
                lines.push(trigger_row(&landing.triggers));
                lines.push(landing.carousel.clone());
                lines
            }
            Content::Heading(text) => vec![format!("# {}", text)],
        },
        Outlet::NotFound(path) => vec![not_found_text(path.as_str())],
    }
}

/// Full screen: page content followed by the navigation bar
pub fn render_screen(storefront: &Storefront, outlet: &Outlet<'_>) -> Vec<String> {
    let mut lines = render_page(storefront, outlet);
    lines.push(trigger_row(&storefront.nav_bar));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use crate::trigger::Navigator;

    fn storefront() -> Storefront {
        Storefront::from_config(&StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn test_landing_screen() {
        let storefront = storefront();
        let router = storefront.router();
        assert_eq!(
            render_screen(&storefront, &router.outlet()),
            vec![
                "Ipsum Store",
                "Modern Clothing",
                "For",
                "Today's People",
                "[ Shop Women ]  [ Shop Men ]",
                "carousel",
                "( Home )  ( Home )  ( Home )",
            ]
        );
    }

    #[test]
    fn test_women_trigger_shows_women_heading() {
        let storefront = storefront();
        let mut router = storefront.router();

        NavigationTrigger::horizontal("women", "Shop Women").activate(&mut router);

        assert_eq!(router.current_path().as_str(), "/women");
        assert_eq!(render_page(&storefront, &router.outlet()), vec!["# Women"]);
    }

    #[test]
    fn test_empty_target_returns_to_landing() {
        let storefront = storefront();
        let mut router = storefront.router();
        router.navigate("men");

        storefront.nav_bar[0].activate(&mut router);

        assert!(router.current_path().is_root());
        let page = render_page(&storefront, &router.outlet());
        assert_eq!(page[1], "Modern Clothing");
    }

    #[test]
    fn test_repeat_navigation_renders_same_screen() {
        let storefront = storefront();
        let mut router = storefront.router();
        router.navigate("/men");
        let first = render_screen(&storefront, &router.outlet());
        router.navigate("/men");
        assert_eq!(render_screen(&storefront, &router.outlet()), first);
    }

    #[test]
    fn test_men_flow_keeps_nav_bar() {
        let storefront = storefront();
        let mut router = storefront.router();
        assert!(router.current_path().is_root());

        let men = NavigationTrigger::horizontal("men", "Shop Men");
        router.dispatch(men.request());

        assert_eq!(router.current_path().as_str(), "/men");
        let screen = render_screen(&storefront, &router.outlet());
        assert_eq!(screen[0], "# Men");
        assert_eq!(screen.last(), Some(&trigger_row(&storefront.nav_bar)));
    }

    #[test]
    fn test_not_found_screen_keeps_nav_bar() {
        let storefront = storefront();
        let mut router = storefront.router();
        router.navigate("kids");
        assert_eq!(
            render_screen(&storefront, &router.outlet()),
            vec!["No matching route: /kids", "( Home )  ( Home )  ( Home )"]
        );
    }
}
