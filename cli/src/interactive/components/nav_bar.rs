//! Persistent navigation bar shown under every screen

use crate::interactive::components::nav_button::NavButton;
use crate::interactive::router::RouterHandle;
use ipsum_core::NavigationTrigger;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct NavBarProps {
    pub triggers: Vec<NavigationTrigger>,
    pub router: Option<RouterHandle>,
    /// Index into `triggers` of the focused button, if any
    pub focused: Option<usize>,
}

#[component]
pub fn NavBar(props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "nav-bar",
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            gap: 1,
            width: 100pct,
        ) {
            #(props.triggers.iter().enumerate().map(|(i, trigger)| {
                element! {
                    NavButton(
                        key: format!("nav-bar-{}", i),
                        trigger: trigger.clone(),
                        router: props.router.clone(),
                        has_focus: props.focused == Some(i),
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
