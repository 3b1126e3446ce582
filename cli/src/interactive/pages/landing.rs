//! Landing page component
//!
//! Store name, tagline, shop-by-department buttons and the carousel slot.

use crate::interactive::components::{NavButton, TopNav};
use crate::interactive::router::RouterHandle;
use ipsum_core::Landing;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct LandingPageProps {
    pub store_name: String,
    pub landing: Landing,
    pub router: Option<RouterHandle>,
    /// Index into the landing triggers of the focused button, if any
    pub focused: Option<usize>,
}

#[component]
pub fn LandingPage(props: &LandingPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "landing-page",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            align_items: AlignItems::Center,
        ) {
            TopNav(store_name: props.store_name.clone())

            View(flex_direction: FlexDirection::Column, align_items: AlignItems::Center) {
                #(props.landing.tagline.iter().enumerate().map(|(i, line)| {
                    element! {
                        Text(
                            key: format!("tagline-{}", i),
                            content: line.clone(),
                            weight: Weight::Bold,
                            color: Color::Cyan,
                        )
                    }
                }).collect::<Vec<_>>())
            }

            View(height: 1)

            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.landing.triggers.iter().enumerate().map(|(i, trigger)| {
                    element! {
                        NavButton(
                            key: format!("landing-trigger-{}", i),
                            trigger: trigger.clone(),
                            router: props.router.clone(),
                            has_focus: props.focused == Some(i),
                        )
                    }
                }).collect::<Vec<_>>())
            }

            View(height: 1)

            Text(content: props.landing.carousel.clone(), color: Color::Grey)
        }
    }
}
