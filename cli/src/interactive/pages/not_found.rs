//! Shown when the current path has no matching route

use ipsum_core::render::not_found_text;
use ipsum_core::RoutePath;
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct NotFoundPageProps {
    pub path: RoutePath,
}

#[component]
pub fn NotFoundPage(props: &NotFoundPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "not-found-page",
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            width: 100pct,
            padding: 1,
        ) {
            Text(
                content: "Route Not Found",
                weight: Weight::Bold,
                color: Color::Red
            )
            Text(content: not_found_text(props.path.as_str()))
        }
    }
}
