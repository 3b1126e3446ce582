//! Department page component: a single heading

use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct HeadingPageProps {
    pub text: String,
}

#[component]
pub fn HeadingPage(props: &HeadingPageProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "heading-page",
            width: 100pct,
            justify_content: JustifyContent::Center,
            padding: 1,
        ) {
            Text(content: props.text.clone(), weight: Weight::Bold, color: Color::Cyan)
        }
    }
}
