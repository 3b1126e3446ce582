//! Top navigation strip with the store name

use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct TopNavProps {
    pub store_name: String,
}

#[component]
pub fn TopNav(props: &TopNavProps) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "top-nav",
            width: 100pct,
            padding_left: 1,
            margin_bottom: 1,
        ) {
            Text(
                content: props.store_name.clone(),
                weight: Weight::Bold,
                color: Color::Rgb { r: 214, g: 163, b: 112 },
            )
        }
    }
}
