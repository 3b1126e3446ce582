//! Navigation button component
//!
//! Renders a [`NavigationTrigger`] and activates it against the router
//! handle it was given when it has focus and Enter or Space is pressed.

use crate::interactive::router::RouterHandle;
use ipsum_core::{NavigationTrigger, TriggerVariant};
use iocraft::prelude::*;

#[derive(Default, Props)]
pub struct NavButtonProps {
    pub trigger: NavigationTrigger,
    /// Router the trigger navigates; without one the button is inert
    pub router: Option<RouterHandle>,
    pub has_focus: bool,
}

/// Border used for each trigger variant
pub fn variant_border(variant: TriggerVariant) -> BorderStyle {
    match variant {
        TriggerVariant::Round => BorderStyle::Round,
        TriggerVariant::Horizontal => BorderStyle::Single,
    }
}

/// Whether a key activates the focused button
pub fn is_activation_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Activate `trigger` when it has focus and `code` is an activation key;
/// returns whether navigation was requested
pub fn handle_key(
    code: KeyCode,
    has_focus: bool,
    trigger: &NavigationTrigger,
    router: &mut RouterHandle,
) -> bool {
    if !has_focus || !is_activation_key(code) {
        return false;
    }
    trigger.activate(router);
    true
}

#[component]
pub fn NavButton(mut hooks: Hooks, props: &NavButtonProps) -> impl Into<AnyElement<'static>> {
    hooks.use_terminal_events({
        let trigger = props.trigger.clone();
        let mut router = props.router.clone();
        let has_focus = props.has_focus;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                if let Some(router) = router.as_mut() {
                    handle_key(code, has_focus, &trigger, router);
                }
            }
            _ => {}
        }
    });

    let (color, weight) = if props.has_focus {
        (Color::Yellow, Weight::Bold)
    } else {
        (Color::White, Weight::Normal)
    };

    element! {
        View(
            border_style: variant_border(props.trigger.variant),
            border_color: color,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: props.trigger.label.clone(), color: color, weight: weight)
        }
    }
}
