//! Interactive storefront application using iocraft

use crate::interactive::components::NavBar;
use crate::interactive::pages::{HeadingPage, LandingPage, NotFoundPage, PageView};
use crate::interactive::router::RouterHandle;
use anyhow::Result;
use ipsum_core::Storefront;
use iocraft::prelude::*;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

const KEY_HINTS: &str = "Tab/↑↓ move · Enter open · Backspace back · q quit";

/// Focus index after moving forward, wrapping at the end
pub fn next_focus(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Focus index after moving backward, wrapping at the start
pub fn previous_focus(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current == 0 || current >= count {
        count - 1
    } else {
        current - 1
    }
}

/// Split a focus index over the page triggers followed by the nav bar
pub fn split_focus(focused: usize, page_count: usize) -> (Option<usize>, Option<usize>) {
    if focused < page_count {
        (Some(focused), None)
    } else {
        (None, Some(focused - page_count))
    }
}

/// Effect of a key press on the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellKeyOutcome {
    pub focus: usize,
    pub exit: bool,
}

/// Apply a shell-level key: focus movement, going back and quitting
///
/// Trigger activation is handled by the focused `NavButton`, not here.
pub fn handle_shell_key(
    code: KeyCode,
    focus: usize,
    trigger_count: usize,
    router: Option<&RouterHandle>,
) -> ShellKeyOutcome {
    let mut outcome = ShellKeyOutcome { focus, exit: false };
    match code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Right => {
            outcome.focus = next_focus(focus, trigger_count);
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => {
            outcome.focus = previous_focus(focus, trigger_count);
        }
        KeyCode::Backspace => {
            if let Some(router) = router {
                router.go_back();
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => outcome.exit = true,
        _ => {}
    }
    outcome
}

/// Properties for the storefront application shell
#[derive(Default, Props)]
pub struct StorefrontAppProps {
    pub storefront: Option<Storefront>,
    pub router: Option<RouterHandle>,
}

/// Application shell: current page above the persistent navigation bar
#[component]
pub fn StorefrontApp(
    mut hooks: Hooks,
    props: &StorefrontAppProps,
) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let current_path = hooks.use_state(|| {
        props
            .router
            .as_ref()
            .map(RouterHandle::current_path)
            .unwrap_or_default()
    });
    let focus = hooks.use_state(|| 0usize);
    let should_exit = hooks.use_state(|| false);

    // Re-render whenever the router reports a new path
    let router = props.router.clone();
    let mut current_path_clone = current_path;
    let mut focus_clone = focus;
    hooks.use_future(async move {
        let Some(router) = router else {
            return;
        };
        let mut rx = router.subscribe();
        loop {
            match rx.recv().await {
                Ok(path) => {
                    current_path_clone.set(path);
                    focus_clone.set(0);
                }
                Err(RecvError::Lagged(_)) => {
                    current_path_clone.set(router.current_path());
                    focus_clone.set(0);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let (page_view, trigger_count) = match (&props.storefront, &props.router) {
        (Some(storefront), Some(router)) => router.with_router(|router| {
            let outlet = router.outlet();
            (
                Some(PageView::from(&outlet)),
                storefront.focus_order(&outlet).len(),
            )
        }),
        _ => (None, 0),
    };

    // Handle keyboard input
    hooks.use_terminal_events({
        let router = props.router.clone();
        let mut focus = focus;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let outcome = handle_shell_key(code, focus.get(), trigger_count, router.as_ref());
                if outcome.focus != focus.get() {
                    focus.set(outcome.focus);
                }
                if outcome.exit {
                    should_exit.set(true);
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let (Some(storefront), Some(page_view)) = (props.storefront.as_ref(), page_view) else {
        return element! { View {} };
    };

    let focused = focus.get().min(trigger_count.saturating_sub(1));
    let (page_focus, nav_focus) = split_focus(focused, page_view.trigger_count());

    let page: AnyElement<'static> = match page_view {
        PageView::Landing(landing) => element! {
            LandingPage(
                store_name: storefront.name.clone(),
                landing: landing,
                router: props.router.clone(),
                focused: page_focus,
            )
        }
        .into(),
        PageView::Heading(text) => element! { HeadingPage(text: text) }.into(),
        PageView::NotFound(path) => element! { NotFoundPage(path: path) }.into(),
    };

    element! {
        View(
            key: "storefront-app",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding: 1,
        ) {
            View(key: "router-outlet", width: 100pct) {
                #(page)
            }

            View(height: 1)

            NavBar(
                triggers: storefront.nav_bar.clone(),
                router: props.router.clone(),
                focused: nav_focus,
            )

            View(height: 1)

            Text(
                content: format!("{}  {}", current_path.read().as_str(), KEY_HINTS),
                color: Color::Grey,
            )
        }
    }
}

/// Run the storefront until the user quits
pub async fn run_storefront(storefront: Storefront) -> Result<()> {
    let router = RouterHandle::new(storefront.router());
    info!("Opening {} at {}", storefront.name, router.current_path());

    // iocraft drives its own executor; keep it off the tokio worker threads
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(StorefrontApp(storefront: Some(storefront), router: Some(router)))
                .render_loop()
                .await
        })
    })
    .await??;

    debug!("Storefront closed");
    Ok(())
}
