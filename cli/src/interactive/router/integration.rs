//! UI framework integration for the router system
//!
//! This module bridges the core [`Router`] with the component system: a
//! shareable handle that components receive through props, and change
//! notifications that drive re-rendering.

use ipsum_core::{NavigationRequest, Navigator, RoutePath, Router};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the path-change channel; slow subscribers only need the latest path
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle {
    router: Arc<Mutex<Router>>,
    changes: broadcast::Sender<RoutePath>,
}

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: Router) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            router: Arc::new(Mutex::new(router)),
            changes,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Router> {
        self.router.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to a path, notifying subscribers when it changed
    pub fn navigate(&self, path: impl Into<RoutePath>) -> bool {
        let changed = self.lock().navigate(path);
        if changed {
            self.notify();
        }
        changed
    }

    /// Go back to the previous path
    pub fn go_back(&self) -> bool {
        let moved = self.lock().go_back();
        if moved {
            self.notify();
        }
        moved
    }

    pub fn can_go_back(&self) -> bool {
        self.lock().can_go_back()
    }

    /// Get the current path
    pub fn current_path(&self) -> RoutePath {
        self.lock().current_path().clone()
    }

    /// Run `f` against the router while holding the lock
    pub fn with_router<R>(&self, f: impl FnOnce(&Router) -> R) -> R {
        f(&self.lock())
    }

    /// Receive every path change from now on
    pub fn subscribe(&self) -> broadcast::Receiver<RoutePath> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        let path = self.current_path();
        debug!(path = %path, "route changed");
        // No subscribers just means nothing is rendering yet
        let _ = self.changes.send(path);
    }
}

impl Navigator for RouterHandle {
    fn dispatch(&mut self, request: NavigationRequest) {
        self.navigate(request.target_path);
    }
}
