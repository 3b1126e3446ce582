//! Navigation triggers
//!
//! A trigger is a labelled control bound to a target path. Activating it
//! produces a [`NavigationRequest`] and hands it to whatever [`Navigator`]
//! the caller passes in; triggers never reach for a global router.

use crate::router::RoutePath;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visual style of a trigger; behavior is identical across variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerVariant {
    /// Compact control used in the persistent navigation bar
    Round,
    /// Wide call-to-action control used on pages
    #[default]
    Horizontal,
}

/// A request to change the current path, consumed immediately
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target_path: RoutePath,
}

/// Anything that can carry out a navigation request
pub trait Navigator {
    fn dispatch(&mut self, request: NavigationRequest);
}

/// Typed configuration of a clickable navigation control
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationTrigger {
    /// Target route; a bare segment or empty string for root
    pub target_path: String,
    /// Display text
    pub label: String,
    pub variant: TriggerVariant,
}

impl NavigationTrigger {
    pub fn new(
        target_path: impl Into<String>,
        label: impl Into<String>,
        variant: TriggerVariant,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            label: label.into(),
            variant,
        }
    }

    pub fn round(target_path: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(target_path, label, TriggerVariant::Round)
    }

    pub fn horizontal(target_path: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(target_path, label, TriggerVariant::Horizontal)
    }

    /// Build the request this trigger issues
    pub fn request(&self) -> NavigationRequest {
        NavigationRequest {
            target_path: RoutePath::new(&self.target_path),
        }
    }

    /// Ask `navigator` to move to this trigger's target
    pub fn activate<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        let request = self.request();
        debug!(label = %self.label, target = %request.target_path, "trigger activated");
        navigator.dispatch(request);
    }
}
