//! Sidebar collapse toggle.
//!
//! The rendering surface is injected as a set of element handles, and the
//! preference as a [`PreferenceStore`], so the toggle runs without a live UI.

use std::collections::BTreeSet;

use super::store::{PreferenceStore, SIDEBAR_COLLAPSED_KEY};
use crate::error::Result;

/// Element id of the sidebar container.
pub const SIDEBAR_ID: &str = "sidebar";
/// Element id of the toggle control.
pub const TOGGLE_ID: &str = "sidebarToggle";
/// Element id of the toggle icon.
pub const ICON_ID: &str = "toggleIcon";
/// Class marking the container as collapsed.
pub const COLLAPSED_CLASS: &str = "collapsed";

/// Class-list access on a rendered element.
pub trait Element {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Element that only tracks its class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    classes: BTreeSet<String>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classes, sorted.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.classes.iter().map(String::as_str).collect()
    }
}

impl Element for MemoryElement {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Element handles looked up on the rendering surface. Any may be missing.
#[derive(Debug, Clone)]
pub struct SidebarElements<E> {
    pub sidebar: Option<E>,
    pub toggle: Option<E>,
    pub icon: Option<E>,
}

impl<E: Default> SidebarElements<E> {
    /// All three elements present and in their initial state.
    #[must_use]
    pub fn complete() -> Self {
        Self {
            sidebar: Some(E::default()),
            toggle: Some(E::default()),
            icon: Some(E::default()),
        }
    }
}

/// Initialized sidebar toggle.
pub struct SidebarToggle<S, E> {
    store: S,
    sidebar: E,
    toggle: E,
    icon: Option<E>,
}

impl<S: PreferenceStore, E: Element> SidebarToggle<S, E> {
    /// Wire up the toggle and restore the saved state.
    ///
    /// Returns `None`, after logging, when the container or the toggle
    /// control is missing; the feature then stays inert. A saved state that
    /// cannot be read is logged and treated as expanded.
    pub fn init(store: S, elements: SidebarElements<E>) -> Option<Self> {
        tracing::debug!(
            sidebar = elements.sidebar.is_some(),
            toggle = elements.toggle.is_some(),
            icon = elements.icon.is_some(),
            "Sidebar elements found"
        );

        let missing: Vec<&str> = [
            (SIDEBAR_ID, elements.sidebar.is_none()),
            (TOGGLE_ID, elements.toggle.is_none()),
        ]
        .into_iter()
        .filter_map(|(id, absent)| absent.then_some(id))
        .collect();

        let (Some(mut sidebar), Some(toggle)) = (elements.sidebar, elements.toggle) else {
            tracing::error!(?missing, "Required sidebar elements not found");
            return None;
        };
        if elements.icon.is_none() {
            tracing::debug!(id = ICON_ID, "Sidebar icon not found, continuing without it");
        }

        match store.get_bool(SIDEBAR_COLLAPSED_KEY) {
            Ok(Some(true)) => sidebar.add_class(COLLAPSED_CLASS),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Could not read saved sidebar state"),
        }

        Some(Self {
            store,
            sidebar,
            toggle,
            icon: elements.icon,
        })
    }

    /// Whether the container currently carries the collapsed class.
    pub fn is_collapsed(&self) -> bool {
        self.sidebar.has_class(COLLAPSED_CLASS)
    }

    /// Handle one click on the toggle control.
    ///
    /// Flips the container state and writes it through before returning.
    ///
    /// # Errors
    /// Returns an error if the new state cannot be persisted; the container
    /// keeps the new state.
    pub fn click(&mut self) -> Result<bool> {
        let collapsed = !self.is_collapsed();
        self.apply(collapsed);
        self.store.set_bool(SIDEBAR_COLLAPSED_KEY, collapsed)?;
        tracing::info!(collapsed, "Sidebar toggled");
        Ok(collapsed)
    }

    /// Expand the sidebar and persist `false`.
    ///
    /// # Errors
    /// Returns an error if the state cannot be persisted.
    pub fn reset(&mut self) -> Result<()> {
        self.apply(false);
        self.store.set_bool(SIDEBAR_COLLAPSED_KEY, false)?;
        tracing::info!("Sidebar state reset");
        Ok(())
    }

    fn apply(&mut self, collapsed: bool) {
        if collapsed {
            self.sidebar.add_class(COLLAPSED_CLASS);
        } else {
            self.sidebar.remove_class(COLLAPSED_CLASS);
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn sidebar(&self) -> &E {
        &self.sidebar
    }

    pub const fn toggle(&self) -> &E {
        &self.toggle
    }

    pub const fn icon(&self) -> Option<&E> {
        self.icon.as_ref()
    }
}
