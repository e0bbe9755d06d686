//! Persisted sidebar collapse state.
//!
//! A [`SidebarToggle`] mirrors one boolean preference onto the sidebar
//! container. Persistence and the rendering surface are both injected.

pub mod store;
pub mod toggle;

pub use store::{JsonFileStore, MemoryStore, PreferenceStore, SIDEBAR_COLLAPSED_KEY};
pub use toggle::{
    COLLAPSED_CLASS, Element, ICON_ID, MemoryElement, SIDEBAR_ID, SidebarElements, SidebarToggle,
    TOGGLE_ID,
};
