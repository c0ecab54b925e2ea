//! Collapsible navigation sidebar: state machine and component.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{COMPACT_WIDTH_MAX, NavEntry, SidebarState};
