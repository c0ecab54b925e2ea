//! UI components: sidebar rail and content pane.

pub mod component;
pub mod content;
pub mod sidebar;

pub use component::*;
pub use content::ContentComponent;
pub use sidebar::SidebarComponent;
