//! Shared UI components for the site.

pub mod form;
pub mod layout;
pub mod nav;
pub mod theme;
pub mod transition;

pub use form::{use_submission, FormHandle, LeadForm};
pub use layout::Layout;
pub use nav::Nav;
pub use theme::{use_theme, use_theme_provider, ThemeHandle, ThemeToggle};
pub use transition::PageTransition;
