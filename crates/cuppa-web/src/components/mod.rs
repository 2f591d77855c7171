//! UI components built with Leptos.
//!
//! - [`router`] - application routing (main entry point)
//! - [`directory`] - filterable café directory page
//! - [`dropdown`] - multi-select filter dropdown
//! - [`grid`] - café result grid
//! - [`modal`] - transient café detail overlay
//! - [`detail`] - full-page café view
//! - [`comments`] - comment list and form
//! - [`stars`] - star-rating rows
//! - [`theme_toggle`] - light/dark switch
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod comments;
pub mod detail;
pub mod directory;
pub mod dropdown;
pub mod grid;
pub mod icons;
pub mod modal;
pub mod router;
pub mod stars;
pub mod theme_toggle;

pub use router::AppRouter;
