//! View-layer data models.
//!
//! - [`AppRoute`] - hash-based navigation
//! - [`Theme`] - color theme preference

mod route;
mod theme;

pub use route::AppRoute;
pub use theme::Theme;
