//! Application configuration.
//!
//! Centralizes the configuration constants used throughout the app. The
//! café catalog is embedded at compile time with `include_str!`.

use cuppa_core::{Cafe, parse_catalog};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "cuppa";

/// Tagline shown under the directory heading.
pub const APP_TAGLINE: &str =
    "Filter cafes by location, name, and rating to find your perfect spot.";

// =============================================================================
// Catalog (embedded at compile time)
// =============================================================================

/// The café catalog as shipped with the app.
pub const CATALOG_JSON: &str = include_str!("../assets/data/cafes.json");

/// Parse the embedded catalog. The data ships with the binary, so a parse
/// failure is a build defect; it degrades to an empty directory rather
/// than a panic.
pub fn load_catalog() -> Vec<Cafe> {
    parse_catalog(CATALOG_JSON).unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("catalog failed to load: {err}").into());
        Vec::new()
    })
}

// =============================================================================
// Overlay Timing
// =============================================================================

/// Duration of the overlay enter/exit transition (must match the CSS).
pub const TRANSITION_MS: u32 = 200;

/// Extra margin granted to the exit transition before the fallback timer
/// forces the overlay closed.
pub const FALLBACK_MARGIN_MS: u32 = 50;

/// Delay between mounting the overlay and marking it visible, so the
/// enter transition is not skipped.
pub const ENTER_TICK_MS: u32 = 16;

/// Element id of the dedicated overlay render target.
pub const OVERLAY_HOST_ID: &str = "overlay-root";

// =============================================================================
// Theme
// =============================================================================

/// localStorage key for the persisted theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Filter Placeholders
// =============================================================================

/// Dropdown button text when a filter has nothing selected.
pub mod placeholders {
    pub const LOCATIONS: &str = "Select Locations";
    pub const CAFES: &str = "Select Cafes";
    pub const RATINGS: &str = "Select Ratings";
}
