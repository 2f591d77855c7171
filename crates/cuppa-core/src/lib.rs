//! Domain logic for the cuppa café directory.
//!
//! Everything here is pure and platform-free so it can be tested natively:
//! - [`catalog`] - café records and catalog parsing
//! - [`selection`] - multi-select option lists with an aggregate entry
//! - [`filter`] - catalog filtering across the three attributes
//! - [`overlay`] - the detail-overlay lifecycle state machine
//! - [`comment`] - comment form validation
//!
//! The web crate wires these into Leptos signals, timers, and the DOM.

pub mod catalog;
pub mod comment;
pub mod filter;
pub mod overlay;
pub mod selection;

pub use catalog::{
    Cafe, CafeComment, CatalogError, Drink, RatingSummary, STAR_SCALE, parse_catalog, star_label,
};
pub use comment::{CommentDraft, CommentErrors};
pub use filter::{CafeFilters, location_options, name_options, rating_options};
pub use overlay::{CloseRequest, FallbackToken, OverlayPhase, OverlayState};
pub use selection::{OptionList, SelectionSet};
