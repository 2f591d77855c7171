//! Root application module.
//!
//! Contains the main App component and the AppContext definition,
//! following Leptos conventions: state lives in signal bundles owned by
//! the context and provided at the root of the component tree.

use leptos::prelude::*;

use cuppa_core::{
    Cafe, CafeFilters, OptionList, SelectionSet, location_options, name_options, rating_options,
};

use crate::components::AppRouter;
use crate::config::{self, THEME_STORAGE_KEY};
use crate::models::Theme;
use crate::utils::dom;

// ============================================================================
// FilterState
// ============================================================================

/// Filter state for the directory page: one option list and one selection
/// set per filterable attribute.
///
/// Selections are seeded with every real option at mount ("everything
/// selected") and live only for the session; they are never persisted.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct FilterState {
    /// Location dropdown options (aggregate first).
    pub location_list: RwSignal<OptionList>,
    /// Café-name dropdown options.
    pub name_list: RwSignal<OptionList>,
    /// Rating-bucket dropdown options.
    pub rating_list: RwSignal<OptionList>,
    /// Selected locations.
    pub locations: RwSignal<SelectionSet>,
    /// Selected café names.
    pub names: RwSignal<SelectionSet>,
    /// Selected rating buckets.
    pub ratings: RwSignal<SelectionSet>,
}

impl FilterState {
    /// Build the option lists from the catalog and seed every selection
    /// with all of its real options.
    pub fn new(catalog: &[Cafe]) -> Self {
        let location_list = location_options(catalog);
        let name_list = name_options(catalog);
        let rating_list = rating_options();
        Self {
            locations: RwSignal::new(location_list.seeded()),
            names: RwSignal::new(name_list.seeded()),
            ratings: RwSignal::new(rating_list.seeded()),
            location_list: RwSignal::new(location_list),
            name_list: RwSignal::new(name_list),
            rating_list: RwSignal::new(rating_list),
        }
    }

    /// Snapshot the three selections for the filter engine. Reactive:
    /// reading this inside a memo tracks all three signals.
    pub fn current(&self) -> CafeFilters {
        CafeFilters {
            locations: self.locations.get(),
            names: self.names.get(),
            ratings: self.ratings.get(),
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component via `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The café catalog, loaded once at startup and read-only thereafter.
    pub catalog: RwSignal<Vec<Cafe>>,
    /// Directory filter state.
    pub filters: FilterState,
    /// Current color theme.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    pub fn new() -> Self {
        let catalog = config::load_catalog();
        let filters = FilterState::new(&catalog);
        let theme = dom::storage_get(THEME_STORAGE_KEY)
            .and_then(|stored| Theme::parse(&stored))
            .unwrap_or_default();
        Self {
            catalog: RwSignal::new(catalog),
            filters,
            theme: RwSignal::new(theme),
        }
    }

    /// The cafés passing the current filters, in catalog order.
    pub fn filtered_cafes(&self) -> Vec<Cafe> {
        let filters = self.filters.current();
        self.catalog
            .with(|catalog| filters.apply(catalog).into_iter().cloned().collect())
    }

    /// Look up a café by its route slug.
    pub fn cafe_by_slug(&self, slug: &str) -> Option<Cafe> {
        self.catalog
            .with(|catalog| catalog.iter().find(|cafe| cafe.slug == slug).cloned())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    font-family: inherit;
                ">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
