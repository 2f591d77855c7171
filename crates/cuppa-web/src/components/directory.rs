//! The filterable café directory page.
//!
//! Owns the page-level UI state: the three filter selections live in the
//! app context, the modal open flag and selected café live here. The
//! visible grid is recomputed through the pure filter engine on every
//! selection change.

use leptos::prelude::*;
use leptos_icons::Icon;

use cuppa_core::Cafe;

use crate::app::AppContext;
use crate::components::dropdown::Dropdown;
use crate::components::grid::CafeGrid;
use crate::components::icons as ic;
use crate::components::modal::CafeModal;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{APP_NAME, APP_TAGLINE, placeholders};

stylance::import_crate_style!(css, "src/components/directory.module.css");

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let filtered = Memo::new(move |_| ctx.filtered_cafes());

    // Overlay intent: which café, and whether the modal should be up.
    let selected = RwSignal::new(None::<Cafe>);
    let modal_open = RwSignal::new(false);

    let on_select = Callback::new(move |cafe: Cafe| {
        selected.set(Some(cafe));
        modal_open.set(true);
    });
    let on_close = Callback::new(move |_: ()| modal_open.set(false));

    view! {
        <div class=css::page>
            <header class=css::header>
                <a href="#/" class=css::brand>
                    <Icon icon=ic::CUP />
                    {APP_NAME}
                </a>
                <ThemeToggle />
            </header>

            <section class=css::hero>
                <h1 class=css::heading>
                    "Find your " <span class=css::headingAccent>"perfect"</span> " cafe"
                </h1>
                <p class=css::tagline>{APP_TAGLINE}</p>

                <div class=css::filterRow>
                    <Dropdown
                        options=ctx.filters.location_list.get_untracked()
                        value=ctx.filters.locations
                        placeholder=placeholders::LOCATIONS
                    />
                    <Dropdown
                        options=ctx.filters.name_list.get_untracked()
                        value=ctx.filters.names
                        placeholder=placeholders::CAFES
                    />
                    <Dropdown
                        options=ctx.filters.rating_list.get_untracked()
                        value=ctx.filters.ratings
                        placeholder=placeholders::RATINGS
                    />
                </div>
            </section>

            <section class=css::results>
                <CafeGrid cafes=filtered.into() on_select=on_select />
            </section>

            <CafeModal is_open=modal_open.into() cafe=selected.into() on_close=on_close />
        </div>
    }
}
