//! Café result grid for the directory page.

use leptos::prelude::*;
use leptos_icons::Icon;

use cuppa_core::Cafe;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/grid.module.css");

/// Grid of cafés passing the current filters. Clicking a card reports the
/// café to the host, which opens the detail overlay.
#[component]
pub fn CafeGrid(cafes: Signal<Vec<Cafe>>, on_select: Callback<Cafe>) -> impl IntoView {
    view! {
        <div class=css::grid>
            <For
                each=move || cafes.get()
                key=|cafe| cafe.id
                children=move |cafe: Cafe| {
                    view! { <CafeCard cafe=cafe on_select=on_select /> }
                }
            />
        </div>
        <Show when=move || cafes.with(|list| list.is_empty())>
            <p class=css::empty>"No cafes match the current filters."</p>
        </Show>
    }
}

#[component]
fn CafeCard(cafe: Cafe, on_select: Callback<Cafe>) -> impl IntoView {
    let bucket = cafe.rating_bucket();
    let selected = cafe.clone();

    view! {
        <button
            type="button"
            class=css::card
            on:click=move |_| on_select.run(selected.clone())
        >
            <h2 class=css::cardName>{cafe.name.clone()}</h2>
            <p class=css::cardMeta>
                <span class=css::cardIcon><Icon icon=ic::LOCATION /></span>
                {cafe.location.clone()}
            </p>
            <p class=css::cardMeta>"Rating: " {bucket}</p>
        </button>
    }
}
