//! Light/dark theme toggle.
//!
//! The choice is persisted to localStorage; first-time visitors inherit
//! the system color scheme.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::THEME_STORAGE_KEY;
use crate::models::Theme;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/theme_toggle.module.css");

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = ctx.theme;
    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");

    // Adopt the system preference when the user has never chosen a theme.
    Effect::new(move |_| {
        if dom::storage_get(THEME_STORAGE_KEY).is_none() && prefers_dark.get() {
            theme.set(Theme::Dark);
        }
    });

    // Apply the theme to the document and persist the choice.
    Effect::new(move |_| {
        let current = theme.get();
        dom::set_root_theme_class(current.is_dark());
        dom::storage_set(THEME_STORAGE_KEY, current.as_str());
    });

    view! {
        <button
            type="button"
            class=css::toggle
            aria-label="Toggle theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            <span class=css::toggleIcon>
                {move || {
                    if theme.get().is_dark() {
                        view! { <Icon icon=ic::SUN /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MOON /> }.into_any()
                    }
                }}
            </span>
            <span>{move || if theme.get().is_dark() { "Light mode" } else { "Dark mode" }}</span>
        </button>
    }
}
