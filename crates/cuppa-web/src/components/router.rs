//! Application router component.
//!
//! Handles URL-based routing with hash history so the app works from any
//! static host. Uses native `hashchange` events; the browser back/forward
//! buttons work automatically.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: navigation state is derived
//!   from `#/...`
//! - **The directory never re-renders on navigation**: it is always
//!   mounted, so filter state survives visiting a café page
//! - **The detail view is conditional**: shown on top only when the URL
//!   points at a café

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::detail::CafeDetail;
use crate::components::directory::DirectoryPage;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `#/` → café directory
/// - `#/cafes/{slug}` → café detail page (directory stays mounted below)
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from the current URL hash.
    let route = RwSignal::new(AppRoute::current());

    // Set up the hashchange event listener (runs once on mount).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app.
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        // The directory is always rendered (stable across route changes).
        <DirectoryPage />

        // The detail page is shown only for café routes.
        <Show when=move || route.get().is_detail()>
            <DetailView route=route_memo />
        </Show>
    }
}

/// Full-page detail view rendered on top of the directory.
#[component]
fn DetailView(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let cafe = Memo::new(move |_| {
        route
            .with(|r| r.slug().map(str::to_string))
            .and_then(|slug| ctx.cafe_by_slug(&slug))
    });

    view! {
        <div class=css::pageOverlay>
            {move || match cafe.get() {
                Some(cafe) => view! { <CafeDetail cafe=cafe /> }.into_any(),
                None => {
                    view! {
                        <div class=css::missing>
                            <p>"Cafe not found."</p>
                            <a href="#/">"Back to the directory"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
