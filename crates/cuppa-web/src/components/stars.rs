//! Star-rating display, optionally interactive.

use leptos::prelude::*;

use cuppa_core::STAR_SCALE;

stylance::import_crate_style!(css, "src/components/stars.module.css");

/// A row of five stars filled up to `rating`.
///
/// With `on_rate` set the stars become clickable and report the clicked
/// value; otherwise they are inert display.
#[component]
pub fn RatingStars(
    rating: Signal<u8>,
    #[prop(optional)] compact: bool,
    #[prop(optional, into)] on_rate: Option<Callback<u8>>,
) -> impl IntoView {
    let interactive = on_rate.is_some();

    view! {
        <div class=css::row>
            {(1..=STAR_SCALE)
                .map(|value| {
                    let filled = move || rating.get() >= value;
                    let star_class = move || {
                        let mut classes = vec![css::star.to_string()];
                        if compact {
                            classes.push(css::starCompact.to_string());
                        }
                        if interactive {
                            classes.push(css::starInteractive.to_string());
                        }
                        if filled() {
                            classes.push(css::starFilled.to_string());
                        }
                        classes.join(" ")
                    };
                    view! {
                        <svg
                            class=star_class
                            viewBox="0 0 24 24"
                            fill=move || if filled() { "currentColor" } else { "none" }
                            stroke="currentColor"
                            stroke-width="1"
                            role=if interactive { Some("button") } else { None }
                            aria-hidden="true"
                            on:click=move |_| {
                                if let Some(on_rate) = on_rate {
                                    on_rate.run(value);
                                }
                            }
                        >
                            <path d="M12 .587l3.668 7.431L24 9.748l-6 5.847 1.417 8.268L12 19.771 4.583 23.863 6 15.595 0 9.748l8.332-1.73z" />
                        </svg>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
