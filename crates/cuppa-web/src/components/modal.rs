//! Café detail overlay.
//!
//! Drives the [`OverlayState`] machine from `cuppa-core`. The component
//! owns the DOM side of the lifecycle: the portal target, the enter tick,
//! the exit-transition listener, the fallback close timer, the Escape
//! handler, and the body-scroll lock. Every transition decision belongs to
//! the machine; whichever of transition-end and fallback timer fires
//! second finds the state already `Closed` and does nothing.

use gloo_timers::callback::Timeout;
use leptos::portal::Portal;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use cuppa_core::{Cafe, CloseRequest, OverlayPhase, OverlayState};

use crate::components::icons as ic;
use crate::config::{ENTER_TICK_MS, FALLBACK_MARGIN_MS, OVERLAY_HOST_ID, TRANSITION_MS};
use crate::models::AppRoute;
use crate::utils::dom::{self, ListenerHandle};

stylance::import_crate_style!(css, "src/components/modal.module.css");

/// Transient overlay showing one café's summary.
///
/// # Props
/// - `is_open`: the host's intent; raising it opens the overlay on `cafe`
/// - `cafe`: the café to show, read at the moment of opening
/// - `on_close`: notified exactly once per dismissal, when the close begins
#[component]
pub fn CafeModal(
    is_open: Signal<bool>,
    cafe: Signal<Option<Cafe>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let machine = RwSignal::new(OverlayState::<Cafe>::new());
    let fallback = StoredValue::new_local(None::<Timeout>);
    let key_listener = StoredValue::new_local(None::<ListenerHandle>);
    let saved_overflow = StoredValue::new_local(None::<String>);
    // The render target resolves once, before the first open.
    let host = StoredValue::new_local(dom::overlay_host(OVERLAY_HOST_ID));

    // Escape, backdrop clicks, and the close button all funnel through
    // here; the machine makes repeated requests harmless.
    let request_close = Callback::new(move |_: ()| {
        let Some(action) = machine.try_update(|m| m.request_close()) else {
            return;
        };
        if let CloseRequest::Begun { fallback: token } = action {
            on_close.run(());
            let handle = Timeout::new(TRANSITION_MS + FALLBACK_MARGIN_MS, move || {
                // Stale fires (reopened, already closed, disposed) are
                // no-ops; the machine checks the token and its own phase.
                let _ = machine.try_update(|m| m.fallback_elapsed(token));
            });
            fallback.set_value(Some(handle));
        }
    });

    // Open path: the host raised `is_open`.
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        let Some(subject) = cafe.get_untracked() else {
            return;
        };
        // Opening while a close is pending cancels its timer.
        fallback.set_value(None);
        machine.update(|m| m.open(subject));
        // One tick between mount and the visible class, so the enter
        // transition is not skipped.
        Timeout::new(ENTER_TICK_MS, move || {
            let _ = machine.try_update(|m| m.mark_visible());
        })
        .forget();
    });

    // Escape dismisses the overlay. The document listener is bracketed by
    // the not-closed phases, so nothing leaks while the overlay is down.
    Effect::new(move |_| {
        let rendered = machine.with(|m| m.should_render());
        if rendered {
            if key_listener.with_value(|slot| slot.is_none()) {
                let handle = dom::listen_document("keydown", move |ev| {
                    if let Some(key_ev) = ev.dyn_ref::<web_sys::KeyboardEvent>()
                        && key_ev.key() == "Escape"
                    {
                        request_close.run(());
                    }
                });
                key_listener.set_value(handle);
            }
        } else {
            key_listener.set_value(None);
        }
    });

    // Page scroll is suppressed while the overlay is up; the previous
    // overflow value is restored exactly once it fully closes.
    Effect::new(move |_| {
        let rendered = machine.with(|m| m.should_render());
        if rendered {
            if saved_overflow.with_value(|slot| slot.is_none()) {
                saved_overflow.set_value(dom::lock_body_scroll());
            }
        } else {
            let previous = saved_overflow.with_value(|slot| slot.clone());
            if let Some(previous) = previous {
                saved_overflow.set_value(None);
                dom::restore_body_scroll(&previous);
            }
        }
    });

    // Teardown cancels the pending timer and listener so nothing fires
    // against a disposed controller.
    on_cleanup(move || {
        fallback.set_value(None);
        key_listener.set_value(None);
        let previous = saved_overflow.with_value(|slot| slot.clone());
        if let Some(previous) = previous {
            saved_overflow.set_value(None);
            dom::restore_body_scroll(&previous);
        }
    });

    // The backdrop's own exit transition finishing completes the close
    // early and cancels the fallback timer (first-wins).
    let on_backdrop_transition_end = move |ev: ev::TransitionEvent| {
        let is_backdrop = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if !is_backdrop {
            return;
        }
        if machine.try_update(|m| m.transition_ended()).unwrap_or(false) {
            fallback.set_value(None);
        }
    };

    let visible = move || machine.with(|m| m.phase() == OverlayPhase::Visible);
    let backdrop_class = move || {
        if visible() {
            format!("{} {}", css::backdrop, css::backdropOpen)
        } else {
            css::backdrop.to_string()
        }
    };
    let panel_class = move || {
        if visible() {
            format!("{} {}", css::panel, css::panelOpen)
        } else {
            css::panel.to_string()
        }
    };

    let title = move || {
        machine.with(|m| {
            m.subject()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Cafe Details".to_string())
        })
    };
    let subtitle = move || {
        machine.with(|m| {
            m.subject()
                .map(|c| c.location.clone())
                .unwrap_or_else(|| "No cafe selected".to_string())
        })
    };

    view! {
        <Show when=move || machine.with(|m| m.should_render())>
            <Portal mount=host.get_value().expect("overlay host must resolve before open")>
                <div
                    class=css::overlay
                    role="dialog"
                    aria-modal="true"
                    on:click=move |_| request_close.run(())
                >
                    <div class=backdrop_class on:transitionend=on_backdrop_transition_end></div>

                    <div class=panel_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                        <div class=css::panelHead>
                            <div>
                                <h2 class=css::title>{title}</h2>
                                <p class=css::subtitle>{subtitle}</p>
                            </div>
                            <button
                                type="button"
                                class=css::closeButton
                                aria-label="Close"
                                on:click=move |_| request_close.run(())
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>

                        <div class=css::panelBody>
                            {move || {
                                let subject = machine.with(|m| m.subject().cloned());
                                match subject {
                                    Some(cafe) => {
                                        let detail_hash = AppRoute::Cafe {
                                            slug: cafe.slug.clone(),
                                        }
                                        .to_hash();
                                        view! {
                                            <div class=css::infoGrid>
                                                <div class=css::infoCard>
                                                    <div class=css::infoLabel>"Location"</div>
                                                    <div class=css::infoValue>{cafe.location.clone()}</div>
                                                </div>
                                                <div class=css::infoCard>
                                                    <div class=css::infoLabel>"Overall rating"</div>
                                                    <div class=css::infoValue>
                                                        {format!("{} / 5", cafe.ratings.overall_stars())}
                                                    </div>
                                                </div>
                                            </div>
                                            <a
                                                href=detail_hash
                                                class=css::detailLink
                                                on:click=move |ev: ev::MouseEvent| {
                                                    ev.stop_propagation();
                                                    request_close.run(());
                                                }
                                            >
                                                "View Full Page \u{2192}"
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! { <p class=css::emptyText>"No cafe selected."</p> }
                                            .into_any()
                                    }
                                }
                            }}
                        </div>
                    </div>
                </div>
            </Portal>
        </Show>
    }
}
