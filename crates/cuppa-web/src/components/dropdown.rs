//! Multi-select filter dropdown.
//!
//! One instance per filterable attribute. The option list is fixed for the
//! life of the instance; the selection is owned by the host view and
//! mutated only through [`OptionList::toggle`].

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use cuppa_core::{OptionList, SelectionSet};

use crate::components::icons as ic;
use crate::utils::dom::{self, ListenerHandle};

stylance::import_crate_style!(css, "src/components/dropdown.module.css");

/// Multi-select dropdown over an [`OptionList`].
///
/// # Props
/// - `options`: the attribute's options, aggregate entry first
/// - `value`: the selection signal owned by the host view
/// - `placeholder`: button text when nothing is selected
#[component]
pub fn Dropdown(
    options: OptionList,
    value: RwSignal<SelectionSet>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let outside_click = StoredValue::new_local(None::<ListenerHandle>);

    // Close on click outside. The document listener exists only while the
    // menu is open.
    Effect::new(move |_| {
        if is_open.get() {
            if outside_click.with_value(|slot| slot.is_none()) {
                let handle = dom::listen_document("mousedown", move |ev| {
                    let clicked_inside = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                        .zip(root_ref.get_untracked())
                        .map(|(node, root)| root.contains(Some(&node)))
                        .unwrap_or(false);
                    if !clicked_inside {
                        set_is_open.set(false);
                    }
                });
                outside_click.set_value(handle);
            }
        } else {
            outside_click.set_value(None);
        }
    });
    on_cleanup(move || outside_click.set_value(None));

    let label = options.label().to_string();
    let button_text = {
        let options = options.clone();
        move || value.with(|current| options.summary(current, &placeholder))
    };
    let caret_class = move || {
        if is_open.get() {
            format!("{} {}", css::caret, css::caretOpen)
        } else {
            css::caret.to_string()
        }
    };

    let rows = options.options().to_vec();
    let toggle_source = options;

    view! {
        <div node_ref=root_ref class=css::dropdown>
            <div class=css::label>{label}</div>

            <button
                type="button"
                class=css::button
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class=css::buttonText>{button_text}</span>
                <span class=caret_class>
                    <Icon icon=ic::CARET_DOWN />
                </span>
            </button>

            <Show when=move || is_open.get()>
                <div class=css::menu>
                    <ul class=css::options>
                        <For
                            each={
                                let rows = rows.clone();
                                move || rows.clone()
                            }
                            key=|option| option.clone()
                            children={
                                let toggle_source = toggle_source.clone();
                                move |option: String| {
                                    let toggle_source = toggle_source.clone();
                                    let click_option = option.clone();
                                    let check_option = option.clone();
                                    let row_class = move || {
                                        if value.with(|c| c.contains(&check_option)) {
                                            format!("{} {}", css::option, css::optionSelected)
                                        } else {
                                            css::option.to_string()
                                        }
                                    };
                                    view! {
                                        <li
                                            class=row_class
                                            on:click=move |_| {
                                                let next = toggle_source
                                                    .toggle(&value.get_untracked(), &click_option);
                                                value.set(next);
                                            }
                                        >
                                            <span class=css::optionText>{option.clone()}</span>
                                            <span class=css::check aria-hidden="true">
                                                <Icon icon=ic::CHECK />
                                            </span>
                                        </li>
                                    }
                                }
                            }
                        />
                    </ul>
                </div>
            </Show>
        </div>
    }
}
