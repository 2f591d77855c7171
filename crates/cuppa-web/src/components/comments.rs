//! Café comment list and submission form.
//!
//! Validation lives in `cuppa-core`; this component only renders field
//! errors and prepends accepted comments. Submissions are session-local.

use leptos::{ev, prelude::*};

use cuppa_core::{CafeComment, CommentDraft, CommentErrors};

use crate::utils::format;

stylance::import_crate_style!(css, "src/components/comments.module.css");

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{} {}", css::input, css::inputError)
    } else {
        css::input.to_string()
    }
}

fn textarea_class(has_error: bool) -> String {
    format!("{} {}", input_class(has_error), css::textarea)
}

fn error_text(message: Option<String>) -> String {
    // Non-breaking space keeps the row height stable when there is no
    // error to show.
    message.unwrap_or_else(|| "\u{a0}".to_string())
}

#[component]
pub fn CafeComments(initial: Vec<CafeComment>) -> impl IntoView {
    let comments = RwSignal::new(initial);
    let draft = RwSignal::new(CommentDraft::default());
    let errors = RwSignal::new(CommentErrors::default());

    let submit = move |_: ev::MouseEvent| {
        let current = draft.get_untracked();
        let validation = current.validate();
        if !validation.is_clean() {
            errors.set(validation);
            return;
        }

        let id = comments.with_untracked(|list| list.iter().map(|c| c.id).max().unwrap_or(0)) + 1;
        let comment = CafeComment {
            id,
            author: current.name.trim().to_string(),
            title: current.title.trim().to_string(),
            content: current.content.trim().to_string(),
            date: format::comment_timestamp(),
        };
        comments.update(|list| list.insert(0, comment));
        draft.set(CommentDraft::default());
        errors.set(CommentErrors::default());
    };

    view! {
        <div>
            <section class=css::section>
                <div class=css::sectionHead>
                    <h3 class=css::sectionTitle>"Comments"</h3>
                    <div class=css::count>{move || comments.with(|list| list.len())} " total"</div>
                </div>

                <div class=css::list>
                    <For
                        each=move || comments.get()
                        key=|comment| comment.id
                        children=move |comment: CafeComment| {
                            view! {
                                <div class=css::comment>
                                    <div class=css::commentHead>
                                        <strong class=css::author>{comment.author.clone()}</strong>
                                        <div class=css::commentTitle>{comment.title.clone()}</div>
                                    </div>
                                    <div class=css::commentBody>{comment.content.clone()}</div>
                                    <div class=css::commentDate>"[" {comment.date.clone()} "]"</div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <section class=css::section>
                <h3 class=css::sectionTitle>"Leave a Comment"</h3>

                <div class=css::form>
                    <div class=css::fieldColumn>
                        <div class=css::field>
                            <p class=css::error>
                                {move || error_text(errors.with(|e| e.name.clone()))}
                            </p>
                            <input
                                class=move || input_class(errors.with(|e| e.name.is_some()))
                                placeholder="Your name"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.name = event_target_value(&ev))
                                }
                            />
                        </div>

                        <div class=css::field>
                            <p class=css::error>
                                {move || error_text(errors.with(|e| e.title.clone()))}
                            </p>
                            <input
                                class=move || input_class(errors.with(|e| e.title.is_some()))
                                placeholder="Comment title"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.title = event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>

                    <div class=css::contentColumn>
                        <p class=css::error>
                            {move || error_text(errors.with(|e| e.content.clone()))}
                        </p>
                        <textarea
                            class=move || textarea_class(errors.with(|e| e.content.is_some()))
                            placeholder="Your comment"
                            aria-label="Leave a comment"
                            prop:value=move || draft.with(|d| d.content.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.content = event_target_value(&ev))
                            }
                        ></textarea>
                    </div>

                    <button type="button" class=css::submit on:click=submit>
                        "Submit"
                    </button>
                </div>
            </section>
        </div>
    }
}
