//! Full-page café detail view.
//!
//! Rendered on top of the directory when the route points at a café.
//! Drink ratings are editable in place but session-local; the overall
//! rating re-averages as they change.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use cuppa_core::{Cafe, Drink};

use crate::components::comments::CafeComments;
use crate::components::icons as ic;
use crate::components::stars::RatingStars;
use crate::models::AppRoute;
use crate::utils::dom;
use crate::utils::format::format_address;

stylance::import_crate_style!(css, "src/components/detail.module.css");

#[component]
pub fn CafeDetail(cafe: Cafe) -> impl IntoView {
    let ratings = RwSignal::new(cafe.ratings);
    let average = Memo::new(move |_| ratings.get().average());
    let address_lines = format_address(&cafe.address);

    let go_back = move |_: ev::MouseEvent| {
        if !dom::history_back() {
            AppRoute::Directory.push();
        }
    };

    view! {
        <main class=css::page>
            <div class=css::card>
                <button type="button" class=css::back on:click=go_back>
                    <Icon icon=ic::BACK />
                    "Back"
                </button>

                <header class=css::header>
                    <div>
                        <h1 class=css::name>{cafe.name.clone()}</h1>
                        <div class=css::location>
                            <Icon icon=ic::LOCATION />
                            {cafe.location.clone()}
                        </div>
                    </div>
                    <div class=css::overall>
                        <div class=css::overallLabel>"Total Avg Rating"</div>
                        <RatingStars rating=average.into() />
                    </div>
                </header>

                <section class=css::heroRow>
                    <div class=css::addressCard>
                        <div class=css::cardLabel>"Address"</div>
                        <div class=css::addressLines>
                            {address_lines
                                .into_iter()
                                .map(|line| view! { <div>{line}</div> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class=css::imageFrame>
                        <img
                            src=cafe.image.clone()
                            alt=format!("{} interior", cafe.name)
                            class=css::image
                        />
                    </div>
                </section>

                <section class=css::drinks>
                    <div class=css::sectionHead>
                        <h3 class=css::sectionTitle>"Drinks"</h3>
                        <div class=css::sectionHint>"Tap stars to rate each drink"</div>
                    </div>
                    <ul class=css::drinkList>
                        {Drink::ALL
                            .iter()
                            .map(|drink| {
                                let drink = *drink;
                                view! {
                                    <li class=css::drinkRow>
                                        <div class=css::drinkInfo>
                                            <span class=css::drinkIcon>
                                                <Icon icon=ic::CUP />
                                            </span>
                                            <span class=css::drinkName>{drink.label()}</span>
                                        </div>
                                        <RatingStars
                                            rating=Signal::derive(move || ratings.get().of(drink))
                                            compact=true
                                            on_rate=Callback::new(move |value: u8| {
                                                ratings.update(|r| *r = r.with(drink, value))
                                            })
                                        />
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                <CafeComments initial=cafe.comments.clone() />
            </div>
        </main>
    }
}
