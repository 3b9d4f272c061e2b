//! TRVL destination cards.

use leptos::prelude::*;

use crate::components::card_list::CardList;
use crate::content::travel::{DESTINATIONS, Destination};

#[cfg(all(test, feature = "ssr"))]
#[path = "destinations_test.rs"]
mod tests;

#[component]
pub fn Destinations() -> impl IntoView {
    view! {
        <section id="destinations" class="cards">
            <h1>"Check out these EPIC Destinations!"</h1>
            <div class="cards__container">
                <CardList records=DESTINATIONS.as_slice() class="cards__items" render=destination_card/>
            </div>
        </section>
    }
}

fn destination_card(destination: &'static Destination) -> AnyView {
    view! {
        <figure class="cards__item__pic-wrap" data-category=destination.label>
            <img class="cards__item__img" src=destination.image alt=destination.text/>
            <figcaption class="cards__item__info">
                <h5 class="cards__item__text">{destination.text}</h5>
            </figcaption>
        </figure>
    }
    .into_any()
}
