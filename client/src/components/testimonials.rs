//! Customer testimonials.

use leptos::prelude::*;

use crate::components::card_list::CardList;
use crate::content::SectionId;
use crate::content::streamline::{TESTIMONIALS, Testimonial};

#[cfg(all(test, feature = "ssr"))]
#[path = "testimonials_test.rs"]
mod tests;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id=SectionId::Testimonials.id() class="testimonials py-section px-container bg-light">
            <h2 class="testimonials__main-title text-center">
                "Ils nous font confiance et témoignent de leur succès."
            </h2>
            <p class="testimonials__main-description text-center">
                "Découvrez ce que nos clients disent de StreamLine et de son impact sur leur productivité."
            </p>
            <CardList
                records=TESTIMONIALS.as_slice()
                class="testimonials__grid flex flex-wrap justify-center"
                render=testimonial_card
            />
        </section>
    }
}

fn testimonial_card(testimonial: &'static Testimonial) -> AnyView {
    view! {
        <figure class="testimonial-card">
            <blockquote class="testimonial-card__quote">"“" {testimonial.quote} "”"</blockquote>
            <figcaption>
                <p class="testimonial-card__author">"— " {testimonial.author}</p>
                <p class="testimonial-card__position">{testimonial.position}</p>
            </figcaption>
        </figure>
    }
    .into_any()
}
