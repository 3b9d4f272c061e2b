//! Feature grid.

use leptos::prelude::*;

use crate::components::card_list::CardList;
use crate::components::icon::IconGlyph;
use crate::content::SectionId;
use crate::content::streamline::{FEATURES, Feature};

#[cfg(all(test, feature = "ssr"))]
#[path = "features_test.rs"]
mod tests;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=SectionId::Features.id() class="features py-section px-container">
            <h2 class="features__main-title text-center">"Une plateforme conçue pour votre productivité."</h2>
            <p class="features__main-description text-center">
                "StreamLine offre une suite complète d'outils pour transformer votre manière de travailler."
            </p>
            <CardList records=FEATURES.as_slice() class="features__grid" render=feature_card/>
        </section>
    }
}

fn feature_card(feature: &'static Feature) -> AnyView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon">
                <IconGlyph icon=feature.icon size=40/>
            </div>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
    .into_any()
}
