//! Closing call to action before the footer.

use leptos::prelude::*;

use crate::content::SectionId;

#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="final-cta py-section px-container text-center bg-light">
            <h2 class="final-cta__title">"Prêt à transformer votre productivité ?"</h2>
            <p class="final-cta__description">
                "Rejoignez les milliers d'équipes qui simplifient déjà leurs workflows avec StreamLine."
            </p>
            <div class="final-cta__button-wrapper">
                <a href=SectionId::Pricing.href() class="btn btn-primary">
                    "Commencer l'essai gratuit"
                </a>
            </div>
        </section>
    }
}
