//! Hero section: headline, pitch and primary call to action.

use leptos::prelude::*;

use crate::content::SectionId;
use crate::content::streamline::BRAND;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero py-section px-container text-center bg-light">
            <h1 class="hero__title">
                "Automatisez vos tâches, gérez vos projets."
                <br/>
                "Tout en un, avec "
                <span class="text-primary">{BRAND}</span>
                "."
            </h1>
            <p class="hero__description">
                "Transformez la façon dont votre équipe collabore. De la gestion de projet à l'automatisation des workflows, StreamLine vous offre les outils pour une efficacité inégalée."
            </p>
            <div class="hero__cta">
                <a href=SectionId::Features.href() class="btn btn-primary">
                    "Découvrir StreamLine"
                </a>
            </div>
        </section>
    }
}
