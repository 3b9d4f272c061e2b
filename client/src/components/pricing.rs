//! Pricing plans. The featured plan gets the highlighted card and primary
//! button variants.

use leptos::prelude::*;

use crate::components::card_list::CardList;
use crate::components::icon::IconGlyph;
use crate::content::SectionId;
use crate::content::streamline::{CURRENCY, PRICING_PLANS, PricingPlan};
use crate::util::icon::Icon;

#[cfg(all(test, feature = "ssr"))]
#[path = "pricing_test.rs"]
mod tests;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id=SectionId::Pricing.id() class="pricing py-section px-container">
            <h2 class="pricing__main-title text-center">
                "Un plan pour chaque équipe,"
                <br/>
                "quelle que soit votre taille."
            </h2>
            <p class="pricing__main-description text-center">
                "Découvrez nos options tarifaires flexibles et trouvez le plan qui correspond le mieux à vos besoins."
            </p>
            <CardList
                records=PRICING_PLANS.as_slice()
                class="pricing__grid flex flex-wrap justify-center"
                render=pricing_card
            />
        </section>
    }
}

/// Button variant for a plan's call to action.
pub fn cta_class(plan: &PricingPlan) -> &'static str {
    if plan.is_featured { "btn btn-primary" } else { "btn btn-secondary" }
}

fn pricing_card(plan: &'static PricingPlan) -> AnyView {
    view! {
        <div class="pricing-card" class:pricing-card--featured=plan.is_featured>
            <h3 class="pricing-card__name">{plan.name}</h3>
            <div class="pricing-card__price-wrapper">
                <span class="pricing-card__currency">{CURRENCY}</span>
                <span class="pricing-card__price">{plan.price}</span>
                <span class="pricing-card__frequency">{plan.frequency}</span>
            </div>
            <p class="pricing-card__description">{plan.description}</p>
            <ul class="pricing-card__features-list">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="pricing-card__feature-item">
                                <IconGlyph icon=Icon::Check size=18/>
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class=cta_class(plan)>{plan.cta_label()}</button>
        </div>
    }
    .into_any()
}
