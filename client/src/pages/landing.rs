//! StreamLine landing page.
//!
//! Fixed section order: header, then hero, features, testimonials, pricing,
//! contact and the closing call to action inside `<main>`, then footer.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact::Contact;
use crate::components::features::Features;
use crate::components::final_cta::FinalCta;
use crate::components::hero::Hero;
use crate::components::pricing::Pricing;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::testimonials::Testimonials;
use crate::content::streamline::BRAND;

#[cfg(all(test, feature = "ssr"))]
#[path = "landing_test.rs"]
mod tests;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=BRAND/>
        <SiteHeader/>
        <main>
            <Hero/>
            <Features/>
            <Testimonials/>
            <Pricing/>
            <Contact/>
            <FinalCta/>
        </main>
        <SiteFooter/>
    }
}
