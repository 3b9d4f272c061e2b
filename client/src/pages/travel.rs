//! TRVL travel site: router shell and its single home page.
//!
//! DESIGN
//! ======
//! The site is mounted under `content::travel::MOUNT_PATH`. `TravelLayout`
//! is the shell (navbar + outlet); the only child route is the site root,
//! rendered by `TravelHomePage`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Outlet;

use crate::components::destinations::Destinations;
use crate::components::travel_navbar::TravelNavbar;
use crate::content::travel::BRAND;

#[component]
pub fn TravelLayout() -> impl IntoView {
    view! {
        <Title text=BRAND/>
        <div class="travel-site">
            <TravelNavbar/>
            <Outlet/>
        </div>
    }
}

#[component]
pub fn TravelHomePage() -> impl IntoView {
    view! {
        <div class="hero-container">
            <h1>"ADVENTURE AWAITS"</h1>
            <p>"What are you waiting for?"</p>
            <div class="hero-btns">
                <a href="#destinations" class="btn btn--outline btn--large">
                    "GET STARTED"
                </a>
                <a href="#destinations" class="btn btn--primary btn--large">
                    "WATCH TRAILER"
                </a>
            </div>
        </div>
        <Destinations/>
    }
}
