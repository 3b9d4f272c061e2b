//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::content::travel::MOUNT_PATH;
use crate::pages::landing::LandingPage;
use crate::pages::travel::{TravelHomePage, TravelLayout};
use crate::state::contact::ContactSink;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// StreamLine is served at `/`; the TRVL site lives under [`MOUNT_PATH`].
/// A `ContactSink` already in context wins over the console default.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ContactSink>().is_none() {
        provide_context(ContactSink::default());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/streamline.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <ParentRoute path=StaticSegment(MOUNT_PATH.trim_start_matches('/')) view=TravelLayout>
                    <Route path=StaticSegment("") view=TravelHomePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
