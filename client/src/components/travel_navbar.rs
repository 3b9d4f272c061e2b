//! TRVL navbar. Same burger contract as the landing header.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::travel::{BRAND, MOUNT_PATH, TRAVEL_NAV_LINKS};
use crate::state::menu::MenuState;
use crate::util::icon::Icon;

#[cfg(all(test, feature = "ssr"))]
#[path = "travel_navbar_test.rs"]
mod tests;

#[component]
pub fn TravelNavbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let close_menu = move |_| menu.update(MenuState::close);

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <a href=MOUNT_PATH class="navbar-logo" on:click=close_menu>
                    {BRAND}
                    <IconGlyph icon=Icon::Compass size=28/>
                </a>
                <button
                    type="button"
                    class="menu-icon"
                    aria-label=move || menu.get().control_label()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || view! { <IconGlyph icon=menu.get().control_icon() size=28/> }}
                </button>
                <ul class="nav-menu" class:active=move || menu.get().is_open()>
                    {TRAVEL_NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li class="nav-item">
                                    <a href=link.target.href() class="nav-links" on:click=close_menu>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
