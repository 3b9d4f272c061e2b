//! Landing page header: logo, navigation, account actions and the mobile
//! burger menu.

use leptos::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::streamline::{BRAND, NAV_LINKS};
use crate::state::menu::MenuState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let close_menu = move |_| menu.update(MenuState::close);

    view! {
        <header class="header px-container py-md flex justify-between items-center">
            <div class="header__logo">
                <a href="/" class="header__brand text-2xl font-bold">
                    {BRAND}
                </a>
            </div>

            <button
                type="button"
                class="header__menu-icon md:hidden"
                aria-controls="header-nav"
                aria-expanded=move || menu.get().is_open().to_string()
                aria-label=move || menu.get().control_label()
                on:click=move |_| menu.update(MenuState::toggle)
            >
                {move || view! { <IconGlyph icon=menu.get().control_icon() size=28/> }}
            </button>

            <nav id="header-nav" class="header__nav md:flex" class:header__nav--open=move || menu.get().is_open()>
                <ul class="header__nav-list">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.section.href() class="header__nav-link" on:click=close_menu>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="header__actions">
                    <button class="btn btn-secondary header__btn-login" on:click=close_menu>
                        "Connexion"
                    </button>
                    <button class="btn btn-primary header__btn-trial" on:click=close_menu>
                        "Essai Gratuit"
                    </button>
                </div>
            </nav>
        </header>
    }
}
