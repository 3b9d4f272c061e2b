//! Landing page footer: brand, link columns and social links.

use leptos::prelude::*;

use crate::components::card_list::CardList;
use crate::components::icon::IconGlyph;
use crate::content::streamline::{
    BRAND, FOOTER_COLUMNS, FooterColumn, SLOGAN, SOCIAL_LINKS, SocialLink, copyright_notice,
};

#[cfg(all(test, feature = "ssr"))]
#[path = "site_footer_test.rs"]
mod tests;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = time::OffsetDateTime::now_utc().year();

    view! {
        <footer class="footer py-section px-container bg-light">
            <div class="footer__content">
                <div class="footer__column footer__column--info">
                    <h3 class="footer__logo">{BRAND}</h3>
                    <p class="footer__slogan">{SLOGAN}</p>
                    <p class="footer__copyright">{copyright_notice(year)}</p>
                </div>
                <CardList records=FOOTER_COLUMNS.as_slice() class="footer__columns" render=footer_column/>
            </div>
        </footer>
    }
}

fn footer_column(column: &'static FooterColumn) -> AnyView {
    view! {
        <div class="footer__column">
            <h4 class="footer__heading">{column.heading}</h4>
            <ul class="footer__list">
                {column
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.target.href() class="footer__link">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {column
                .shows_social
                .then(|| {
                    view! {
                        <CardList records=SOCIAL_LINKS.as_slice() class="footer__social-icons" render=social_link/>
                    }
                })}
        </div>
    }
    .into_any()
}

fn social_link(link: &'static SocialLink) -> AnyView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="footer__social-link"
            aria-label=link.label
        >
            <IconGlyph icon=link.icon size=24/>
        </a>
    }
    .into_any()
}
