//! Keyed card list shared by the features, pricing, testimonials, footer and
//! destinations sections.
//!
//! DESIGN
//! ======
//! Renders one card per record, in input order, through the caller's
//! template. Records are `'static` display data so the list never changes
//! after the first render; the key lands on each card as `data-key` and is
//! checked for uniqueness in debug builds.

use leptos::prelude::*;

use crate::util::keys::{Keyed, ensure_unique_keys};

#[cfg(all(test, feature = "ssr"))]
#[path = "card_list_test.rs"]
mod tests;

#[component]
pub fn CardList<T, F>(
    records: &'static [T],
    #[prop(into)] class: String,
    render: F,
) -> impl IntoView
where
    T: Keyed + Sync + 'static,
    F: Fn(&'static T) -> AnyView + 'static,
{
    debug_assert!(ensure_unique_keys(records).is_ok(), "card list keys must be unique");

    view! {
        <div class=class>
            {records
                .iter()
                .map(|record| {
                    view! { <div class="card-list__item" data-key=record.key()>{render(record)}</div> }
                })
                .collect_view()}
        </div>
    }
}
