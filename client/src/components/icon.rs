//! Inline SVG icon.

use leptos::prelude::*;

use crate::util::icon::Icon;

/// Render `icon` as an inline stroke SVG sized `size`×`size` CSS pixels.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = 24)] size: u32) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            class=format!("icon icon--{}", icon.name())
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon.svg_body()
        ></svg>
    }
}
