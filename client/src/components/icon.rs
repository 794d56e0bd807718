//! Icon primitives: image icons by URL plus the inline plus/ellipsis glyphs.

use leptos::prelude::*;

/// Icon rendered from a URL. Renders nothing when `src` is `None`.
#[component]
pub fn Icon(#[prop(into)] src: Option<String>, #[prop(optional)] size: Option<u32>, #[prop(into, optional)] class: String) -> impl IntoView {
    let size = size.unwrap_or(16);
    src.map(|src| {
        view! { <img class=format!("icon {class}") src=src width=size.to_string() height=size.to_string() alt="" draggable="false"/> }
    })
}

#[component]
pub fn PlusIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--plus" width="16" height="16" viewBox="0 0 16 16" fill="none" aria-hidden="true">
            <path d="M8 3v10M3 8h10" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>
        </svg>
    }
}

#[component]
pub fn EllipsisIcon() -> impl IntoView {
    view! {
        <svg class="icon icon--ellipsis" width="16" height="16" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
            <circle cx="3.5" cy="8" r="1.25"/>
            <circle cx="8" cy="8" r="1.25"/>
            <circle cx="12.5" cy="8" r="1.25"/>
        </svg>
    }
}
