//! Hover-revealed control that inserts a step into a gap between tabs.

use leptos::prelude::*;

use crate::components::icon::PlusIcon;

/// Insert button shown in a hovered gap. Mouse-down is default-prevented so
/// the currently focused tab keeps focus.
#[component]
pub fn StepInsertionZone(on_insert: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="step-insertion-zone"
            type="button"
            title="Add step"
            aria-label="Add step"
            on:mousedown=move |ev: leptos::ev::MouseEvent| ev.prevent_default()
            on:click=move |_| on_insert.run(())
        >
            <PlusIcon/>
        </button>
    }
}
