//! Dashed line drawn between adjacent tabs.

use leptos::prelude::*;

#[component]
pub fn StepConnector() -> impl IntoView {
    view! {
        <svg class="step-connector" width="28" height="12" viewBox="0 0 28 12" fill="none" aria-hidden="true">
            <line x1="2" y1="6" x2="26" y2="6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-dasharray="3 4"/>
        </svg>
    }
}
