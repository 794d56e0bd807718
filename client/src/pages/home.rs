//! Landing page hosting the step navigation bar.

use leptos::prelude::*;

use crate::components::step_navigation::StepNavigation;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <StepNavigation/>
        </section>
    }
}
