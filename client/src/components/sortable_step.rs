//! Sortable wrapper that binds a [`StepButton`] to the enclosing drag list.
//!
//! The wrapper element carries `data-sortable-id`, which is what the drag
//! list measures when a drag activates.

#[cfg(test)]
#[path = "sortable_step_test.rs"]
mod sortable_step_test;

use leptos::prelude::*;
use sortable::consts::{DRAGGING_OPACITY, DRAGGING_Z_INDEX};

use crate::components::step_button::StepButton;
use crate::state::steps::{MenuPosition, Step};
use crate::util::drag::use_sortable;

/// Inline style for a sortable item given its drag transform and state.
pub fn sortable_style(transform: sortable::strategy::Transform, is_dragging: bool) -> String {
    let mut style = String::new();
    if !transform.is_identity() {
        style.push_str(&format!("transform: {};", transform.to_css()));
    }
    if is_dragging {
        style.push_str(&format!(" opacity: {DRAGGING_OPACITY}; z-index: {DRAGGING_Z_INDEX}; position: relative;"));
    }
    style
}

#[component]
pub fn SortableStep(
    step: Step,
    #[prop(into)] is_active: Signal<bool>,
    on_click: Callback<()>,
    on_options_click: Callback<MenuPosition>,
) -> impl IntoView {
    let item = use_sortable(step.id.clone());
    let sortable_id = step.id.clone();
    let style = move || sortable_style(item.transform.get(), item.is_dragging.get());
    let class = move || if item.is_dragging.get() { "sortable-step sortable-step--dragging" } else { "sortable-step" };

    view! {
        <div class=class style=style data-sortable-id=sortable_id>
            <StepButton
                step
                is_active
                is_dragging=item.is_dragging
                drag_handle=item.handle
                on_click
                on_options_click
            />
        </div>
    }
}
