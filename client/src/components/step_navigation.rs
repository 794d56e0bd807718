//! Navigation bar container: sortable tabs, gap connectors, insertion zones,
//! trailing add button, and the options menu.
//!
//! ARCHITECTURE
//! ============
//! The container owns the step navigation handle and the hovered-gap index.
//! Tabs are rendered inside a [`SortableList`]; the gap after tab `i` shows a
//! connector until hovered, then an insertion zone that adds a step at
//! `i + 1`. Gaps exist only between tabs. The trailing "Add page" button
//! appends.

#[cfg(test)]
#[path = "step_navigation_test.rs"]
mod step_navigation_test;

use leptos::prelude::*;
use sortable::sensor::PointerSensor;
use sortable::session::DragEnd;

use crate::components::icon::PlusIcon;
use crate::components::sortable_step::SortableStep;
use crate::components::step_connector::StepConnector;
use crate::components::step_insertion_zone::StepInsertionZone;
use crate::components::step_options_menu::{MenuAction, StepOptionsMenu};
use crate::state::navigation::{StepNavigationHandle, use_step_navigation};
use crate::state::steps::MenuPosition;
use crate::util::drag::SortableList;

/// Pointer travel in CSS pixels before a pressed tab starts dragging.
pub const ACTIVATION_DISTANCE_PX: f64 = 8.0;

/// Whether a gap follows the tab at `index` in a list of `count` tabs.
pub fn has_gap_after(index: usize, count: usize) -> bool {
    index + 1 < count
}

fn run_menu_action(nav: StepNavigationHandle, action: MenuAction) {
    match action {
        MenuAction::SetFirst => nav.handle_set_first_step(),
        MenuAction::Rename => nav.handle_rename_step(),
        MenuAction::Copy => nav.handle_copy_step(),
        MenuAction::Duplicate => nav.handle_duplicate_step(),
        MenuAction::Delete => nav.handle_delete_step(),
    }
}

#[component]
pub fn StepNavigation() -> impl IntoView {
    let nav = use_step_navigation();
    let hovered_gap = RwSignal::new(None::<usize>);
    let steps = Memo::new(move |_| nav.steps());
    let menu = Memo::new(move |_| nav.menu_position());

    let on_drag_end = Callback::new(move |end: DragEnd<String>| nav.handle_drag_end(&end));
    let on_action = Callback::new(move |action: MenuAction| run_menu_action(nav, action));
    let on_close = Callback::new(move |()| nav.handle_close_menu());

    let tabs = move || {
        let steps = steps.get();
        let count = steps.len();
        steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                let id = StoredValue::new(step.id.clone());
                let is_active = Signal::derive(move || id.with_value(|id| nav.is_active(id)));
                let on_click = Callback::new(move |()| id.with_value(|id| nav.handle_step_click(id)));
                let on_options_click = Callback::new(move |anchor: MenuPosition| {
                    id.with_value(|id| nav.handle_options_click(id, anchor.x, anchor.y));
                });
                let gap = has_gap_after(index, count).then(|| view! { <StepGap index hovered_gap nav/> });
                view! {
                    <SortableStep step is_active on_click on_options_click/>
                    {gap}
                }
            })
            .collect_view()
    };

    view! {
        <nav class="step-navigation" aria-label="Pages">
            <SortableList
                class="step-navigation__tabs"
                sensor=PointerSensor::with_distance(ACTIVATION_DISTANCE_PX)
                on_drag_end
            >
                {tabs}
            </SortableList>
            <StepConnector/>
            <button
                class="step-navigation__add"
                type="button"
                on:click=move |_| nav.handle_add_step(nav.step_count())
            >
                <PlusIcon/>
                <span>"Add page"</span>
            </button>
            {move || menu.get().map(|position| view! { <StepOptionsMenu position on_action on_close/> })}
        </nav>
    }
}

/// Gap between two tabs: a connector, or an insertion zone while hovered.
#[component]
fn StepGap(index: usize, hovered_gap: RwSignal<Option<usize>>, nav: StepNavigationHandle) -> impl IntoView {
    let on_insert = Callback::new(move |()| nav.handle_add_step(index + 1));

    view! {
        <div
            class="step-navigation__gap"
            on:mouseenter=move |_| hovered_gap.set(Some(index))
            on:mouseleave=move |_| hovered_gap.set(None)
        >
            {move || {
                if hovered_gap.get() == Some(index) {
                    view! { <StepInsertionZone on_insert/> }.into_any()
                } else {
                    view! { <StepConnector/> }.into_any()
                }
            }}
        </div>
    }
}
