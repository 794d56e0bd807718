//! Reactive handle over [`StepsState`] used by the navigation components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never mutate `StepsState` directly. They call the `handle_*`
//! methods here, each of which applies exactly one operation inside a single
//! signal update. Failures are logged to the console and never surface in
//! the UI; menu actions close the menu even when they fail.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use sortable::session::DragEnd;

use super::steps::{MenuPosition, Step, StepError, StepsState};

/// `Copy` handle to the step navigation state.
#[derive(Clone, Copy)]
pub struct StepNavigationHandle {
    state: RwSignal<StepsState>,
}

/// Create the step navigation state seeded with the default steps.
pub fn use_step_navigation() -> StepNavigationHandle {
    StepNavigationHandle::new(RwSignal::new(StepsState::default()))
}

impl StepNavigationHandle {
    pub fn new(state: RwSignal<StepsState>) -> Self {
        Self { state }
    }

    pub fn steps(&self) -> Vec<Step> {
        self.state.with(|s| s.steps.clone())
    }

    pub fn step_count(&self) -> usize {
        self.state.with(|s| s.steps.len())
    }

    pub fn active_step_id(&self) -> Option<String> {
        self.state.with(|s| s.active_step_id.clone())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state.with(|s| s.is_active(id))
    }

    pub fn selected_step_id(&self) -> Option<String> {
        self.state.with(|s| s.selected_step_id().map(str::to_owned))
    }

    pub fn menu_position(&self) -> Option<MenuPosition> {
        self.state.with(StepsState::menu_position)
    }

    pub fn handle_step_click(&self, id: &str) {
        self.state.update(|s| s.select_step(id));
    }

    /// Reorder on drop when released over a different tab.
    pub fn handle_drag_end(&self, end: &DragEnd<String>) {
        let Some(over) = end.reorder_target() else {
            return;
        };
        self.state.update(|s| {
            if !s.move_step(&end.active, Some(over)) {
                leptos::logging::log!("drop of {} onto {over} left order unchanged", end.active);
            }
        });
    }

    pub fn handle_add_step(&self, index: usize) {
        self.state.update(|s| {
            if let Err(e) = s.add_step(index) {
                leptos::logging::warn!("add step failed: {e}");
            }
        });
    }

    pub fn handle_options_click(&self, id: &str, x: f64, y: f64) {
        self.state.update(|s| s.open_options(id, x, y));
    }

    pub fn handle_close_menu(&self) {
        self.state.update(StepsState::close_options);
    }

    pub fn handle_delete_step(&self) {
        self.run_menu_action("delete", StepsState::delete_selected);
    }

    pub fn handle_duplicate_step(&self) {
        self.run_menu_action("duplicate", |s| s.duplicate_selected().map(drop));
    }

    pub fn handle_copy_step(&self) {
        self.run_menu_action("copy", |s| s.copy_selected().map(drop));
    }

    pub fn handle_set_first_step(&self) {
        self.run_menu_action("set first", StepsState::set_first_selected);
    }

    pub fn handle_rename_step(&self) {
        self.state.update(StepsState::rename_selected);
    }

    fn run_menu_action(&self, name: &str, action: impl FnOnce(&mut StepsState) -> Result<(), StepError>) {
        self.state.update(|s| {
            if let Err(e) = action(s) {
                leptos::logging::warn!("{name} step failed: {e}");
                s.close_options();
            }
        });
    }
}
