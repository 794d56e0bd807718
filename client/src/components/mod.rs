//! UI components for the step navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state through the `use_step_navigation` handle and report
//! user intent back through `Callback`s; none of them mutate `StepsState`
//! directly.

pub mod icon;
pub mod sortable_step;
pub mod step_button;
pub mod step_connector;
pub mod step_insertion_zone;
pub mod step_navigation;
pub mod step_options_menu;
