//! Ordered step list, active selection, and options-menu target.
//!
//! DESIGN
//! ======
//! `StepsState` is the single source of truth for the navigation bar. Every
//! mutation validates its inputs before touching the list, so an operation
//! either completes or leaves the previous state intact. Menu target and
//! anchor position live together in `OptionsMenu` so they can only be set
//! and cleared as a pair.

#[cfg(test)]
#[path = "steps_test.rs"]
mod steps_test;

/// Icon used for steps created from the add/insert controls.
pub const DEFAULT_STEP_ICON: &str = "/icons/doc.svg";

const COPY_SUFFIX: &str = " (Copy)";

/// A single page/step in the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

impl Step {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: Option<&str>) -> Self {
        Self { id: id.into(), label: label.into(), icon: icon.map(str::to_owned) }
    }

    /// A fresh step carrying this step's icon and a "(Copy)" label.
    #[must_use]
    pub fn copy_of(&self) -> Self {
        Self { id: mint_step_id(), label: format!("{}{COPY_SUFFIX}", self.label), icon: self.icon.clone() }
    }
}

/// Screen anchor for the floating options menu, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuPosition {
    pub x: f64,
    pub y: f64,
}

/// An open options menu: which step it targets and where it is anchored.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionsMenu {
    pub step_id: String,
    pub position: MenuPosition,
}

/// Failures surfaced by step-list operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// Insert position past the end of the list.
    #[error("insert index {index} out of range for {len} steps")]
    IndexOutOfRange { index: usize, len: usize },
    /// The menu targets a step that is no longer in the list.
    #[error("step {0} not found")]
    UnknownStep(String),
}

/// Step navigation state.
#[derive(Clone, Debug, PartialEq)]
pub struct StepsState {
    pub steps: Vec<Step>,
    pub active_step_id: Option<String>,
    pub menu: Option<OptionsMenu>,
}

impl Default for StepsState {
    fn default() -> Self {
        Self::with_steps(seed_steps())
    }
}

/// The steps present when the navigation bar mounts.
pub fn seed_steps() -> Vec<Step> {
    vec![
        Step::new("info", "Info", Some("/icons/info.svg")),
        Step::new("details", "Details", Some(DEFAULT_STEP_ICON)),
        Step::new("other", "Other", Some(DEFAULT_STEP_ICON)),
        Step::new("ending", "Ending", Some("/icons/ending.svg")),
    ]
}

/// Mint a new step id. UUID v4 keeps ids unique across add/copy bursts
/// within the same millisecond.
pub fn mint_step_id() -> String {
    format!("step-{}", uuid::Uuid::new_v4())
}

impl StepsState {
    /// State over `steps` with the first step active and no menu open.
    pub fn with_steps(steps: Vec<Step>) -> Self {
        let active_step_id = steps.first().map(|s| s.id.clone());
        Self { steps, active_step_id, menu: None }
    }

    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_step_id.as_deref() == Some(id)
    }

    /// Step targeted by the open options menu.
    #[must_use]
    pub fn selected_step_id(&self) -> Option<&str> {
        self.menu.as_ref().map(|m| m.step_id.as_str())
    }

    #[must_use]
    pub fn menu_position(&self) -> Option<MenuPosition> {
        self.menu.as_ref().map(|m| m.position)
    }

    /// Insert a new default step at `index` and return its id.
    ///
    /// The label counts the list length before insertion. Selection is unchanged.
    pub fn add_step(&mut self, index: usize) -> Result<String, StepError> {
        let len = self.steps.len();
        if index > len {
            return Err(StepError::IndexOutOfRange { index, len });
        }
        let step = Step {
            id: mint_step_id(),
            label: format!("New Step {}", len + 1),
            icon: Some(DEFAULT_STEP_ICON.to_owned()),
        };
        let id = step.id.clone();
        self.steps.insert(index, step);
        Ok(id)
    }

    /// Move `active_id` to the position currently held by `over_id`.
    ///
    /// Returns `true` when the list changed. Missing, equal, or unknown ids are no-ops.
    pub fn move_step(&mut self, active_id: &str, over_id: Option<&str>) -> bool {
        let Some(over_id) = over_id else {
            return false;
        };
        if active_id == over_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position_of(active_id), self.position_of(over_id)) else {
            return false;
        };
        sortable::array_move(&mut self.steps, from, to)
    }

    /// Make `id` the active step. The caller guarantees it exists.
    pub fn select_step(&mut self, id: impl Into<String>) {
        self.active_step_id = Some(id.into());
    }

    pub fn open_options(&mut self, id: impl Into<String>, x: f64, y: f64) {
        self.menu = Some(OptionsMenu { step_id: id.into(), position: MenuPosition { x, y } });
    }

    pub fn close_options(&mut self) {
        self.menu = None;
    }

    /// Remove the menu's step. A removed active step hands activation to the
    /// first remaining step.
    pub fn delete_selected(&mut self) -> Result<(), StepError> {
        let Some(index) = self.selected_index()? else {
            return Ok(());
        };
        let removed = self.steps.remove(index);
        if self.is_active(&removed.id) {
            self.active_step_id = self.steps.first().map(|s| s.id.clone());
        }
        self.close_options();
        Ok(())
    }

    /// Insert a copy right after the menu's step and activate it.
    pub fn duplicate_selected(&mut self) -> Result<Option<String>, StepError> {
        let Some(index) = self.selected_index()? else {
            return Ok(None);
        };
        let copy = self.steps[index].copy_of();
        let id = copy.id.clone();
        self.steps.insert(index + 1, copy);
        self.active_step_id = Some(id.clone());
        self.close_options();
        Ok(Some(id))
    }

    /// Append a copy of the menu's step and activate it.
    pub fn copy_selected(&mut self) -> Result<Option<String>, StepError> {
        let Some(index) = self.selected_index()? else {
            return Ok(None);
        };
        let copy = self.steps[index].copy_of();
        let id = copy.id.clone();
        self.steps.push(copy);
        self.active_step_id = Some(id.clone());
        self.close_options();
        Ok(Some(id))
    }

    /// Move the menu's step to the front. The active step is unchanged.
    pub fn set_first_selected(&mut self) -> Result<(), StepError> {
        let Some(index) = self.selected_index()? else {
            return Ok(());
        };
        self.steps[..=index].rotate_right(1);
        self.close_options();
        Ok(())
    }

    /// Renaming has no editor yet; the action only dismisses the menu.
    pub fn rename_selected(&mut self) {
        self.close_options();
    }

    /// Index of the menu's step: `Ok(None)` without a menu, an error if the
    /// target vanished from the list.
    fn selected_index(&self) -> Result<Option<usize>, StepError> {
        let Some(id) = self.selected_step_id() else {
            return Ok(None);
        };
        self.position_of(id)
            .map(Some)
            .ok_or_else(|| StepError::UnknownStep(id.to_owned()))
    }
}
