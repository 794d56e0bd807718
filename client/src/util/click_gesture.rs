//! Click-versus-drag disambiguation for a pressed tab.
//!
//! A press only counts as a click when the pointer is released without
//! having moved in between. The drag provider sees the same press, so a
//! press that turns into a drag must not also select the tab.

#[cfg(test)]
#[path = "click_gesture_test.rs"]
mod click_gesture_test;

/// Primary (usually left) pointer button as reported by `PointerEvent.button`.
pub const PRIMARY_BUTTON: i16 = 0;

/// Press tracking for a single tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClickGesture {
    /// No press in progress.
    #[default]
    Idle,
    /// Pressed and not yet moved.
    Pressed,
    /// Pressed and moved at least once; release will not click.
    Moved,
}

impl ClickGesture {
    pub fn pointer_down(&mut self) {
        *self = Self::Pressed;
    }

    pub fn pointer_move(&mut self) {
        if *self == Self::Pressed {
            *self = Self::Moved;
        }
    }

    /// Finish the press. Returns `true` when the release counts as a click.
    pub fn pointer_up(&mut self, button: i16) -> bool {
        let was = std::mem::take(self);
        was == Self::Pressed && button == PRIMARY_BUTTON
    }

    /// Whether window listeners are needed for this gesture.
    #[must_use]
    pub fn is_tracking(self) -> bool {
        self != Self::Idle
    }
}
