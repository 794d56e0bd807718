//! Drag lifecycle state machine.
//!
//! A [`DragSession`] tracks one gesture from pointer-down to pointer-up. A
//! press starts in [`DragState::Pending`]; once the [`PointerSensor`]
//! constraint is met the session measures the list, enters
//! [`DragState::Dragging`], and resolves the drop target on every move. On
//! release a dragging session yields a [`DragEnd`] while a pending one yields
//! nothing, leaving the press to be handled as a click.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::collision::closest_center;
use crate::geometry::{Point, Rect};
use crate::sensor::PointerSensor;
use crate::strategy::{Transform, horizontal_list_sorting};

/// Current phase of the drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState<K> {
    /// No pointer is pressed on a sortable item.
    Idle,
    /// An item is pressed but the pointer has not travelled far enough.
    Pending {
        /// Item under the initial press.
        id: K,
        /// Pointer position at press time.
        origin: Point,
    },
    /// An item is being dragged.
    Dragging {
        /// Item being dragged.
        id: K,
        /// Pointer position at press time.
        origin: Point,
        /// Latest pointer position.
        current: Point,
        /// Drop target under the dragged item, if any.
        over: Option<K>,
    },
}

/// Reorder event emitted when a drag completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd<K> {
    /// Item that was dragged.
    pub active: K,
    /// Item it was released over, if any. May equal `active`.
    pub over: Option<K>,
}

impl<K: PartialEq> DragEnd<K> {
    /// The target id when the drop should reorder the list.
    #[must_use]
    pub fn reorder_target(&self) -> Option<&K> {
        self.over.as_ref().filter(|over| **over != self.active)
    }
}

/// Result of feeding a pointer movement into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No gesture in progress.
    Ignored,
    /// Still below the activation distance.
    Pending,
    /// This movement started the drag.
    Activated,
    /// An active drag moved.
    Moved,
}

/// One sortable list's drag state.
#[derive(Debug, Clone)]
pub struct DragSession<K> {
    sensor: PointerSensor,
    state: DragState<K>,
    /// Item rectangles in list order, measured when the drag activates.
    layout: Vec<(K, Rect)>,
}

impl<K> Default for DragSession<K> {
    fn default() -> Self {
        Self::new(PointerSensor::default())
    }
}

impl<K> DragSession<K> {
    #[must_use]
    pub fn new(sensor: PointerSensor) -> Self {
        Self { sensor, state: DragState::Idle, layout: Vec::new() }
    }

    #[must_use]
    pub fn sensor(&self) -> PointerSensor {
        self.sensor
    }

    #[must_use]
    pub fn state(&self) -> &DragState<K> {
        &self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Abort any gesture without emitting a drop.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.layout.clear();
    }
}

impl<K: Clone + PartialEq> DragSession<K> {
    /// Begin tracking a press on `id`. Ignored while another gesture is active.
    ///
    /// Returns `true` when the press was accepted.
    pub fn pointer_down(&mut self, id: K, at: Point) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = DragState::Pending { id, origin: at };
        true
    }

    /// Feed a pointer movement.
    ///
    /// `measure` is called once, when the drag activates, and must return the
    /// list's item rectangles in list order.
    pub fn pointer_move<F>(&mut self, at: Point, measure: F) -> MoveOutcome
    where
        F: FnOnce() -> Vec<(K, Rect)>,
    {
        match &self.state {
            DragState::Idle => MoveOutcome::Ignored,
            DragState::Pending { id, origin } => {
                if !self.sensor.is_activated(*origin, at) {
                    return MoveOutcome::Pending;
                }
                let id = id.clone();
                let origin = *origin;
                self.layout = measure();
                let over = self.resolve_over(&id, origin, at);
                self.state = DragState::Dragging { id, origin, current: at, over };
                MoveOutcome::Activated
            }
            DragState::Dragging { id, origin, .. } => {
                let id = id.clone();
                let origin = *origin;
                let over = self.resolve_over(&id, origin, at);
                self.state = DragState::Dragging { id, origin, current: at, over };
                MoveOutcome::Moved
            }
        }
    }

    /// Finish the gesture. Returns the drop event when a drag was active.
    pub fn pointer_up(&mut self) -> Option<DragEnd<K>> {
        let finished = std::mem::replace(&mut self.state, DragState::Idle);
        self.layout.clear();
        match finished {
            DragState::Dragging { id, over, .. } => Some(DragEnd { active: id, over }),
            DragState::Idle | DragState::Pending { .. } => None,
        }
    }

    /// Id of the item being dragged, once activated.
    #[must_use]
    pub fn active_id(&self) -> Option<&K> {
        match &self.state {
            DragState::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Current drop target, once activated.
    #[must_use]
    pub fn over_id(&self) -> Option<&K> {
        match &self.state {
            DragState::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self, id: &K) -> bool {
        self.active_id() == Some(id)
    }

    /// Translation to apply to item `id` for the current frame.
    #[must_use]
    pub fn transform_for(&self, id: &K) -> Transform {
        let DragState::Dragging { id: active, origin, current, over } = &self.state else {
            return Transform::IDENTITY;
        };
        if id == active {
            return Transform::new(current.x - origin.x, current.y - origin.y);
        }

        let (Some(active_index), Some(index)) = (self.index_of(active), self.index_of(id)) else {
            return Transform::IDENTITY;
        };
        let over_index = over.as_ref().and_then(|o| self.index_of(o)).unwrap_or(active_index);
        let rects: Vec<Rect> = self.layout.iter().map(|(_, rect)| *rect).collect();
        horizontal_list_sorting(&rects, active_index, over_index, index)
    }

    fn index_of(&self, id: &K) -> Option<usize> {
        self.layout.iter().position(|(k, _)| k == id)
    }

    fn resolve_over(&self, id: &K, origin: Point, at: Point) -> Option<K> {
        let (_, start) = self.layout.iter().find(|(k, _)| k == id)?;
        let dragged = start.translate(at.x - origin.x, at.y - origin.y);
        closest_center(dragged, &self.layout)
    }
}
