//! Leptos binding for the `sortable` drag session.
//!
//! ARCHITECTURE
//! ============
//! [`SortableList`] owns one [`DragSession`] and provides a [`SortableContext`]
//! to its children. Items call [`use_sortable`] to get a [`DragHandle`] for
//! their pointer-down plus reactive transform and dragging flags. Pointer
//! movement and release are observed through window listeners that live as
//! long as the list is mounted, so a drag keeps tracking when the pointer
//! leaves the tab it started on.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use leptos::prelude::*;
use sortable::geometry::{Point, Rect};
use sortable::sensor::PointerSensor;
use sortable::session::{DragEnd, DragSession, MoveOutcome};
use sortable::strategy::Transform;

use crate::util::click_gesture::PRIMARY_BUTTON;

/// Drag state shared by one sortable list and its items.
#[derive(Clone, Copy)]
pub struct SortableContext {
    session: RwSignal<DragSession<String>>,
    root: NodeRef<leptos::html::Div>,
    on_drag_end: Callback<DragEnd<String>>,
}

/// Handler record an item attaches to the element that starts a drag.
#[derive(Clone, Copy)]
pub struct DragHandle {
    pub on_pointer_down: Callback<leptos::ev::PointerEvent>,
}

/// Per-item drag bindings.
#[derive(Clone, Copy)]
pub struct SortableItem {
    pub handle: DragHandle,
    pub transform: Signal<Transform>,
    pub is_dragging: Signal<bool>,
}

impl SortableContext {
    pub fn new(sensor: PointerSensor, on_drag_end: Callback<DragEnd<String>>) -> Self {
        Self {
            session: RwSignal::new(DragSession::new(sensor)),
            root: NodeRef::new(),
            on_drag_end,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.session.with(DragSession::is_idle)
    }

    pub fn pointer_down(&self, id: String, at: Point) {
        self.session.maybe_update(|s| s.pointer_down(id, at));
    }

    /// Feed a window pointer movement. Subscribers are only notified once the
    /// drag is active.
    pub fn pointer_move(&self, at: Point) -> MoveOutcome {
        if self.session.with_untracked(DragSession::is_idle) {
            return MoveOutcome::Ignored;
        }
        let root = self.root;
        let mut outcome = MoveOutcome::Ignored;
        self.session.maybe_update(|s| {
            outcome = s.pointer_move(at, || measure(root));
            matches!(outcome, MoveOutcome::Activated | MoveOutcome::Moved)
        });
        outcome
    }

    /// Finish the gesture and report the drop, if a drag was active.
    pub fn pointer_up(&self) {
        if self.session.with_untracked(DragSession::is_idle) {
            return;
        }
        if let Some(end) = self.session.try_update(DragSession::pointer_up).flatten() {
            self.on_drag_end.run(end);
        }
    }

    pub fn cancel(&self) {
        if !self.session.with_untracked(DragSession::is_idle) {
            self.session.update(DragSession::cancel);
        }
    }

    /// Bindings for the item identified by `id`.
    pub fn item(&self, id: String) -> SortableItem {
        let ctx = *self;
        let id = StoredValue::new(id);
        let on_pointer_down = Callback::new(move |ev: leptos::ev::PointerEvent| {
            if ev.button() != PRIMARY_BUTTON {
                return;
            }
            ctx.pointer_down(id.get_value(), pointer_point(&ev));
        });
        let transform = Signal::derive(move || id.with_value(|id| ctx.session.with(|s| s.transform_for(id))));
        let is_dragging = Signal::derive(move || id.with_value(|id| ctx.session.with(|s| s.is_dragging(id))));
        SortableItem { handle: DragHandle { on_pointer_down }, transform, is_dragging }
    }
}

/// Bindings for a sortable item inside the nearest [`SortableList`].
pub fn use_sortable(id: String) -> SortableItem {
    expect_context::<SortableContext>().item(id)
}

pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
fn measure(root: NodeRef<leptos::html::Div>) -> Vec<(String, Rect)> {
    root.get_untracked()
        .map(|el| crate::util::dom::measure_sortable_items(&el))
        .unwrap_or_default()
}

#[cfg(not(feature = "hydrate"))]
fn measure(_root: NodeRef<leptos::html::Div>) -> Vec<(String, Rect)> {
    Vec::new()
}

/// Horizontal sortable container. Drops are reported through `on_drag_end`.
#[component]
pub fn SortableList(
    on_drag_end: Callback<DragEnd<String>>,
    #[prop(optional)] sensor: PointerSensor,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = SortableContext::new(sensor, on_drag_end);
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
            if matches!(ctx.pointer_move(pointer_point(&ev)), MoveOutcome::Activated | MoveOutcome::Moved) {
                ev.prevent_default();
            }
        });
        let on_up = window_event_listener(leptos::ev::pointerup, move |_| ctx.pointer_up());
        let on_cancel = window_event_listener(leptos::ev::pointercancel, move |_| ctx.cancel());
        on_cleanup(move || {
            on_move.remove();
            on_up.remove();
            on_cancel.remove();
        });
    }

    let root_class = move || {
        if ctx.is_idle() {
            class.clone()
        } else {
            format!("{class} sortable-list--active")
        }
    };

    view! {
        <div class=root_class node_ref=ctx.root>
            {children()}
        </div>
    }
}
