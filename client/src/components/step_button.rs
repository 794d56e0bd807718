//! A single tab in the navigation bar.
//!
//! DESIGN
//! ======
//! One press feeds two consumers: the local `ClickGesture`, which decides
//! whether the release selects the tab, and the drag handle supplied by the
//! sortable wrapper. Move and release are observed on the window for the
//! lifetime of the press only; the listeners are dropped on the first
//! release and on unmount.
//!
//! Presses that start on the options affordance belong to the affordance
//! and reach neither consumer.

use leptos::prelude::*;

use crate::components::icon::{EllipsisIcon, Icon};
use crate::state::steps::{MenuPosition, Step};
#[cfg(feature = "hydrate")]
use crate::util::click_gesture::ClickGesture;
use crate::util::drag::DragHandle;

/// Selector for the options affordance, excluded from click and drag handling.
pub const OPTIONS_SELECTOR: &str = ".step-button__options";

/// Removes one window listener.
#[cfg(feature = "hydrate")]
type Release = Box<dyn FnOnce() + Send + Sync>;

#[component]
pub fn StepButton(
    step: Step,
    #[prop(into)] is_active: Signal<bool>,
    #[prop(into)] is_dragging: Signal<bool>,
    #[prop(optional)] drag_handle: Option<DragHandle>,
    on_click: Callback<()>,
    on_options_click: Callback<MenuPosition>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let options_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    let gesture = StoredValue::new(ClickGesture::default());
    #[cfg(feature = "hydrate")]
    let listeners = StoredValue::new(Vec::<Release>::new());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || release_listeners(listeners));
    #[cfg(not(feature = "hydrate"))]
    let _ = on_options_click;

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if crate::util::dom::event_target_within(&ev, OPTIONS_SELECTOR) {
                return;
            }
            track_press(gesture, listeners, on_click);
        }

        if let Some(handle) = drag_handle {
            handle.on_pointer_down.run(ev);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            on_click.run(());
        }
    };

    let on_options_mousedown = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        if let Some(el) = options_ref.get_untracked() {
            on_options_click.run(crate::util::dom::menu_anchor(crate::util::dom::element_rect(&el)));
        }
    };

    let class = move || {
        let mut class = String::from("step-button");
        if is_active.get() {
            class.push_str(" step-button--active");
        }
        if focused.get() {
            class.push_str(" step-button--focused");
        }
        if is_dragging.get() {
            class.push_str(" step-button--dragging");
        }
        class
    };

    let Step { label, icon, .. } = step;

    view! {
        <div
            class=class
            role="tab"
            tabindex="0"
            aria-selected=move || if is_active.get() { "true" } else { "false" }
            on:pointerdown=on_pointer_down
            on:keydown=on_keydown
            on:focus=move |_| focused.set(true)
            on:blur=move |_| focused.set(false)
        >
            <Icon src=icon class="step-button__icon"/>
            <span class="step-button__label">{label}</span>
            <Show when=move || is_active.get()>
                <span
                    class="step-button__options"
                    node_ref=options_ref
                    role="button"
                    title="Page options"
                    aria-label="Page options"
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:mousedown=on_options_mousedown
                >
                    <EllipsisIcon/>
                </span>
            </Show>
        </div>
    }
}

/// Start window tracking for one press. A release that the gesture accepts
/// as a click runs `on_click` after the listeners are gone.
#[cfg(feature = "hydrate")]
fn track_press(
    gesture: StoredValue<ClickGesture>,
    listeners: StoredValue<Vec<Release>>,
    on_click: Callback<()>,
) {
    release_listeners(listeners);
    gesture.update_value(ClickGesture::pointer_down);

    let on_move = window_event_listener(leptos::ev::pointermove, move |_| {
        gesture.update_value(ClickGesture::pointer_move);
    });
    let on_up = window_event_listener(leptos::ev::pointerup, move |ev| {
        release_listeners(listeners);
        if gesture.try_update_value(|g| g.pointer_up(ev.button())).unwrap_or(false) {
            on_click.run(());
        }
    });
    listeners.set_value(vec![
        Box::new(move || on_move.remove()) as Release,
        Box::new(move || on_up.remove()) as Release,
    ]);
}

#[cfg(feature = "hydrate")]
fn release_listeners(listeners: StoredValue<Vec<Release>>) {
    let pending = listeners.try_update_value(std::mem::take).unwrap_or_default();
    for release in pending {
        release();
    }
}
