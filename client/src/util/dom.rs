//! DOM queries used by the navigation components.
//!
//! Pure geometry lives here so it can be tested natively; everything that
//! touches `web_sys` is compiled only for the browser.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use sortable::geometry::Rect;

use crate::state::steps::MenuPosition;

/// Attribute carrying a sortable item's id.
pub const SORTABLE_ID_ATTR: &str = "data-sortable-id";

/// Vertical gap between an options affordance and the menu it opens.
pub const MENU_OFFSET_PX: f64 = 4.0;

/// Menu anchor just below the bottom-left corner of `trigger`.
pub fn menu_anchor(trigger: Rect) -> MenuPosition {
    MenuPosition { x: trigger.left, y: trigger.bottom() + MENU_OFFSET_PX }
}

/// Whether the event target is, or sits inside, an element matching `selector`.
#[cfg(feature = "hydrate")]
pub fn event_target_within(ev: &web_sys::Event, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Whether the event target is a descendant of `container` (or the container itself).
#[cfg(feature = "hydrate")]
pub fn event_target_inside(ev: &web_sys::Event, container: &web_sys::Node) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

#[cfg(feature = "hydrate")]
pub fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Bounding rects of every `[data-sortable-id]` descendant of `root`, in DOM order.
#[cfg(feature = "hydrate")]
pub fn measure_sortable_items(root: &web_sys::Element) -> Vec<(String, Rect)> {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = root.query_selector_all(&format!("[{SORTABLE_ID_ATTR}]")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| Some((el.get_attribute(SORTABLE_ID_ATTR)?, element_rect(&el))))
        .collect()
}
