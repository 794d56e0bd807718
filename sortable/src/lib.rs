//! Pointer-driven drag-and-drop sorting for horizontal lists.
//!
//! This crate holds the browser-independent half of list reordering: it
//! decides when a press becomes a drag, which item the dragged element is
//! over, how the other items shift out of the way, and what reorder event to
//! emit on release. The host UI is responsible only for feeding it pointer
//! coordinates and measured item rectangles, and for applying the resulting
//! [`strategy::Transform`]s and [`session::DragEnd`] events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Drag lifecycle state machine and [`session::DragSession`] |
//! | [`sensor`] | Pointer activation constraint |
//! | [`collision`] | Closest-center drop target resolution |
//! | [`strategy`] | Horizontal list sorting transforms |
//! | [`geometry`] | Points and rectangles in CSS pixels |
//! | [`consts`] | Shared numeric defaults |

pub mod collision;
pub mod consts;
pub mod geometry;
pub mod sensor;
pub mod session;
pub mod strategy;

/// Move the element at `from` to position `to`, shifting the elements in
/// between by one. Out-of-range indices leave `items` untouched.
///
/// Returns `true` when the slice was reordered.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() || from == to {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
    true
}
