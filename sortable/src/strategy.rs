//! Horizontal list sorting strategy.
//!
//! While an item is dragged across a row, every item between the drag source
//! and the current drop target slides one slot toward the source so the row
//! previews the final order. Slot width is the dragged item's width plus the
//! gap that separates neighbouring items, so uneven spacing (connectors,
//! insertion zones) is preserved.

#[cfg(test)]
#[path = "strategy_test.rs"]
mod strategy_test;

use crate::geometry::Rect;

/// A CSS translation in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Render as a CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

/// Transform for the item at `index` while `active_index` is dragged over `over_index`.
///
/// The dragged item itself follows the pointer and is not positioned here;
/// its entry resolves to the offset of its eventual slot, which hosts use for
/// drop animations. Missing rectangles resolve to the identity transform.
#[must_use]
pub fn horizontal_list_sorting(rects: &[Rect], active_index: usize, over_index: usize, index: usize) -> Transform {
    let Some(active_rect) = rects.get(active_index) else {
        return Transform::IDENTITY;
    };
    let item_gap = item_gap(rects, index, active_index);

    if index == active_index {
        let Some(target) = rects.get(over_index) else {
            return Transform::IDENTITY;
        };
        let x = if active_index < over_index {
            target.right() - active_rect.right()
        } else {
            target.left - active_rect.left
        };
        return Transform::new(x, 0.0);
    }

    if index > active_index && index <= over_index {
        return Transform::new(-active_rect.width - item_gap, 0.0);
    }
    if index < active_index && index >= over_index {
        return Transform::new(active_rect.width + item_gap, 0.0);
    }
    Transform::IDENTITY
}

/// Horizontal gap between `rects[index]` and the neighbour on the side the
/// dragged item is coming from.
fn item_gap(rects: &[Rect], index: usize, active_index: usize) -> f64 {
    let Some(current) = rects.get(index) else {
        return 0.0;
    };
    let previous = index.checked_sub(1).and_then(|i| rects.get(i));
    let next = rects.get(index + 1);

    let gap_before = previous.map(|prev| current.left - prev.right());
    let gap_after = next.map(|next| next.left - current.right());

    let preferred = if active_index < index {
        gap_before.or(gap_after)
    } else {
        gap_after.or(gap_before)
    };
    preferred.unwrap_or(0.0)
}
