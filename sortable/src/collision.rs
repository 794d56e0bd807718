//! Drop target resolution.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::geometry::Rect;

/// Pick the droppable whose center is nearest to the center of `collision_rect`.
///
/// `collision_rect` is the dragged item's rectangle at its current
/// (translated) position. Ties resolve to the earliest droppable. Returns
/// `None` only when `droppables` is empty.
#[must_use]
pub fn closest_center<K: Clone>(collision_rect: Rect, droppables: &[(K, Rect)]) -> Option<K> {
    let center = collision_rect.center();
    droppables
        .iter()
        .map(|(id, rect)| (id, rect.center().distance_to(center)))
        .fold(None::<(&K, f64)>, |best, (id, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((id, dist)),
        })
        .map(|(id, _)| id.clone())
}
