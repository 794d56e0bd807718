//! Pointer sensor: decides when a press becomes a drag.

#[cfg(test)]
#[path = "sensor_test.rs"]
mod sensor_test;

use crate::consts::DEFAULT_ACTIVATION_DISTANCE_PX;
use crate::geometry::Point;

/// Pointer sensor with a distance-based activation constraint.
///
/// A distance of `0.0` activates on the first movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSensor {
    pub activation_distance: f64,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self { activation_distance: DEFAULT_ACTIVATION_DISTANCE_PX }
    }
}

impl PointerSensor {
    #[must_use]
    pub fn with_distance(activation_distance: f64) -> Self {
        Self { activation_distance: activation_distance.max(0.0) }
    }

    /// Whether pointer travel from `origin` to `current` satisfies the constraint.
    #[must_use]
    pub fn is_activated(&self, origin: Point, current: Point) -> bool {
        let travelled = origin.distance_to(current);
        if self.activation_distance <= 0.0 {
            return travelled > 0.0;
        }
        travelled >= self.activation_distance
    }
}
