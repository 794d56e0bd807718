//! Shared numeric defaults for the sortable crate.

// ── Activation ──────────────────────────────────────────────────

/// Pointer travel in CSS pixels before a press turns into a drag.
///
/// Keeps plain clicks on sortable items from being hijacked by the drag.
pub const DEFAULT_ACTIVATION_DISTANCE_PX: f64 = 8.0;

// ── Presentation ────────────────────────────────────────────────

/// Opacity applied to the item being dragged.
pub const DRAGGING_OPACITY: f64 = 0.7;

/// Stacking order applied to the item being dragged.
pub const DRAGGING_Z_INDEX: i32 = 20;
