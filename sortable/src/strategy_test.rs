#![allow(clippy::float_cmp)]

use super::*;

fn row() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 60.0, 32.0),
        Rect::new(100.0, 0.0, 80.0, 32.0),
        Rect::new(220.0, 0.0, 70.0, 32.0),
        Rect::new(330.0, 0.0, 70.0, 32.0),
    ]
}

// =============================================================
// Transform
// =============================================================

#[test]
fn transform_default_is_identity() {
    assert!(Transform::default().is_identity());
    assert!(!Transform::new(1.0, 0.0).is_identity());
}

#[test]
fn transform_css_is_translate3d() {
    assert_eq!(Transform::new(-12.5, 0.0).to_css(), "translate3d(-12.5px, 0px, 0)");
}

// =============================================================
// Dragging right
// =============================================================

#[test]
fn dragging_right_shifts_intermediate_items_left_by_slot() {
    let rects = row();
    assert_eq!(horizontal_list_sorting(&rects, 0, 2, 1), Transform::new(-100.0, 0.0));
    assert_eq!(horizontal_list_sorting(&rects, 0, 2, 2), Transform::new(-100.0, 0.0));
}

#[test]
fn dragging_right_leaves_items_past_target_in_place() {
    let rects = row();
    assert!(horizontal_list_sorting(&rects, 0, 2, 3).is_identity());
}

#[test]
fn dragging_right_active_slot_aligns_right_edges() {
    let rects = row();
    assert_eq!(horizontal_list_sorting(&rects, 0, 2, 0), Transform::new(230.0, 0.0));
}

// =============================================================
// Dragging left
// =============================================================

#[test]
fn dragging_left_shifts_intermediate_items_right_by_slot() {
    let rects = row();
    assert_eq!(horizontal_list_sorting(&rects, 3, 1, 1), Transform::new(110.0, 0.0));
    assert_eq!(horizontal_list_sorting(&rects, 3, 1, 2), Transform::new(110.0, 0.0));
}

#[test]
fn dragging_left_leaves_items_before_target_in_place() {
    let rects = row();
    assert!(horizontal_list_sorting(&rects, 3, 1, 0).is_identity());
}

#[test]
fn dragging_left_active_slot_aligns_left_edges() {
    let rects = row();
    assert_eq!(horizontal_list_sorting(&rects, 3, 1, 3), Transform::new(-230.0, 0.0));
}

// =============================================================
// Degenerate input
// =============================================================

#[test]
fn over_self_keeps_every_item_in_place() {
    let rects = row();
    for index in 0..rects.len() {
        assert!(horizontal_list_sorting(&rects, 1, 1, index).is_identity());
    }
}

#[test]
fn missing_active_rect_is_identity() {
    let rects = row();
    assert!(horizontal_list_sorting(&rects, 9, 1, 1).is_identity());
}

#[test]
fn single_item_row_has_no_gap() {
    let rects = vec![Rect::new(0.0, 0.0, 50.0, 32.0)];
    assert!(horizontal_list_sorting(&rects, 0, 0, 0).is_identity());
}
