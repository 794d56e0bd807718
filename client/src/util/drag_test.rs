#![cfg(not(feature = "hydrate"))]

use super::*;

fn with_list(f: impl FnOnce(SortableContext, RwSignal<Vec<DragEnd<String>>>)) {
    let owner = Owner::new();
    owner.with(|| {
        let drops = RwSignal::new(Vec::<DragEnd<String>>::new());
        let ctx = SortableContext::new(PointerSensor::default(), Callback::new(move |end: DragEnd<String>| drops.update(|d| d.push(end))));
        f(ctx, drops);
    });
}

#[test]
fn move_while_idle_is_ignored() {
    with_list(|ctx, _| {
        assert_eq!(ctx.pointer_move(Point::new(40.0, 0.0)), MoveOutcome::Ignored);
        assert!(ctx.is_idle());
    });
}

#[test]
fn click_sized_press_reports_no_drop() {
    with_list(|ctx, drops| {
        ctx.pointer_down("info".to_owned(), Point::new(10.0, 10.0));
        assert_eq!(ctx.pointer_move(Point::new(13.0, 12.0)), MoveOutcome::Pending);
        ctx.pointer_up();
        assert!(ctx.is_idle());
        assert!(drops.get_untracked().is_empty());
    });
}

#[test]
fn drag_past_threshold_reports_drop() {
    with_list(|ctx, drops| {
        ctx.pointer_down("info".to_owned(), Point::new(10.0, 10.0));
        assert_eq!(ctx.pointer_move(Point::new(30.0, 10.0)), MoveOutcome::Activated);
        assert_eq!(ctx.pointer_move(Point::new(40.0, 10.0)), MoveOutcome::Moved);
        ctx.pointer_up();
        assert_eq!(drops.get_untracked(), vec![DragEnd { active: "info".to_owned(), over: None }]);
        assert!(ctx.is_idle());
    });
}

#[test]
fn item_signals_follow_active_drag() {
    with_list(|ctx, _| {
        let info = ctx.item("info".to_owned());
        let other = ctx.item("other".to_owned());
        ctx.pointer_down("info".to_owned(), Point::new(10.0, 10.0));
        ctx.pointer_move(Point::new(25.0, 14.0));
        assert!(info.is_dragging.get_untracked());
        assert!(!other.is_dragging.get_untracked());
        assert_eq!(info.transform.get_untracked(), Transform::new(15.0, 4.0));
        assert!(other.transform.get_untracked().is_identity());
    });
}

#[test]
fn cancel_drops_gesture_silently() {
    with_list(|ctx, drops| {
        ctx.pointer_down("info".to_owned(), Point::new(10.0, 10.0));
        ctx.pointer_move(Point::new(60.0, 10.0));
        ctx.cancel();
        ctx.pointer_up();
        assert!(ctx.is_idle());
        assert!(drops.get_untracked().is_empty());
    });
}
