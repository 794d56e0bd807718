use super::*;

fn labels(nav: StepNavigationHandle) -> Vec<String> {
    nav.steps().into_iter().map(|s| s.label).collect()
}

// =============================================================
// Gaps
// =============================================================

#[test]
fn gaps_only_between_tabs() {
    let gaps: Vec<bool> = (0..4).map(|i| has_gap_after(i, 4)).collect();
    assert_eq!(gaps, vec![true, true, true, false]);
}

#[test]
fn single_tab_has_no_gap() {
    assert!(!has_gap_after(0, 1));
}

// =============================================================
// Menu dispatch
// =============================================================

#[test]
fn menu_actions_dispatch_to_matching_handlers() {
    let owner = Owner::new();
    owner.with(|| {
        let nav = use_step_navigation();

        nav.handle_options_click("details", 0.0, 0.0);
        run_menu_action(nav, MenuAction::SetFirst);
        assert_eq!(labels(nav), vec!["Details", "Info", "Other", "Ending"]);

        nav.handle_options_click("info", 0.0, 0.0);
        run_menu_action(nav, MenuAction::Duplicate);
        assert_eq!(labels(nav), vec!["Details", "Info", "Info (Copy)", "Other", "Ending"]);

        nav.handle_options_click("other", 0.0, 0.0);
        run_menu_action(nav, MenuAction::Copy);
        assert_eq!(labels(nav).last().map(String::as_str), Some("Other (Copy)"));

        nav.handle_options_click("details", 0.0, 0.0);
        run_menu_action(nav, MenuAction::Delete);
        assert_eq!(labels(nav).first().map(String::as_str), Some("Info"));

        nav.handle_options_click("ending", 0.0, 0.0);
        run_menu_action(nav, MenuAction::Rename);
        assert!(nav.selected_step_id().is_none());
        assert!(labels(nav).contains(&"Ending".to_owned()));
    });
}

#[test]
fn activation_distance_matches_pointer_sensor_default() {
    assert_eq!(PointerSensor::with_distance(ACTIVATION_DISTANCE_PX), PointerSensor::default());
}
