use gallery_core::mode::{Mode, ModeMachine};

#[test]
fn starts_in_overview_with_no_selection() {
    let machine = ModeMachine::new();
    assert_eq!(machine.mode(), Mode::Overview);
    assert_eq!(machine.selected(), None);
}

#[test]
fn select_only_from_overview() {
    let mut machine = ModeMachine::new();
    assert!(machine.begin_select(3));
    assert_eq!(machine.mode(), Mode::Transitioning);
    assert_eq!(machine.selected(), Some(3));

    // Transitioning refuses everything.
    assert!(!machine.begin_select(4));
    assert!(!machine.begin_dismiss());
    assert_eq!(machine.selected(), Some(3));

    machine.finish_select();
    assert_eq!(machine.mode(), Mode::Preview);
    assert_eq!(machine.selected(), Some(3));

    // Preview refuses further selects.
    assert!(!machine.begin_select(1));
    assert_eq!(machine.selected(), Some(3));
}

#[test]
fn dismiss_only_from_preview() {
    let mut machine = ModeMachine::new();
    assert!(!machine.begin_dismiss(), "nothing to dismiss in overview");

    machine.begin_select(7);
    machine.finish_select();
    assert!(machine.begin_dismiss());
    assert_eq!(machine.mode(), Mode::Transitioning);
    assert!(!machine.begin_dismiss(), "guard holds while in flight");

    machine.finish_dismiss();
    assert_eq!(machine.mode(), Mode::Overview);
    assert_eq!(machine.selected(), None);
}

#[test]
fn selection_is_nonnull_iff_not_overview() {
    let mut machine = ModeMachine::new();
    assert!(machine.selected().is_none());

    machine.begin_select(0);
    assert!(machine.selected().is_some()); // Transitioning
    machine.finish_select();
    assert!(machine.selected().is_some()); // Preview
    machine.begin_dismiss();
    assert!(machine.selected().is_some()); // Transitioning (outbound)
    machine.finish_dismiss();
    assert!(machine.selected().is_none()); // Overview
}

#[test]
fn full_cycle_can_repeat() {
    let mut machine = ModeMachine::new();
    for index in [0usize, 5, 19] {
        assert!(machine.begin_select(index));
        machine.finish_select();
        assert!(machine.begin_dismiss());
        machine.finish_dismiss();
        assert_eq!(machine.mode(), Mode::Overview);
    }
}
