use super::*;

#[test]
fn sheet_visibility_forwards_drop_flag() {
    let mut controller = controller_with_targets();
    assert!(!controller.transition().is_payment_sheet_visible());

    controller.on_pointer_down(0, at(50.0, 50.0));
    assert!(!controller.transition().is_payment_sheet_visible());

    controller.on_pointer_up();
    assert!(controller.transition().is_payment_sheet_visible());
    assert!(!controller.transition().is_collect_sheet_visible());

    controller.on_request_close_payment();
    assert!(!controller.transition().is_payment_sheet_visible());
}

#[test]
fn morph_runs_from_payment_tile_to_inset_sheet() {
    let controller = controller_with_targets();
    let transition = controller.transition();
    assert_eq!(transition.morph_id(), PAYMENT_MORPH_ID);
    assert_eq!(transition.morph_source(), rect(0.0, 0.0, 100.0, 100.0));

    let screen = rect(0.0, 0.0, 390.0, 844.0);
    let sheet = transition.morph_destination(screen);
    assert_eq!(sheet.min, pos2(0.0, SHEET_TOP_INSET));
    assert_eq!(sheet.max, screen.max);
}

#[test]
fn tiny_screens_clamp_the_inset() {
    let controller = TransferController::default();
    let screen = rect(0.0, 0.0, 200.0, 40.0);
    let sheet = controller.transition().morph_destination(screen);
    assert_eq!(sheet.min.y, 40.0);
    assert_eq!(sheet.height(), 0.0);
}
