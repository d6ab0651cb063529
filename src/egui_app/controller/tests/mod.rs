use super::*;
use egui::{pos2, vec2};

mod payment;
mod transition;

pub(super) fn at(x: f32, y: f32) -> PointerOffset {
    PointerOffset::new(x, y)
}

pub(super) fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_min_size(pos2(x, y), vec2(width, height))
}

/// Payment at `{0,0,100,100}`, Collect at `{200,0,100,100}`, avatar resting at the origin.
pub(super) fn controller_with_targets() -> TransferController {
    let mut controller = TransferController::default();
    controller.report_rect(TargetKind::Payment, rect(0.0, 0.0, 100.0, 100.0));
    controller.report_rect(TargetKind::Collect, rect(200.0, 0.0, 100.0, 100.0));
    controller
}

pub(super) fn assert_invariants(controller: &TransferController) {
    let flags = controller.drag_flags();
    assert!(
        !(flags.is_entered_payment && flags.is_entered_collect),
        "both targets entered: {flags:?}"
    );
    assert!(
        !(flags.is_dropped_on_payment && flags.is_dropped_on_collect),
        "both targets dropped: {flags:?}"
    );
    if !flags.is_dragging {
        assert_eq!(flags.entered(), None, "entered while idle: {flags:?}");
    }
    let expected = usize::from(flags.is_dragging);
    assert_eq!(controller.ui.selection.dragging_count(), expected);
    assert_eq!(controller.active_contact().is_some(), flags.is_dragging);
}
