use egui::{Rect, pos2, vec2};
use fundtransfer::app_dirs::ConfigBaseGuard;
use fundtransfer::config::{self, AppSettings, InteractionSettings};
use fundtransfer::egui_app::controller::{PointerEvent, TransferController};
use fundtransfer::egui_app::state::{DragPhase, DropTarget, PointerOffset, TargetKind};
use tempfile::TempDir;

struct FlowHarness {
    _config: ConfigBaseGuard,
    _temp: TempDir,
    controller: TransferController,
}

impl FlowHarness {
    fn with_settings(interaction: InteractionSettings) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let guard = ConfigBaseGuard::set(temp.path().to_path_buf());
        config::save(&AppSettings { interaction }).expect("save settings");

        let mut controller = TransferController::default();
        controller
            .load_configuration()
            .expect("load configuration");
        controller.report_rect(
            TargetKind::Payment,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)),
        );
        controller.report_rect(
            TargetKind::Collect,
            Rect::from_min_size(pos2(200.0, 0.0), vec2(100.0, 100.0)),
        );
        Self {
            _config: guard,
            _temp: temp,
            controller,
        }
    }
}

fn down(contact: usize, x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        contact,
        pos: PointerOffset::new(x, y),
    }
}

fn moved(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move {
        pos: PointerOffset::new(x, y),
    }
}

#[test]
fn payment_flow_uses_persisted_settings() {
    let mut harness = FlowHarness::with_settings(InteractionSettings {
        avatar_size: 40.0,
        amount_max_len: 4,
        scroll_lock_while_dragging: true,
    });
    let controller = &mut harness.controller;

    controller.handle_pointer_events([down(5, 400.0, 400.0), moved(50.0, 50.0)]);
    let snapshot = controller.snapshot();
    assert!(snapshot.flags.is_dragging);
    assert!(snapshot.flags.is_entered_payment);
    assert!(!snapshot.scroll_enabled);
    assert_eq!(snapshot.active_id, Some(5));
    assert_eq!(
        snapshot.avatar_rect,
        Rect::from_min_size(pos2(30.0, 30.0), vec2(40.0, 40.0))
    );
    assert!(snapshot.contacts.iter().filter(|c| c.is_dragging).count() == 1);

    controller.handle_pointer_event(PointerEvent::Up);
    assert_eq!(controller.drag_phase(), DragPhase::PendingPaymentOpen);
    assert!(controller.scroll_enabled());
    assert!(controller.transition().is_payment_sheet_visible());

    for key in ["9", "9", "9", "9", "9"] {
        controller.press_keypad_key(key);
    }
    let session = controller.payment_session().expect("payment session");
    assert_eq!(session.recipient_name(), "Travis");
    assert_eq!(session.input.amount(), "9999");

    controller.send_payment();
    controller.confirm_biometric();
    controller.finish_transfer();
    assert_eq!(controller.drag_phase(), DragPhase::Idle);
    assert!(controller.payment_session().is_none());
    assert!(!controller.transition().is_payment_sheet_visible());
}

#[test]
fn collect_drop_then_close_returns_to_idle() {
    let mut harness = FlowHarness::with_settings(InteractionSettings::default());
    let controller = &mut harness.controller;

    controller.handle_pointer_events([down(0, 250.0, 50.0), PointerEvent::Cancel]);
    assert_eq!(controller.drag_phase(), DragPhase::PendingCollectOpen);
    assert!(controller.transition().is_collect_sheet_visible());
    assert!(controller.payment_session().is_none());

    controller.close_collect_view();
    assert_eq!(controller.drag_phase(), DragPhase::Idle);
    assert!(controller.begin_drag(1, PointerOffset::ZERO));
    assert_eq!(controller.end_drag(), None);
}

#[test]
fn unlocked_scroll_setting_keeps_scrolling_during_drag() {
    let mut harness = FlowHarness::with_settings(InteractionSettings {
        scroll_lock_while_dragging: false,
        ..InteractionSettings::default()
    });
    let controller = &mut harness.controller;

    controller.handle_pointer_event(down(2, 500.0, 500.0));
    assert!(controller.drag_flags().is_dragging);
    assert!(controller.scroll_enabled());
    assert_eq!(controller.end_drag(), None::<DropTarget>);
}
