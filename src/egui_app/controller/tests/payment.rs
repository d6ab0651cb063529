use super::*;

fn controller_with_open_sheet(contact: usize) -> TransferController {
    let mut controller = controller_with_targets();
    controller.on_pointer_down(contact, at(50.0, 50.0));
    controller.on_pointer_up();
    controller
}

#[test]
fn payment_drop_opens_session_for_dragged_contact() {
    let controller = controller_with_open_sheet(1);
    let session = controller.payment_session().expect("session opened");
    assert_eq!(session.recipient_name(), "Jennifer");
    assert_eq!(session.input.amount(), "");
    assert_eq!(session.config, PaymentSessionConfig::default());
    assert_eq!(controller.ui.drag.last_picked, Some(1));
    assert_eq!(controller.active_contact(), None);
}

#[test]
fn keypad_follows_amount_rules() {
    let mut controller = controller_with_open_sheet(0);
    for key in ["1", "2", ".", "5", ".", "", "0"] {
        controller.press_keypad_key(key);
    }
    controller.keypad_backspace();
    assert_eq!(controller.payment_session().unwrap().input.amount(), "12.5");
}

#[test]
fn amount_limit_comes_from_settings() {
    let settings = crate::config::InteractionSettings {
        amount_max_len: 3,
        ..Default::default()
    };
    let mut controller = TransferController::new(settings);
    controller.report_rect(TargetKind::Payment, rect(0.0, 0.0, 100.0, 100.0));
    controller.on_pointer_down(0, at(50.0, 50.0));
    controller.on_pointer_up();
    for _ in 0..5 {
        controller.press_keypad_key("7");
    }
    assert_eq!(controller.payment_session().unwrap().input.amount(), "777");
}

#[test]
fn confirmation_flow_closes_the_sheet() {
    let mut controller = controller_with_open_sheet(2);
    controller.start_payment_entrance();
    controller.press_keypad_key("5");

    controller.confirm_biometric();
    assert!(!controller.payment_session().unwrap().config.confirmed);
    controller.finish_transfer();
    assert!(controller.transition().is_payment_sheet_visible());

    controller.send_payment();
    let config = controller.payment_session().unwrap().config;
    assert!(config.entrance_animation_started);
    assert!(config.show_credit_card_face);
    assert!(!config.show_keypad());

    controller.press_keypad_key("9");
    assert_eq!(controller.payment_session().unwrap().input.amount(), "5");

    controller.confirm_biometric();
    let config = controller.payment_session().unwrap().config;
    assert!(config.confirmed);
    assert!(config.confirmation_animation_started);

    controller.finish_transfer();
    assert!(!controller.transition().is_payment_sheet_visible());
    assert!(controller.payment_session().is_none());
    assert_eq!(controller.drag_phase(), DragPhase::Idle);
}

#[test]
fn session_actions_without_sheet_are_ignored() {
    let mut controller = controller_with_targets();
    controller.press_keypad_key("1");
    controller.keypad_backspace();
    controller.send_payment();
    controller.confirm_biometric();
    controller.finish_transfer();
    controller.start_payment_entrance();
    assert!(controller.payment_session().is_none());
    assert_eq!(controller.drag_phase(), DragPhase::Idle);
}

#[test]
fn reopening_starts_a_fresh_session() {
    let mut controller = controller_with_open_sheet(0);
    controller.press_keypad_key("4");
    controller.on_request_close_payment();

    controller.on_pointer_down(3, at(50.0, 50.0));
    controller.on_pointer_up();
    let session = controller.payment_session().unwrap();
    assert_eq!(session.recipient_name(), "Mike");
    assert_eq!(session.input.amount(), "");
}
