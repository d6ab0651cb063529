use super::TransferController;
use crate::egui_app::state::PaymentSession;
use tracing::{debug, info, warn};

impl TransferController {
    pub fn payment_session(&self) -> Option<&PaymentSession> {
        self.ui.payment.as_ref()
    }

    /// Mark the sheet's entrance animation as started; called on its first frame.
    pub fn start_payment_entrance(&mut self) {
        if let Some(session) = self.ui.payment.as_mut() {
            session.config.entrance_animation_started = true;
        }
    }

    pub fn press_keypad_key(&mut self, key: &str) {
        let Some(session) = self.ui.payment.as_mut() else {
            warn!("Keypad press {key:?} ignored: payment view is closed");
            return;
        };
        if !session.config.show_keypad() {
            return;
        }
        if session.input.push_key(key) {
            debug!("Amount is now {:?}", session.input.amount());
        }
    }

    pub fn keypad_backspace(&mut self) {
        if let Some(session) = self.ui.payment.as_mut() {
            if session.config.show_keypad() {
                session.input.backspace();
            }
        }
    }

    /// SEND: swap the keypad for the card face and the biometric prompt.
    pub fn send_payment(&mut self) {
        let Some(session) = self.ui.payment.as_mut() else {
            warn!("send_payment ignored: payment view is closed");
            return;
        };
        if !session.config.show_credit_card_face {
            session.config.show_credit_card_face = true;
            info!(
                "Sending ${} to {}",
                session.input.amount(),
                session.recipient_name()
            );
        }
    }

    /// Accept the simulated biometric check. Only valid after SEND.
    pub fn confirm_biometric(&mut self) {
        let Some(session) = self.ui.payment.as_mut() else {
            warn!("confirm_biometric ignored: payment view is closed");
            return;
        };
        if !session.config.show_credit_card_face {
            warn!("confirm_biometric ignored: payment not sent yet");
            return;
        }
        session.config.confirmed = true;
        session.config.confirmation_animation_started = true;
    }

    /// Dismiss the confirmed transfer, closing the payment view.
    pub fn finish_transfer(&mut self) {
        let confirmed = self
            .ui
            .payment
            .as_ref()
            .is_some_and(|session| session.config.confirmed);
        if !confirmed {
            warn!("finish_transfer ignored: transfer not confirmed");
            return;
        }
        self.close_payment_view();
    }
}
