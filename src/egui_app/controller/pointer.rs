use super::TransferController;
use crate::contacts::ContactId;
use crate::egui_app::state::PointerOffset;
use tracing::debug;

/// Gesture input from the presentation layer, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down {
        contact: ContactId,
        pos: PointerOffset,
    },
    Move {
        pos: PointerOffset,
    },
    Up,
    /// The gesture was interrupted, e.g. the pointer left the window.
    Cancel,
}

impl TransferController {
    /// Press on a contact avatar: begin the drag and hit-test the press position.
    pub fn on_pointer_down(&mut self, contact: ContactId, pos: PointerOffset) {
        if self.begin_drag(contact, pos) {
            self.update_drag(pos);
        }
    }

    pub fn on_pointer_move(&mut self, pos: PointerOffset) {
        self.update_drag(pos);
    }

    pub fn on_pointer_up(&mut self) {
        self.end_drag();
    }

    /// Cancelled gestures drop exactly like a release so no drag is left dangling.
    pub fn on_pointer_cancel(&mut self) {
        if self.ui.drag.flags.is_dragging {
            debug!("Pointer gesture cancelled; ending drag");
        }
        self.end_drag();
    }

    pub fn on_request_close_payment(&mut self) {
        self.close_payment_view();
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { contact, pos } => self.on_pointer_down(contact, pos),
            PointerEvent::Move { pos } => self.on_pointer_move(pos),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Cancel => self.on_pointer_cancel(),
        }
    }

    pub fn handle_pointer_events(&mut self, events: impl IntoIterator<Item = PointerEvent>) {
        for event in events {
            self.handle_pointer_event(event);
        }
    }
}
