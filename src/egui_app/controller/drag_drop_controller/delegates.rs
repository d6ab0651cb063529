use super::*;
use crate::contacts::ContactId;
use crate::egui_app::state::{DropTarget, PointerOffset};

impl TransferController {
    /// Pick `contact` as the drag subject. Rejected while another drag is active.
    pub fn begin_drag(&mut self, contact: ContactId, pointer: PointerOffset) -> bool {
        self.drag_drop().begin_drag(contact, pointer)
    }

    /// Move the drag avatar and re-run the drop-target hit test.
    pub fn update_drag(&mut self, pointer: PointerOffset) {
        self.drag_drop().update_drag(pointer);
    }

    /// Finish the active drag, committing a drop on the entered target.
    pub fn end_drag(&mut self) -> Option<DropTarget> {
        self.drag_drop().end_drag()
    }

    pub fn close_payment_view(&mut self) {
        self.drag_drop().close_payment_view();
    }

    pub fn close_collect_view(&mut self) {
        self.drag_drop().close_collect_view();
    }
}
