use super::DragDropController;
use super::hit_test::resolve_drop_target;
use crate::contacts::ContactId;
use crate::egui_app::state::{DragPhase, DropTarget, PaymentSession, PointerOffset, TargetKind};
use egui::{Pos2, Vec2};
use tracing::{debug, info, warn};

pub(crate) trait DragDropActions {
    fn begin_drag(&mut self, contact: ContactId, pointer: PointerOffset) -> bool;
    fn update_drag(&mut self, pointer: PointerOffset);
    fn end_drag(&mut self) -> Option<DropTarget>;
    fn close_payment_view(&mut self);
    fn close_collect_view(&mut self);
}

impl DragDropActions for DragDropController<'_> {
    fn begin_drag(&mut self, contact: ContactId, pointer: PointerOffset) -> bool {
        if self.ui.drag.flags.is_dragging {
            warn!(
                "begin_drag({contact}) ignored: contact {:?} is already being dragged",
                self.ui.selection.active_id()
            );
            return false;
        }
        let phase = self.ui.drag.flags.phase();
        if phase != DragPhase::Idle {
            warn!("begin_drag({contact}) ignored: previous drop still pending ({phase:?})");
            return false;
        }
        if !self.ui.selection.pick(contact) {
            return false;
        }
        self.ui.drag.flags.is_dragging = true;
        self.ui.drag.last_picked = Some(contact);
        if self.settings.scroll_lock_while_dragging {
            self.ui.drag.scroll_enabled = false;
        }
        self.place_avatar(pointer);
        info!("Begin drag contact={contact} pointer={pointer:?}");
        true
    }

    fn update_drag(&mut self, pointer: PointerOffset) {
        if !self.ui.drag.flags.is_dragging {
            debug!("update_drag ignored: no active drag");
            return;
        }
        self.place_avatar(pointer);
        let hit_rect = self.avatar_rect();
        let target = resolve_drop_target(&self.ui.geometry, hit_rect);
        if self.ui.drag.set_entered(target) {
            debug!("Drag target changed: entered={target:?} hit_rect={hit_rect:?}");
        }
    }

    fn end_drag(&mut self) -> Option<DropTarget> {
        if !self.ui.drag.flags.is_dragging {
            warn!("end_drag ignored: no active drag");
            return None;
        }
        let origin = self.avatar_origin();
        let drag = &mut self.ui.drag;
        drag.flags.is_dragging = false;
        drag.scroll_enabled = true;
        drag.pointer = PointerOffset::ZERO;
        drag.avatar_pos = origin;

        let dropped = drag.flags.entered();
        match dropped {
            Some(DropTarget::Payment) => {
                drag.flags.is_entered_payment = false;
                drag.flags.is_dropped_on_payment = true;
            }
            Some(DropTarget::Collect) => {
                drag.flags.is_entered_collect = false;
                drag.flags.is_dropped_on_collect = true;
            }
            None => {}
        }
        let released = self.ui.selection.release();
        if dropped == Some(DropTarget::Payment) {
            self.open_payment_session();
        }
        info!("End drag contact={released:?} dropped_on={dropped:?}");
        dropped
    }

    fn close_payment_view(&mut self) {
        let was_open = self.ui.drag.flags.is_dropped_on_payment || self.ui.payment.is_some();
        self.ui.drag.flags.is_dropped_on_payment = false;
        self.ui.payment = None;
        if was_open {
            info!("Payment view closed");
        }
    }

    fn close_collect_view(&mut self) {
        if std::mem::take(&mut self.ui.drag.flags.is_dropped_on_collect) {
            info!("Collect view closed");
        }
    }
}

impl DragDropController<'_> {
    /// Resting top-left corner of the drag avatar.
    fn avatar_origin(&self) -> Pos2 {
        self.ui.geometry.rect(TargetKind::DragAvatar).min
    }

    /// Center the avatar on the pointer, measured from its resting corner.
    fn place_avatar(&mut self, pointer: PointerOffset) {
        let half = Vec2::splat(self.settings.avatar_half_extent());
        let origin = self.avatar_origin();
        self.ui.drag.pointer = pointer;
        self.ui.drag.avatar_pos = origin + pointer.to_vec2() - half;
    }

    fn open_payment_session(&mut self) {
        let recipient = self
            .ui
            .drag
            .last_picked
            .and_then(|id| self.ui.selection.contact(id))
            .cloned();
        info!(
            "Payment view opened for {:?}",
            recipient.as_ref().map(|contact| contact.name.as_str())
        );
        let amount_max_len = self.settings.amount_max_len;
        self.ui.payment = Some(PaymentSession::new(recipient, amount_max_len));
    }
}
