use super::EguiApp;
use super::carousel::paint_avatar;
use crate::egui_app::state::{PointerOffset, TargetKind};
use eframe::egui::{self, Id, LayerId, Order};

impl EguiApp {
    /// Stream pointer updates into the active drag and draw the floating avatar.
    pub(super) fn render_drag_overlay(&mut self, ctx: &egui::Context) {
        if !self.controller.drag_flags().is_dragging {
            return;
        }
        let (latest, released, primary_down, pointer_gone) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.any_released(),
                i.pointer.primary_down(),
                i.events
                    .iter()
                    .any(|event| matches!(event, egui::Event::PointerGone)),
            )
        });
        let resting = self.controller.ui.geometry.rect(TargetKind::DragAvatar);
        if let Some(pos) = latest {
            self.controller
                .on_pointer_move(PointerOffset::from(pos - resting.min));
        }
        if released {
            self.controller.on_pointer_up();
            return;
        }
        if pointer_gone || !primary_down {
            // Safety net for a release egui never reported.
            self.controller.on_pointer_cancel();
            return;
        }

        let Some(contact) = self
            .controller
            .active_contact()
            .and_then(|id| self.controller.ui.selection.contact(id))
        else {
            return;
        };
        let avatar = self.controller.avatar_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("drag_avatar")));
        paint_avatar(&painter, avatar.center(), avatar.width() * 0.5, contact);
    }
}
