use super::carousel::paint_avatar;
use super::{EguiApp, style};
use crate::egui_app::state::KEYPAD_ROWS;
use eframe::egui::{
    self, Align2, Area, Button, FontId, Id, Order, Pos2, Rect, RichText, Sense, Ui, UiBuilder, pos2,
    vec2,
};

const MORPH_SECS: f32 = 0.35;
const ENTRANCE_SECS: f32 = 0.7;
const CONFIRM_SECS: f32 = 1.5;
const BLINK_SECS: f64 = 0.7;

impl EguiApp {
    /// Full-screen transfer sheet, morphing out of the Payment tile.
    pub(super) fn render_payment_sheet(&mut self, ctx: &egui::Context) {
        let transition = self.controller.transition();
        let visible = transition.is_payment_sheet_visible();
        let morph_id = Id::new(transition.morph_id());
        let screen = ctx.viewport_rect();
        let source = transition.morph_source();
        let destination = transition.morph_destination(screen);
        let progress = ctx.animate_bool_with_time(morph_id, visible, MORPH_SECS);
        if progress <= 0.0 {
            return;
        }
        let sheet = source.lerp_towards(&destination, progress);
        let palette = style::palette();

        Area::new(morph_id.with("layer"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let tapped_outside = modal_backdrop(ui, screen, sheet, progress);
                ui.painter().rect_filled(sheet, 25.0, palette.background);
                if tapped_outside {
                    self.controller.on_request_close_payment();
                    return;
                }
                if visible && progress >= 1.0 {
                    ui.scope_builder(UiBuilder::new().max_rect(sheet.shrink(16.0)), |ui| {
                        self.render_payment_contents(ui);
                    });
                }
            });
    }

    fn render_payment_contents(&mut self, ui: &mut Ui) {
        let ctx = ui.ctx().clone();
        if self
            .controller
            .payment_session()
            .is_some_and(|session| !session.config.entrance_animation_started)
        {
            self.controller.start_payment_entrance();
        }
        let Some(session) = self.controller.payment_session().cloned() else {
            return;
        };
        let palette = style::palette();
        let entrance = ctx.animate_bool_with_time(
            Id::new("payment_entrance"),
            session.config.entrance_animation_started,
            ENTRANCE_SECS,
        );

        ui.vertical_centered(|ui| {
            if session.config.show_credit_card_face {
                self.render_card_face(ui);
            }
            ui.add_space(12.0);
            let (slot, _) = ui.allocate_exact_size(vec2(100.0, 100.0), Sense::hover());
            if let Some(recipient) = session.recipient.as_ref() {
                paint_avatar(ui.painter(), slot.center(), 50.0 * entrance, recipient);
            }
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("Transfer to {}", session.recipient_name())).size(18.0),
            );
            let blink_on = ctx.input(|i| (i.time / BLINK_SECS) as i64 % 2 == 0);
            let cursor = if blink_on && session.config.show_keypad() { "|" } else { " " };
            ui.label(
                RichText::new(format!("$ {}{cursor}", session.input.amount()))
                    .size(48.0)
                    .strong()
                    .color(palette.ink),
            );
            ui.add_space(12.0);
            if session.config.show_keypad() {
                self.render_keypad(ui);
            } else {
                self.render_confirmation(ui, &ctx, session.config.confirmation_animation_started);
            }
        });
        ctx.request_repaint();
    }

    fn render_keypad(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            egui::Grid::new("keypad")
                .spacing(vec2(8.0, 8.0))
                .show(ui, |ui| {
                    for row in KEYPAD_ROWS {
                        for key in row {
                            if key.is_empty() {
                                ui.label("");
                                continue;
                            }
                            let button = Button::new(RichText::new(key).size(28.0).strong());
                            if ui.add_sized([70.0, 48.0], button).clicked() {
                                self.controller.press_keypad_key(key);
                            }
                        }
                        ui.end_row();
                    }
                });
            ui.vertical(|ui| {
                if ui
                    .add_sized([70.0, 48.0], Button::new(RichText::new("⌫").size(24.0)))
                    .clicked()
                {
                    self.controller.keypad_backspace();
                }
                let send = Button::new(RichText::new("SEND").size(22.0).color(egui::Color32::WHITE))
                    .fill(style::palette().ink);
                if ui.add_sized([70.0, 160.0], send).clicked() {
                    self.controller.send_payment();
                }
            });
        });
    }

    fn render_card_face(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let balance = &self.controller.ui.balance;
        let (card, _) = ui.allocate_exact_size(vec2(300.0, 170.0), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(card, 15.0, palette.card);
        let inner = card.shrink(16.0);
        let font = |size: f32| FontId::proportional(size);
        painter.text(inner.left_top(), Align2::LEFT_TOP, "Credit Card", font(16.0), palette.surface);
        painter.text(inner.left_center(), Align2::LEFT_CENTER, "▮", font(32.0), palette.surface);
        painter.text(
            inner.right_center(),
            Align2::RIGHT_CENTER,
            &balance.card_number,
            font(16.0),
            palette.surface,
        );
        painter.text(
            inner.left_bottom(),
            Align2::LEFT_BOTTOM,
            format!("Card Holder\n{}", balance.holder),
            font(12.0),
            palette.surface,
        );
        painter.text(inner.right_bottom(), Align2::RIGHT_BOTTOM, "VISA", font(30.0), palette.surface);
    }

    /// Face ID prompt, then the checkmark that completes the transfer.
    fn render_confirmation(&mut self, ui: &mut Ui, ctx: &egui::Context, started: bool) {
        let progress = ctx.animate_bool_with_time(Id::new("payment_confirm"), started, CONFIRM_SECS);
        let palette = style::palette();
        if !started {
            if ui
                .add_sized([100.0, 100.0], Button::new(RichText::new("Face ID").size(20.0)))
                .clicked()
            {
                self.controller.confirm_biometric();
            }
            return;
        }
        let (slot, response) = ui.allocate_exact_size(vec2(100.0, 100.0), Sense::click());
        let painter = ui.painter();
        let center = slot.center();
        let stroke = egui::Stroke::new(4.0, palette.ink);
        painter.circle_stroke(center, 40.0 + 16.0 * (1.0 - progress), stroke);
        let check = [
            pos2(center.x - 18.0, center.y),
            pos2(center.x - 4.0, center.y + 14.0),
            pos2(center.x + 20.0, center.y - 12.0),
        ];
        let drawn = ((check.len() as f32) * progress).ceil() as usize;
        if drawn >= 2 {
            painter.line(check[..drawn.min(check.len())].to_vec(), stroke);
        }
        if response.clicked() && progress >= 1.0 {
            self.controller.finish_transfer();
        }
    }

    /// Placeholder sheet acknowledging a drop on Collect Money.
    pub(super) fn render_collect_sheet(&mut self, ctx: &egui::Context) {
        if !self.controller.transition().is_collect_sheet_visible() {
            return;
        }
        let screen = ctx.viewport_rect();
        let sheet = Rect::from_center_size(screen.center(), vec2(280.0, 160.0));
        Area::new(Id::new("collect_sheet"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let palette = style::palette();
                if modal_backdrop(ui, screen, sheet, 1.0) {
                    self.controller.close_collect_view();
                    return;
                }
                ui.painter().rect_filled(sheet, 20.0, palette.surface);
                ui.scope_builder(UiBuilder::new().max_rect(sheet.shrink(16.0)), |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("Collect Money").size(20.0).strong());
                        ui.label(
                            RichText::new("Requests are not available yet")
                                .color(palette.ink_muted),
                        );
                        ui.add_space(12.0);
                        if ui.button("Close").clicked() {
                            self.controller.close_collect_view();
                        }
                    });
                });
            });
    }
}

/// Full-screen dimmed layer that swallows clicks meant for the home screen.
///
/// Returns true when the click landed outside `sheet`.
fn modal_backdrop(ui: &mut Ui, screen: Rect, sheet: Rect, opacity: f32) -> bool {
    let (backdrop, response) = ui.allocate_exact_size(screen.size(), Sense::click());
    ui.painter().rect_filled(
        backdrop,
        0.0,
        style::palette().backdrop.gamma_multiply(opacity),
    );
    response.clicked() && is_outside_tap(response.interact_pointer_pos(), sheet)
}

fn is_outside_tap(pos: Option<Pos2>, sheet: Rect) -> bool {
    pos.is_some_and(|pos| !sheet.contains(pos))
}
