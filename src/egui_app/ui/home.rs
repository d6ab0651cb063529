use super::{EguiApp, style};
use crate::egui_app::state::DropTarget;
use eframe::egui::{self, Align2, FontId, Rect, RichText, Sense, StrokeKind, Ui, vec2};

const TILE_HEIGHT: f32 = 150.0;
const CARD_HEIGHT: f32 = 220.0;

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            let (profile, _) = ui.allocate_exact_size(vec2(50.0, 50.0), Sense::hover());
            ui.painter()
                .circle_filled(profile.center(), 25.0, palette.ink);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for glyph in ["⋮", "🔔"] {
                    let (rect, _) = ui.allocate_exact_size(vec2(50.0, 50.0), Sense::hover());
                    let painter = ui.painter();
                    painter.circle_filled(rect.center(), 25.0, palette.surface);
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        glyph,
                        FontId::proportional(20.0),
                        palette.ink,
                    );
                    ui.add_space(12.0);
                }
            });
        });
    }

    pub(super) fn render_balance_card(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let balance = &self.controller.ui.balance;
        let (rect, _) =
            ui.allocate_exact_size(vec2(ui.available_width(), CARD_HEIGHT), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 25.0, palette.card);
        let text_left = rect.left() + 16.0;
        painter.text(
            egui::pos2(text_left, rect.top() + 20.0),
            Align2::LEFT_TOP,
            format!("Hello, {}\nBalance", balance.holder),
            FontId::proportional(20.0),
            palette.surface,
        );
        painter.text(
            egui::pos2(rect.right() - 16.0, rect.top() + 16.0),
            Align2::RIGHT_TOP,
            "P",
            FontId::proportional(30.0),
            palette.surface,
        );
        painter.text(
            egui::pos2(text_left, rect.top() + 90.0),
            Align2::LEFT_TOP,
            &balance.balance,
            FontId::proportional(30.0),
            palette.surface,
        );
        let footer = Rect::from_min_size(
            egui::pos2(text_left, rect.bottom() - 66.0),
            vec2(rect.width() - 32.0, 50.0),
        );
        painter.rect_filled(footer, 15.0, palette.surface);
        painter.text(
            footer.left_center() + vec2(16.0, 0.0),
            Align2::LEFT_CENTER,
            "Your Transaction",
            FontId::proportional(16.0),
            palette.ink,
        );
        painter.text(
            footer.right_center() - vec2(16.0, 0.0),
            Align2::RIGHT_CENTER,
            "⌄",
            FontId::proportional(16.0),
            palette.ink,
        );
    }

    /// Draw the Payment and Collect tiles and report their rects as drop targets.
    pub(super) fn render_menu_tiles(&mut self, ui: &mut Ui) {
        let width = (ui.available_width() - ui.spacing().item_spacing.x) * 0.5;
        ui.horizontal(|ui| {
            for (target, glyph, title) in [
                (DropTarget::Payment, "💳", "Payment"),
                (DropTarget::Collect, "$", "Collect Money"),
            ] {
                let (rect, _) = ui.allocate_exact_size(vec2(width, TILE_HEIGHT), Sense::hover());
                self.controller.report_rect(target.geometry_kind(), rect);
                let entered = self.controller.drag_flags().is_entered(target);
                // The Payment tile morphs into the sheet; hide it while the sheet owns the shape.
                if target == DropTarget::Payment
                    && self.controller.transition().is_payment_sheet_visible()
                {
                    continue;
                }
                paint_tile(ui, rect, glyph, title, entered);
            }
        });
    }

    pub(super) fn render_recent_title(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Recently traded").size(20.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("›").size(20.0));
            });
        });
    }
}

fn paint_tile(ui: &Ui, rect: Rect, glyph: &str, title: &str, entered: bool) {
    let palette = style::palette();
    let painter = ui.painter();
    painter.rect_filled(rect, 20.0, palette.surface);
    painter.rect_stroke(rect, 20.0, style::tile_stroke(entered), StrokeKind::Inside);
    let logo_center = rect.left_center() + vec2(38.0, -16.0);
    painter.circle_filled(logo_center, 22.5, palette.logo);
    painter.text(
        logo_center,
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(18.0),
        palette.surface,
    );
    painter.text(
        rect.left_center() + vec2(16.0, 26.0),
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(16.0),
        palette.ink,
    );
}
