//! egui renderer for the fund transfer demo.
//!
//! Each frame reports layout rects to the controller, forwards pointer
//! gestures, then draws from the controller's state.

mod carousel;
mod drag_overlay;
mod home;
mod payment_sheet;
pub mod style;

use crate::egui_app::controller::TransferController;
use eframe::egui::{self, Frame, Margin, Vec2};

/// Smallest window that still fits the carousel and the keypad.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(390.0, 760.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: TransferController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted settings.
    pub fn new() -> Result<Self, String> {
        let mut controller = TransferController::default();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let panel_frame = Frame::new()
            .fill(style::palette().background)
            .inner_margin(Margin::symmetric(16, 24));
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                self.render_top_bar(ui);
                ui.add_space(24.0);
                self.render_balance_card(ui);
                ui.add_space(20.0);
                let scroll_enabled = self.controller.scroll_enabled();
                egui::ScrollArea::vertical()
                    .id_salt("recent_scroll")
                    .scroll([false, scroll_enabled])
                    .show(ui, |ui| {
                        self.render_menu_tiles(ui);
                        ui.add_space(20.0);
                        self.render_recent_title(ui);
                        ui.add_space(30.0);
                        self.render_carousel(ui);
                    });
            });
        self.render_drag_overlay(ctx);
        self.render_payment_sheet(ctx);
        self.render_collect_sheet(ctx);
    }
}
