use super::{EguiApp, style};
use crate::contacts::{Contact, orbit_position};
use crate::egui_app::state::{PointerOffset, TargetKind};
use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, emath::Rot2, vec2,
};
use std::f32::consts::TAU;

const CAROUSEL_HEIGHT: f32 = 340.0;
const ROTATION_PERIOD_SECS: f64 = 10.0;
const RING_RADII: [f32; 3] = [150.0, 85.0, 30.0];
const AVATAR_TINTS: [Color32; 5] = [
    Color32::from_rgb(232, 163, 152),
    Color32::from_rgb(150, 196, 232),
    Color32::from_rgb(178, 214, 160),
    Color32::from_rgb(236, 204, 130),
    Color32::from_rgb(196, 168, 226),
];

impl EguiApp {
    /// Orbiting contact avatars; pressing one starts a drag.
    pub(super) fn render_carousel(&mut self, ui: &mut Ui) {
        let (area, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), CAROUSEL_HEIGHT),
            Sense::hover(),
        );
        let center = area.center();
        let avatar_size = self.controller.settings().avatar_size;
        let resting = Rect::from_center_size(center, Vec2::splat(avatar_size));
        self.controller.report_rect(TargetKind::DragAvatar, resting);

        let turn = ui.input(|i| (i.time % ROTATION_PERIOD_SECS / ROTATION_PERIOD_SECS) as f32) * TAU;
        paint_rings(ui, center, turn);

        let rotation = Rot2::from_angle(turn);
        let contacts = self.controller.ui.selection.contacts().to_vec();
        for contact in &contacts {
            let pos = center + rotation * orbit_position(contact.id);
            let rect = Rect::from_center_size(pos, Vec2::splat(avatar_size));
            let response = ui.interact(rect, ui.id().with(("contact", contact.id)), Sense::drag());
            if response.drag_started() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let offset = PointerOffset::from(pointer - resting.min);
                    self.controller.on_pointer_down(contact.id, offset);
                }
            }
            if !contact.is_dragging {
                paint_avatar(ui.painter(), pos, avatar_size * 0.5, contact);
            }
        }
        ui.ctx().request_repaint();
    }
}

/// Three dashed rings; the middle one turns the opposite way.
fn paint_rings(ui: &Ui, center: Pos2, turn: f32) {
    const SEGMENTS: usize = 96;
    let stroke = Stroke::new(1.0, style::palette().ring);
    for (index, radius) in RING_RADII.into_iter().enumerate() {
        let phase = if index == 1 { -turn } else { turn };
        let points: Vec<Pos2> = (0..=SEGMENTS)
            .map(|step| {
                let angle = phase + step as f32 / SEGMENTS as f32 * TAU;
                center + radius * Vec2::angled(angle)
            })
            .collect();
        ui.painter()
            .extend(Shape::dashed_line(&points, stroke, 4.0, 4.0));
    }
}

pub(super) fn paint_avatar(painter: &Painter, center: Pos2, radius: f32, contact: &Contact) {
    let palette = style::palette();
    painter.circle_filled(center, radius, palette.surface);
    painter.circle_filled(
        center,
        (radius - 3.0).max(0.0),
        AVATAR_TINTS[contact.id % AVATAR_TINTS.len()],
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        contact.initials(),
        FontId::proportional(radius * 0.8),
        palette.ink,
    );
}
