use eframe::egui::{Color32, Stroke, Visuals};

#[derive(Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub card: Color32,
    pub logo: Color32,
    pub ink: Color32,
    pub ink_muted: Color32,
    pub ring: Color32,
    pub backdrop: Color32,
}

pub fn palette() -> Palette {
    Palette {
        background: Color32::from_rgb(255, 246, 255),
        surface: Color32::WHITE,
        card: Color32::from_rgb(11, 19, 2),
        logo: Color32::from_rgb(64, 28, 84),
        ink: Color32::BLACK,
        ink_muted: Color32::from_rgb(110, 104, 112),
        ring: Color32::from_rgba_unmultiplied(0, 0, 0, 110),
        backdrop: Color32::from_rgba_unmultiplied(0, 0, 0, 60),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.override_text_color = Some(palette.ink);
    visuals.widgets.inactive.weak_bg_fill = palette.surface;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.hovered.weak_bg_fill = palette.background;
}

/// Border drawn around a menu tile while the avatar hovers it.
pub fn tile_stroke(entered: bool) -> Stroke {
    if entered {
        Stroke::new(2.0, palette().ink)
    } else {
        Stroke::NONE
    }
}
