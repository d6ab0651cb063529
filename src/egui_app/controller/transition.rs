use crate::egui_app::state::{TargetKind, UiState};
use egui::{Rect, pos2};

/// Shared identity of the Payment tile and the full-screen sheet it morphs into.
///
/// Entrance and exit animations must key off this id so both directions
/// animate one continuous element.
pub const PAYMENT_MORPH_ID: &str = "payment_sheet_morph";

/// Gap left above the full-screen sheet.
pub const SHEET_TOP_INSET: f32 = 100.0;

/// Read-only view deciding which full-screen sheet is shown and where it morphs from.
///
/// Holds no state of its own; visibility is forwarded from the drop flags.
pub struct TransitionCoordinator<'a> {
    ui: &'a UiState,
}

impl<'a> TransitionCoordinator<'a> {
    pub(crate) fn new(ui: &'a UiState) -> Self {
        Self { ui }
    }

    pub fn is_payment_sheet_visible(&self) -> bool {
        self.ui.drag.flags.is_dropped_on_payment
    }

    pub fn is_collect_sheet_visible(&self) -> bool {
        self.ui.drag.flags.is_dropped_on_collect
    }

    pub fn morph_id(&self) -> &'static str {
        PAYMENT_MORPH_ID
    }

    /// The Payment tile's last reported rect.
    pub fn morph_source(&self) -> Rect {
        self.ui.geometry.rect(TargetKind::Payment)
    }

    /// Final sheet rect inside `screen`.
    pub fn morph_destination(&self, screen: Rect) -> Rect {
        let inset = SHEET_TOP_INSET.min(screen.height().max(0.0));
        Rect::from_min_max(pos2(screen.min.x, screen.min.y + inset), screen.max)
    }
}
