//! Owner of all interaction state; the egui renderer reads `ui` and feeds events back.

mod drag_drop_controller;
mod payment;
mod pointer;
mod transition;

#[cfg(test)]
mod tests;

use drag_drop_controller::DragDropController;
pub use drag_drop_controller::resolve_drop_target;
pub use pointer::PointerEvent;
pub use transition::{PAYMENT_MORPH_ID, SHEET_TOP_INSET, TransitionCoordinator};

use crate::config::{self, InteractionSettings};
use crate::contacts::ContactId;
use crate::egui_app::state::*;
use egui::Rect;
use tracing::debug;

/// Maintains the drag/drop session and bridges it to the egui UI.
///
/// There is exactly one instance per app run; every mutation goes through it.
pub struct TransferController {
    pub ui: UiState,
    settings: InteractionSettings,
}

impl Default for TransferController {
    fn default() -> Self {
        Self::new(InteractionSettings::default())
    }
}

impl TransferController {
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            ui: UiState::default(),
            settings,
        }
    }

    /// Load persisted settings from the app root.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let settings = config::load_or_default()?;
        self.settings = settings.interaction;
        debug!("Loaded interaction settings: {:?}", self.settings);
        Ok(())
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    /// Layout callback: store the latest screen rect of a target.
    pub fn report_rect(&mut self, target: TargetKind, rect: Rect) {
        if self.ui.geometry.rect(target) == rect {
            return;
        }
        self.ui.geometry.set_rect(target, rect);
        // The hidden avatar rests on its reported frame until a drag moves it.
        if target == TargetKind::DragAvatar && !self.ui.drag.flags.is_dragging {
            self.ui.drag.avatar_pos = rect.min;
        }
        debug!("report_rect: target={:?} rect={:?}", target, rect);
    }

    pub fn drag_flags(&self) -> DragDropState {
        self.ui.drag.flags
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.ui.drag.flags.phase()
    }

    pub fn active_contact(&self) -> Option<ContactId> {
        self.ui.selection.active_id()
    }

    /// Current hit-rect of the floating drag avatar.
    pub fn avatar_rect(&self) -> Rect {
        self.ui.drag.avatar_rect(self.settings.avatar_size)
    }

    /// Whether the carousel may currently react to scroll gestures.
    pub fn scroll_enabled(&self) -> bool {
        self.ui.drag.scroll_enabled
    }

    pub fn snapshot(&self) -> TransferSnapshot {
        TransferSnapshot {
            flags: self.ui.drag.flags,
            active_id: self.ui.selection.active_id(),
            avatar_rect: self.avatar_rect(),
            contacts: self.ui.selection.contacts().to_vec(),
            scroll_enabled: self.ui.drag.scroll_enabled,
        }
    }

    pub fn transition(&self) -> TransitionCoordinator<'_> {
        TransitionCoordinator::new(&self.ui)
    }

    pub(crate) fn drag_drop(&mut self) -> DragDropController<'_> {
        DragDropController::new(self)
    }
}
