//! Shared state types for the egui UI.

mod drag;
mod geometry;
mod payment;
mod selection;

pub use drag::*;
pub use geometry::*;
pub use payment::*;
pub use selection::*;

use crate::contacts::{BalanceCard, Contact, ContactId, sample_contacts};
use egui::Rect;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub drag: DragState,
    pub geometry: GeometryRegistry,
    pub selection: SelectionModel,
    /// Open transfer screen, present while a payment drop is pending.
    pub payment: Option<PaymentSession>,
    pub balance: BalanceCard,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            drag: DragState::default(),
            geometry: GeometryRegistry::default(),
            selection: SelectionModel::new(sample_contacts()),
            payment: None,
            balance: BalanceCard::default(),
        }
    }
}

/// Read-only copy of everything a frame needs to draw the drag interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferSnapshot {
    pub flags: DragDropState,
    pub active_id: Option<ContactId>,
    pub avatar_rect: Rect,
    pub contacts: Vec<Contact>,
    pub scroll_enabled: bool,
}
