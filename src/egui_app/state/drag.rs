use super::geometry::TargetKind;
use crate::contacts::ContactId;
use egui::{Pos2, Rect, Vec2, vec2};

/// Drop targets that react to the dragged avatar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DropTarget {
    Payment,
    Collect,
}

impl DropTarget {
    pub const ALL: [DropTarget; 2] = [DropTarget::Payment, DropTarget::Collect];

    /// Tie-break when the avatar overlaps several targets; higher wins.
    pub(crate) fn priority(self) -> u8 {
        match self {
            DropTarget::Payment => 2,
            DropTarget::Collect => 1,
        }
    }

    pub fn geometry_kind(self) -> TargetKind {
        match self {
            DropTarget::Payment => TargetKind::Payment,
            DropTarget::Collect => TargetKind::Collect,
        }
    }
}

/// Pointer position relative to the gesture origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const ZERO: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        vec2(self.x, self.y)
    }
}

impl From<Vec2> for PointerOffset {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Enter/drop flags observed by the presentation layer.
///
/// The enter flags are mutually exclusive and only set while `is_dragging`;
/// at most one drop flag is raised per drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragDropState {
    pub is_entered_payment: bool,
    pub is_entered_collect: bool,
    pub is_dragging: bool,
    pub is_dropped_on_payment: bool,
    pub is_dropped_on_collect: bool,
}

impl DragDropState {
    pub fn entered(&self) -> Option<DropTarget> {
        if self.is_entered_payment {
            Some(DropTarget::Payment)
        } else if self.is_entered_collect {
            Some(DropTarget::Collect)
        } else {
            None
        }
    }

    pub fn is_entered(&self, target: DropTarget) -> bool {
        match target {
            DropTarget::Payment => self.is_entered_payment,
            DropTarget::Collect => self.is_entered_collect,
        }
    }

    pub fn phase(&self) -> DragPhase {
        if self.is_dragging {
            DragPhase::Dragging
        } else if self.is_dropped_on_payment {
            DragPhase::PendingPaymentOpen
        } else if self.is_dropped_on_collect {
            DragPhase::PendingCollectOpen
        } else {
            DragPhase::Idle
        }
    }
}

/// Coarse lifecycle of a single drag, derived from [`DragDropState`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging,
    PendingPaymentOpen,
    PendingCollectOpen,
}

/// Drag/hover state shared between the carousel, the menu tiles and the payment sheet.
#[derive(Clone, Debug)]
pub struct DragState {
    pub flags: DragDropState,
    pub pointer: PointerOffset,
    /// Top-left corner of the floating avatar's hit-rect.
    pub avatar_pos: Pos2,
    /// Carousel scrolling is withdrawn while a drag is in flight.
    pub scroll_enabled: bool,
    /// Most recently picked contact; survives the drop so the sheet can name the recipient.
    pub last_picked: Option<ContactId>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            flags: DragDropState::default(),
            pointer: PointerOffset::ZERO,
            avatar_pos: Pos2::ZERO,
            scroll_enabled: true,
            last_picked: None,
        }
    }
}

impl DragState {
    /// Current hit-rect of the floating avatar.
    pub fn avatar_rect(&self, avatar_size: f32) -> Rect {
        Rect::from_min_size(self.avatar_pos, Vec2::splat(avatar_size))
    }

    /// Set one enter flag, clearing the other; returns true when anything changed.
    pub(crate) fn set_entered(&mut self, entered: Option<DropTarget>) -> bool {
        let payment = entered == Some(DropTarget::Payment);
        let collect = entered == Some(DropTarget::Collect);
        let mut changed = false;
        // Clear before set so the two flags are never both raised.
        if self.flags.is_entered_collect && !collect {
            self.flags.is_entered_collect = false;
            changed = true;
        }
        if self.flags.is_entered_payment && !payment {
            self.flags.is_entered_payment = false;
            changed = true;
        }
        if payment && !self.flags.is_entered_payment {
            self.flags.is_entered_payment = true;
            changed = true;
        }
        if collect && !self.flags.is_entered_collect {
            self.flags.is_entered_collect = true;
            changed = true;
        }
        changed
    }
}
