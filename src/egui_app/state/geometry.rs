use egui::Rect;

/// Named screen regions whose layout the presentation layer reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TargetKind {
    Payment,
    Collect,
    /// Resting frame of the floating drag avatar.
    DragAvatar,
}

/// Screen-space rectangles reported after layout, in one global coordinate space.
///
/// Last write wins; a rect never reported reads back as [`Rect::ZERO`].
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryRegistry {
    payment: Rect,
    collect: Rect,
    drag_avatar: Rect,
}

impl Default for GeometryRegistry {
    fn default() -> Self {
        Self {
            payment: Rect::ZERO,
            collect: Rect::ZERO,
            drag_avatar: Rect::ZERO,
        }
    }
}

impl GeometryRegistry {
    pub fn set_rect(&mut self, target: TargetKind, rect: Rect) {
        *self.slot_mut(target) = rect;
    }

    pub fn rect(&self, target: TargetKind) -> Rect {
        match target {
            TargetKind::Payment => self.payment,
            TargetKind::Collect => self.collect,
            TargetKind::DragAvatar => self.drag_avatar,
        }
    }

    /// True once a usable (finite, non-empty) rect has been reported.
    pub fn is_reported(&self, target: TargetKind) -> bool {
        is_usable(self.rect(target))
    }

    fn slot_mut(&mut self, target: TargetKind) -> &mut Rect {
        match target {
            TargetKind::Payment => &mut self.payment,
            TargetKind::Collect => &mut self.collect,
            TargetKind::DragAvatar => &mut self.drag_avatar,
        }
    }
}

/// Strict overlap test used for drop-target hits.
///
/// Rects that only share an edge do not overlap, and an empty or non-finite
/// rect never overlaps anything, so unreported targets are never entered.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    if !is_usable(a) || !is_usable(b) {
        return false;
    }
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

fn is_usable(rect: Rect) -> bool {
    rect.is_finite() && rect.width() > 0.0 && rect.height() > 0.0
}
