use crate::egui_app::state::{DropTarget, GeometryRegistry, rects_overlap};
use egui::Rect;

/// Drop target under `hit_rect`, if any.
///
/// When the avatar overlaps both targets the higher-priority one (Payment) wins.
pub fn resolve_drop_target(geometry: &GeometryRegistry, hit_rect: Rect) -> Option<DropTarget> {
    DropTarget::ALL
        .into_iter()
        .filter(|target| rects_overlap(hit_rect, geometry.rect(target.geometry_kind())))
        .max_by_key(|target| target.priority())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::state::TargetKind;
    use egui::{pos2, vec2};

    fn registry(payment: Rect, collect: Rect) -> GeometryRegistry {
        let mut geometry = GeometryRegistry::default();
        geometry.set_rect(TargetKind::Payment, payment);
        geometry.set_rect(TargetKind::Collect, collect);
        geometry
    }

    #[test]
    fn overlapping_both_targets_resolves_to_payment() {
        let geometry = registry(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)),
            Rect::from_min_size(pos2(90.0, 0.0), vec2(100.0, 100.0)),
        );
        let avatar = Rect::from_min_size(pos2(70.0, 20.0), vec2(60.0, 60.0));
        assert_eq!(
            resolve_drop_target(&geometry, avatar),
            Some(DropTarget::Payment)
        );
    }

    #[test]
    fn collect_only_and_miss() {
        let geometry = registry(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)),
            Rect::from_min_size(pos2(200.0, 0.0), vec2(100.0, 100.0)),
        );
        let over_collect = Rect::from_min_size(pos2(220.0, 20.0), vec2(60.0, 60.0));
        assert_eq!(
            resolve_drop_target(&geometry, over_collect),
            Some(DropTarget::Collect)
        );
        let nowhere = Rect::from_min_size(pos2(500.0, 500.0), vec2(60.0, 60.0));
        assert_eq!(resolve_drop_target(&geometry, nowhere), None);
    }

    #[test]
    fn unreported_targets_are_never_hit() {
        let geometry = GeometryRegistry::default();
        let avatar = Rect::from_min_size(pos2(-30.0, -30.0), vec2(60.0, 60.0));
        assert_eq!(resolve_drop_target(&geometry, avatar), None);
    }
}
