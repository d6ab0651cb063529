mod actions;
mod delegates;
mod hit_test;

pub(crate) use actions::DragDropActions;
pub use hit_test::resolve_drop_target;

use super::TransferController;

/// Borrowed view of the controller scoped to drag/drop mutations.
pub(crate) struct DragDropController<'a> {
    controller: &'a mut TransferController,
}

impl<'a> DragDropController<'a> {
    pub(crate) fn new(controller: &'a mut TransferController) -> Self {
        Self { controller }
    }
}

impl std::ops::Deref for DragDropController<'_> {
    type Target = TransferController;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl std::ops::DerefMut for DragDropController<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}
