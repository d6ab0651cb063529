use crate::contacts::{Contact, ContactId};
use tracing::warn;

/// Contact roster plus the contact currently being dragged, if any.
///
/// Each drag cycle flips one contact's `is_dragging` flag exactly twice:
/// on [`SelectionModel::pick`] and on [`SelectionModel::release`].
#[derive(Clone, Debug, Default)]
pub struct SelectionModel {
    contacts: Vec<Contact>,
    active_id: Option<ContactId>,
}

impl SelectionModel {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            active_id: None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn active_id(&self) -> Option<ContactId> {
        self.active_id
    }

    /// Mark `id` as the drag subject. Returns false when a pick is already
    /// active or the contact is unknown.
    pub fn pick(&mut self, id: ContactId) -> bool {
        if let Some(active) = self.active_id {
            warn!("pick({id}) ignored: contact {active} is already picked");
            return false;
        }
        let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) else {
            warn!("pick({id}) ignored: no such contact");
            return false;
        };
        contact.is_dragging = true;
        self.active_id = Some(id);
        true
    }

    /// Clear the active pick, returning the released contact id.
    pub fn release(&mut self) -> Option<ContactId> {
        let id = self.active_id.take()?;
        if let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) {
            contact.is_dragging = false;
        }
        Some(id)
    }

    pub fn dragging_count(&self) -> usize {
        self.contacts
            .iter()
            .filter(|contact| contact.is_dragging)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::sample_contacts;

    #[test]
    fn pick_and_release_toggle_one_contact() {
        let mut selection = SelectionModel::new(sample_contacts());
        assert!(selection.pick(4));
        assert_eq!(selection.active_id(), Some(4));
        assert!(selection.contact(4).unwrap().is_dragging);
        assert_eq!(selection.dragging_count(), 1);

        assert_eq!(selection.release(), Some(4));
        assert_eq!(selection.active_id(), None);
        assert_eq!(selection.dragging_count(), 0);
    }

    #[test]
    fn second_pick_is_rejected() {
        let mut selection = SelectionModel::new(sample_contacts());
        assert!(selection.pick(1));
        assert!(!selection.pick(2));
        assert_eq!(selection.active_id(), Some(1));
        assert!(!selection.contact(2).unwrap().is_dragging);
    }

    #[test]
    fn unknown_contact_and_empty_release_are_no_ops() {
        let mut selection = SelectionModel::new(sample_contacts());
        assert!(!selection.pick(42));
        assert_eq!(selection.release(), None);
        assert_eq!(selection.dragging_count(), 0);
    }
}
