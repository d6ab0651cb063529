//! Static sample data: the recent-contacts roster and the balance card.

use egui::{Vec2, vec2};

/// Identifier of a contact; doubles as its index in the roster.
pub type ContactId = usize;

/// A recently traded contact shown in the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub image_name: String,
    /// True only while this contact is the subject of an active drag.
    pub is_dragging: bool,
}

impl Contact {
    pub fn new(id: ContactId, name: &str, image_name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            image_name: image_name.to_string(),
            is_dragging: false,
        }
    }

    /// Initials drawn inside the avatar circle in place of a photo.
    ///
    /// One letter per word of the name, at most two.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Build the fixed roster of nine recent contacts.
pub fn sample_contacts() -> Vec<Contact> {
    const ROSTER: [(&str, &str); 9] = [
        ("Alex", "p1"),
        ("Jennifer", "p2"),
        ("Lisa", "p3"),
        ("Mike", "p4"),
        ("Sandra", "p5"),
        ("Travis", "p6"),
        ("Alex", "p7"),
        ("Mike", "p8"),
        ("Lisa", "p9"),
    ];
    ROSTER
        .iter()
        .enumerate()
        .map(|(id, (name, image))| Contact::new(id, name, image))
        .collect()
}

/// Offset of a contact avatar from the carousel center.
///
/// The first three contacts sit on the inner orbit, the rest on the outer one;
/// each is rotated `id * 100` degrees around the center.
pub fn orbit_position(id: ContactId) -> Vec2 {
    const INNER_ORBIT: f32 = 85.0;
    const OUTER_ORBIT: f32 = 150.0;
    let radius = if id < 3 { INNER_ORBIT } else { OUTER_ORBIT };
    let angle = (id as f32 * 100.0).to_radians();
    vec2(radius * angle.cos(), radius * angle.sin())
}

/// Balance card contents.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceCard {
    pub holder: String,
    pub balance: String,
    pub card_number: String,
}

impl Default for BalanceCard {
    fn default() -> Self {
        Self {
            holder: "Dimest".into(),
            balance: "$9444.00".into(),
            card_number: "9456 8944 9456 8944".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_match_indices() {
        let contacts = sample_contacts();
        assert_eq!(contacts.len(), 9);
        for (index, contact) in contacts.iter().enumerate() {
            assert_eq!(contact.id, index);
            assert!(!contact.is_dragging);
        }
        assert_eq!(contacts[1].name, "Jennifer");
        assert_eq!(contacts[8].image_name, "p9");
    }

    #[test]
    fn initials_take_one_letter_per_word() {
        assert_eq!(Contact::new(0, "Alex", "p1").initials(), "A");
        assert_eq!(Contact::new(1, "jennifer lopez", "p2").initials(), "JL");
        assert_eq!(Contact::new(2, "  Mary Ann Smith ", "p3").initials(), "MA");
        assert_eq!(Contact::new(3, "", "p4").initials(), "");
    }

    #[test]
    fn orbit_splits_inner_and_outer_rings() {
        assert!((orbit_position(0).length() - 85.0).abs() < 1e-3);
        assert!((orbit_position(2).length() - 85.0).abs() < 1e-3);
        assert!((orbit_position(3).length() - 150.0).abs() < 1e-3);
        let first = orbit_position(0);
        assert!((first.x - 85.0).abs() < 1e-3);
        assert!(first.y.abs() < 1e-3);
    }
}
