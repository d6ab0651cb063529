use crate::contacts::Contact;

/// Keypad rows; the empty cell is a spacer that ignores presses.
pub const KEYPAD_ROWS: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["0", "", "."],
];

/// Amount typed on the transfer keypad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountInput {
    amount: String,
    max_len: usize,
}

impl AmountInput {
    pub fn new(max_len: usize) -> Self {
        Self {
            amount: String::new(),
            max_len,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Apply a keypad press. Returns true when the amount changed.
    pub fn push_key(&mut self, key: &str) -> bool {
        if self.amount.chars().count() >= self.max_len {
            return false;
        }
        match key {
            "." if self.amount.contains('.') => false,
            "." => {
                self.amount.push('.');
                true
            }
            digit if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) => {
                self.amount.push_str(digit);
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        self.amount.pop().is_some()
    }
}

/// Ephemeral flags driving the transfer screen's staged animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentSessionConfig {
    pub entrance_animation_started: bool,
    pub show_credit_card_face: bool,
    pub confirmed: bool,
    pub confirmation_animation_started: bool,
}

impl PaymentSessionConfig {
    pub fn show_keypad(&self) -> bool {
        !self.show_credit_card_face
    }
}

/// State of one open transfer screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentSession {
    pub recipient: Option<Contact>,
    pub input: AmountInput,
    pub config: PaymentSessionConfig,
}

impl PaymentSession {
    pub fn new(recipient: Option<Contact>, amount_max_len: usize) -> Self {
        Self {
            recipient,
            input: AmountInput::new(amount_max_len),
            config: PaymentSessionConfig::default(),
        }
    }

    pub fn recipient_name(&self) -> &str {
        self.recipient
            .as_ref()
            .map(|contact| contact.name.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &[&str], max_len: usize) -> String {
        let mut input = AmountInput::new(max_len);
        for key in keys {
            input.push_key(key);
        }
        input.amount().to_string()
    }

    #[test]
    fn only_one_decimal_point_is_accepted() {
        assert_eq!(typed(&["1", ".", "5", ".", "0"], 7), "1.50");
    }

    #[test]
    fn input_stops_at_max_length() {
        assert_eq!(typed(&["9"; 10], 7), "9999999");
        assert_eq!(typed(&["1", "2", "3", "4", "5", "6", "7", "."], 7), "1234567");
    }

    #[test]
    fn spacer_key_is_ignored() {
        let mut input = AmountInput::new(7);
        assert!(!input.push_key(""));
        assert!(!input.push_key("12"));
        assert_eq!(input.amount(), "");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut input = AmountInput::new(7);
        input.push_key("4");
        input.push_key(".");
        assert!(input.backspace());
        assert_eq!(input.amount(), "4");
        assert!(input.backspace());
        assert!(!input.backspace());
    }

    #[test]
    fn keypad_shown_until_card_face() {
        let mut config = PaymentSessionConfig::default();
        assert!(config.show_keypad());
        config.show_credit_card_face = true;
        assert!(!config.show_keypad());
    }
}
