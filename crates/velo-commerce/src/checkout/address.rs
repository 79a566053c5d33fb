//! Shipping contact details.

use serde::{Deserialize, Serialize};

/// Who the order ships to, as collected on the Shipping step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Address {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email for the order confirmation.
    pub email: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// ZIP code.
    pub zip: String,
}

impl Address {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        [
            self.full_name(),
            self.street.clone(),
            format!("{}, {} {}", self.city, self.state, self.zip),
        ]
        .join("\n")
    }

    /// Names of the required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("address", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("ZIP", &self.zip),
        ];
        fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
