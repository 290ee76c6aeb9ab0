use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the store, in file order.
pub const HEADER: [&str; 3] = ["Name", "Email", "Phone"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Email: {}, Phone: {}",
            self.name, self.email, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_listing_row() {
        let contact = Contact::new("Alice", "alice@example.com", "1234567890");
        assert_eq!(
            contact.to_string(),
            "Name: Alice, Email: alice@example.com, Phone: 1234567890"
        );
    }
}
