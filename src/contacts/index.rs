//! # Display Indexes
//!
//! Contacts have no stable identifier. A contact is selected by its 1-based
//! position in the most recent listing, so an index is only meaningful against
//! the listing it was read from: any add, edit or delete can shift it.
//!
//! Parsing and resolving are separate steps. [`DisplayIndex::from_str`] only
//! checks that the input is a number, and [`DisplayIndex::resolve`] checks it
//! against a listing. That split gives the two distinct user errors:
//! "Please enter a valid number." and "Invalid contact number.".

use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::str::FromStr;

/// A user-facing, 1-based index into a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(i64);

impl DisplayIndex {
    pub fn new(n: i64) -> Self {
        Self(n)
    }

    /// Converts to a 0-based position in a listing of `len` entries.
    pub fn resolve(&self, len: usize) -> Result<usize> {
        usize::try_from(self.0)
            .ok()
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1)
            .ok_or(ContactsError::ContactNotFound(self.0))
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(DisplayIndex)
            .map_err(|_| ContactsError::InvalidNumber(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: DisplayIndex,
    pub contact: Contact,
}

/// Numbers contacts 1..n in the order given.
pub fn index_contacts(contacts: Vec<Contact>) -> Vec<DisplayContact> {
    contacts
        .into_iter()
        .zip(1..)
        .map(|(contact, n)| DisplayContact {
            index: DisplayIndex(n),
            contact,
        })
        .collect()
}
