//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record the app shell hands to core.
//! - Expose the raw birth fields charts are derived from.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - `name` is non-empty after trimming.
//! - `image` and `is_favorite` are carried for the shell; core never reads them.

use crate::chart::BirthData;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a contact.
pub type ContactId = Uuid;

/// Validation errors for contact records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    NilId,
    EmptyName,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "contact id must not be nil"),
            Self::EmptyName => write!(f, "contact name must not be empty"),
        }
    }
}

impl Error for ContactValidationError {}

/// A person in the user's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub birth_time: Option<NaiveTime>,
    pub birth_place: Option<String>,
    /// Encoded profile image bytes, opaque to core.
    pub image: Option<Vec<u8>>,
    pub is_favorite: bool,
}

/// Unvalidated wire shape; converted through `Contact::try_from`.
#[derive(Deserialize)]
struct ContactRecord {
    id: ContactId,
    name: String,
    birth_date: Option<NaiveDate>,
    birth_time: Option<NaiveTime>,
    birth_place: Option<String>,
    image: Option<Vec<u8>>,
    #[serde(default)]
    is_favorite: bool,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ContactValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        let contact = Contact {
            id: record.id,
            name: record.name,
            birth_date: record.birth_date,
            birth_time: record.birth_time,
            birth_place: record.birth_place,
            image: record.image,
            is_favorite: record.is_favorite,
        };
        contact.validate()?;
        Ok(contact)
    }
}

impl Contact {
    /// Creates a contact with a generated stable ID and no birth data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            birth_date: None,
            birth_time: None,
            birth_place: None,
            image: None,
            is_favorite: false,
        }
    }

    /// Creates a contact with a caller-provided ID.
    ///
    /// Used when the shell's object store already owns the identity.
    pub fn with_id(id: ContactId, name: impl Into<String>) -> Result<Self, ContactValidationError> {
        let contact = Self {
            id,
            ..Self::new(name)
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Builder-style birth date setter.
    pub fn born_on(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn born_at(mut self, time: NaiveTime) -> Self {
        self.birth_time = Some(time);
        self
    }

    pub fn born_in(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.id.is_nil() {
            return Err(ContactValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        Ok(())
    }

    /// Birth fields as chart input, or `None` without a birth date.
    pub fn birth_data(&self) -> Option<BirthData> {
        self.birth_date
            .map(|date| BirthData::new(date, self.birth_time, self.birth_place.clone()))
    }
}
