//! Core volunteer types.
//!
//! A [`VolunteerRecord`] is one person and the hours they have accumulated.

use serde::{Deserialize, Serialize};

/// One registered volunteer and their cumulative service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRecord {
    /// Display name (first and last). Not unique.
    pub name: String,

    /// Unique lookup key, an email address.
    pub identifier: String,

    /// Phone number, stored as entered.
    pub contact: String,

    /// Whole hours logged so far.
    pub total_hours: u64,
}

impl VolunteerRecord {
    /// Create a freshly registered volunteer with no hours.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self::with_hours(name, identifier, contact, 0)
    }

    /// Create a volunteer that already has logged hours.
    #[must_use]
    pub fn with_hours(
        name: impl Into<String>,
        identifier: impl Into<String>,
        contact: impl Into<String>,
        total_hours: u64,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            contact: contact.into(),
            total_hours,
        }
    }

    /// Credit hours to this volunteer.
    pub fn add_hours(&mut self, hours: u64) {
        self.total_hours = self.total_hours.saturating_add(hours);
    }

    /// Check whether any text field contains the log delimiter.
    ///
    /// Such a record cannot be read back faithfully.
    #[must_use]
    pub fn has_delimiter_in_fields(&self) -> bool {
        [&self.name, &self.identifier, &self.contact]
            .iter()
            .any(|field| field.contains(','))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let record = VolunteerRecord::new("Ana Ruiz", "ana@x.org", "555-1111");
        assert_eq!(record.name, "Ana Ruiz");
        assert_eq!(record.identifier, "ana@x.org");
        assert_eq!(record.contact, "555-1111");
        assert_eq!(record.total_hours, 0);
    }

    #[test]
    fn test_add_hours_accumulates() {
        let mut record = VolunteerRecord::new("Ana Ruiz", "ana@x.org", "555-1111");
        record.add_hours(4);
        record.add_hours(3);
        assert_eq!(record.total_hours, 7);
    }

    #[test]
    fn test_add_hours_saturates() {
        let mut record = VolunteerRecord::with_hours("A", "a@x.org", "", u64::MAX - 1);
        record.add_hours(5);
        assert_eq!(record.total_hours, u64::MAX);
    }

    #[test]
    fn test_has_delimiter_in_fields() {
        let clean = VolunteerRecord::new("Ana Ruiz", "ana@x.org", "555-1111");
        assert!(!clean.has_delimiter_in_fields());

        let dirty = VolunteerRecord::new("Ruiz, Ana", "ana@x.org", "555-1111");
        assert!(dirty.has_delimiter_in_fields());
    }

    #[test]
    fn test_serialization() {
        let record = VolunteerRecord::with_hours("Ana Ruiz", "ana@x.org", "555-1111", 12);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"total_hours\":12"));

        let back: VolunteerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
