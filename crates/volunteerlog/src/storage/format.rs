//! Line format of the volunteer log.
//!
//! Each record occupies one line:
//!
//! ```text
//! <name>, <identifier>, <contact>, <total_hours>
//! ```
//!
//! There is no header and no quoting. A comma inside a field produces a line
//! with the wrong field count, which the reader skips.

use tracing::debug;

use crate::error::{Error, Result};
use crate::volunteer::VolunteerRecord;

/// Separator written between fields.
pub const FIELD_SEPARATOR: &str = ", ";

/// Character the reader splits on.
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in a well-formed line.
pub const FIELD_COUNT: usize = 4;

/// Render a record as a single log line (without the newline).
#[must_use]
pub fn encode_line(record: &VolunteerRecord) -> String {
    format!(
        "{name}{sep}{identifier}{sep}{contact}{sep}{hours}",
        name = record.name,
        identifier = record.identifier,
        contact = record.contact,
        hours = record.total_hours,
        sep = FIELD_SEPARATOR,
    )
}

/// Parse one log line.
///
/// Returns `Ok(None)` for lines that are skipped: a field count other than
/// four (after dropping trailing empty fields) or an empty identifier.
/// Fields are trimmed, which undoes the space written after each delimiter.
///
/// # Errors
///
/// Returns [`Error::MalformedHoursField`] if the fourth field is not a
/// non-negative integer. `line_number` is 1-based and only used for the error.
pub fn decode_line(line: &str, line_number: usize) -> Result<Option<VolunteerRecord>> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    let [name, identifier, contact, hours] = fields.as_slice() else {
        debug!(
            "Skipping line {line_number}: expected {FIELD_COUNT} fields, found {}",
            fields.len()
        );
        return Ok(None);
    };

    let identifier = identifier.trim();
    if identifier.is_empty() {
        debug!("Skipping line {line_number}: empty identifier");
        return Ok(None);
    }

    let raw_hours = hours.trim();
    let total_hours = raw_hours
        .parse::<u64>()
        .map_err(|_| Error::MalformedHoursField {
            line: line_number,
            value: raw_hours.to_string(),
        })?;

    Ok(Some(VolunteerRecord::with_hours(
        name.trim(),
        identifier,
        contact.trim(),
        total_hours,
    )))
}
