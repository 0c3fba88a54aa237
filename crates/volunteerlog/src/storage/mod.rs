//! Record store for volunteerlog.
//!
//! This module owns the in-memory volunteer collection, keyed by identifier,
//! and its persistence to the flat-file log described in [`format`].

pub mod format;

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::hours::{self, OvernightPolicy};
use crate::volunteer::VolunteerRecord;

/// Default log file name, relative to the working directory.
pub const LOG_FILE_NAME: &str = "VolunteerLog.csv";

/// In-memory collection of volunteers.
///
/// Provides:
/// - Registration with identifier uniqueness
/// - Hour logging from shift start/end times
/// - Whole-file load and save of the volunteer log
///
/// Every mutating operation either applies completely or leaves the store
/// untouched. The store is not synchronized; wrap it in a lock to share it.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Records keyed by identifier.
    records: HashMap<String, VolunteerRecord>,
    /// How shifts that cross midnight are credited.
    overnight: OvernightPolicy,
}

impl RecordStore {
    /// Create an empty store with the default overnight policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given overnight policy.
    #[must_use]
    pub fn with_policy(overnight: OvernightPolicy) -> Self {
        Self {
            records: HashMap::new(),
            overnight,
        }
    }

    /// The overnight policy in effect.
    #[must_use]
    pub fn overnight_policy(&self) -> OvernightPolicy {
        self.overnight
    }

    /// Register a new volunteer with zero hours.
    ///
    /// Fields are trimmed the same way the log reader trims them, so a saved
    /// record always loads back under the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOrEmptyIdentifier`] if `identifier` is blank
    /// or already registered. The existing record is left as it was.
    pub fn register(&mut self, name: &str, identifier: &str, contact: &str) -> Result<()> {
        let identifier = identifier.trim();
        if identifier.is_empty() || self.records.contains_key(identifier) {
            debug!("Refusing registration for identifier '{identifier}'");
            return Err(Error::duplicate(identifier));
        }

        self.records.insert(
            identifier.to_string(),
            VolunteerRecord::new(name.trim(), identifier, contact.trim()),
        );
        info!("Registered volunteer '{identifier}'");
        Ok(())
    }

    /// Log a shift for a volunteer and return the whole hours credited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if no volunteer matches,
    /// [`Error::InvalidTimeFormat`] if either time is not `HH:MM`, or
    /// [`Error::EndBeforeStart`] under [`OvernightPolicy::Reject`]. The record
    /// is never modified on failure.
    pub fn log_hours(&mut self, identifier: &str, start: &str, end: &str) -> Result<u64> {
        let identifier = identifier.trim();
        let record = self
            .records
            .get_mut(identifier)
            .ok_or_else(|| Error::unknown(identifier))?;

        let hours = hours::shift_hours(start, end, self.overnight)?;
        record.add_hours(hours);

        info!(
            "Logged {hours} hours for '{identifier}' (total {})",
            record.total_hours
        );
        Ok(hours)
    }

    /// Look up a volunteer by identifier, ignoring surrounding whitespace.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&VolunteerRecord> {
        self.records.get(identifier.trim())
    }

    /// Snapshot of all records, in the map's iteration order.
    #[must_use]
    pub fn list_records(&self) -> Vec<VolunteerRecord> {
        self.records.values().cloned().collect()
    }

    /// Number of registered volunteers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no volunteers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of hours across all volunteers.
    #[must_use]
    pub fn total_hours(&self) -> u64 {
        self.records
            .values()
            .fold(0, |acc, r| acc.saturating_add(r.total_hours))
    }

    /// Load a volunteer log from disk, merging it into the store.
    ///
    /// A missing file is not an error; nothing is loaded. Returns the number
    /// of records merged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogRead`] if the file exists but cannot be read, or
    /// [`Error::MalformedHoursField`] if any line has a non-numeric hours
    /// field. The store is unchanged on error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No existing log found at {}. Starting fresh.", path.display());
            return Ok(0);
        }

        let file = fs::File::open(path).map_err(|source| Error::LogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let loaded = self
            .load_from_reader(BufReader::new(file))
            .map_err(|err| match err {
                Error::Io(source) => Error::LogRead {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;

        info!("Loaded {loaded} volunteers from {}", path.display());
        Ok(loaded)
    }

    /// Parse a volunteer log from any line source and merge it into the store.
    ///
    /// Records replace existing ones with the same identifier; records absent
    /// from the source are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on read failure or [`Error::MalformedHoursField`].
    /// Nothing is merged unless the whole source parses.
    pub fn load_from_reader(&mut self, reader: impl BufRead) -> Result<usize> {
        let mut parsed = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = format::decode_line(&line, index + 1)? {
                parsed.push(record);
            }
        }

        let count = parsed.len();
        for record in parsed {
            if self.records.contains_key(&record.identifier) {
                debug!("Replacing in-memory record '{}'", record.identifier);
            }
            self.records.insert(record.identifier.clone(), record);
        }
        Ok(count)
    }

    /// Save the store to disk, replacing the file's previous contents.
    ///
    /// Creates the parent directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryCreate`] or [`Error::LogWrite`]. The store
    /// itself is never affected.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut contents = Vec::new();
        self.save_to_writer(&mut contents)?;

        fs::write(path, contents).map_err(|source| Error::LogWrite {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Saved {} volunteers to {}", self.len(), path.display());
        Ok(())
    }

    /// Write every record as one log line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn save_to_writer(&self, mut writer: impl Write) -> Result<()> {
        for record in self.records.values() {
            if record.has_delimiter_in_fields() {
                warn!(
                    "Volunteer '{}' has a comma in a field and will not load back correctly",
                    record.identifier
                );
            }
            writeln!(writer, "{}", format::encode_line(record))?;
        }
        writer.flush()?;
        Ok(())
    }
}
