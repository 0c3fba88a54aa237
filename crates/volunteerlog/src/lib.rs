//! `volunteerlog` - Volunteer registration and hour tracking
//!
//! This library keeps an identifier-keyed collection of volunteers, credits
//! whole hours from shift start and end times, and persists the collection to
//! a flat comma-separated log file.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod hours;
pub mod logging;
pub mod storage;
pub mod volunteer;

pub use config::Config;
pub use error::{Error, Result};
pub use hours::OvernightPolicy;
pub use logging::init_logging;
pub use storage::{RecordStore, LOG_FILE_NAME};
pub use volunteer::VolunteerRecord;
