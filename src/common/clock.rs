//! Clock abstraction for date-stamped filenames.
//!
//! Filename generation embeds the current local date. Routing that lookup
//! through a trait keeps [`FileStreamExporter::file_name`] deterministic
//! under test.
//!
//! [`FileStreamExporter::file_name`]: crate::export::FileStreamExporter::file_name

use chrono::{Local, NaiveDate};

/// Source of the current date.
pub trait Clock {
    /// Get today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock reading the host's local date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
