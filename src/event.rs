use std::path::Path;

use crate::record::Record;

/// Observer for row-level warnings and run completion events.
///
/// The transform reports what it did through this trait instead of writing to process-wide
/// logging state directly, so tests can install a recording sink and assert on the events. The
/// default sink is [LogSink], which forwards everything to the `log` crate.
pub trait EventSink {
    /// A row identifier contained no digits; the row was demoted to the invalid partition with
    /// its identifier unchanged. `raw` is the original first-field value.
    fn invalid_identifier(&self, raw: &str, record: &Record);

    /// The destination file was rewritten.
    fn file_rewritten(&self, path: &Path);

    /// The source contained no records after cleaning; nothing will be written.
    fn empty_source(&self, path: &Path);
}

/// Default sink forwarding events to the `log` crate.
pub struct LogSink;

impl EventSink for LogSink {
    fn invalid_identifier(&self, raw: &str, record: &Record) {
        log::warn!(
            "Invalid identifier found: {}. Moving row to the bottom: {:?}",
            raw,
            record.fields(),
        );
    }

    fn file_rewritten(&self, path: &Path) {
        log::info!(
            "Sorted data with invalid rows at the bottom updated in {}",
            path.to_string_lossy(),
        );
    }

    fn empty_source(&self, path: &Path) {
        log::error!("The file {} is empty after cleaning.", path.to_string_lossy());
    }
}
