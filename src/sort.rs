use std::path::PathBuf;

use crate::classifier;
use crate::event::{EventSink, LogSink};
use crate::loader;
use crate::outcome::SortOutcome;
use crate::writer;
use crate::writer::WriteOutcome;

/// Sort a CSV file in place by its identifier column.
///
/// The whole transform is one synchronous pass: load and clean the file, classify every data row
/// by whether its first field yields a numeric identifier, stable-sort the valid rows by that
/// identifier, and rewrite the file as header + sorted valid rows + invalid rows. A single
/// invocation is assumed to own the path for its duration; two concurrent runs against the same
/// path leave whichever finished last.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use csv_id_sort::outcome::SortOutcome;
/// use csv_id_sort::sort::IdSort;
///
/// fn sort_in_place(input: PathBuf) -> Result<SortOutcome, anyhow::Error> {
///     let id_sort = IdSort::new(input);
///     id_sort.run()
/// }
/// ```
pub struct IdSort {
    path: PathBuf,
    sink: Box<dyn EventSink>,
}

impl IdSort {
    /// Create a default definition for the file at `path`.
    ///
    /// * the first field of every row is the identifier
    /// * warnings and completion events go to the `log` crate
    pub fn new(path: PathBuf) -> IdSort {
        IdSort {
            path,
            sink: Box::new(LogSink),
        }
    }

    /// Replace the event sink. The default is [LogSink].
    pub fn with_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = sink;
    }

    /// Run the transform to completion.
    ///
    /// Returns [SortOutcome::NothingToWrite] when the source holds no records at all; the
    /// destination is then left untouched. Read, parse and write failures are fatal and abort
    /// the run with an error before the destination changes.
    pub fn run(&self) -> Result<SortOutcome, anyhow::Error> {
        let text = loader::load(&self.path)?;
        let dataset = classifier::classify_and_sort(&text, self.sink.as_ref())?;
        if dataset.header().is_none() {
            self.sink.empty_source(&self.path);
            return Ok(SortOutcome::NothingToWrite);
        }
        match writer::write(&self.path, &dataset, self.sink.as_ref())? {
            WriteOutcome::Written => Ok(SortOutcome::Rewritten {
                valid: dataset.valid().len(),
                invalid: dataset.invalid().len(),
            }),
            WriteOutcome::NothingToWrite => Ok(SortOutcome::NothingToWrite),
        }
    }
}
