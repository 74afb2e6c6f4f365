use std::path::Path;

use anyhow::{anyhow, Context};
use csv::WriterBuilder;
use tempfile::Builder;

use crate::dataset::Dataset;
use crate::event::EventSink;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum WriteOutcome {
    Written,
    NothingToWrite,
}

/// Serialize `dataset` back to `path`: header, then valid rows, then invalid rows.
///
/// Without a header there is nothing to write and the destination is not touched. Otherwise the
/// records are written to a temp file in the destination directory and renamed over `path`, so
/// the prior content is replaced in one step and no partial mix of old and new rows can remain
/// after a failure.
pub(crate) fn write(
    path: &Path,
    dataset: &Dataset,
    sink: &dyn EventSink,
) -> Result<WriteOutcome, anyhow::Error> {
    let header = match dataset.header() {
        Some(header) => header,
        None => return Ok(WriteOutcome::NothingToWrite),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp_file = Builder::new()
        .prefix(".sorted-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.to_string_lossy()))?;

    let mut csv_writer = WriterBuilder::new()
        .flexible(true)
        .from_writer(tmp_file.as_file());
    csv_writer.write_record(header.fields())?;
    for record in dataset.valid() {
        csv_writer.write_record(record.fields())?;
    }
    for record in dataset.invalid() {
        csv_writer.write_record(record.fields())?;
    }
    csv_writer.flush()?;
    drop(csv_writer);

    let (_persisted, tmp_path) = tmp_file
        .keep()
        .or_else(|e| Err(anyhow!("Failed to persist temp file: {}", e.to_string())))?;
    std::fs::rename(&tmp_path, path).with_context(|| {
        anyhow!(
            "Rename {} to {}",
            tmp_path.to_string_lossy(),
            path.to_string_lossy(),
        )
    })?;

    sink.file_rewritten(path);
    Ok(WriteOutcome::Written)
}
