use anyhow::Context;
use csv::ReaderBuilder;

use crate::dataset::Dataset;
use crate::event::EventSink;
use crate::identifier;
use crate::key;
use crate::record::Record;

/// Parse `text` as CSV, partition the data rows by identifier validity and sort the valid
/// partition numerically.
///
/// The first record becomes the header. Rows whose identifier is empty or whitespace-only are
/// dropped entirely: they carry no data and belong in neither partition. A row whose identifier
/// normalizes gets the digit string written back into its first field and joins `valid`; a row
/// whose identifier has no digits is kept byte-for-byte as read and joins `invalid`, with a
/// warning event per row. One bad row never aborts the batch; only a structurally malformed
/// record encoding does.
pub(crate) fn classify_and_sort(
    text: &str,
    sink: &dyn EventSink,
) -> Result<Dataset, anyhow::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut header: Option<Record> = None;
    let mut valid: Vec<Record> = Vec::new();
    let mut invalid: Vec<Record> = Vec::new();

    for (n, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("Malformed record encoding at record {}", n + 1))?;
        let mut record = Record::new(row.iter().map(str::to_string).collect());

        if header.is_none() {
            header = Some(record);
            continue;
        }

        if record.identifier().trim().is_empty() {
            continue;
        }

        match identifier::normalize(record.identifier()) {
            Some(digits) => {
                record.set_identifier(digits);
                valid.push(record);
            }
            None => {
                sink.invalid_identifier(record.identifier(), &record);
                invalid.push(record);
            }
        }
    }

    // sort_by is stable, so equal keys keep their encounter order
    valid.sort_by(|a, b| key::cmp_numeric(a.identifier(), b.identifier()));

    Ok(Dataset::new(header, valid, invalid))
}
