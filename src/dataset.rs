use crate::record::Record;

/// The in-memory result of classifying and sorting one file.
///
/// Constructed once per run by the classifier, consumed once by the writer, then discarded.
/// `header` is `None` only when the source contained no records at all, which the caller must
/// treat as "nothing to write".
#[derive(Debug)]
pub struct Dataset {
    header: Option<Record>,
    valid: Vec<Record>,
    invalid: Vec<Record>,
}

impl Dataset {
    pub(crate) fn new(header: Option<Record>, valid: Vec<Record>, invalid: Vec<Record>) -> Dataset {
        Dataset {
            header,
            valid,
            invalid,
        }
    }

    /// Get the header record, if the source had one.
    pub fn header(&self) -> Option<&Record> {
        self.header.as_ref()
    }

    /// Get the valid rows, sorted ascending by the numeric value of their normalized
    /// identifiers. Ties keep their original relative order.
    pub fn valid(&self) -> &[Record] {
        &self.valid
    }

    /// Get the invalid rows in their original encounter order, identifiers untouched.
    pub fn invalid(&self) -> &[Record] {
        &self.invalid
    }
}
