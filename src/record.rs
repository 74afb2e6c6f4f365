/// One data row of the file.
///
/// Fields are kept verbatim and in their original order. The first field is the identifier that
/// classification and sorting operate on; everything after it is opaque payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Record {
        Record {
            fields,
        }
    }

    /// Get the identifier field. A record with no fields at all reports an empty identifier and
    /// is dropped by the classifier like any blank row.
    pub fn identifier(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    /// Get all fields of this record.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Replace the identifier with its normalized form. Only valid rows are rewritten; the
    /// classifier never calls this for a row it demotes.
    pub(crate) fn set_identifier(&mut self, identifier: String) {
        if self.fields.is_empty() {
            self.fields.push(identifier);
        } else {
            self.fields[0] = identifier;
        }
    }
}
