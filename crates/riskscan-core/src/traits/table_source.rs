//! TableSource trait — the data-loading seam.
//!
//! The analysis engine consumes a [`TagTable`] and never reads files
//! itself. Callers implement this trait over whatever row/column source
//! they have; one JSON-records implementation ships here.

use crate::errors::TableError;
use crate::types::{TagSchema, TagTable};

/// Produces a validated tag table from an external row/column source.
pub trait TableSource {
    /// Load the full record set against the declared schema.
    fn load(&self) -> Result<TagTable, TableError>;
}

/// Table source over an in-memory JSON array of `{column: bool}` records.
pub struct JsonRecordsSource {
    schema: TagSchema,
    json: String,
}

impl JsonRecordsSource {
    pub fn new(schema: TagSchema, json: impl Into<String>) -> Self {
        Self {
            schema,
            json: json.into(),
        }
    }
}

impl TableSource for JsonRecordsSource {
    fn load(&self) -> Result<TagTable, TableError> {
        TagTable::from_json_records(self.schema.clone(), &self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_source_loads() {
        let schema = TagSchema::new(["is_honeypot", "hidden_owner"]).unwrap();
        let source = JsonRecordsSource::new(
            schema,
            r#"[
                {"is_honeypot": true, "hidden_owner": false},
                {"is_honeypot": false, "hidden_owner": false}
            ]"#,
        );
        let table = source.load().unwrap();
        assert_eq!(table.num_records(), 2);
        assert_eq!(table.column_names(), &["is_honeypot", "hidden_owner"]);
    }

    #[test]
    fn test_json_source_rejects_malformed() {
        let schema = TagSchema::new(["is_honeypot"]).unwrap();
        let source = JsonRecordsSource::new(schema, "not json");
        assert!(matches!(source.load(), Err(TableError::Parse(_))));
    }
}
