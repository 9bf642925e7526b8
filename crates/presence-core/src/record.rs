//! CSV input records.
//!
//! The dataset is a header-first CSV with the columns `state`, `city`,
//! `presence`, and `contact` (extra columns are ignored). Every field is
//! optional in the data; absent columns or cells come through as empty
//! strings, and downstream code treats empty as missing.

use serde::Deserialize;

use crate::error::MapDataError;

/// One row of the presence dataset, as read from CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub presence: String,
    #[serde(default)]
    pub contact: String,
}

/// Parse the raw CSV text into records.
///
/// The reader is flexible: short rows and unknown columns are accepted.
/// Only a structurally broken document (e.g. an unterminated quote) is an
/// error.
pub fn parse_records(csv_text: &str) -> Result<Vec<CityRecord>, MapDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: CityRecord = result?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_well_formed_rows() {
        let csv = "state,city,presence,contact\n\
                   California,Los Angeles,importer,West LLC\n\
                   Texas,,direct,Acme\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(
            records,
            vec![
                CityRecord {
                    state: "California".to_string(),
                    city: "Los Angeles".to_string(),
                    presence: "importer".to_string(),
                    contact: "West LLC".to_string(),
                },
                CityRecord {
                    state: "Texas".to_string(),
                    city: String::new(),
                    presence: "direct".to_string(),
                    contact: "Acme".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "state,city,presence,contact,notes\n\
                   Ohio,Columbus,importer,Buckeye Inc,call back\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, "Ohio");
        assert_eq!(records[0].contact, "Buckeye Inc");
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let csv = "state,city\nNevada,Reno\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].presence, "");
        assert_eq!(records[0].contact, "");
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = "state,city,presence,contact\nNevada\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].state, "Nevada");
        assert_eq!(records[0].city, "");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("state,city,presence,contact\n").unwrap().is_empty());
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let csv = "state,city,presence,contact\n\
                   New York,\"New York\",direct,\"Smith, Jane\"\n";
        let records = parse_records(csv).unwrap();
        assert_eq!(records[0].contact, "Smith, Jane");
    }
}
