//! CSV rows as flat records.
//!
//! The first row names the fields. Every later row becomes one
//! [`FlatRecord`] with keys in header order. Ragged rows are normalised:
//! missing trailing fields become empty strings and fields past the last
//! header are dropped.

use std::io;

use interchange_core::{Error, FlatRecord, Format, Value};

fn csv_error(e: csv::Error) -> Error {
    if !e.is_io_error() {
        return Error::parse(Format::CSV, e.to_string());
    }
    match e.into_kind() {
        csv::ErrorKind::Io(err) => Error::Io(err),
        other => Error::parse(Format::CSV, format!("{:?}", other)),
    }
}

/// Read header-keyed records from CSV input.
pub fn read_records<R: io::Read>(input: R) -> Result<Vec<FlatRecord>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        if row.len() != headers.len() {
            log::debug!(
                "CSV row at line {} has {} fields, header has {}",
                row.position().map_or(0, |p| p.line()),
                row.len(),
                headers.len()
            );
        }

        let record: FlatRecord = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), row.get(i).unwrap_or("").to_string()))
            .collect();
        records.push(record);
    }

    Ok(records)
}

/// Collect records into a JSON-ready array of string maps.
pub fn records_to_value(records: Vec<FlatRecord>) -> Value {
    Value::Array(records.into_iter().map(Value::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Vec<FlatRecord> {
        read_records(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_names_the_fields() {
        let records = read("name,age\nAlice,30\nBob,25\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "Alice");
        assert_eq!(records[0]["age"], "30");
        assert_eq!(records[1]["name"], "Bob");

        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age"]);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let records = read("city,note\n\"Paris, FR\",\"said \"\"hi\"\"\"\n");
        assert_eq!(records[0]["city"], "Paris, FR");
        assert_eq!(records[0]["note"], "said \"hi\"");
    }

    #[test]
    fn short_rows_are_padded() {
        let records = read("a,b,c\n1\n");
        assert_eq!(records[0]["a"], "1");
        assert_eq!(records[0]["b"], "");
        assert_eq!(records[0]["c"], "");
    }

    #[test]
    fn long_rows_are_truncated() {
        let records = read("a,b\n1,2,3,4\n");
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0]["b"], "2");
    }

    #[test]
    fn header_only_input_has_no_records() {
        assert!(read("name,age\n").is_empty());
        assert!(read("").is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = read_records(&b"name\n\xff\xfe\n"[..]).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn records_become_an_array_of_string_maps() {
        let value = records_to_value(read("name,age\nAlice,30\n"));
        let expected: Value = [("name", "Alice"), ("age", "30")].into_iter().collect();
        assert_eq!(value, Value::Array(vec![expected]));
    }
}
