//! CSV to JSON conversion.

use std::{fs, io, path};

use interchange_codecs::csv_rows;
use interchange_core::Error;

use crate::FileStore;

/// Output file written by the CSV bridge, relative to the store root.
pub const CSV_JSON_OUTPUT: &str = "data.json";

impl FileStore {
    /// Convert a CSV file into `data.json` in the store root.
    ///
    /// Returns `Ok(false)` without writing anything when the CSV file cannot
    /// be opened. Malformed CSV and failures while writing the output are
    /// errors.
    pub fn convert_csv_to_json(&self, csv_name: impl AsRef<path::Path>) -> Result<bool, Error> {
        let csv_path = self.resolve(csv_name);
        let file = match fs::File::open(&csv_path) {
            Ok(file) => file,
            Err(err) => {
                log::debug!("Cannot open {}: {}", csv_path.display(), err);
                return Ok(false);
            }
        };

        let records = csv_rows::read_records(io::BufReader::new(file))?;
        log::debug!(
            "Converted {} rows from {}",
            records.len(),
            csv_path.display()
        );

        self.save_json(&csv_rows::records_to_value(records), CSV_JSON_OUTPUT)?;
        Ok(true)
    }
}

/// Convert a CSV file into `data.json` in the current working directory.
pub fn convert_csv_to_json(csv_path: impl AsRef<path::Path>) -> Result<bool, Error> {
    FileStore::current_dir()?.convert_csv_to_json(csv_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interchange_core::Value;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn single_row_becomes_json_array() {
        let (_dir, store) = store();
        store.write_bytes("people.csv", b"name,age\nAlice,30\n").unwrap();

        assert!(store.convert_csv_to_json("people.csv").unwrap());

        let text = fs::read_to_string(store.resolve(CSV_JSON_OUTPUT)).unwrap();
        assert_eq!(text, r#"[{"name":"Alice","age":"30"}]"#);
    }

    #[test]
    fn rows_keep_file_order() {
        let (_dir, store) = store();
        store
            .write_bytes("rows.csv", b"id,city\n2,Lima\n1,Kyiv\n3,Accra\n")
            .unwrap();

        assert!(store.convert_csv_to_json("rows.csv").unwrap());

        let value = store.load_json(CSV_JSON_OUTPUT).unwrap();
        let ids: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|row| row.get("id").and_then(Value::as_str))
            .collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn missing_input_returns_false_and_writes_nothing() {
        let (_dir, store) = store();
        assert!(!store.convert_csv_to_json("does_not_exist.csv").unwrap());
        assert!(!store.exists(CSV_JSON_OUTPUT));
    }

    #[test]
    fn malformed_csv_is_an_error() {
        let (_dir, store) = store();
        store.write_bytes("bad.csv", b"name\n\xff\n").unwrap();
        assert!(store.convert_csv_to_json("bad.csv").unwrap_err().is_parse());
        assert!(!store.exists(CSV_JSON_OUTPUT));
    }
}
