//! Flat XML files.

use std::path;

use interchange_codecs::xml;
use interchange_core::{Error, FlatRecord, Format, Map};

use crate::FileStore;

impl FileStore {
    /// Write a map as a flat XML document.
    pub fn write_xml(&self, record: &Map, name: impl AsRef<path::Path>) -> Result<(), Error> {
        let text = xml::encode(record)?;
        self.write_bytes(name, text.as_bytes())?;
        Ok(())
    }

    /// Read a flat XML document. Every value comes back as a string.
    pub fn read_xml(&self, name: impl AsRef<path::Path>) -> Result<FlatRecord, Error> {
        let payload = self.read_bytes(name)?;
        let text = std::str::from_utf8(&payload)
            .map_err(|e| Error::parse(Format::XML, e.to_string()))?;
        xml::decode(text)
    }
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
    fn xml_file_roundtrip_stringifies_values() {
        let (_dir, store) = store();
        let record: Map = [
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from("x")),
        ]
        .into_iter()
        .collect();

        store.write_xml(&record, "data.xml").unwrap();
        let decoded = store.read_xml("data.xml").unwrap();

        let mut expected = FlatRecord::new();
        expected.insert("a".to_string(), "1".to_string());
        expected.insert("b".to_string(), "x".to_string());
        assert_eq!(decoded, expected);
    }

    #[test]
    fn file_has_no_declaration() {
        let (_dir, store) = store();
        let record: Map = [("name".to_string(), Value::from("John"))]
            .into_iter()
            .collect();

        store.write_xml(&record, "data.xml").unwrap();
        let text = std::fs::read_to_string(store.resolve("data.xml")).unwrap();
        assert_eq!(text, "<data><name>John</name></data>");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let (_dir, store) = store();
        assert!(matches!(store.read_xml("missing.xml"), Err(Error::Io(_))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let (_dir, store) = store();
        store.write_bytes("bad.xml", b"<data><a>1</data>").unwrap();
        assert!(store.read_xml("bad.xml").unwrap_err().is_parse());
    }
}
