//! File persistence for interchange payloads.
//!
//! A [`FileStore`] is rooted at a directory and moves encoded payloads to and
//! from named files: JSON values, binary object blobs, the CSV to JSON bridge
//! and flat XML documents.

mod csv_bridge;
mod object;
mod store;
mod xml;

pub use csv_bridge::{convert_csv_to_json, CSV_JSON_OUTPUT};
pub use store::FileStore;

pub use interchange_core::{Error, Value};
