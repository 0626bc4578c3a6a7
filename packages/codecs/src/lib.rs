//! Interchange codecs
//!
//! Encode/decode pairs between the core `Value` model and concrete formats:
//! - `json`: JSON text, with `JsonCodec` for the byte-level `Codec` seam
//! - `object`: the private binary blob for declared `Object` types
//! - `csv_rows`: header-keyed CSV rows as flat records
//! - `xml`: flat one-level XML documents, with `XmlCodec`
//! - `to_value`/`from_value`: typed Rust data through the value model
//!
//! # Example
//!
//! ```rust
//! use interchange_codecs::json;
//! use interchange_core::Value;
//!
//! let value: Value = [("x", Value::from(1)), ("y", Value::from(vec![1, 2, 3]))]
//!     .into_iter()
//!     .collect();
//!
//! let text = json::encode(&value).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":[1,2,3]}"#);
//! assert_eq!(json::decode(&text).unwrap(), value);
//! ```

pub use bytes::Bytes;

mod convert;
pub mod csv_rows;
pub mod json;
mod multi;
pub mod object;
pub mod xml;

pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use json::JsonCodec;
pub use multi::MultiCodec;
pub use object::{decode_object, encode_object};
pub use xml::XmlCodec;

// Re-export core types for convenience
pub use interchange_core::{
    Codec, CustomObject, Error, FlatRecord, Format, Map, Object, Value,
};
