//! Interchange core: the value model
//!
//! Everything the codecs, the file store and the transport agree on:
//! - `Value`: scalars, sequences and string-keyed maps
//! - `FlatRecord`: string-to-string maps, the lossy XML shape
//! - `Object`: records with a declared, ordered field schema
//! - `Format`: tags naming the encoding of a payload
//! - `Codec`: the encode/decode seam between `Value` and bytes
//!
//! # Example
//!
//! ```rust
//! use interchange_core::{object, CustomObject, Value};
//!
//! let alice = CustomObject::new("Alice", 30, true);
//! let view = object::to_map(&alice, Some(&["name"][..]));
//! let expected: Value = [("name", "Alice")].into_iter().collect();
//! assert_eq!(Value::from(view), expected);
//! ```

pub use bytes::Bytes;

mod error;
mod format;
pub mod object;
mod traits;
mod value;

pub use error::Error;
pub use format::Format;
pub use object::{CustomObject, Field, Object};
pub use traits::Codec;
pub use value::{FlatRecord, Kind, Map, Value};
