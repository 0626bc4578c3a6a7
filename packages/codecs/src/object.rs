//! Binary object codec.
//!
//! Objects are stored as a bincode-encoded envelope: a four byte magic, the
//! object's type tag and its field values in schema order. The layout is
//! private to this workspace and unversioned; changing it invalidates
//! previously written blobs.

use bincode::Options;
use bytes::Bytes;
use interchange_core::{Error, Format, Object, Value};
use serde::{Deserialize, Serialize};

/// Leading bytes of every object blob.
pub const MAGIC: [u8; 4] = *b"IXOB";

/// Upper bound on a single blob, so corrupt length prefixes fail fast.
const MAX_OBJECT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    magic: [u8; 4],
    tag: &'a str,
    fields: &'a [Value],
}

#[derive(Deserialize)]
struct Envelope {
    magic: [u8; 4],
    tag: String,
    fields: Vec<Value>,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_OBJECT_BYTES)
        .reject_trailing_bytes()
}

/// Encode an object into its binary blob.
pub fn encode_object<T: Object>(obj: &T) -> Result<Bytes, Error> {
    let fields = obj.field_values();
    let envelope = EnvelopeRef {
        magic: MAGIC,
        tag: T::TYPE_TAG,
        fields: &fields,
    };

    let bytes = options()
        .serialize(&envelope)
        .map_err(|e| Error::type_validation(Format::OBJECT, e.to_string()))?;
    Ok(Bytes::from(bytes))
}

/// Decode a blob into a fresh object of type `T`.
///
/// Truncated or trailing bytes, a foreign magic, another type's tag and
/// fields that do not match `T::FIELDS` are all errors.
pub fn decode_object<T: Object>(bytes: &[u8]) -> Result<T, Error> {
    let envelope: Envelope = options()
        .deserialize(bytes)
        .map_err(|e| Error::parse(Format::OBJECT, e.to_string()))?;

    if envelope.magic != MAGIC {
        return Err(Error::parse(Format::OBJECT, "not an object blob"));
    }

    if envelope.tag != T::TYPE_TAG {
        return Err(Error::parse(
            Format::OBJECT,
            format!(
                "expected type tag {}, found {}",
                T::TYPE_TAG,
                envelope.tag
            ),
        ));
    }

    T::from_field_values(envelope.fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interchange_core::{CustomObject, Field, Kind};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: f64,
        y: f64,
    }

    impl Object for Point {
        const TYPE_TAG: &'static str = "Point";
        const FIELDS: &'static [Field] = &[Field::new("x", Kind::Float), Field::new("y", Kind::Float)];

        fn field_values(&self) -> Vec<Value> {
            vec![Value::Float(self.x), Value::Float(self.y)]
        }

        fn from_field_values(values: Vec<Value>) -> Result<Self, Error> {
            interchange_core::object::check_fields::<Self>(&values)?;
            Ok(Point {
                x: values[0].as_f64().unwrap_or_default(),
                y: values[1].as_f64().unwrap_or_default(),
            })
        }
    }

    #[test]
    fn roundtrip_custom_object() {
        let original = CustomObject::new("Bob", 41, false);
        let bytes = encode_object(&original).unwrap();
        let decoded: CustomObject = decode_object(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn blob_starts_with_magic() {
        let bytes = encode_object(&CustomObject::new("Bob", 41, false)).unwrap();
        assert_eq!(&bytes[..4], &MAGIC);
    }

    #[test]
    fn wrong_type_tag_is_rejected() {
        let bytes = encode_object(&Point { x: 1.0, y: 2.5 }).unwrap();
        let err = decode_object::<CustomObject>(&bytes).unwrap_err();
        assert!(err.to_string().contains("expected type tag CustomObject"));

        assert_eq!(
            decode_object::<Point>(&bytes).unwrap(),
            Point { x: 1.0, y: 2.5 }
        );
    }

    #[test]
    fn truncated_blob_is_rejected() {
        let bytes = encode_object(&CustomObject::new("Carol", 22, true)).unwrap();
        for len in [0, 3, bytes.len() / 2, bytes.len() - 1] {
            assert!(decode_object::<CustomObject>(&bytes[..len]).is_err());
        }
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut bytes = encode_object(&CustomObject::new("Carol", 22, true))
            .unwrap()
            .to_vec();
        bytes.push(0);
        assert!(decode_object::<CustomObject>(&bytes).is_err());
    }

    #[test]
    fn foreign_magic_is_rejected() {
        let mut bytes = encode_object(&CustomObject::new("Dan", 5, false))
            .unwrap()
            .to_vec();
        bytes[0] = b'X';
        let err = decode_object::<CustomObject>(&bytes).unwrap_err();
        assert!(err.is_parse());
    }
}
