//! JSON codec implementation.

use bytes::Bytes;
use interchange_core::{Codec, Error, Format, Value};

use crate::convert::{json_to_value, value_to_json};

/// Encode a value as compact JSON text.
///
/// Map keys keep their insertion order, so equal inputs always produce the
/// same text.
pub fn encode(value: &Value) -> Result<String, Error> {
    let json = value_to_json(value)?;
    serde_json::to_string(&json).map_err(|e| Error::type_validation(Format::JSON, e.to_string()))
}

/// Parse JSON text into a value.
///
/// Unterminated structures, invalid literals and trailing garbage are all
/// parse errors.
pub fn decode(text: &str) -> Result<Value, Error> {
    decode_slice(text.as_bytes())
}

/// Parse UTF-8 JSON bytes into a value.
pub fn decode_slice(bytes: &[u8]) -> Result<Value, Error> {
    let json: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| Error::parse(Format::JSON, e.to_string()))?;
    Ok(json_to_value(json))
}

/// A codec that handles JSON encoding/decoding.
///
/// # Example
///
/// ```rust
/// use interchange_codecs::JsonCodec;
/// use interchange_core::{Codec, Format, Value};
///
/// let codec = JsonCodec;
/// let value = Value::from("hello");
///
/// let bytes = codec.encode(&value, &Format::JSON).unwrap();
/// let decoded = codec.decode(&bytes, &Format::JSON).unwrap();
///
/// assert_eq!(decoded, value);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        decode_slice(bytes)
    }

    fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        Ok(Bytes::from(encode(value)?))
    }

    fn supports(&self, format: &Format) -> bool {
        format == &Format::JSON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        [
            ("x", Value::from(1)),
            ("y", Value::from(vec![1, 2, 3])),
            ("name", Value::from("Alice")),
            ("ratio", Value::from(0.25)),
            ("ok", Value::from(false)),
            ("nothing", Value::Null),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn encode_is_compact_and_ordered() {
        let value: Value = [("b", Value::from(1)), ("a", Value::from(vec![true]))]
            .into_iter()
            .collect();
        assert_eq!(encode(&value).unwrap(), r#"{"b":1,"a":[true]}"#);
    }

    #[test]
    fn roundtrip_mixed_value() {
        let original = sample();
        let text = encode(&original).unwrap();
        assert_eq!(decode(&text).unwrap(), original);
    }

    #[test]
    fn floats_stay_floats() {
        let text = encode(&Value::from(1.0)).unwrap();
        assert_eq!(text, "1.0");
        assert_eq!(decode(&text).unwrap(), Value::Float(1.0));
    }

    #[test]
    fn encode_rejects_nan() {
        let value: Value = [("bad", Value::from(f64::NAN))].into_iter().collect();
        assert!(matches!(
            encode(&value),
            Err(Error::TypeValidation { .. })
        ));
    }

    #[test]
    fn decode_rejects_malformed_input() {
        for text in [r#"{"a": 1"#, "[1, 2", "tru", r#"{"a": 1} trailing"#, ""] {
            let err = decode(text).unwrap_err();
            assert!(err.is_parse(), "expected parse error for {:?}", text);
        }
    }

    #[test]
    fn json_codec_rejects_other_formats() {
        let codec = JsonCodec;

        let bytes = Bytes::from_static(b"{}");
        let result = codec.decode(&bytes, &Format::XML);

        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn json_codec_roundtrip() {
        let codec = JsonCodec;
        let original = sample();

        let bytes = codec.encode(&original, &Format::JSON).unwrap();
        let decoded = codec.decode(&bytes, &Format::JSON).unwrap();

        assert_eq!(original, decoded);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Integer),
            (-1.0e12f64..1.0e12f64).prop_map(Value::Float),
            ".*".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{0,6}", inner), 0..8)
                    .prop_map(|pairs| pairs.into_iter().collect::<Value>()),
            ]
        })
    }

    proptest! {
        /// Roundtrip property: decode(encode(v)) == v for every finite value
        #[test]
        fn decode_inverts_encode(value in arb_value()) {
            let text = encode(&value).unwrap();
            prop_assert_eq!(decode(&text).unwrap(), value);
        }
    }
}
