//! Format-routed codec.

use bytes::Bytes;
use interchange_core::{Codec, Error, Format, Value};

use crate::json::JsonCodec;
use crate::xml::XmlCodec;

/// A codec that combines multiple codecs.
///
/// Routes encode/decode to the first codec that supports the format.
pub struct MultiCodec {
    codecs: Vec<Box<dyn Codec>>,
}

impl MultiCodec {
    /// Create an empty multi-codec.
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Add a codec.
    pub fn add(&mut self, codec: impl Codec + 'static) {
        self.codecs.push(Box::new(codec));
    }

    /// Create a multi-codec with the JSON codec included.
    pub fn with_json() -> Self {
        let mut mc = Self::new();
        mc.add(JsonCodec);
        mc
    }

    /// Create a multi-codec with every value codec in this crate.
    pub fn with_defaults() -> Self {
        let mut mc = Self::with_json();
        mc.add(XmlCodec);
        mc
    }
}

impl Default for MultiCodec {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Codec for MultiCodec {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error> {
        for codec in &self.codecs {
            if codec.supports(format) {
                return codec.decode(bytes, format);
            }
        }
        Err(Error::UnsupportedFormat(format.clone()))
    }

    fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error> {
        for codec in &self.codecs {
            if codec.supports(format) {
                return codec.encode(value, format);
            }
        }
        Err(Error::UnsupportedFormat(format.clone()))
    }

    fn supports(&self, format: &Format) -> bool {
        self.codecs.iter().any(|c| c.supports(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_codec_routes_correctly() {
        let codec = MultiCodec::with_json();

        assert!(codec.supports(&Format::JSON));
        assert!(!codec.supports(&Format::XML));

        let value = Value::from("hello");
        let bytes = codec.encode(&value, &Format::JSON).unwrap();
        let decoded = codec.decode(&bytes, &Format::JSON).unwrap();

        assert_eq!(value, decoded);
    }

    #[test]
    fn defaults_cover_json_and_xml() {
        let codec = MultiCodec::default();
        assert!(codec.supports(&Format::JSON));
        assert!(codec.supports(&Format::XML));
        assert!(!codec.supports(&Format::CSV));

        let decoded = codec
            .decode(&Bytes::from_static(b"<data><n>1</n></data>"), &Format::XML)
            .unwrap();
        assert_eq!(decoded.get("n"), Some(&Value::from("1")));
    }

    #[test]
    fn unknown_format_is_unsupported() {
        let codec = MultiCodec::new();
        let result = codec.encode(&Value::Null, &Format::JSON);
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
