//! The Codec trait.

use bytes::Bytes;

use crate::{Error, Format, Value};

/// Codec for converting between Value and bytes.
///
/// Codecs handle the parsing (decode) and serialization (encode) of one or
/// more formats. Callers that don't know the format up front can ask
/// `supports` before dispatching.
///
/// # Implementing Custom Codecs
///
/// ```rust
/// use interchange_core::{Codec, Value, Format, Error};
/// use bytes::Bytes;
///
/// struct PlainTextCodec;
///
/// impl Codec for PlainTextCodec {
///     fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error> {
///         if !self.supports(format) {
///             return Err(Error::UnsupportedFormat(format.clone()));
///         }
///         let text = std::str::from_utf8(bytes)
///             .map_err(|e| Error::parse(format.clone(), e.to_string()))?;
///         Ok(Value::from(text))
///     }
///
///     fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error> {
///         match value.as_str() {
///             Some(s) if self.supports(format) => Ok(Bytes::copy_from_slice(s.as_bytes())),
///             Some(_) => Err(Error::UnsupportedFormat(format.clone())),
///             None => Err(Error::type_validation(format.clone(), "expected a string")),
///         }
///     }
///
///     fn supports(&self, format: &Format) -> bool {
///         format.as_str() == "text/plain"
///     }
/// }
/// ```
pub trait Codec: Send + Sync {
    /// Decode raw bytes into a Value.
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error>;

    /// Encode a Value into raw bytes.
    fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error>;

    /// Check if this codec supports a format.
    fn supports(&self, format: &Format) -> bool;
}

impl<T: Codec + ?Sized> Codec for &T {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error> {
        (**self).decode(bytes, format)
    }

    fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error> {
        (**self).encode(value, format)
    }

    fn supports(&self, format: &Format) -> bool {
        (**self).supports(format)
    }
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error> {
        (**self).decode(bytes, format)
    }

    fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error> {
        (**self).encode(value, format)
    }

    fn supports(&self, format: &Format) -> bool {
        (**self).supports(format)
    }
}
