//! Format tags for encoded payloads.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// The wire or file format of an encoded payload.
///
/// Formats are MIME-type-like strings. Codecs use them to decide whether they
/// can handle a payload, and errors carry them so a failure names the format
/// it happened in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(pub Cow<'static, str>);

impl Format {
    /// JSON text (`application/json`)
    pub const JSON: Format = Format(Cow::Borrowed("application/json"));

    /// Flat XML documents (`application/xml`)
    pub const XML: Format = Format(Cow::Borrowed("application/xml"));

    /// Comma-separated rows with a header (`text/csv`)
    pub const CSV: Format = Format(Cow::Borrowed("text/csv"));

    /// The private binary object layout.
    pub const OBJECT: Format = Format(Cow::Borrowed("application/x-interchange-object"));

    /// An in-memory Value that was never encoded.
    ///
    /// Used for errors raised while converting typed Rust data to and from
    /// `Value`.
    pub const VALUE: Format = Format(Cow::Borrowed("application/x-interchange-value"));

    /// Create a format from a static string.
    pub const fn from_static(s: &'static str) -> Self {
        Format(Cow::Borrowed(s))
    }

    /// Create a format from an owned string.
    pub fn new(s: impl Into<String>) -> Self {
        Format(Cow::Owned(s.into()))
    }

    /// Guess a format from a file extension.
    ///
    /// Returns `None` for unknown or missing extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::JSON),
            "xml" => Some(Self::XML),
            "csv" => Some(Self::CSV),
            "bin" | "pkl" => Some(Self::OBJECT),
            _ => None,
        }
    }

    /// Get the format string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is JSON format.
    pub fn is_json(&self) -> bool {
        self == &Self::JSON
    }

    /// Check if this is XML format.
    pub fn is_xml(&self) -> bool {
        self == &Self::XML
    }

    /// Check if this is the VALUE format (never encoded).
    pub fn is_value(&self) -> bool {
        self == &Self::VALUE
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for Format {
    fn from(s: &'static str) -> Self {
        Format(Cow::Borrowed(s))
    }
}

impl From<String> for Format {
    fn from(s: String) -> Self {
        Format(Cow::Owned(s))
    }
}

impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
