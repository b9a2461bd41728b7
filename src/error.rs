//! Error types for COLLADA parsing
//!
//! Every failure of the reader is reported through [`Error`]. All variants are
//! fatal: the parse is aborted and no partial document is returned. Unknown
//! elements and attributes are not errors at all; they are skipped silently.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML parsing and structure errors
//! - **E3xxx**: Value and reference errors
//! - **E4xxx**: Reader usage errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading the document
//! - `E1002`: ZIP archive format error (`.zae` files)
//! - `E1003`: Missing file in archive
//! - `E2001`: XML tokenizer error
//! - `E2002`: XML attribute decoding error
//! - `E2003`: Invalid XML structure
//! - `E2004`: Missing required attribute
//! - `E3001`: Invalid model content
//! - `E3002`: Malformed value
//! - `E3003`: Invalid URI reference
//! - `E4001`: Illegal reader state

use std::io;
use thiserror::Error;

/// Result type for COLLADA operations
pub type Result<T> = std::result::Result<T, Error>;

/// Additional context for errors
///
/// Carries the open-element path at the point of failure and an optional hint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Element path from the document root, e.g. `COLLADA/library_lights/light`
    pub path: Option<String>,

    /// A helpful hint for resolving the error
    pub hint: Option<String>,
}

impl ErrorContext {
    /// Create a new empty error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();

        if let Some(ref path) = self.path {
            parts.push(format!("Element path: {}", path));
        }

        if let Some(ref hint) = self.hint {
            parts.push(format!("Hint: {}", hint));
        }

        if !parts.is_empty() {
            write!(f, "\n{}", parts.join("\n"))
        } else {
            Ok(())
        }
    }
}

/// Errors that can occur when reading COLLADA documents
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the document
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP archive error
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Corrupted `.zae` archive
    /// - Unsupported compression method
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Missing file in a `.zae` archive
    ///
    /// **Error Code**: E1003
    ///
    /// **Common Causes**:
    /// - `manifest.xml` absent
    /// - `dae_root` pointing at a file that is not in the archive
    #[error("[E1003] Missing file: {0}")]
    MissingFile(String),

    /// XML tokenizer error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Mismatched closing tags
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute decoding error
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Duplicate attribute
    /// - Invalid escape sequence in an attribute value
    #[error("[E2002] XML attribute error: {0}")]
    XmlAttr(String),

    /// Invalid XML structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Missing required child element (e.g. a technique without a shader)
    /// - DTD declarations while they are disabled
    /// - Nesting deeper than the configured maximum
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// Missing required attribute
    ///
    /// **Error Code**: E2004
    ///
    /// **Suggestions**:
    /// - Check the COLLADA schema for required attributes, e.g. `count` on
    ///   `<float_array>`, `<accessor>` and `<triangles>`
    #[error("[E2004] Element '<{element}>' is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Element local name
        element: String,
        /// Attribute name
        attribute: String,
    },

    /// Invalid model content
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - An array holding more values than its declared `count`
    #[error("[E3001] Invalid model: {0}")]
    InvalidModel(String),

    /// Malformed value
    ///
    /// **Error Code**: E3002
    ///
    /// **Common Causes**:
    /// - Non-numeric text where a number is expected
    /// - Unknown enumeration literal (filter, wrap mode, data type)
    ///
    /// **Suggestions**:
    /// - Verify numeric values use `.` as decimal separator (`1.5`, not `1,5`)
    #[error("[E3002] Malformed value: {0}")]
    MalformedValue(String),

    /// Invalid URI reference syntax
    ///
    /// **Error Code**: E3003
    ///
    /// **Common Causes**:
    /// - Spaces or other unescaped characters in a `source`, `url` or `ref`
    /// - Truncated percent escapes (`%2`)
    #[error("[E3003] '{uri}' is not a valid URI: {reason}")]
    InvalidReference {
        /// The offending URI text
        uri: String,
        /// What is wrong with it
        reason: String,
    },

    /// Illegal reader state
    ///
    /// **Error Code**: E4001
    ///
    /// **Common Causes**:
    /// - Requesting the document before the outermost element closed
    /// - Feeding events after a previous fatal error
    #[error("[E4001] Illegal state: {0}")]
    IllegalState(String),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::MalformedValue(format!("Failed to parse floating-point number: {}", err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::MalformedValue(format!("Failed to parse integer: {}", err))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(format!("Attribute parsing failed: {}", err))
    }
}

impl Error {
    /// Create an InvalidXml error with element context
    ///
    /// # Example
    /// ```ignore
    /// Error::invalid_xml_element("technique", "missing shader")
    /// ```
    pub fn invalid_xml_element(element: &str, message: &str) -> Self {
        Error::InvalidXml(format!("Element '<{}>': {}", element, message))
    }

    /// Create a MissingAttribute error
    ///
    /// # Example
    /// ```ignore
    /// Error::missing_attribute("accessor", "count")
    /// ```
    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        Error::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// Create a MalformedValue error naming what was parsed
    ///
    /// # Arguments
    /// * `field_name` - What was being parsed (e.g., "<float> value")
    /// * `value` - The text that failed to parse
    /// * `expected_type` - The expected type (e.g., "floating-point number")
    pub fn malformed_value(field_name: &str, value: &str, expected_type: &str) -> Self {
        Error::MalformedValue(format!(
            "Failed to parse {}: expected {}, got '{}'",
            field_name, expected_type, value
        ))
    }

    /// Create an InvalidReference error for a URI
    pub fn invalid_reference(uri: &str, reason: impl Into<String>) -> Self {
        Error::InvalidReference {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach context to the error message
    ///
    /// Only message-carrying variants are enriched; structured variants are
    /// returned unchanged so callers can still match on their fields.
    pub fn with_context(self, context: &ErrorContext) -> Self {
        let suffix = context.to_string();
        if suffix.is_empty() {
            return self;
        }
        match self {
            Error::InvalidXml(msg) => Error::InvalidXml(msg + &suffix),
            Error::InvalidModel(msg) => Error::InvalidModel(msg + &suffix),
            Error::MalformedValue(msg) => Error::MalformedValue(msg + &suffix),
            other => other,
        }
    }

    /// The offending URI text, for reference errors
    pub fn uri(&self) -> Option<&str> {
        match self {
            Error::InvalidReference { uri, .. } => Some(uri),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let missing_file = Error::MissingFile("scene.dae".to_string());
        assert!(missing_file.to_string().contains("[E1003]"));

        let invalid_model = Error::InvalidModel("test error".to_string());
        assert!(invalid_model.to_string().contains("[E3001]"));

        let malformed = Error::MalformedValue("test".to_string());
        assert!(malformed.to_string().contains("[E3002]"));

        let state = Error::IllegalState("not finished".to_string());
        assert!(state.to_string().contains("[E4001]"));
    }

    #[test]
    fn test_missing_attribute_helper() {
        let err = Error::missing_attribute("accessor", "count");
        let msg = err.to_string();
        assert!(msg.contains("[E2004]"));
        assert!(msg.contains("'<accessor>'"));
        assert!(msg.contains("'count'"));
    }

    #[test]
    fn test_invalid_reference_carries_uri() {
        let err = Error::invalid_reference("has space", "illegal character ' ' at index 3");
        assert_eq!(err.uri(), Some("has space"));
        assert!(err.to_string().contains("[E3003]"));
        assert!(err.to_string().contains("'has space'"));
    }

    #[test]
    fn test_malformed_value_helper() {
        let err = Error::malformed_value("<float> value", "abc", "floating-point number");
        let msg = err.to_string();
        assert!(msg.contains("<float> value"));
        assert!(msg.contains("floating-point number"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_parse_float_error_conversion() {
        let parse_err: std::num::ParseFloatError = "not_a_number".parse::<f64>().unwrap_err();
        let err = Error::from(parse_err);
        assert!(err.to_string().contains("Failed to parse floating-point number"));
        assert!(err.to_string().contains("[E3002]"));
    }

    #[test]
    fn test_with_context_appends_path_and_hint() {
        let ctx = ErrorContext::new()
            .path("COLLADA/library_effects/effect")
            .hint("check the technique");
        let err = Error::invalid_xml_element("technique", "missing shader").with_context(&ctx);
        let msg = err.to_string();
        assert!(msg.contains("Element path: COLLADA/library_effects/effect"));
        assert!(msg.contains("Hint: check the technique"));
    }

    #[test]
    fn test_with_context_keeps_structured_variants() {
        let ctx = ErrorContext::new().path("COLLADA");
        let err = Error::missing_attribute("triangles", "count").with_context(&ctx);
        assert!(matches!(err, Error::MissingAttribute { .. }));
    }

    #[test]
    fn test_error_context_display_empty() {
        assert_eq!(ErrorContext::new().to_string(), "");
    }
}
