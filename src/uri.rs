//! URI references
//!
//! COLLADA cross-references (`source`, `url`, `ref`, ...) are stored verbatim
//! as [`Uri`] values. They are checked for RFC 3986 URI-reference syntax when
//! parsed but never resolved here.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fmt;

/// A syntactically valid URI reference (absolute or relative, fragment form included)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// Parse and validate a URI reference
    ///
    /// # Example
    ///
    /// ```
    /// use collada::Uri;
    ///
    /// let uri = Uri::parse("#mesh-positions").unwrap();
    /// assert_eq!(uri.fragment(), Some("mesh-positions"));
    /// assert!(uri.is_local());
    ///
    /// assert!(Uri::parse("not valid").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        validate(text)?;
        Ok(Uri(text.to_string()))
    }

    /// The URI exactly as written in the document
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme of an absolute URI (`http`, `file`, ...)
    pub fn scheme(&self) -> Option<&str> {
        scheme_end(&self.0).map(|end| &self.0[..end])
    }

    /// Fragment part after `#`
    pub fn fragment(&self) -> Option<&str> {
        self.0.find('#').map(|pos| &self.0[pos + 1..])
    }

    /// True for same-document references such as `#geometry-id`
    pub fn is_local(&self) -> bool {
        self.0.starts_with('#')
    }

    /// The part before any `?` or `#`, percent-decoded
    ///
    /// Image references such as `textures/brick%20wall.png` decode to a
    /// usable file path.
    pub fn decoded_path(&self) -> Result<Cow<'_, str>> {
        let end = self.0.find(['?', '#']).unwrap_or(self.0.len());
        urlencoding::decode(&self.0[..end]).map_err(|e| {
            Error::invalid_reference(&self.0, format!("percent escapes are not UTF-8: {}", e))
        })
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uri::parse(s)
    }
}

/// Index of the `:` ending the scheme, if the reference has one
fn scheme_end(text: &str) -> Option<usize> {
    let colon = text.find(':')?;
    if text[..colon].contains(['/', '?', '#']) {
        return None;
    }
    Some(colon)
}

fn is_unreserved_or_reserved(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.'
                | '_'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
        )
}

fn validate(text: &str) -> Result<()> {
    if let Some(end) = scheme_end(text) {
        let scheme = &text[..end];
        let mut chars = scheme.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return Err(Error::invalid_reference(text, "expected scheme name")),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            return Err(Error::invalid_reference(text, "illegal character in scheme name"));
        }
        if end + 1 == text.len() {
            return Err(Error::invalid_reference(text, "expected scheme-specific part"));
        }
    }

    let mut seen_fragment = false;
    let mut chars = text.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '%' => {
                let hex: String = chars.by_ref().take(2).map(|(_, h)| h).collect();
                if hex.len() != 2 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    return Err(Error::invalid_reference(
                        text,
                        format!("malformed escape pair at index {}", index),
                    ));
                }
            }
            '#' if seen_fragment => {
                return Err(Error::invalid_reference(
                    text,
                    format!("illegal character '#' in fragment at index {}", index),
                ));
            }
            '#' => seen_fragment = true,
            c if is_unreserved_or_reserved(c) => {}
            c if !c.is_ascii() && !c.is_control() && !c.is_whitespace() => {}
            c => {
                return Err(Error::invalid_reference(
                    text,
                    format!("illegal character {:?} at index {}", c, index),
                ));
            }
        }
    }
    Ok(())
}
