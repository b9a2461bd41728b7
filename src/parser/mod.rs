//! XML reading for COLLADA documents
//!
//! [`DocumentHandler`] is the assembly engine. The functions in this module
//! feed it from `quick-xml`, which tokenizes the input and reports elements by
//! qualified name; only the local part is passed on.

pub mod chunk;
pub mod dispatch;
pub mod handler;
pub mod mode;

pub use chunk::{ChunkFloatReader, ChunkIntReader, ChunkReader, ChunkStringReader, Token};
pub use dispatch::{Action, Leaf, dispatch};
pub use handler::DocumentHandler;
pub use mode::{ContextStack, Frame, LightValueSlot, Mode, ProjectionKind, ProjectionValueSlot};

use crate::error::{Error, Result};
use crate::model::{Document, ParserConfig};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::BufRead;

/// Element attributes keyed by qualified name
pub type Attributes = HashMap<String, String>;

/// Default buffer capacity for XML parsing (4KB)
const XML_BUFFER_CAPACITY: usize = 4096;

/// Parse a COLLADA document held in memory
///
/// # Example
///
/// ```
/// use collada::parser::parse_document;
///
/// let document = parse_document(
///     r#"<COLLADA version="1.5.0"><library_cameras/></COLLADA>"#,
/// ).unwrap();
/// assert_eq!(document.camera_libraries.len(), 1);
/// ```
pub fn parse_document(xml: &str) -> Result<Document> {
    parse_document_with_config(xml, ParserConfig::default())
}

/// Parse a COLLADA document held in memory with custom configuration
pub fn parse_document_with_config(xml: &str, config: ParserConfig) -> Result<Document> {
    parse_reader(xml.as_bytes(), config)
}

/// Parse a COLLADA document from a buffered reader
pub fn parse_reader<R: BufRead>(input: R, config: ParserConfig) -> Result<Document> {
    let mut reader = Reader::from_reader(input);
    // Whitespace separates array values, so text is passed on untouched
    reader.config_mut().trim_text(false);

    let allow_dtd = config.dtd_allowed();
    let mut handler = DocumentHandler::with_config(config);
    let mut buf = Vec::with_capacity(XML_BUFFER_CAPACITY);

    loop {
        let event_result = reader.read_event_into(&mut buf);
        let is_empty_element = matches!(&event_result, Ok(Event::Empty(_)));

        match event_result {
            Ok(Event::DocType(_)) if !allow_dtd => {
                // DTD declarations are not allowed (security risk)
                return Err(Error::InvalidXml(
                    "DTD declarations are not allowed unless enabled in ParserConfig".to_string(),
                ));
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let name_str = std::str::from_utf8(name.as_ref())
                    .map_err(|e| Error::InvalidXml(e.to_string()))?;
                let local_name = get_local_name(name_str);
                let attrs = parse_attributes(e)?;

                handler.start_element(local_name, &attrs)?;
                if is_empty_element {
                    handler.end_element(local_name)?;
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let name_str = std::str::from_utf8(name.as_ref())
                    .map_err(|e| Error::InvalidXml(e.to_string()))?;
                handler.end_element(get_local_name(name_str))?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.decode().map_err(|e| Error::InvalidXml(e.to_string()))?;
                handler.text(&text)?;
            }
            Ok(Event::CData(ref e)) => {
                let text = std::str::from_utf8(e).map_err(|e| Error::InvalidXml(e.to_string()))?;
                handler.text(text)?;
            }
            Ok(Event::GeneralRef(ref e)) => {
                let name = std::str::from_utf8(e).map_err(|e| Error::InvalidXml(e.to_string()))?;
                handler.text(&resolve_reference(name)?)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    handler.finish()
}

/// Extract local name from potentially namespaced XML element name
///
/// # Examples
///
/// - `"collada:mesh"` returns `"mesh"`
/// - `"mesh"` returns `"mesh"`
pub(crate) fn get_local_name(name_str: &str) -> &str {
    if let Some(pos) = name_str.rfind(':') {
        &name_str[pos + 1..]
    } else {
        name_str
    }
}

/// Parse attributes from an XML element, resolving escapes in their values
pub(crate) fn parse_attributes(e: &BytesStart) -> Result<Attributes> {
    // Pre-allocate reasonable capacity to reduce allocations
    let mut attrs = HashMap::with_capacity(8);

    for attr in e.attributes() {
        let attr = attr?;
        let key =
            std::str::from_utf8(attr.key.as_ref()).map_err(|e| Error::InvalidXml(e.to_string()))?;
        let raw =
            std::str::from_utf8(&attr.value).map_err(|e| Error::InvalidXml(e.to_string()))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|e| Error::XmlAttr(format!("Attribute '{}': {}", key, e)))?;

        attrs.insert(key.to_string(), value.into_owned());
    }

    Ok(attrs)
}

/// Resolve a character or predefined entity reference appearing in text
pub(crate) fn resolve_reference(name: &str) -> Result<String> {
    let predefined = match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    };
    if let Some(c) = predefined {
        return Ok(c.to_string());
    }

    let code = name.strip_prefix('#').and_then(|number| {
        match number.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => number.parse::<u32>().ok(),
        }
    });
    code.and_then(char::from_u32)
        .map(|c| c.to_string())
        .ok_or_else(|| Error::InvalidXml(format!("Unknown entity reference '&{};'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_local_name() {
        assert_eq!(get_local_name("collada:mesh"), "mesh");
        assert_eq!(get_local_name("mesh"), "mesh");
    }

    #[test]
    fn test_resolve_reference() {
        assert_eq!(resolve_reference("amp").unwrap(), "&");
        assert_eq!(resolve_reference("#32").unwrap(), " ");
        assert_eq!(resolve_reference("#x41").unwrap(), "A");
        assert!(resolve_reference("nbsp").is_err());
        assert!(resolve_reference("#xD800").is_err());
    }

    #[test]
    fn test_empty_document_fails() {
        let err = parse_document("<COLLADA>").unwrap_err();
        assert!(matches!(err, Error::IllegalState(_) | Error::Xml(_)));
    }

    #[test]
    fn test_doctype_rejected_by_default() {
        let xml = r#"<?xml version="1.0"?><!DOCTYPE COLLADA []><COLLADA/>"#;
        assert!(matches!(parse_document(xml), Err(Error::InvalidXml(_))));

        let config = ParserConfig::new().with_dtd_allowed(true);
        assert!(parse_document_with_config(xml, config).is_ok());
    }

    #[test]
    fn test_references_and_comments_inside_array() {
        let xml = r#"<COLLADA><library_geometries><geometry><mesh>
            <source id="s"><float_array id="a" count="3">1&#32;2.<!-- c -->5 3</float_array></source>
            <vertices id="v"/>
        </mesh></geometry></library_geometries></COLLADA>"#;
        let document = parse_document(xml).unwrap();
        let mesh = document.geometries().next().unwrap().mesh.as_ref().unwrap();
        let array = mesh.sources[0].float_array().unwrap();
        assert_eq!(array.values, vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_prefixed_elements() {
        let xml = r#"<c:COLLADA xmlns:c="http://www.collada.org/2008/03/COLLADASchema">
            <c:library_images id="imgs"/>
        </c:COLLADA>"#;
        let document = parse_document(xml).unwrap();
        assert_eq!(document.image_libraries[0].id.as_deref(), Some("imgs"));
    }

    #[test]
    fn test_escaped_attribute_value() {
        let xml = r#"<COLLADA><library_images name="A &amp; B"/></COLLADA>"#;
        let document = parse_document(xml).unwrap();
        assert_eq!(document.image_libraries[0].name.as_deref(), Some("A & B"));
    }
}
