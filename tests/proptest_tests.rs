//! Property-based tests for collada
//!
//! The assembled document must not depend on how character data is split
//! into fragments, nor on which XML whitespace separates list values.

use collada::parser::{Attributes, ChunkFloatReader, DocumentHandler, parse_document};
use collada::{Document, ParserConfig};
use proptest::prelude::*;

// ============================================================================
// Event replay
// ============================================================================

/// One parser callback
#[derive(Debug, Clone)]
enum Event {
    Start(&'static str, Vec<(&'static str, String)>),
    Text(String),
    End(&'static str),
}

fn start(name: &'static str) -> Event {
    Event::Start(name, Vec::new())
}

fn start_with(name: &'static str, attrs: &[(&'static str, &str)]) -> Event {
    Event::Start(name, attrs.iter().map(|(k, v)| (*k, v.to_string())).collect())
}

fn join<T: ToString>(values: &[T], separator: &str) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(separator)
}

/// Events of a document with one mesh and one point light
fn document_events(floats: &[f64], indices: &[u32], names: &[String], separator: &str) -> Vec<Event> {
    let float_count = floats.len().to_string();
    let name_count = names.len().to_string();
    vec![
        start("COLLADA"),
        start("library_geometries"),
        start_with("geometry", &[("id", "g")]),
        start("mesh"),
        start_with("source", &[("id", "positions")]),
        start_with("float_array", &[("id", "positions-array"), ("count", &float_count)]),
        Event::Text(format!("{sep}{}{sep}", join(floats, separator), sep = separator)),
        Event::End("float_array"),
        Event::End("source"),
        start_with("source", &[("id", "names")]),
        start_with("Name_array", &[("id", "names-array"), ("count", &name_count)]),
        Event::Text(join(names, separator)),
        Event::End("Name_array"),
        Event::End("source"),
        start_with("vertices", &[("id", "v")]),
        Event::End("vertices"),
        start_with("triangles", &[("count", "1")]),
        start("p"),
        Event::Text(join(indices, separator)),
        Event::End("p"),
        Event::End("triangles"),
        Event::End("mesh"),
        Event::End("geometry"),
        Event::End("library_geometries"),
        start("library_lights"),
        start_with("light", &[("id", "l")]),
        start("technique_common"),
        start("point"),
        start("color"),
        Event::Text(join(&floats[..3], separator)),
        Event::End("color"),
        Event::End("point"),
        Event::End("technique_common"),
        Event::End("light"),
        Event::End("library_lights"),
        Event::End("COLLADA"),
    ]
}

/// Serialize events as XML text
fn to_xml(events: &[Event]) -> String {
    let mut xml = String::new();
    for event in events {
        match event {
            Event::Start(name, attrs) => {
                xml.push('<');
                xml.push_str(name);
                for (key, value) in attrs {
                    xml.push_str(&format!(r#" {}="{}""#, key, value));
                }
                xml.push('>');
            }
            Event::Text(text) => xml.push_str(text),
            Event::End(name) => xml.push_str(&format!("</{}>", name)),
        }
    }
    xml
}

/// Feed events to a handler, cutting every text into fragments of the given lengths
fn replay(events: &[Event], cuts: &[usize]) -> collada::Result<Document> {
    let mut handler = DocumentHandler::with_config(ParserConfig::default());
    let mut cut = cuts.iter().cycle();
    for event in events {
        match event {
            Event::Start(name, attrs) => {
                let attrs: Attributes = attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect();
                handler.start_element(name, &attrs)?;
            }
            Event::Text(text) => {
                let mut rest = text.as_str();
                while !rest.is_empty() {
                    let len = cut.next().copied().unwrap_or(1).clamp(1, rest.len());
                    let (fragment, tail) = rest.split_at(len);
                    handler.text(fragment)?;
                    rest = tail;
                }
            }
            Event::End(name) => handler.end_element(name)?,
        }
    }
    handler.finish()
}

// ============================================================================
// Generators
// ============================================================================

fn floats_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 3..60)
}

fn indices_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..100_000, 0..60)
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9_]{0,8}", 0..20)
}

fn separator_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n]{1,4}"
}

fn cuts_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..12, 1..20)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn fragment_boundaries_do_not_change_document(
        floats in floats_strategy(),
        indices in indices_strategy(),
        names in names_strategy(),
        cuts in cuts_strategy(),
    ) {
        let events = document_events(&floats, &indices, &names, " ");
        let whole = replay(&events, &[usize::MAX]).unwrap();
        let split = replay(&events, &cuts).unwrap();
        prop_assert_eq!(&split, &whole);

        let parsed = parse_document(&to_xml(&events)).unwrap();
        prop_assert_eq!(&parsed, &whole);
    }

    #[test]
    fn separators_do_not_change_document(
        floats in floats_strategy(),
        indices in indices_strategy(),
        names in names_strategy(),
        separator in separator_strategy(),
    ) {
        let plain = parse_document(&to_xml(&document_events(&floats, &indices, &names, " "))).unwrap();
        let spaced = parse_document(&to_xml(&document_events(&floats, &indices, &names, &separator))).unwrap();
        prop_assert_eq!(&spaced, &plain);

        let mesh = plain.geometry("g").unwrap().mesh.as_ref().unwrap();
        prop_assert_eq!(&mesh.source("positions").unwrap().float_array().unwrap().values, &floats);
        prop_assert_eq!(&mesh.source("names").unwrap().name_array().unwrap().values, &names);
        let triangles = mesh.triangles().next().unwrap();
        prop_assert_eq!(&triangles.data, &indices);
    }

    #[test]
    fn chunk_reader_emits_each_token_once(
        floats in floats_strategy(),
        cuts in cuts_strategy(),
    ) {
        let text = join(&floats, " ");
        let mut reader = ChunkFloatReader::new();
        let mut values = Vec::new();
        let mut rest = text.as_str();
        for len in cuts.iter().cycle() {
            if rest.is_empty() {
                break;
            }
            let (fragment, tail) = rest.split_at((*len).min(rest.len()));
            reader.feed(fragment, |v| { values.push(v); Ok(()) }).unwrap();
            rest = tail;
        }
        reader.finish(|v| { values.push(v); Ok(()) }).unwrap();
        prop_assert_eq!(values, floats);
    }
}
