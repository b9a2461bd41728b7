//! Shared helpers for integration tests

#![allow(dead_code)]

use collada::{Document, ParserConfig, parser};

/// Wrap library elements in a `<COLLADA>` root
pub fn collada(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2008/03/COLLADASchema" version="1.5.0">
  <asset>
    <created>2024-01-01T00:00:00Z</created>
    <modified>2024-01-01T00:00:00Z</modified>
  </asset>
{}
</COLLADA>"#,
        body
    )
}

/// Parse library elements wrapped in a `<COLLADA>` root
pub fn parse(body: &str) -> Document {
    parser::parse_document(&collada(body)).expect("document should parse")
}

/// Parse library elements with a custom configuration
pub fn parse_with(body: &str, config: ParserConfig) -> collada::Result<Document> {
    parser::parse_document_with_config(&collada(body), config)
}

/// Parse library elements, returning the error
pub fn parse_err(body: &str) -> collada::Error {
    parser::parse_document(&collada(body)).expect_err("document should be rejected")
}

/// A single-triangle mesh in 1.5 layout
pub const TRIANGLE_GEOMETRY: &str = r##"
  <library_geometries>
    <geometry id="tri" name="Triangle">
      <mesh>
        <source id="tri-positions">
          <float_array id="tri-positions-array" count="9">
            0 0 0
            1 0 0
            0 1 0
          </float_array>
          <technique_common>
            <accessor source="#tri-positions-array" count="3" stride="3">
              <param name="X" type="float"/>
              <param name="Y" type="float"/>
              <param name="Z" type="float"/>
            </accessor>
          </technique_common>
        </source>
        <vertices id="tri-vertices">
          <input semantic="POSITION" source="#tri-positions"/>
        </vertices>
        <triangles count="1" material="mat">
          <input semantic="VERTEX" source="#tri-vertices" offset="0"/>
          <p>0 1 2</p>
        </triangles>
      </mesh>
    </geometry>
  </library_geometries>"##;
