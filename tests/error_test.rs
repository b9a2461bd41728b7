//! Fatal errors raised while reading documents

mod common;

use collada::{Document, Error, ParserConfig, parser};
use common::{collada, parse_err};

#[test]
fn test_malformed_float_value() {
    let err = parse_err(
        r#"
  <library_lights>
    <light id="l">
      <technique_common>
        <point>
          <color>1 1 1</color>
          <constant_attenuation>one</constant_attenuation>
        </point>
      </technique_common>
    </light>
  </library_lights>"#,
    );
    assert!(matches!(err, Error::MalformedValue(_)));
    let msg = err.to_string();
    assert!(msg.contains("[E3002]"));
    assert!(msg.contains("one"));
    assert!(msg.contains("constant_attenuation"));
}

#[test]
fn test_missing_array_count() {
    let err = parse_err(
        r#"
  <library_geometries>
    <geometry id="g"><mesh><source id="s"><float_array id="a">1 2</float_array></source></mesh></geometry>
  </library_geometries>"#,
    );
    match err {
        Error::MissingAttribute { element, attribute } => {
            assert_eq!(element, "float_array");
            assert_eq!(attribute, "count");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_triangles_count() {
    let err = parse_err(
        r#"
  <library_geometries>
    <geometry id="g"><mesh><vertices id="v"/><triangles><p>0 1 2</p></triangles></mesh></geometry>
  </library_geometries>"#,
    );
    assert!(matches!(err, Error::MissingAttribute { ref attribute, .. } if attribute == "count"));
}

#[test]
fn test_invalid_uri_is_reported() {
    let err = parse_err(
        r##"
  <library_materials>
    <material id="m"><instance_effect url="#bad fx"/></material>
  </library_materials>"##,
    );
    assert!(matches!(err, Error::InvalidReference { .. }));
    assert_eq!(err.uri(), Some("#bad fx"));
}

#[test]
fn test_unknown_filter_literal() {
    let err = parse_err(
        r#"
  <library_effects>
    <effect id="e">
      <profile_COMMON>
        <newparam sid="s"><sampler2D><minfilter>linear</minfilter></sampler2D></newparam>
        <technique sid="t"><constant/></technique>
      </profile_COMMON>
    </effect>
  </library_effects>"#,
    );
    assert!(matches!(err, Error::MalformedValue(_)));
}

#[test]
fn test_short_shader_color() {
    let err = parse_err(
        r#"
  <library_effects>
    <effect id="e">
      <profile_COMMON>
        <technique sid="t"><lambert><diffuse><color>1 1 1</color></diffuse></lambert></technique>
      </profile_COMMON>
    </effect>
  </library_effects>"#,
    );
    assert!(matches!(err, Error::MalformedValue(_)));
}

#[test]
fn test_malformed_shininess_float() {
    let err = parse_err(
        r#"
  <library_effects>
    <effect id="e">
      <profile_COMMON>
        <technique sid="t">
          <phong><shininess><float>1.x</float></shininess></phong>
        </technique>
      </profile_COMMON>
    </effect>
  </library_effects>"#,
    );
    assert!(matches!(err, Error::MalformedValue(_)));
    let msg = err.to_string();
    assert!(msg.contains("1.x"));
    assert!(msg.contains("Element path: COLLADA/library_effects/effect/profile_COMMON/technique/phong/shininess/float"));
}

#[test]
fn test_missing_shader() {
    let err = parse_err(
        r#"
  <library_effects>
    <effect id="e"><profile_COMMON><technique sid="t"/></profile_COMMON></effect>
  </library_effects>"#,
    );
    assert!(matches!(err, Error::InvalidXml(_)));
    assert!(err.to_string().contains("library_effects/effect/profile_COMMON/technique"));
}

#[test]
fn test_missing_znear() {
    let err = parse_err(
        r#"
  <library_cameras>
    <camera id="c">
      <optics><technique_common><perspective><zfar>10</zfar></perspective></technique_common></optics>
    </camera>
  </library_cameras>"#,
    );
    assert!(matches!(err, Error::InvalidXml(_)));
}

#[test]
fn test_doctype_rejected() {
    let xml = format!(r#"<!DOCTYPE COLLADA [<!ENTITY x "y">]>{}"#, collada(""));
    let xml = xml.replacen(r#"<?xml version="1.0" encoding="utf-8"?>"#, "", 1);
    assert!(matches!(parser::parse_document(&xml), Err(Error::InvalidXml(_))));

    let config = ParserConfig::new().with_dtd_allowed(true);
    assert!(parser::parse_document_with_config(&xml, config).is_ok());
}

#[test]
fn test_truncated_document() {
    let xml = r#"<COLLADA><library_lights><light id="l">"#;
    let err = xml.parse::<Document>().unwrap_err();
    assert!(matches!(err, Error::IllegalState(_) | Error::Xml(_)));
}

#[test]
fn test_malformed_xml() {
    let xml = r#"<COLLADA><library_lights></library_images></COLLADA>"#;
    assert!(matches!(parser::parse_document(xml), Err(Error::Xml(_))));
}
