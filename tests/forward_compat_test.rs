//! Unknown content is skipped without affecting what is understood

mod common;

use collada::parser::parse_document;
use common::{TRIANGLE_GEOMETRY, parse};

#[test]
fn test_unknown_libraries_and_elements_skipped() {
    let document = parse(&format!(
        r##"
  <library_animations>
    <animation id="spin"><source id="light"><float_array id="x" count="1">oops</float_array></source></animation>
  </library_animations>
  <library_controllers><controller id="skin"/></library_controllers>
  <library_visual_scenes>
    <visual_scene id="scene"><node id="n"><instance_geometry url="#tri"/></node></visual_scene>
  </library_visual_scenes>
  <vendor_library><light id="not-a-light"/></vendor_library>
  {}
  <scene><instance_visual_scene url="#scene"/></scene>"##,
        TRIANGLE_GEOMETRY
    ));

    assert_eq!(document.library_count(), 1);
    assert!(document.geometry("tri").is_some());
    assert!(document.light("not-a-light").is_none());
}

#[test]
fn test_extra_blocks_skipped_everywhere() {
    let document = parse(
        r##"
  <extra><technique profile="x"><library_lights/></technique></extra>
  <library_effects>
    <extra/>
    <effect id="e">
      <profile_COMMON>
        <technique sid="t">
          <phong>
            <diffuse><color>1 0 0 1</color></diffuse>
          </phong>
          <extra><technique profile="FCOLLADA"><spec_level><float>1</float></spec_level></technique></extra>
        </technique>
        <extra><technique profile="GOOGLEEARTH"><double_sided>1</double_sided></technique></extra>
      </profile_COMMON>
      <extra><extra><phong/></extra></extra>
    </effect>
  </library_effects>"##,
    );

    assert_eq!(document.library_count(), 1);
    assert!(document.light_libraries.is_empty());
    let profile = document.effect("e").unwrap().common_profile().unwrap();
    assert!(profile.technique.shader.diffuse.is_some());
}

#[test]
fn test_unknown_attributes_ignored() {
    let document = parse(
        r#"
  <library_lights vendor:flag="1" xmlns:vendor="urn:vendor">
    <light id="l" layer="L1">
      <technique_common><ambient><color>1 1 1</color></ambient></technique_common>
    </light>
  </library_lights>"#,
    );
    assert!(document.light("l").is_some());
}

#[test]
fn test_other_profiles_ignored() {
    let document = parse(
        r#"
  <library_effects>
    <effect id="e">
      <profile_GLSL><technique sid="t"><pass/></technique></profile_GLSL>
    </effect>
  </library_effects>"#,
    );
    let effect = document.effect("e").unwrap();
    assert!(effect.profiles.is_empty());
    assert!(effect.common_profile().is_none());
}

#[test]
fn test_elements_outside_collada_root_ignored() {
    let xml = r#"<wrapper><library_lights/><COLLADA><library_images/></COLLADA></wrapper>"#;
    let document = parse_document(xml).unwrap();
    assert!(document.light_libraries.is_empty());
    assert_eq!(document.image_libraries.len(), 1);
}

/// An unknown element holding a same-named copy of its parent closes the
/// parent early; only the end tag name is checked.
#[test]
fn test_same_name_inside_unknown_child_closes_parent() {
    let document = parse(
        r#"
  <library_images>
    <image id="a"><vendor><image/></vendor><init_from>a.png</init_from></image>
  </library_images>"#,
    );
    let image = document.image("a").unwrap();
    assert!(image.source.is_none());
}
