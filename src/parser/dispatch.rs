//! Grammar table: which child elements each mode understands

use super::mode::{LightValueSlot, Mode, ProjectionKind, ProjectionValueSlot};
use crate::model::{ColorSlot, FloatSlot, LightKind, ShadingModel};

/// A child element that is absorbed from its attributes without becoming a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf {
    /// `<param>` of an accessor
    AccessorParam,
    /// `<input>` of `<vertices>`
    VerticesInput,
    /// `<texture>` of a color-or-texture attribute
    Texture,
    /// `<param ref>` of a float-or-param attribute
    ParamRef,
}

/// What to do with a recognized child element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enter a structural mode that stages no content
    Wrap(Mode),
    /// Enter a mode with a builder allocated from the element's attributes
    Open(Mode),
    /// Hand the element's attributes to the current builder
    Attach(Leaf),
}

/// Look up the action for child `name` of an element in `mode`
///
/// Returns `None` for elements the reader does not know, and for known
/// elements in places where they are not expected; both are skipped.
///
/// # Example
///
/// ```
/// use collada::parser::{Action, Mode, dispatch};
///
/// assert_eq!(dispatch(Mode::Root, "COLLADA"), Some(Action::Wrap(Mode::Collada)));
/// assert_eq!(dispatch(Mode::Collada, "asset"), None);
/// ```
pub fn dispatch(mode: Mode, name: &str) -> Option<Action> {
    use Action::{Attach, Open, Wrap};

    if name == "extra" {
        return Some(Wrap(Mode::Extra));
    }

    match mode {
        Mode::Root => match name {
            "COLLADA" => Some(Wrap(Mode::Collada)),
            _ => None,
        },
        Mode::Collada => match name {
            "library_images" => Some(Open(Mode::LibraryImages)),
            "library_materials" => Some(Open(Mode::LibraryMaterials)),
            "library_effects" => Some(Open(Mode::LibraryEffects)),
            "library_geometries" => Some(Open(Mode::LibraryGeometries)),
            "library_cameras" => Some(Open(Mode::LibraryCameras)),
            "library_lights" => Some(Open(Mode::LibraryLights)),
            "library_animations" => Some(Wrap(Mode::LibraryAnimations)),
            "library_visual_scenes" => Some(Wrap(Mode::LibraryVisualScenes)),
            _ => None,
        },

        Mode::LibraryImages => match name {
            "image" => Some(Open(Mode::Image)),
            _ => None,
        },
        Mode::Image => match name {
            "init_from" => Some(Open(Mode::ImageInitFrom)),
            _ => None,
        },
        Mode::ImageInitFrom => match name {
            "ref" => Some(Open(Mode::ImageRef)),
            _ => None,
        },

        Mode::LibraryMaterials => match name {
            "material" => Some(Open(Mode::Material)),
            _ => None,
        },
        Mode::Material => match name {
            "instance_effect" => Some(Open(Mode::InstanceEffect)),
            _ => None,
        },

        Mode::LibraryEffects => match name {
            "effect" => Some(Open(Mode::Effect)),
            _ => None,
        },
        Mode::Effect => match name {
            "profile_COMMON" => Some(Open(Mode::ProfileCommon)),
            _ => None,
        },
        Mode::ProfileCommon => match name {
            "newparam" => Some(Open(Mode::NewParam)),
            "technique" => Some(Open(Mode::Technique)),
            _ => None,
        },
        Mode::NewParam => match name {
            "semantic" => Some(Open(Mode::NewParamSemantic)),
            "float" => Some(Open(Mode::NewParamFloat)),
            "sampler2D" => Some(Open(Mode::Sampler2D)),
            _ => None,
        },
        Mode::Sampler2D => match name {
            "source" => Some(Open(Mode::SamplerSource)),
            "minfilter" => Some(Open(Mode::MinFilter)),
            "magfilter" => Some(Open(Mode::MagFilter)),
            "wrap_s" => Some(Open(Mode::WrapS)),
            "wrap_t" => Some(Open(Mode::WrapT)),
            _ => None,
        },
        Mode::Technique => match name {
            "constant" => Some(Open(Mode::Shader(ShadingModel::Constant))),
            "lambert" => Some(Open(Mode::Shader(ShadingModel::Lambert))),
            "phong" => Some(Open(Mode::Shader(ShadingModel::Phong))),
            "blinn" => Some(Open(Mode::Shader(ShadingModel::Blinn))),
            _ => None,
        },
        Mode::Shader(model) => {
            if let Some(slot) = ColorSlot::from_tag(name) {
                return model
                    .has_color_slot(slot)
                    .then_some(Open(Mode::ColorOrTexture(slot)));
            }
            FloatSlot::from_tag(name)
                .filter(|slot| model.has_float_slot(*slot))
                .map(|slot| Open(Mode::FloatOrParam(slot)))
        }
        Mode::ColorOrTexture(_) => match name {
            "color" => Some(Open(Mode::ShaderColor)),
            "texture" => Some(Attach(Leaf::Texture)),
            _ => None,
        },
        Mode::FloatOrParam(_) => match name {
            "float" => Some(Open(Mode::ShaderFloat)),
            "param" => Some(Attach(Leaf::ParamRef)),
            _ => None,
        },

        Mode::LibraryGeometries => match name {
            "geometry" => Some(Open(Mode::Geometry)),
            _ => None,
        },
        Mode::Geometry => match name {
            "mesh" => Some(Open(Mode::Mesh)),
            _ => None,
        },
        Mode::Mesh => match name {
            "source" => Some(Open(Mode::Source)),
            "vertices" => Some(Open(Mode::Vertices)),
            "triangles" => Some(Open(Mode::Triangles)),
            _ => None,
        },
        Mode::Source => match name {
            "float_array" => Some(Open(Mode::FloatArray)),
            "Name_array" => Some(Open(Mode::NameArray)),
            "technique_common" => Some(Wrap(Mode::SourceTechniqueCommon)),
            _ => None,
        },
        Mode::SourceTechniqueCommon => match name {
            "accessor" => Some(Open(Mode::Accessor)),
            _ => None,
        },
        Mode::Accessor => match name {
            "param" => Some(Attach(Leaf::AccessorParam)),
            _ => None,
        },
        Mode::Vertices => match name {
            "input" => Some(Attach(Leaf::VerticesInput)),
            _ => None,
        },
        Mode::Triangles => match name {
            "input" => Some(Open(Mode::PrimitivesInput)),
            "p" => Some(Open(Mode::PrimitiveData)),
            _ => None,
        },

        Mode::LibraryCameras => match name {
            "camera" => Some(Open(Mode::Camera)),
            _ => None,
        },
        Mode::Camera => match name {
            "optics" => Some(Wrap(Mode::Optics)),
            _ => None,
        },
        Mode::Optics => match name {
            "technique_common" => Some(Wrap(Mode::OpticsTechniqueCommon)),
            _ => None,
        },
        Mode::OpticsTechniqueCommon => match name {
            "perspective" => Some(Open(Mode::Projection(ProjectionKind::Perspective))),
            "orthographic" => Some(Open(Mode::Projection(ProjectionKind::Orthographic))),
            _ => None,
        },
        Mode::Projection(kind) => {
            let slot = match (kind, name) {
                (ProjectionKind::Perspective, "xfov") => ProjectionValueSlot::Xfov,
                (ProjectionKind::Perspective, "yfov") => ProjectionValueSlot::Yfov,
                (ProjectionKind::Orthographic, "xmag") => ProjectionValueSlot::Xmag,
                (ProjectionKind::Orthographic, "ymag") => ProjectionValueSlot::Ymag,
                (_, "aspect_ratio") => ProjectionValueSlot::AspectRatio,
                (_, "znear") => ProjectionValueSlot::Znear,
                (_, "zfar") => ProjectionValueSlot::Zfar,
                _ => return None,
            };
            Some(Open(Mode::ProjectionValue(slot)))
        }

        Mode::LibraryLights => match name {
            "light" => Some(Open(Mode::Light)),
            _ => None,
        },
        Mode::Light => match name {
            "technique_common" => Some(Wrap(Mode::LightTechniqueCommon)),
            _ => None,
        },
        Mode::LightTechniqueCommon => match name {
            "ambient" => Some(Open(Mode::LightSource(LightKind::Ambient))),
            "directional" => Some(Open(Mode::LightSource(LightKind::Directional))),
            "point" => Some(Open(Mode::LightSource(LightKind::Point))),
            "spot" => Some(Open(Mode::LightSource(LightKind::Spot))),
            _ => None,
        },
        Mode::LightSource(kind) => {
            let attenuated = matches!(kind, LightKind::Point | LightKind::Spot);
            let slot = match name {
                "color" => return Some(Open(Mode::LightColor)),
                "constant_attenuation" if attenuated => LightValueSlot::ConstantAttenuation,
                "linear_attenuation" if attenuated => LightValueSlot::LinearAttenuation,
                "quadratic_attenuation" if attenuated => LightValueSlot::QuadraticAttenuation,
                "falloff_angle" if kind == LightKind::Spot => LightValueSlot::FalloffAngle,
                "falloff_exponent" if kind == LightKind::Spot => LightValueSlot::FalloffExponent,
                _ => return None,
            };
            Some(Open(Mode::LightValue(slot)))
        }

        Mode::Extra
        | Mode::ImageRef
        | Mode::InstanceEffect
        | Mode::NewParamSemantic
        | Mode::NewParamFloat
        | Mode::SamplerSource
        | Mode::MinFilter
        | Mode::MagFilter
        | Mode::WrapS
        | Mode::WrapT
        | Mode::ShaderColor
        | Mode::ShaderFloat
        | Mode::FloatArray
        | Mode::NameArray
        | Mode::PrimitivesInput
        | Mode::PrimitiveData
        | Mode::ProjectionValue(_)
        | Mode::LightColor
        | Mode::LightValue(_)
        | Mode::LibraryAnimations
        | Mode::LibraryVisualScenes => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_from_any_mode() {
        for mode in [
            Mode::Root,
            Mode::Collada,
            Mode::Extra,
            Mode::Accessor,
            Mode::LightValue(LightValueSlot::FalloffAngle),
        ] {
            assert_eq!(dispatch(mode, "extra"), Some(Action::Wrap(Mode::Extra)));
        }
    }

    #[test]
    fn test_extra_content_is_opaque() {
        assert_eq!(dispatch(Mode::Extra, "technique"), None);
        assert_eq!(dispatch(Mode::Extra, "COLLADA"), None);
    }

    #[test]
    fn test_leaves() {
        assert_eq!(
            dispatch(Mode::Accessor, "param"),
            Some(Action::Attach(Leaf::AccessorParam))
        );
        assert_eq!(
            dispatch(Mode::Vertices, "input"),
            Some(Action::Attach(Leaf::VerticesInput))
        );
        assert_eq!(
            dispatch(Mode::Triangles, "input"),
            Some(Action::Open(Mode::PrimitivesInput))
        );
    }

    #[test]
    fn test_shader_slots_follow_model() {
        let constant = Mode::Shader(ShadingModel::Constant);
        assert_eq!(dispatch(constant, "diffuse"), None);
        assert_eq!(dispatch(constant, "shininess"), None);
        assert_eq!(
            dispatch(constant, "emission"),
            Some(Action::Open(Mode::ColorOrTexture(ColorSlot::Emission)))
        );
        assert_eq!(
            dispatch(Mode::Shader(ShadingModel::Phong), "shininess"),
            Some(Action::Open(Mode::FloatOrParam(FloatSlot::Shininess)))
        );
    }

    #[test]
    fn test_light_values_follow_kind() {
        let ambient = Mode::LightSource(LightKind::Ambient);
        assert_eq!(dispatch(ambient, "color"), Some(Action::Open(Mode::LightColor)));
        assert_eq!(dispatch(ambient, "constant_attenuation"), None);
        assert_eq!(dispatch(Mode::LightSource(LightKind::Point), "falloff_angle"), None);
        assert_eq!(
            dispatch(Mode::LightSource(LightKind::Spot), "falloff_angle"),
            Some(Action::Open(Mode::LightValue(LightValueSlot::FalloffAngle)))
        );
    }

    #[test]
    fn test_projection_values_follow_kind() {
        let perspective = Mode::Projection(ProjectionKind::Perspective);
        assert_eq!(dispatch(perspective, "xmag"), None);
        assert_eq!(
            dispatch(perspective, "yfov"),
            Some(Action::Open(Mode::ProjectionValue(ProjectionValueSlot::Yfov)))
        );
        assert_eq!(
            dispatch(Mode::Projection(ProjectionKind::Orthographic), "znear"),
            Some(Action::Open(Mode::ProjectionValue(ProjectionValueSlot::Znear)))
        );
    }

    #[test]
    fn test_known_name_in_wrong_parent() {
        assert_eq!(dispatch(Mode::Collada, "image"), None);
        assert_eq!(dispatch(Mode::Mesh, "accessor"), None);
        assert_eq!(dispatch(Mode::LibraryAnimations, "animation"), None);
    }
}
