//! Grammar positions and the construction stack
//!
//! Every known element the reader descends into is represented by a [`Mode`].
//! The [`ContextStack`] pairs each open mode with the builder staging that
//! element's content, so there is exactly one place where construction state
//! lives.

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::model::{ColorSlot, FloatSlot, LightKind, ShadingModel};

/// Kind of camera projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// `<perspective>`
    Perspective,
    /// `<orthographic>`
    Orthographic,
}

impl ProjectionKind {
    /// Element name of the kind
    pub fn tag_name(self) -> &'static str {
        match self {
            ProjectionKind::Perspective => "perspective",
            ProjectionKind::Orthographic => "orthographic",
        }
    }
}

/// Scalar child of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionValueSlot {
    /// `<xfov>`
    Xfov,
    /// `<yfov>`
    Yfov,
    /// `<xmag>`
    Xmag,
    /// `<ymag>`
    Ymag,
    /// `<aspect_ratio>`
    AspectRatio,
    /// `<znear>`
    Znear,
    /// `<zfar>`
    Zfar,
}

impl ProjectionValueSlot {
    /// Element name of the slot
    pub fn tag_name(self) -> &'static str {
        match self {
            ProjectionValueSlot::Xfov => "xfov",
            ProjectionValueSlot::Yfov => "yfov",
            ProjectionValueSlot::Xmag => "xmag",
            ProjectionValueSlot::Ymag => "ymag",
            ProjectionValueSlot::AspectRatio => "aspect_ratio",
            ProjectionValueSlot::Znear => "znear",
            ProjectionValueSlot::Zfar => "zfar",
        }
    }
}

/// Scalar child of a light source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightValueSlot {
    /// `<constant_attenuation>`
    ConstantAttenuation,
    /// `<linear_attenuation>`
    LinearAttenuation,
    /// `<quadratic_attenuation>`
    QuadraticAttenuation,
    /// `<falloff_angle>`
    FalloffAngle,
    /// `<falloff_exponent>`
    FalloffExponent,
}

impl LightValueSlot {
    /// Element name of the slot
    pub fn tag_name(self) -> &'static str {
        match self {
            LightValueSlot::ConstantAttenuation => "constant_attenuation",
            LightValueSlot::LinearAttenuation => "linear_attenuation",
            LightValueSlot::QuadraticAttenuation => "quadratic_attenuation",
            LightValueSlot::FalloffAngle => "falloff_angle",
            LightValueSlot::FalloffExponent => "falloff_exponent",
        }
    }
}

/// A grammar position of the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Before the root element and after it closed
    Root,
    /// `<COLLADA>`
    Collada,
    /// `<extra>`: opaque content, only nested `<extra>` is tracked
    Extra,

    /// `<library_images>`
    LibraryImages,
    /// `<image>`
    Image,
    /// `<init_from>` of an image
    ImageInitFrom,
    /// `<ref>` inside `<init_from>`
    ImageRef,

    /// `<library_materials>`
    LibraryMaterials,
    /// `<material>`
    Material,
    /// `<instance_effect>`
    InstanceEffect,

    /// `<library_effects>`
    LibraryEffects,
    /// `<effect>`
    Effect,
    /// `<profile_COMMON>`
    ProfileCommon,
    /// `<newparam>`
    NewParam,
    /// `<semantic>` of a newparam
    NewParamSemantic,
    /// `<float>` of a newparam
    NewParamFloat,
    /// `<sampler2D>`
    Sampler2D,
    /// `<source>` of a sampler
    SamplerSource,
    /// `<minfilter>`
    MinFilter,
    /// `<magfilter>`
    MagFilter,
    /// `<wrap_s>`
    WrapS,
    /// `<wrap_t>`
    WrapT,
    /// `<technique>` of the common profile
    Technique,
    /// `<constant>`, `<lambert>`, `<phong>` or `<blinn>`
    Shader(ShadingModel),
    /// A color-or-texture attribute of a shader
    ColorOrTexture(ColorSlot),
    /// `<color>` inside a color-or-texture attribute
    ShaderColor,
    /// A float-or-param attribute of a shader
    FloatOrParam(FloatSlot),
    /// `<float>` inside a float-or-param attribute
    ShaderFloat,

    /// `<library_geometries>`
    LibraryGeometries,
    /// `<geometry>`
    Geometry,
    /// `<mesh>`
    Mesh,
    /// `<source>` inside a mesh
    Source,
    /// `<float_array>`
    FloatArray,
    /// `<Name_array>`
    NameArray,
    /// `<technique_common>` inside a source
    SourceTechniqueCommon,
    /// `<accessor>`
    Accessor,
    /// `<vertices>`
    Vertices,
    /// `<triangles>`
    Triangles,
    /// `<input>` inside a primitive
    PrimitivesInput,
    /// `<p>`
    PrimitiveData,

    /// `<library_cameras>`
    LibraryCameras,
    /// `<camera>`
    Camera,
    /// `<optics>`
    Optics,
    /// `<technique_common>` inside optics
    OpticsTechniqueCommon,
    /// `<perspective>` or `<orthographic>`
    Projection(ProjectionKind),
    /// A scalar child of a projection
    ProjectionValue(ProjectionValueSlot),

    /// `<library_lights>`
    LibraryLights,
    /// `<light>`
    Light,
    /// `<technique_common>` inside a light
    LightTechniqueCommon,
    /// `<ambient>`, `<directional>`, `<point>` or `<spot>`
    LightSource(LightKind),
    /// `<color>` of a light source
    LightColor,
    /// A scalar child of a light source
    LightValue(LightValueSlot),

    /// `<library_animations>`, entered but not populated
    LibraryAnimations,
    /// `<library_visual_scenes>`, entered but not populated
    LibraryVisualScenes,
}

impl Mode {
    /// Element name whose end tag closes this mode; `None` for [`Mode::Root`]
    pub fn tag_name(self) -> Option<&'static str> {
        let name = match self {
            Mode::Root => return None,
            Mode::Collada => "COLLADA",
            Mode::Extra => "extra",
            Mode::LibraryImages => "library_images",
            Mode::Image => "image",
            Mode::ImageInitFrom => "init_from",
            Mode::ImageRef => "ref",
            Mode::LibraryMaterials => "library_materials",
            Mode::Material => "material",
            Mode::InstanceEffect => "instance_effect",
            Mode::LibraryEffects => "library_effects",
            Mode::Effect => "effect",
            Mode::ProfileCommon => "profile_COMMON",
            Mode::NewParam => "newparam",
            Mode::NewParamSemantic => "semantic",
            Mode::NewParamFloat => "float",
            Mode::Sampler2D => "sampler2D",
            Mode::SamplerSource => "source",
            Mode::MinFilter => "minfilter",
            Mode::MagFilter => "magfilter",
            Mode::WrapS => "wrap_s",
            Mode::WrapT => "wrap_t",
            Mode::Technique => "technique",
            Mode::Shader(model) => model.tag_name(),
            Mode::ColorOrTexture(slot) => slot.tag_name(),
            Mode::ShaderColor => "color",
            Mode::FloatOrParam(slot) => slot.tag_name(),
            Mode::ShaderFloat => "float",
            Mode::LibraryGeometries => "library_geometries",
            Mode::Geometry => "geometry",
            Mode::Mesh => "mesh",
            Mode::Source => "source",
            Mode::FloatArray => "float_array",
            Mode::NameArray => "Name_array",
            Mode::SourceTechniqueCommon => "technique_common",
            Mode::Accessor => "accessor",
            Mode::Vertices => "vertices",
            Mode::Triangles => "triangles",
            Mode::PrimitivesInput => "input",
            Mode::PrimitiveData => "p",
            Mode::LibraryCameras => "library_cameras",
            Mode::Camera => "camera",
            Mode::Optics => "optics",
            Mode::OpticsTechniqueCommon => "technique_common",
            Mode::Projection(kind) => kind.tag_name(),
            Mode::ProjectionValue(slot) => slot.tag_name(),
            Mode::LibraryLights => "library_lights",
            Mode::Light => "light",
            Mode::LightTechniqueCommon => "technique_common",
            Mode::LightSource(kind) => kind.tag_name(),
            Mode::LightColor => "color",
            Mode::LightValue(slot) => slot.tag_name(),
            Mode::LibraryAnimations => "library_animations",
            Mode::LibraryVisualScenes => "library_visual_scenes",
        };
        Some(name)
    }
}

/// An open grammar position and the builder staged for it
#[derive(Debug)]
pub struct Frame {
    /// Grammar position
    pub mode: Mode,
    /// Content staged for the element; [`Builder::None`] for structural frames
    pub builder: Builder,
}

impl Frame {
    /// Create a frame
    pub fn new(mode: Mode, builder: Builder) -> Self {
        Self { mode, builder }
    }
}

/// Stack of open frames; the bottom frame is always [`Mode::Root`]
#[derive(Debug)]
pub struct ContextStack {
    current: Frame,
    suspended: Vec<Frame>,
}

impl ContextStack {
    /// A stack holding only the root frame
    pub fn new() -> Self {
        Self {
            current: Frame::new(Mode::Root, Builder::None),
            suspended: Vec::new(),
        }
    }

    /// Suspend the current frame and make a new one current
    pub fn enter(&mut self, mode: Mode, builder: Builder) {
        let previous = std::mem::replace(&mut self.current, Frame::new(mode, builder));
        self.suspended.push(previous);
    }

    /// Close the current frame and resume its parent
    ///
    /// Fails with [`Error::IllegalState`] at the root.
    pub fn leave(&mut self) -> Result<Frame> {
        let parent = self
            .suspended
            .pop()
            .ok_or_else(|| Error::IllegalState("cannot leave the root mode".to_string()))?;
        Ok(std::mem::replace(&mut self.current, parent))
    }

    /// Mode of the current frame
    pub fn mode(&self) -> Mode {
        self.current.mode
    }

    /// Number of open frames above the root
    pub fn depth(&self) -> usize {
        self.suspended.len()
    }

    /// Builder of the current frame
    pub fn builder_mut(&mut self) -> &mut Builder {
        &mut self.current.builder
    }

    /// The innermost builder that is not a structural placeholder
    pub fn owner_mut(&mut self) -> Option<&mut Builder> {
        if !matches!(self.current.builder, Builder::None) {
            return Some(&mut self.current.builder);
        }
        self.suspended
            .iter_mut()
            .rev()
            .map(|frame| &mut frame.builder)
            .find(|builder| !matches!(builder, Builder::None))
    }

    /// Slash-separated element path of the open frames
    pub fn path(&self) -> String {
        self.suspended
            .iter()
            .chain(std::iter::once(&self.current))
            .filter_map(|frame| frame.mode.tag_name())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}
