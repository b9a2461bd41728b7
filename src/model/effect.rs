//! Effects: the common profile, its parameters and shaders

use crate::error::{Error, Result};
use crate::uri::Uri;

use super::core::{FloatValue, RgbaColor};

/// An `<effect>` declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    /// Effect id
    pub id: Option<String>,
    /// Effect name
    pub name: Option<String>,
    /// Profiles in document order
    pub profiles: Vec<Profile>,
}

impl Effect {
    /// The first common profile, if any
    pub fn common_profile(&self) -> Option<&CommonProfile> {
        self.profiles.iter().find_map(|p| match p {
            Profile::Common(common) => Some(common),
        })
    }
}

/// A rendering profile of an effect
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    /// `<profile_COMMON>`
    Common(CommonProfile),
}

/// `<profile_COMMON>`
#[derive(Debug, Clone, PartialEq)]
pub struct CommonProfile {
    /// Profile id
    pub id: Option<String>,
    /// Parameters declared by the profile
    pub new_params: Vec<NewParam>,
    /// The fixed-function technique
    pub technique: Technique,
}

impl CommonProfile {
    /// Find a parameter by sid
    pub fn new_param(&self, sid: &str) -> Option<&NewParam> {
        self.new_params.iter().find(|p| p.sid.as_deref() == Some(sid))
    }
}

/// `<newparam>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewParam {
    /// Scoped id the parameter is referenced by
    pub sid: Option<String>,
    /// `<semantic>` text
    pub semantic: Option<String>,
    /// Parameter value, when of a supported type
    pub value: Option<ParamValue>,
}

/// Value carried by a `<newparam>`
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// `<float>`
    Float(f64),
    /// `<sampler2D>`
    Sampler2D(Sampler2D),
}

/// `<sampler2D>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sampler2D {
    /// `<source>`: sid of the surface or image parameter
    pub source: Option<String>,
    /// Minification filter
    pub min_filter: Option<Filter>,
    /// Magnification filter
    pub mag_filter: Option<Filter>,
    /// Wrap mode along s
    pub wrap_s: Option<Wrap>,
    /// Wrap mode along t
    pub wrap_t: Option<Wrap>,
}

/// Texture filtering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// NONE
    None,
    /// NEAREST
    Nearest,
    /// LINEAR
    Linear,
    /// NEAREST_MIPMAP_NEAREST
    NearestMipmapNearest,
    /// LINEAR_MIPMAP_NEAREST
    LinearMipmapNearest,
    /// NEAREST_MIPMAP_LINEAR
    NearestMipmapLinear,
    /// LINEAR_MIPMAP_LINEAR
    LinearMipmapLinear,
    /// ANISOTROPIC
    Anisotropic,
}

impl Filter {
    /// Parse a filter literal as written in the document
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim() {
            "NONE" => Ok(Filter::None),
            "NEAREST" => Ok(Filter::Nearest),
            "LINEAR" => Ok(Filter::Linear),
            "NEAREST_MIPMAP_NEAREST" => Ok(Filter::NearestMipmapNearest),
            "LINEAR_MIPMAP_NEAREST" => Ok(Filter::LinearMipmapNearest),
            "NEAREST_MIPMAP_LINEAR" => Ok(Filter::NearestMipmapLinear),
            "LINEAR_MIPMAP_LINEAR" => Ok(Filter::LinearMipmapLinear),
            "ANISOTROPIC" => Ok(Filter::Anisotropic),
            other => Err(Error::malformed_value("filter", other, "sampler filter mode")),
        }
    }
}

/// Texture coordinate wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// WRAP
    Wrap,
    /// MIRROR
    Mirror,
    /// CLAMP
    Clamp,
    /// BORDER
    Border,
    /// NONE
    None,
    /// MIRROR_ONCE
    MirrorOnce,
}

impl Wrap {
    /// Parse a wrap literal as written in the document
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim() {
            "WRAP" => Ok(Wrap::Wrap),
            "MIRROR" => Ok(Wrap::Mirror),
            "CLAMP" => Ok(Wrap::Clamp),
            "BORDER" => Ok(Wrap::Border),
            "NONE" => Ok(Wrap::None),
            "MIRROR_ONCE" => Ok(Wrap::MirrorOnce),
            other => Err(Error::malformed_value("wrap mode", other, "sampler wrap mode")),
        }
    }
}

/// `<technique>` of the common profile
#[derive(Debug, Clone, PartialEq)]
pub struct Technique {
    /// Technique id
    pub id: Option<String>,
    /// Scoped id
    pub sid: Option<String>,
    /// The shader
    pub shader: Shader,
}

/// Fixed-function shading model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadingModel {
    /// `<constant>`
    Constant,
    /// `<lambert>`
    Lambert,
    /// `<phong>`
    Phong,
    /// `<blinn>`
    Blinn,
}

impl ShadingModel {
    /// Element name of the model
    pub fn tag_name(self) -> &'static str {
        match self {
            ShadingModel::Constant => "constant",
            ShadingModel::Lambert => "lambert",
            ShadingModel::Phong => "phong",
            ShadingModel::Blinn => "blinn",
        }
    }

    /// Whether the model carries the given color slot
    pub fn has_color_slot(self, slot: ColorSlot) -> bool {
        match slot {
            ColorSlot::Emission | ColorSlot::Reflective | ColorSlot::Transparent => true,
            ColorSlot::Ambient | ColorSlot::Diffuse => self != ShadingModel::Constant,
            ColorSlot::Specular => matches!(self, ShadingModel::Phong | ShadingModel::Blinn),
        }
    }

    /// Whether the model carries the given float slot
    pub fn has_float_slot(self, slot: FloatSlot) -> bool {
        match slot {
            FloatSlot::Shininess => matches!(self, ShadingModel::Phong | ShadingModel::Blinn),
            FloatSlot::Reflectivity | FloatSlot::Transparency | FloatSlot::IndexOfRefraction => {
                true
            }
        }
    }
}

/// Color-or-texture attribute of a shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// `<emission>`
    Emission,
    /// `<ambient>`
    Ambient,
    /// `<diffuse>`
    Diffuse,
    /// `<specular>`
    Specular,
    /// `<reflective>`
    Reflective,
    /// `<transparent>`
    Transparent,
}

impl ColorSlot {
    /// Every slot in schema order
    pub const ALL: [ColorSlot; 6] = [
        ColorSlot::Emission,
        ColorSlot::Ambient,
        ColorSlot::Diffuse,
        ColorSlot::Specular,
        ColorSlot::Reflective,
        ColorSlot::Transparent,
    ];

    /// Element name of the slot
    pub fn tag_name(self) -> &'static str {
        match self {
            ColorSlot::Emission => "emission",
            ColorSlot::Ambient => "ambient",
            ColorSlot::Diffuse => "diffuse",
            ColorSlot::Specular => "specular",
            ColorSlot::Reflective => "reflective",
            ColorSlot::Transparent => "transparent",
        }
    }

    /// Slot for an element name
    pub fn from_tag(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag_name() == name)
    }
}

/// Float-or-param attribute of a shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatSlot {
    /// `<shininess>`
    Shininess,
    /// `<reflectivity>`
    Reflectivity,
    /// `<transparency>`
    Transparency,
    /// `<index_of_refraction>`
    IndexOfRefraction,
}

impl FloatSlot {
    /// Every slot in schema order
    pub const ALL: [FloatSlot; 4] = [
        FloatSlot::Shininess,
        FloatSlot::Reflectivity,
        FloatSlot::Transparency,
        FloatSlot::IndexOfRefraction,
    ];

    /// Element name of the slot
    pub fn tag_name(self) -> &'static str {
        match self {
            FloatSlot::Shininess => "shininess",
            FloatSlot::Reflectivity => "reflectivity",
            FloatSlot::Transparency => "transparency",
            FloatSlot::IndexOfRefraction => "index_of_refraction",
        }
    }

    /// Slot for an element name
    pub fn from_tag(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag_name() == name)
    }
}

/// A fixed-function shader
///
/// Slots that do not belong to [`Shader::model`] are always `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    /// Shading model
    pub model: ShadingModel,
    /// `<emission>`
    pub emission: Option<ColorOrTexture>,
    /// `<ambient>`
    pub ambient: Option<ColorOrTexture>,
    /// `<diffuse>`
    pub diffuse: Option<ColorOrTexture>,
    /// `<specular>`
    pub specular: Option<ColorOrTexture>,
    /// `<shininess>`
    pub shininess: Option<FloatOrParam>,
    /// `<reflective>`
    pub reflective: Option<ColorOrTexture>,
    /// `<reflectivity>`
    pub reflectivity: Option<FloatOrParam>,
    /// `<transparent>`
    pub transparent: Option<ColorOrTexture>,
    /// `<transparency>`
    pub transparency: Option<FloatOrParam>,
    /// `<index_of_refraction>`
    pub index_of_refraction: Option<FloatOrParam>,
}

impl Shader {
    /// An empty shader of the given model
    pub fn new(model: ShadingModel) -> Self {
        Self {
            model,
            emission: None,
            ambient: None,
            diffuse: None,
            specular: None,
            shininess: None,
            reflective: None,
            reflectivity: None,
            transparent: None,
            transparency: None,
            index_of_refraction: None,
        }
    }

    /// Read a color slot
    pub fn color(&self, slot: ColorSlot) -> Option<&ColorOrTexture> {
        match slot {
            ColorSlot::Emission => self.emission.as_ref(),
            ColorSlot::Ambient => self.ambient.as_ref(),
            ColorSlot::Diffuse => self.diffuse.as_ref(),
            ColorSlot::Specular => self.specular.as_ref(),
            ColorSlot::Reflective => self.reflective.as_ref(),
            ColorSlot::Transparent => self.transparent.as_ref(),
        }
    }

    /// Read a float slot
    pub fn float(&self, slot: FloatSlot) -> Option<&FloatOrParam> {
        match slot {
            FloatSlot::Shininess => self.shininess.as_ref(),
            FloatSlot::Reflectivity => self.reflectivity.as_ref(),
            FloatSlot::Transparency => self.transparency.as_ref(),
            FloatSlot::IndexOfRefraction => self.index_of_refraction.as_ref(),
        }
    }

    /// Store a color slot; ignored when the model has no such slot
    pub fn set_color(&mut self, slot: ColorSlot, value: ColorOrTexture) {
        if !self.model.has_color_slot(slot) {
            return;
        }
        let target = match slot {
            ColorSlot::Emission => &mut self.emission,
            ColorSlot::Ambient => &mut self.ambient,
            ColorSlot::Diffuse => &mut self.diffuse,
            ColorSlot::Specular => &mut self.specular,
            ColorSlot::Reflective => &mut self.reflective,
            ColorSlot::Transparent => &mut self.transparent,
        };
        *target = Some(value);
    }

    /// Store a float slot; ignored when the model has no such slot
    pub fn set_float(&mut self, slot: FloatSlot, value: FloatOrParam) {
        if !self.model.has_float_slot(slot) {
            return;
        }
        let target = match slot {
            FloatSlot::Shininess => &mut self.shininess,
            FloatSlot::Reflectivity => &mut self.reflectivity,
            FloatSlot::Transparency => &mut self.transparency,
            FloatSlot::IndexOfRefraction => &mut self.index_of_refraction,
        };
        *target = Some(value);
    }
}

/// Value of a color slot
#[derive(Debug, Clone, PartialEq)]
pub enum ColorOrTexture {
    /// A literal `<color>`
    Color(RgbaColor),
    /// A `<texture>` sampler reference
    Texture(Texture),
}

/// `<texture>` inside a color slot
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Sid of the sampler parameter
    pub texture: String,
    /// Texture coordinate set symbol
    pub texcoord: String,
}

/// Value of a float slot
#[derive(Debug, Clone, PartialEq)]
pub enum FloatOrParam {
    /// A literal `<float>`
    Float(FloatValue),
    /// A `<param ref="...">` reference
    Param(Uri),
}
