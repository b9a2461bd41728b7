//! Element builders
//!
//! A builder is created from an element's attributes when the element opens,
//! absorbs the finished children that belong to it, and is consumed by
//! `build()` when the element closes. The result is handed to the closest
//! enclosing builder as a [`Node`].

mod camera;
mod effect;
mod geometry;
mod image;
mod library;
mod light;
mod material;

pub use camera::{CameraBuilder, ProjectionBuilder};
pub use effect::{
    ColorSlotBuilder, CommonProfileBuilder, EffectBuilder, FloatSlotBuilder, NewParamBuilder,
    Sampler2DBuilder, ShaderBuilder, TechniqueBuilder,
};
pub use geometry::{
    AccessorBuilder, DataSourceBuilder, FloatArrayBuilder, GeometryBuilder, IndexListBuilder,
    MeshBuilder, NameArrayBuilder, TrianglesBuilder, VerticesBuilder,
};
pub use image::{ImageBuilder, ImageSourceBuilder};
pub use library::LibraryBuilder;
pub use light::{LightBuilder, LightSourceBuilder};
pub use material::{EffectInstanceBuilder, MaterialBuilder};

use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::chunk::ChunkFloatReader;
use crate::parser::dispatch::Leaf;
use crate::parser::mode::{LightValueSlot, Mode, ProjectionValueSlot};
use crate::parser::Attributes;
use crate::uri::Uri;
use std::str::FromStr;

/// A finished construct on its way to its parent
#[derive(Debug)]
pub enum Node {
    /// A complete library
    Library(LibraryBuilder),
    /// `<image>`
    Image(Image),
    /// `<init_from>` of an image
    ImageSource(ImageSource),
    /// `<ref>` of an image source
    ImageRef(Uri),
    /// `<material>`
    Material(Material),
    /// `<instance_effect>`
    EffectInstance(EffectInstance),
    /// `<effect>`
    Effect(Effect),
    /// A profile of an effect
    Profile(Profile),
    /// `<newparam>`
    NewParam(NewParam),
    /// `<semantic>` of a newparam
    Semantic(String),
    /// `<float>` of a newparam
    ParamFloat(f64),
    /// `<sampler2D>`
    Sampler2D(Sampler2D),
    /// `<source>` of a sampler
    SamplerSource(String),
    /// `<minfilter>`
    MinFilter(Filter),
    /// `<magfilter>`
    MagFilter(Filter),
    /// `<wrap_s>`
    WrapS(Wrap),
    /// `<wrap_t>`
    WrapT(Wrap),
    /// `<technique>` of a profile
    Technique(Technique),
    /// A shader
    Shader(Shader),
    /// A color-or-texture shader attribute
    ColorOrTexture(ColorSlot, Option<ColorOrTexture>),
    /// A float-or-param shader attribute
    FloatOrParam(FloatSlot, Option<FloatOrParam>),
    /// `<color>` inside a shader attribute
    ShaderColor(RgbaColor),
    /// `<float>` inside a shader attribute
    ShaderFloat(FloatValue),
    /// `<geometry>`
    Geometry(Geometry),
    /// `<mesh>`
    Mesh(Mesh),
    /// `<source>` of a mesh
    Source(DataFlowSource),
    /// `<float_array>` or `<Name_array>`
    Array(ArrayPayload),
    /// `<accessor>`
    Accessor(Accessor),
    /// `<vertices>`
    Vertices(Vertices),
    /// `<triangles>`
    Triangles(Triangles),
    /// `<input>` of a primitive
    SharedInput(SharedInput),
    /// `<p>`
    Indices(PrimitiveData),
    /// `<camera>`
    Camera(Camera),
    /// `<perspective>` or `<orthographic>`
    Projection(Projection),
    /// A scalar child of a projection
    ProjectionValue(ProjectionValueSlot, FloatValue),
    /// `<light>`
    Light(Light),
    /// A light source
    LightSource(LightSource),
    /// `<color>` of a light source
    LightColor(RgbColor),
    /// A scalar child of a light source
    LightValue(LightValueSlot, FloatValue),
}

impl Node {
    /// Short description used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Library(_) => "library",
            Node::Image(_) => "image",
            Node::ImageSource(_) => "init_from",
            Node::ImageRef(_) => "ref",
            Node::Material(_) => "material",
            Node::EffectInstance(_) => "instance_effect",
            Node::Effect(_) => "effect",
            Node::Profile(_) => "profile",
            Node::NewParam(_) => "newparam",
            Node::Semantic(_) => "semantic",
            Node::ParamFloat(_) => "newparam float",
            Node::Sampler2D(_) => "sampler2D",
            Node::SamplerSource(_) => "sampler source",
            Node::MinFilter(_) => "minfilter",
            Node::MagFilter(_) => "magfilter",
            Node::WrapS(_) => "wrap_s",
            Node::WrapT(_) => "wrap_t",
            Node::Technique(_) => "technique",
            Node::Shader(_) => "shader",
            Node::ColorOrTexture(..) => "color-or-texture attribute",
            Node::FloatOrParam(..) => "float-or-param attribute",
            Node::ShaderColor(_) => "shader color",
            Node::ShaderFloat(_) => "shader float",
            Node::Geometry(_) => "geometry",
            Node::Mesh(_) => "mesh",
            Node::Source(_) => "source",
            Node::Array(_) => "array",
            Node::Accessor(_) => "accessor",
            Node::Vertices(_) => "vertices",
            Node::Triangles(_) => "triangles",
            Node::SharedInput(_) => "input",
            Node::Indices(_) => "p",
            Node::Camera(_) => "camera",
            Node::Projection(_) => "projection",
            Node::ProjectionValue(..) => "projection value",
            Node::Light(_) => "light",
            Node::LightSource(_) => "light source",
            Node::LightColor(_) => "light color",
            Node::LightValue(..) => "light value",
        }
    }
}

/// Staged content of an open element
#[derive(Debug)]
pub enum Builder {
    /// Structural frame without content of its own
    None,
    /// `library_*`
    Library(LibraryBuilder),
    /// `<image>`
    Image(ImageBuilder),
    /// `<init_from>` of an image
    ImageSource(ImageSourceBuilder),
    /// `<material>`
    Material(MaterialBuilder),
    /// `<instance_effect>`
    EffectInstance(EffectInstanceBuilder),
    /// `<effect>`
    Effect(EffectBuilder),
    /// `<profile_COMMON>`
    CommonProfile(CommonProfileBuilder),
    /// `<newparam>`
    NewParam(NewParamBuilder),
    /// `<sampler2D>`
    Sampler2D(Sampler2DBuilder),
    /// `<technique>` of a profile
    Technique(TechniqueBuilder),
    /// A shader
    Shader(ShaderBuilder),
    /// A color-or-texture shader attribute
    ColorSlot(ColorSlotBuilder),
    /// A float-or-param shader attribute
    FloatSlot(FloatSlotBuilder),
    /// `<geometry>`
    Geometry(GeometryBuilder),
    /// `<mesh>`
    Mesh(MeshBuilder),
    /// `<source>` of a mesh
    DataSource(DataSourceBuilder),
    /// `<float_array>`
    FloatArray(FloatArrayBuilder),
    /// `<Name_array>`
    NameArray(NameArrayBuilder),
    /// `<accessor>`
    Accessor(AccessorBuilder),
    /// `<vertices>`
    Vertices(VerticesBuilder),
    /// `<triangles>`
    Triangles(TrianglesBuilder),
    /// `<input>` of a primitive, complete once its attributes are read
    SharedInput(SharedInput),
    /// `<p>`
    IndexList(IndexListBuilder),
    /// `<camera>`
    Camera(CameraBuilder),
    /// `<perspective>` or `<orthographic>`
    Projection(ProjectionBuilder),
    /// `<light>`
    Light(LightBuilder),
    /// A light source
    LightSource(LightSourceBuilder),
    /// Text content of a single-valued element
    Scalar(ScalarText),
    /// Text content of a `<color>`
    Color(ColorText),
}

impl Builder {
    /// Allocate the builder for an element entering `mode`
    pub fn open(mode: Mode, attrs: &Attributes, config: &ParserConfig) -> Result<Self> {
        let builder = match mode {
            Mode::Root
            | Mode::Collada
            | Mode::Extra
            | Mode::Optics
            | Mode::OpticsTechniqueCommon
            | Mode::SourceTechniqueCommon
            | Mode::LightTechniqueCommon
            | Mode::LibraryAnimations
            | Mode::LibraryVisualScenes => Builder::None,

            Mode::LibraryImages
            | Mode::LibraryMaterials
            | Mode::LibraryEffects
            | Mode::LibraryGeometries
            | Mode::LibraryCameras
            | Mode::LibraryLights => Builder::Library(LibraryBuilder::from_attributes(mode, attrs)?),

            Mode::Image => Builder::Image(ImageBuilder::from_attributes(attrs)),
            Mode::ImageInitFrom => Builder::ImageSource(ImageSourceBuilder::from_attributes(attrs)?),
            Mode::Material => Builder::Material(MaterialBuilder::from_attributes(attrs)),
            Mode::InstanceEffect => {
                Builder::EffectInstance(EffectInstanceBuilder::from_attributes(attrs)?)
            }
            Mode::Effect => Builder::Effect(EffectBuilder::from_attributes(attrs)),
            Mode::ProfileCommon => Builder::CommonProfile(CommonProfileBuilder::from_attributes(attrs)),
            Mode::NewParam => Builder::NewParam(NewParamBuilder::from_attributes(attrs)),
            Mode::Sampler2D => Builder::Sampler2D(Sampler2DBuilder::new()),
            Mode::Technique => Builder::Technique(TechniqueBuilder::from_attributes(attrs)),
            Mode::Shader(model) => Builder::Shader(ShaderBuilder::new(model)),
            Mode::ColorOrTexture(slot) => Builder::ColorSlot(ColorSlotBuilder::new(slot)),
            Mode::FloatOrParam(slot) => Builder::FloatSlot(FloatSlotBuilder::new(slot)),

            Mode::ImageRef
            | Mode::NewParamSemantic
            | Mode::NewParamFloat
            | Mode::SamplerSource
            | Mode::MinFilter
            | Mode::MagFilter
            | Mode::WrapS
            | Mode::WrapT
            | Mode::ShaderFloat
            | Mode::ProjectionValue(_)
            | Mode::LightValue(_) => Builder::Scalar(ScalarText::from_attributes(attrs)),
            Mode::ShaderColor => Builder::Color(ColorText::from_attributes(attrs, 4)),
            Mode::LightColor => Builder::Color(ColorText::from_attributes(attrs, 3)),

            Mode::Geometry => Builder::Geometry(GeometryBuilder::from_attributes(attrs)),
            Mode::Mesh => Builder::Mesh(MeshBuilder::new()),
            Mode::Source => Builder::DataSource(DataSourceBuilder::from_attributes(attrs)),
            Mode::FloatArray => Builder::FloatArray(FloatArrayBuilder::from_attributes(
                attrs,
                config.strict_array_counts(),
            )?),
            Mode::NameArray => Builder::NameArray(NameArrayBuilder::from_attributes(
                attrs,
                config.strict_array_counts(),
            )?),
            Mode::Accessor => Builder::Accessor(AccessorBuilder::from_attributes(attrs)?),
            Mode::Vertices => Builder::Vertices(VerticesBuilder::from_attributes(attrs)),
            Mode::Triangles => Builder::Triangles(TrianglesBuilder::from_attributes(attrs)?),
            Mode::PrimitivesInput => Builder::SharedInput(geometry::parse_shared_input(attrs)?),
            Mode::PrimitiveData => Builder::IndexList(IndexListBuilder::new()),

            Mode::Camera => Builder::Camera(CameraBuilder::from_attributes(attrs)),
            Mode::Projection(kind) => Builder::Projection(ProjectionBuilder::new(kind)),
            Mode::Light => Builder::Light(LightBuilder::from_attributes(attrs)),
            Mode::LightSource(kind) => Builder::LightSource(LightSourceBuilder::new(kind)),
        };
        Ok(builder)
    }

    /// Short description used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Builder::None => "structural element",
            Builder::Library(_) => "library",
            Builder::Image(_) => "image",
            Builder::ImageSource(_) => "init_from",
            Builder::Material(_) => "material",
            Builder::EffectInstance(_) => "instance_effect",
            Builder::Effect(_) => "effect",
            Builder::CommonProfile(_) => "profile_COMMON",
            Builder::NewParam(_) => "newparam",
            Builder::Sampler2D(_) => "sampler2D",
            Builder::Technique(_) => "technique",
            Builder::Shader(_) => "shader",
            Builder::ColorSlot(_) => "color-or-texture attribute",
            Builder::FloatSlot(_) => "float-or-param attribute",
            Builder::Geometry(_) => "geometry",
            Builder::Mesh(_) => "mesh",
            Builder::DataSource(_) => "source",
            Builder::FloatArray(_) => "float_array",
            Builder::NameArray(_) => "Name_array",
            Builder::Accessor(_) => "accessor",
            Builder::Vertices(_) => "vertices",
            Builder::Triangles(_) => "triangles",
            Builder::SharedInput(_) => "input",
            Builder::IndexList(_) => "p",
            Builder::Camera(_) => "camera",
            Builder::Projection(_) => "projection",
            Builder::Light(_) => "light",
            Builder::LightSource(_) => "light source",
            Builder::Scalar(_) => "text value",
            Builder::Color(_) => "color",
        }
    }

    /// Offer a text fragment to the staged content
    ///
    /// Builders without text content ignore it.
    pub fn text(&mut self, fragment: &str) -> Result<()> {
        match self {
            Builder::Scalar(text) => text.push(fragment),
            Builder::Color(color) => return color.feed(fragment),
            Builder::FloatArray(array) => return array.feed(fragment),
            Builder::NameArray(array) => return array.feed(fragment),
            Builder::IndexList(list) => return list.feed(fragment),
            Builder::ImageSource(source) => source.push_text(fragment),
            _ => {}
        }
        Ok(())
    }

    /// Add a leaf child directly from its attributes
    pub fn attach(&mut self, leaf: Leaf, attrs: &Attributes) -> Result<()> {
        match (self, leaf) {
            (Builder::Accessor(accessor), Leaf::AccessorParam) => accessor.add_param(attrs),
            (Builder::Vertices(vertices), Leaf::VerticesInput) => vertices.add_input(attrs),
            (Builder::ColorSlot(slot), Leaf::Texture) => slot.set_texture(attrs),
            (Builder::FloatSlot(slot), Leaf::ParamRef) => slot.set_param(attrs),
            (builder, leaf) => Err(Error::IllegalState(format!(
                "{} cannot hold leaf {:?}",
                builder.kind(),
                leaf
            ))),
        }
    }

    /// Hand a finished child to this builder
    pub fn absorb(&mut self, node: Node) -> Result<()> {
        match self {
            Builder::Library(b) => b.absorb(node),
            Builder::Image(b) => b.absorb(node),
            Builder::ImageSource(b) => b.absorb(node),
            Builder::Material(b) => b.absorb(node),
            Builder::Effect(b) => b.absorb(node),
            Builder::CommonProfile(b) => b.absorb(node),
            Builder::NewParam(b) => b.absorb(node),
            Builder::Sampler2D(b) => b.absorb(node),
            Builder::Technique(b) => b.absorb(node),
            Builder::Shader(b) => b.absorb(node),
            Builder::ColorSlot(b) => b.absorb(node),
            Builder::FloatSlot(b) => b.absorb(node),
            Builder::Geometry(b) => b.absorb(node),
            Builder::Mesh(b) => b.absorb(node),
            Builder::DataSource(b) => b.absorb(node),
            Builder::Triangles(b) => b.absorb(node),
            Builder::Camera(b) => b.absorb(node),
            Builder::Projection(b) => b.absorb(node),
            Builder::Light(b) => b.absorb(node),
            Builder::LightSource(b) => b.absorb(node),
            other => Err(unexpected(other.kind(), &node)),
        }
    }

    /// Finish the staged content of an element closing `mode`
    ///
    /// Structural frames produce nothing.
    pub fn build(self, mode: Mode) -> Result<Option<Node>> {
        let node = match self {
            Builder::None => return Ok(None),
            Builder::Library(b) => Node::Library(b),
            Builder::Image(b) => Node::Image(b.build()),
            Builder::ImageSource(b) => Node::ImageSource(b.build()?),
            Builder::Material(b) => Node::Material(b.build()),
            Builder::EffectInstance(b) => Node::EffectInstance(b.build()),
            Builder::Effect(b) => Node::Effect(b.build()),
            Builder::CommonProfile(b) => Node::Profile(Profile::Common(b.build()?)),
            Builder::NewParam(b) => Node::NewParam(b.build()),
            Builder::Sampler2D(b) => Node::Sampler2D(b.build()),
            Builder::Technique(b) => Node::Technique(b.build()?),
            Builder::Shader(b) => Node::Shader(b.build()),
            Builder::ColorSlot(b) => {
                let (slot, value) = b.build();
                Node::ColorOrTexture(slot, value)
            }
            Builder::FloatSlot(b) => {
                let (slot, value) = b.build();
                Node::FloatOrParam(slot, value)
            }
            Builder::Geometry(b) => Node::Geometry(b.build()),
            Builder::Mesh(b) => Node::Mesh(b.build()?),
            Builder::DataSource(b) => Node::Source(b.build()),
            Builder::FloatArray(b) => Node::Array(ArrayPayload::Float(b.build()?)),
            Builder::NameArray(b) => Node::Array(ArrayPayload::Name(b.build()?)),
            Builder::Accessor(b) => Node::Accessor(b.build()),
            Builder::Vertices(b) => Node::Vertices(b.build()),
            Builder::Triangles(b) => Node::Triangles(b.build()),
            Builder::SharedInput(input) => Node::SharedInput(input),
            Builder::IndexList(b) => Node::Indices(b.build()?),
            Builder::Camera(b) => Node::Camera(b.build()?),
            Builder::Projection(b) => Node::Projection(b.build()?),
            Builder::Light(b) => Node::Light(b.build()?),
            Builder::LightSource(b) => Node::LightSource(b.build()?),
            Builder::Scalar(text) => text.build(mode)?,
            Builder::Color(color) => color.build(mode)?,
        };
        Ok(Some(node))
    }
}

/// Error for a child arriving at a builder that has no place for it
pub(crate) fn unexpected(owner: &str, node: &Node) -> Error {
    Error::IllegalState(format!("{} cannot hold {}", owner, node.kind()))
}

/// Text content of an element holding a single value
#[derive(Debug, Default)]
pub struct ScalarText {
    sid: Option<String>,
    text: String,
}

impl ScalarText {
    /// Stage the element's `sid` and start collecting text
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            sid: attr(attrs, "sid"),
            text: String::new(),
        }
    }

    /// Append a text fragment
    pub fn push(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    /// The collected text with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// The collected text as a number with its sid
    pub fn float_value(self, element: &str) -> Result<FloatValue> {
        let value = parse_float(element, &self.text)?;
        Ok(FloatValue {
            value,
            sid: self.sid,
        })
    }

    fn build(self, mode: Mode) -> Result<Node> {
        let node = match mode {
            Mode::ImageRef => Node::ImageRef(Uri::parse(self.trimmed())?),
            Mode::NewParamSemantic => Node::Semantic(self.trimmed().to_string()),
            Mode::NewParamFloat => Node::ParamFloat(parse_float("float", &self.text)?),
            Mode::SamplerSource => Node::SamplerSource(self.trimmed().to_string()),
            Mode::MinFilter => Node::MinFilter(Filter::parse(&self.text)?),
            Mode::MagFilter => Node::MagFilter(Filter::parse(&self.text)?),
            Mode::WrapS => Node::WrapS(Wrap::parse(&self.text)?),
            Mode::WrapT => Node::WrapT(Wrap::parse(&self.text)?),
            Mode::ShaderFloat => Node::ShaderFloat(self.float_value("float")?),
            Mode::ProjectionValue(slot) => {
                Node::ProjectionValue(slot, self.float_value(slot.tag_name())?)
            }
            Mode::LightValue(slot) => Node::LightValue(slot, self.float_value(slot.tag_name())?),
            other => {
                return Err(Error::IllegalState(format!(
                    "no text value is read in mode {:?}",
                    other
                )));
            }
        };
        Ok(node)
    }
}

/// Text content of a `<color>`: a fixed number of whitespace-separated floats
#[derive(Debug)]
pub struct ColorText {
    sid: Option<String>,
    components: usize,
    reader: ChunkFloatReader,
    values: Vec<f64>,
}

impl ColorText {
    /// Stage a color expecting `components` values
    pub fn from_attributes(attrs: &Attributes, components: usize) -> Self {
        Self {
            sid: attr(attrs, "sid"),
            components,
            reader: ChunkFloatReader::new(),
            values: Vec::with_capacity(components),
        }
    }

    /// Decode a text fragment
    pub fn feed(&mut self, fragment: &str) -> Result<()> {
        let values = &mut self.values;
        self.reader.feed(fragment, |v| {
            values.push(v);
            Ok(())
        })
    }

    /// The decoded components; values past the expected number are dropped
    fn finish(mut self) -> Result<(Option<String>, Vec<f64>)> {
        let values = &mut self.values;
        self.reader.finish(|v| {
            values.push(v);
            Ok(())
        })?;
        if self.values.len() < self.components {
            return Err(Error::MalformedValue(format!(
                "Failed to parse color: expected {} components, got {}",
                self.components,
                self.values.len()
            )));
        }
        self.values.truncate(self.components);
        Ok((self.sid, self.values))
    }

    fn build(self, mode: Mode) -> Result<Node> {
        match mode {
            Mode::ShaderColor => {
                let (sid, v) = self.finish()?;
                Ok(Node::ShaderColor(RgbaColor {
                    sid,
                    red: v[0],
                    green: v[1],
                    blue: v[2],
                    alpha: v[3],
                }))
            }
            Mode::LightColor => {
                let (sid, v) = self.finish()?;
                Ok(Node::LightColor(RgbColor {
                    sid,
                    red: v[0],
                    green: v[1],
                    blue: v[2],
                }))
            }
            other => Err(Error::IllegalState(format!(
                "no color is read in mode {:?}",
                other
            ))),
        }
    }
}

/// Optional attribute value
pub(crate) fn attr(attrs: &Attributes, name: &str) -> Option<String> {
    attrs.get(name).cloned()
}

/// Required attribute value
pub(crate) fn required_attr<'a>(
    attrs: &'a Attributes,
    element: &str,
    name: &str,
) -> Result<&'a str> {
    attrs
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::missing_attribute(element, name))
}

/// Required attribute holding a URI reference
pub(crate) fn required_uri(attrs: &Attributes, element: &str, name: &str) -> Result<Uri> {
    Uri::parse(required_attr(attrs, element, name)?)
}

/// Optional numeric attribute; `expected` describes the accepted values
pub(crate) fn parse_optional<T: FromStr>(
    attrs: &Attributes,
    element: &str,
    name: &str,
    expected: &str,
) -> Result<Option<T>> {
    match attrs.get(name) {
        None => Ok(None),
        Some(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            Error::malformed_value(
                &format!("'{}' attribute of <{}>", name, element),
                value,
                expected,
            )
        }),
    }
}

/// Required numeric attribute
pub(crate) fn parse_required<T: FromStr>(
    attrs: &Attributes,
    element: &str,
    name: &str,
    expected: &str,
) -> Result<T> {
    parse_optional(attrs, element, name, expected)?.ok_or_else(|| Error::missing_attribute(element, name))
}

/// Text content holding a single floating-point number
pub(crate) fn parse_float(element: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| {
        Error::malformed_value(&format!("<{}> value", element), trimmed, "floating-point number")
    })
}

/// An `xs:boolean` attribute value
pub(crate) fn parse_bool(element: &str, name: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(Error::malformed_value(
            &format!("'{}' attribute of <{}>", name, element),
            other,
            "boolean",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_scalar_text_trims_and_keeps_sid() {
        let mut text = ScalarText::from_attributes(&attrs(&[("sid", "near")]));
        text.push("  0.");
        text.push("1\n");
        let value = text.float_value("znear").unwrap();
        assert_eq!(value.value, 0.1);
        assert_eq!(value.sid.as_deref(), Some("near"));
    }

    #[test]
    fn test_scalar_text_malformed() {
        let mut text = ScalarText::from_attributes(&Attributes::new());
        text.push("abc");
        let err = text.float_value("float").unwrap_err();
        assert!(matches!(err, Error::MalformedValue(_)));
        assert!(err.to_string().contains("<float> value"));
    }

    #[test]
    fn test_color_text_split_fragments() {
        let mut color = ColorText::from_attributes(&attrs(&[("sid", "c")]), 4);
        color.feed("0.1 0.").unwrap();
        color.feed("2 0.3 1").unwrap();
        let node = color.build(Mode::ShaderColor).unwrap();
        match node {
            Node::ShaderColor(c) => {
                assert_eq!((c.red, c.green, c.blue, c.alpha), (0.1, 0.2, 0.3, 1.0));
                assert_eq!(c.sid.as_deref(), Some("c"));
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_color_text_too_few_components() {
        let mut color = ColorText::from_attributes(&Attributes::new(), 3);
        color.feed("1 1").unwrap();
        assert!(matches!(color.build(Mode::LightColor), Err(Error::MalformedValue(_))));
    }

    #[test]
    fn test_required_helpers() {
        let a = attrs(&[("count", "12"), ("stride", "x"), ("scale", "big")]);
        assert_eq!(parse_required::<usize>(&a, "accessor", "count", "integer").unwrap(), 12);
        assert!(matches!(
            parse_required::<usize>(&a, "accessor", "source", "integer"),
            Err(Error::MissingAttribute { .. })
        ));
        assert!(matches!(
            parse_optional::<usize>(&a, "accessor", "stride", "integer"),
            Err(Error::MalformedValue(_))
        ));
        assert_eq!(
            parse_optional::<usize>(&a, "accessor", "offset", "integer").unwrap(),
            None
        );

        let err = parse_optional::<f32>(&a, "node", "scale", "floating-point number").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("floating-point number"));
        assert!(!msg.contains("integer"));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("init_from", "mips_generate", "true").unwrap());
        assert!(!parse_bool("init_from", "mips_generate", "0").unwrap());
        assert!(parse_bool("init_from", "mips_generate", "yes").is_err());
    }

    #[test]
    fn test_absorb_mismatch_is_illegal_state() {
        let mut builder = Builder::Mesh(MeshBuilder::new());
        let err = builder.absorb(Node::Semantic("X".into())).unwrap_err();
        assert!(matches!(err, Error::IllegalState(_)));
    }

    #[test]
    fn test_structural_builder_builds_nothing() {
        assert!(Builder::None.build(Mode::Optics).unwrap().is_none());
    }
}
