//! Effect builders for `<profile_COMMON>`
//!
//! The technique's shading model is assembled from color-or-texture and
//! float-or-param slots. Profiles other than the common one never reach these
//! builders.

use super::{Node, attr, required_attr, required_uri, unexpected};
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::Attributes;

/// Builds an [`Effect`]
#[derive(Debug, Default)]
pub struct EffectBuilder {
    id: Option<String>,
    name: Option<String>,
    profiles: Vec<Profile>,
}

impl EffectBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            profiles: Vec::new(),
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::Profile(profile) => self.profiles.push(profile),
            other => return Err(unexpected("effect", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Effect {
        Effect {
            id: self.id,
            name: self.name,
            profiles: self.profiles,
        }
    }
}

/// Builds a [`CommonProfile`]
#[derive(Debug, Default)]
pub struct CommonProfileBuilder {
    id: Option<String>,
    new_params: Vec<NewParam>,
    technique: Option<Technique>,
}

impl CommonProfileBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            new_params: Vec::new(),
            technique: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::NewParam(param) => self.new_params.push(param),
            Node::Technique(technique) => self.technique = Some(technique),
            other => return Err(unexpected("profile_COMMON", &other)),
        }
        Ok(())
    }

    /// Finish the element; fails without a `<technique>`
    pub fn build(self) -> Result<CommonProfile> {
        let technique = self.technique.ok_or_else(|| {
            Error::invalid_xml_element("profile_COMMON", "missing required <technique>")
        })?;
        Ok(CommonProfile {
            id: self.id,
            new_params: self.new_params,
            technique,
        })
    }
}

/// Builds a [`NewParam`]
#[derive(Debug, Default)]
pub struct NewParamBuilder {
    sid: Option<String>,
    semantic: Option<String>,
    value: Option<ParamValue>,
}

impl NewParamBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            sid: attr(attrs, "sid"),
            semantic: None,
            value: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::Semantic(semantic) => self.semantic = Some(semantic),
            Node::ParamFloat(value) => self.value = Some(ParamValue::Float(value)),
            Node::Sampler2D(sampler) => self.value = Some(ParamValue::Sampler2D(sampler)),
            other => return Err(unexpected("newparam", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> NewParam {
        NewParam {
            sid: self.sid,
            semantic: self.semantic,
            value: self.value,
        }
    }
}

/// Builds a [`Sampler2D`]
#[derive(Debug, Default)]
pub struct Sampler2DBuilder {
    sampler: Sampler2D,
}

impl Sampler2DBuilder {
    /// An empty sampler
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        let sampler = &mut self.sampler;
        match node {
            Node::SamplerSource(source) => sampler.source = Some(source),
            Node::MinFilter(filter) => sampler.min_filter = Some(filter),
            Node::MagFilter(filter) => sampler.mag_filter = Some(filter),
            Node::WrapS(wrap) => sampler.wrap_s = Some(wrap),
            Node::WrapT(wrap) => sampler.wrap_t = Some(wrap),
            other => return Err(unexpected("sampler2D", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Sampler2D {
        self.sampler
    }
}

/// Builds a [`Technique`]
#[derive(Debug, Default)]
pub struct TechniqueBuilder {
    id: Option<String>,
    sid: Option<String>,
    shader: Option<Shader>,
}

impl TechniqueBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            sid: attr(attrs, "sid"),
            shader: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::Shader(shader) => self.shader = Some(shader),
            other => return Err(unexpected("technique", &other)),
        }
        Ok(())
    }

    /// Finish the element; fails without a shader
    pub fn build(self) -> Result<Technique> {
        let shader = self.shader.ok_or_else(|| {
            Error::invalid_xml_element(
                "technique",
                "missing shader (<constant>, <lambert>, <phong> or <blinn>)",
            )
        })?;
        Ok(Technique {
            id: self.id,
            sid: self.sid,
            shader,
        })
    }
}

/// Builds a [`Shader`]; slots foreign to the model are dropped
#[derive(Debug)]
pub struct ShaderBuilder {
    shader: Shader,
}

impl ShaderBuilder {
    /// An empty shader of the given model
    pub fn new(model: ShadingModel) -> Self {
        Self {
            shader: Shader::new(model),
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::ColorOrTexture(slot, Some(value)) => self.shader.set_color(slot, value),
            Node::FloatOrParam(slot, Some(value)) => self.shader.set_float(slot, value),
            Node::ColorOrTexture(_, None) | Node::FloatOrParam(_, None) => {}
            other => return Err(unexpected(self.shader.model.tag_name(), &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Shader {
        self.shader
    }
}

/// Stages one color-or-texture attribute of a shader
#[derive(Debug)]
pub struct ColorSlotBuilder {
    slot: ColorSlot,
    value: Option<ColorOrTexture>,
}

impl ColorSlotBuilder {
    /// An empty slot
    pub fn new(slot: ColorSlot) -> Self {
        Self { slot, value: None }
    }

    /// Read a `<texture>` leaf
    pub fn set_texture(&mut self, attrs: &Attributes) -> Result<()> {
        let texture = required_attr(attrs, "texture", "texture")?.to_string();
        let texcoord = required_attr(attrs, "texture", "texcoord")?.to_string();
        self.value = Some(ColorOrTexture::Texture(Texture { texture, texcoord }));
        Ok(())
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::ShaderColor(color) => self.value = Some(ColorOrTexture::Color(color)),
            other => return Err(unexpected(self.slot.tag_name(), &other)),
        }
        Ok(())
    }

    /// The slot and whatever value it received
    pub fn build(self) -> (ColorSlot, Option<ColorOrTexture>) {
        (self.slot, self.value)
    }
}

/// Stages one float-or-param attribute of a shader
#[derive(Debug)]
pub struct FloatSlotBuilder {
    slot: FloatSlot,
    value: Option<FloatOrParam>,
}

impl FloatSlotBuilder {
    /// An empty slot
    pub fn new(slot: FloatSlot) -> Self {
        Self { slot, value: None }
    }

    /// Read a `<param ref="...">` leaf
    pub fn set_param(&mut self, attrs: &Attributes) -> Result<()> {
        let reference = required_uri(attrs, "param", "ref")?;
        self.value = Some(FloatOrParam::Param(reference));
        Ok(())
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::ShaderFloat(value) => self.value = Some(FloatOrParam::Float(value)),
            other => return Err(unexpected(self.slot.tag_name(), &other)),
        }
        Ok(())
    }

    /// The slot and whatever value it received
    pub fn build(self) -> (FloatSlot, Option<FloatOrParam>) {
        (self.slot, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_requires_shader() {
        let builder = TechniqueBuilder::from_attributes(&Attributes::new());
        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::InvalidXml(_)));
        assert!(err.to_string().contains("technique"));
    }

    #[test]
    fn test_profile_requires_technique() {
        let builder = CommonProfileBuilder::from_attributes(&Attributes::new());
        assert!(matches!(builder.build(), Err(Error::InvalidXml(_))));
    }

    #[test]
    fn test_texture_requires_texcoord() {
        let mut attrs = Attributes::new();
        attrs.insert("texture".to_string(), "diffuse-sampler".to_string());
        let mut slot = ColorSlotBuilder::new(ColorSlot::Diffuse);
        let err = slot.set_texture(&attrs).unwrap_err();
        match err {
            Error::MissingAttribute { element, attribute } => {
                assert_eq!(element, "texture");
                assert_eq!(attribute, "texcoord");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_param_ref() {
        let mut attrs = Attributes::new();
        attrs.insert("ref".to_string(), "shininess-param".to_string());
        let mut slot = FloatSlotBuilder::new(FloatSlot::Shininess);
        slot.set_param(&attrs).unwrap();
        let (_, value) = slot.build();
        match value {
            Some(FloatOrParam::Param(uri)) => assert_eq!(uri.as_str(), "shininess-param"),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_empty_slot_is_ignored_by_shader() {
        let mut shader = ShaderBuilder::new(ShadingModel::Phong);
        shader.absorb(Node::ColorOrTexture(ColorSlot::Ambient, None)).unwrap();
        assert!(shader.build().ambient.is_none());
    }
}
