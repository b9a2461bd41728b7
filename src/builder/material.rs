//! Material builders

use super::{Node, attr, required_uri, unexpected};
use crate::error::Result;
use crate::model::{EffectInstance, Material};
use crate::parser::Attributes;
use crate::uri::Uri;

/// Builds a [`Material`]
#[derive(Debug, Default)]
pub struct MaterialBuilder {
    id: Option<String>,
    name: Option<String>,
    effect_instance: Option<EffectInstance>,
}

impl MaterialBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            effect_instance: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::EffectInstance(instance) => self.effect_instance = Some(instance),
            other => return Err(unexpected("material", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Material {
        Material {
            id: self.id,
            name: self.name,
            effect_instance: self.effect_instance,
        }
    }
}

/// Builds an [`EffectInstance`] from `<instance_effect>`
#[derive(Debug)]
pub struct EffectInstanceBuilder {
    url: Uri,
    sid: Option<String>,
    name: Option<String>,
}

impl EffectInstanceBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            url: required_uri(attrs, "instance_effect", "url")?,
            sid: attr(attrs, "sid"),
            name: attr(attrs, "name"),
        })
    }

    /// Finish the element
    pub fn build(self) -> EffectInstance {
        EffectInstance {
            url: self.url,
            sid: self.sid,
            name: self.name,
        }
    }
}
