//! Image builders

use super::{Node, attr, parse_bool, unexpected};
use crate::error::Result;
use crate::model::{Image, ImageSource};
use crate::parser::Attributes;
use crate::uri::Uri;

/// Builds an [`Image`]
#[derive(Debug, Default)]
pub struct ImageBuilder {
    id: Option<String>,
    name: Option<String>,
    sid: Option<String>,
    source: Option<ImageSource>,
}

impl ImageBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            sid: attr(attrs, "sid"),
            source: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::ImageSource(source) => self.source = Some(source),
            other => return Err(unexpected("image", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Image {
        Image {
            id: self.id,
            name: self.name,
            sid: self.sid,
            source: self.source,
        }
    }
}

/// Builds an [`ImageSource`] from `<init_from>`
///
/// The reference comes from a `<ref>` child or, for documents written
/// against COLLADA 1.4, from the element's own text.
#[derive(Debug)]
pub struct ImageSourceBuilder {
    generate_mips: bool,
    reference: Option<Uri>,
    text: String,
}

impl ImageSourceBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
        let generate_mips = match attrs.get("mips_generate") {
            Some(value) => parse_bool("init_from", "mips_generate", value)?,
            None => true,
        };
        Ok(Self {
            generate_mips,
            reference: None,
            text: String::new(),
        })
    }

    /// Append text content
    pub fn push_text(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::ImageRef(uri) => self.reference = Some(uri),
            other => return Err(unexpected("init_from", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Result<ImageSource> {
        let reference = match self.reference {
            Some(uri) => Some(uri),
            None => {
                let inline = self.text.trim();
                if inline.is_empty() {
                    None
                } else {
                    Some(Uri::parse(inline)?)
                }
            }
        };
        Ok(ImageSource {
            generate_mips: self.generate_mips,
            reference,
        })
    }
}
