//! Library assembly

use super::{Node, attr, unexpected};
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::Attributes;
use crate::parser::mode::Mode;

/// A `library_*` element collecting its items
#[derive(Debug)]
pub enum LibraryBuilder {
    /// `<library_images>`
    Images(ImageLibrary),
    /// `<library_materials>`
    Materials(MaterialLibrary),
    /// `<library_effects>`
    Effects(EffectLibrary),
    /// `<library_geometries>`
    Geometries(GeometryLibrary),
    /// `<library_cameras>`
    Cameras(CameraLibrary),
    /// `<library_lights>`
    Lights(LightLibrary),
}

fn library<T>(attrs: &Attributes) -> Library<T> {
    Library {
        id: attr(attrs, "id"),
        name: attr(attrs, "name"),
        items: Vec::new(),
    }
}

impl LibraryBuilder {
    /// Create the library matching a `library_*` mode
    pub fn from_attributes(mode: Mode, attrs: &Attributes) -> Result<Self> {
        let builder = match mode {
            Mode::LibraryImages => LibraryBuilder::Images(library(attrs)),
            Mode::LibraryMaterials => LibraryBuilder::Materials(library(attrs)),
            Mode::LibraryEffects => LibraryBuilder::Effects(library(attrs)),
            Mode::LibraryGeometries => LibraryBuilder::Geometries(library(attrs)),
            Mode::LibraryCameras => LibraryBuilder::Cameras(library(attrs)),
            Mode::LibraryLights => LibraryBuilder::Lights(library(attrs)),
            other => {
                return Err(Error::IllegalState(format!(
                    "{:?} does not hold a library",
                    other
                )));
            }
        };
        Ok(builder)
    }

    /// Element name of the library
    pub fn kind(&self) -> &'static str {
        match self {
            LibraryBuilder::Images(_) => "library_images",
            LibraryBuilder::Materials(_) => "library_materials",
            LibraryBuilder::Effects(_) => "library_effects",
            LibraryBuilder::Geometries(_) => "library_geometries",
            LibraryBuilder::Cameras(_) => "library_cameras",
            LibraryBuilder::Lights(_) => "library_lights",
        }
    }

    /// Number of items collected so far
    pub fn len(&self) -> usize {
        match self {
            LibraryBuilder::Images(l) => l.len(),
            LibraryBuilder::Materials(l) => l.len(),
            LibraryBuilder::Effects(l) => l.len(),
            LibraryBuilder::Geometries(l) => l.len(),
            LibraryBuilder::Cameras(l) => l.len(),
            LibraryBuilder::Lights(l) => l.len(),
        }
    }

    /// True when no item has been collected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match (self, node) {
            (LibraryBuilder::Images(l), Node::Image(item)) => l.items.push(item),
            (LibraryBuilder::Materials(l), Node::Material(item)) => l.items.push(item),
            (LibraryBuilder::Effects(l), Node::Effect(item)) => l.items.push(item),
            (LibraryBuilder::Geometries(l), Node::Geometry(item)) => l.items.push(item),
            (LibraryBuilder::Cameras(l), Node::Camera(item)) => l.items.push(item),
            (LibraryBuilder::Lights(l), Node::Light(item)) => l.items.push(item),
            (library, node) => return Err(unexpected(library.kind(), &node)),
        }
        Ok(())
    }

    /// Append the finished library to the matching document collection
    pub fn assemble_into(self, document: &mut Document) {
        match self {
            LibraryBuilder::Images(l) => document.image_libraries.push(l),
            LibraryBuilder::Materials(l) => document.material_libraries.push(l),
            LibraryBuilder::Effects(l) => document.effect_libraries.push(l),
            LibraryBuilder::Geometries(l) => document.geometry_libraries.push(l),
            LibraryBuilder::Cameras(l) => document.camera_libraries.push(l),
            LibraryBuilder::Lights(l) => document.light_libraries.push(l),
        }
    }
}
