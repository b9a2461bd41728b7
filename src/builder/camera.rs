//! Camera builders
//!
//! `<optics>` holds exactly one projection. `znear` and `zfar` are required;
//! the field-of-view and magnification values are optional.

use super::{Node, attr, unexpected};
use crate::error::{Error, Result};
use crate::model::{Camera, FloatValue, Orthographic, Perspective, Projection};
use crate::parser::Attributes;
use crate::parser::mode::{ProjectionKind, ProjectionValueSlot};

/// Builds a [`Camera`]
#[derive(Debug, Default)]
pub struct CameraBuilder {
    id: Option<String>,
    name: Option<String>,
    projection: Option<Projection>,
}

impl CameraBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            projection: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::Projection(projection) => self.projection = Some(projection),
            other => return Err(unexpected("camera", &other)),
        }
        Ok(())
    }

    /// Finish the element; fails without a projection
    pub fn build(self) -> Result<Camera> {
        let projection = self.projection.ok_or_else(|| {
            Error::invalid_xml_element(
                "camera",
                "missing <perspective> or <orthographic> in <optics><technique_common>",
            )
        })?;
        Ok(Camera {
            id: self.id,
            name: self.name,
            projection,
        })
    }
}

/// Builds a [`Projection`] of either kind
#[derive(Debug)]
pub struct ProjectionBuilder {
    kind: ProjectionKind,
    xfov: Option<FloatValue>,
    yfov: Option<FloatValue>,
    xmag: Option<FloatValue>,
    ymag: Option<FloatValue>,
    aspect_ratio: Option<FloatValue>,
    znear: Option<FloatValue>,
    zfar: Option<FloatValue>,
}

impl ProjectionBuilder {
    /// An empty projection of the given kind
    pub fn new(kind: ProjectionKind) -> Self {
        Self {
            kind,
            xfov: None,
            yfov: None,
            xmag: None,
            ymag: None,
            aspect_ratio: None,
            znear: None,
            zfar: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        let (slot, value) = match node {
            Node::ProjectionValue(slot, value) => (slot, value),
            other => return Err(unexpected(self.kind.tag_name(), &other)),
        };
        let target = match slot {
            ProjectionValueSlot::Xfov => &mut self.xfov,
            ProjectionValueSlot::Yfov => &mut self.yfov,
            ProjectionValueSlot::Xmag => &mut self.xmag,
            ProjectionValueSlot::Ymag => &mut self.ymag,
            ProjectionValueSlot::AspectRatio => &mut self.aspect_ratio,
            ProjectionValueSlot::Znear => &mut self.znear,
            ProjectionValueSlot::Zfar => &mut self.zfar,
        };
        *target = Some(value);
        Ok(())
    }

    /// Finish the element; fails without `<znear>` or `<zfar>`
    pub fn build(self) -> Result<Projection> {
        let element = self.kind.tag_name();
        let znear = self
            .znear
            .ok_or_else(|| Error::invalid_xml_element(element, "missing required <znear>"))?;
        let zfar = self
            .zfar
            .ok_or_else(|| Error::invalid_xml_element(element, "missing required <zfar>"))?;
        let projection = match self.kind {
            ProjectionKind::Perspective => Projection::Perspective(Perspective {
                xfov: self.xfov,
                yfov: self.yfov,
                aspect_ratio: self.aspect_ratio,
                znear,
                zfar,
            }),
            ProjectionKind::Orthographic => Projection::Orthographic(Orthographic {
                xmag: self.xmag,
                ymag: self.ymag,
                aspect_ratio: self.aspect_ratio,
                znear,
                zfar,
            }),
        };
        Ok(projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_requires_clip_planes() {
        let mut builder = ProjectionBuilder::new(ProjectionKind::Perspective);
        builder
            .absorb(Node::ProjectionValue(ProjectionValueSlot::Znear, FloatValue::new(0.1)))
            .unwrap();
        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("<zfar>"));
    }

    #[test]
    fn test_orthographic() {
        let mut builder = ProjectionBuilder::new(ProjectionKind::Orthographic);
        for (slot, value) in [
            (ProjectionValueSlot::Xmag, 2.0),
            (ProjectionValueSlot::Znear, 0.5),
            (ProjectionValueSlot::Zfar, 50.0),
        ] {
            builder
                .absorb(Node::ProjectionValue(slot, FloatValue::new(value)))
                .unwrap();
        }
        match builder.build().unwrap() {
            Projection::Orthographic(o) => {
                assert_eq!(o.xmag.map(|v| v.value), Some(2.0));
                assert_eq!(o.ymag, None);
                assert_eq!(o.zfar.value, 50.0);
            }
            other => panic!("unexpected projection {:?}", other),
        }
    }

    #[test]
    fn test_camera_requires_projection() {
        let camera = CameraBuilder::from_attributes(&Attributes::new());
        assert!(matches!(camera.build(), Err(Error::InvalidXml(_))));
    }
}
