//! Cameras and their projections

use super::core::FloatValue;

/// A `<camera>` declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera id
    pub id: Option<String>,
    /// Camera name
    pub name: Option<String>,
    /// The projection from `<optics><technique_common>`
    pub projection: Projection,
}

/// A camera projection
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// `<perspective>`
    Perspective(Perspective),
    /// `<orthographic>`
    Orthographic(Orthographic),
}

impl Projection {
    /// Near clipping plane
    pub fn znear(&self) -> &FloatValue {
        match self {
            Projection::Perspective(p) => &p.znear,
            Projection::Orthographic(o) => &o.znear,
        }
    }

    /// Far clipping plane
    pub fn zfar(&self) -> &FloatValue {
        match self {
            Projection::Perspective(p) => &p.zfar,
            Projection::Orthographic(o) => &o.zfar,
        }
    }

    /// Aspect ratio, when authored
    pub fn aspect_ratio(&self) -> Option<&FloatValue> {
        match self {
            Projection::Perspective(p) => p.aspect_ratio.as_ref(),
            Projection::Orthographic(o) => o.aspect_ratio.as_ref(),
        }
    }
}

/// `<perspective>`
#[derive(Debug, Clone, PartialEq)]
pub struct Perspective {
    /// Horizontal field of view in degrees
    pub xfov: Option<FloatValue>,
    /// Vertical field of view in degrees
    pub yfov: Option<FloatValue>,
    /// Aspect ratio
    pub aspect_ratio: Option<FloatValue>,
    /// Near clipping plane
    pub znear: FloatValue,
    /// Far clipping plane
    pub zfar: FloatValue,
}

/// `<orthographic>`
#[derive(Debug, Clone, PartialEq)]
pub struct Orthographic {
    /// Horizontal magnification
    pub xmag: Option<FloatValue>,
    /// Vertical magnification
    pub ymag: Option<FloatValue>,
    /// Aspect ratio
    pub aspect_ratio: Option<FloatValue>,
    /// Near clipping plane
    pub znear: FloatValue,
    /// Far clipping plane
    pub zfar: FloatValue,
}
