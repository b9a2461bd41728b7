//! Lights

use super::core::{FloatValue, RgbColor};

/// A `<light>` declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light id
    pub id: Option<String>,
    /// Light name
    pub name: Option<String>,
    /// The light source from `<technique_common>`
    pub source: LightSource,
}

/// Kind of a light source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    /// `<ambient>`
    Ambient,
    /// `<directional>`
    Directional,
    /// `<point>`
    Point,
    /// `<spot>`
    Spot,
}

impl LightKind {
    /// Element name of the kind
    pub fn tag_name(self) -> &'static str {
        match self {
            LightKind::Ambient => "ambient",
            LightKind::Directional => "directional",
            LightKind::Point => "point",
            LightKind::Spot => "spot",
        }
    }
}

/// A light source
#[derive(Debug, Clone, PartialEq)]
pub enum LightSource {
    /// `<ambient>`
    Ambient(AmbientLight),
    /// `<directional>`
    Directional(DirectionalLight),
    /// `<point>`
    Point(PointLight),
    /// `<spot>`
    Spot(SpotLight),
}

impl LightSource {
    /// Kind of this source
    pub fn kind(&self) -> LightKind {
        match self {
            LightSource::Ambient(_) => LightKind::Ambient,
            LightSource::Directional(_) => LightKind::Directional,
            LightSource::Point(_) => LightKind::Point,
            LightSource::Spot(_) => LightKind::Spot,
        }
    }

    /// Color of the source
    pub fn color(&self) -> &RgbColor {
        match self {
            LightSource::Ambient(l) => &l.color,
            LightSource::Directional(l) => &l.color,
            LightSource::Point(l) => &l.color,
            LightSource::Spot(l) => &l.color,
        }
    }
}

/// `<ambient>` light
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    /// Light color
    pub color: RgbColor,
}

/// `<directional>` light
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Light color
    pub color: RgbColor,
}

/// Distance attenuation of point and spot lights
#[derive(Debug, Clone, PartialEq)]
pub struct Attenuation {
    /// `<constant_attenuation>` (default 1)
    pub constant: FloatValue,
    /// `<linear_attenuation>` (default 0)
    pub linear: FloatValue,
    /// `<quadratic_attenuation>` (default 0)
    pub quadratic: FloatValue,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: FloatValue::new(1.0),
            linear: FloatValue::new(0.0),
            quadratic: FloatValue::new(0.0),
        }
    }
}

/// `<point>` light
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// Light color
    pub color: RgbColor,
    /// Attenuation factors
    pub attenuation: Attenuation,
}

/// `<spot>` light
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    /// Light color
    pub color: RgbColor,
    /// Attenuation factors
    pub attenuation: Attenuation,
    /// `<falloff_angle>` in degrees (default 180)
    pub falloff_angle: FloatValue,
    /// `<falloff_exponent>` (default 0)
    pub falloff_exponent: FloatValue,
}

impl SpotLight {
    /// Default falloff angle
    pub const DEFAULT_FALLOFF_ANGLE: f64 = 180.0;
    /// Default falloff exponent
    pub const DEFAULT_FALLOFF_EXPONENT: f64 = 0.0;
}
