//! Light source builders

use super::{Node, attr, unexpected};
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::Attributes;
use crate::parser::mode::LightValueSlot;

/// Builds a [`Light`]
#[derive(Debug, Default)]
pub struct LightBuilder {
    id: Option<String>,
    name: Option<String>,
    source: Option<LightSource>,
}

impl LightBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            source: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::LightSource(source) => self.source = Some(source),
            other => return Err(unexpected("light", &other)),
        }
        Ok(())
    }

    /// Finish the element; fails without a light source
    pub fn build(self) -> Result<Light> {
        let source = self.source.ok_or_else(|| {
            Error::invalid_xml_element("light", "missing light source in <technique_common>")
        })?;
        Ok(Light {
            id: self.id,
            name: self.name,
            source,
        })
    }
}

/// Builds a [`LightSource`] of any kind
///
/// Values that do not apply to the kind are dropped when the source is built.
#[derive(Debug)]
pub struct LightSourceBuilder {
    kind: LightKind,
    color: Option<RgbColor>,
    attenuation: Attenuation,
    falloff_angle: FloatValue,
    falloff_exponent: FloatValue,
}

impl LightSourceBuilder {
    /// An empty source of the given kind with default attenuation and falloff
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            color: None,
            attenuation: Attenuation::default(),
            falloff_angle: FloatValue::new(SpotLight::DEFAULT_FALLOFF_ANGLE),
            falloff_exponent: FloatValue::new(SpotLight::DEFAULT_FALLOFF_EXPONENT),
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::LightColor(color) => self.color = Some(color),
            Node::LightValue(slot, value) => {
                let target = match slot {
                    LightValueSlot::ConstantAttenuation => &mut self.attenuation.constant,
                    LightValueSlot::LinearAttenuation => &mut self.attenuation.linear,
                    LightValueSlot::QuadraticAttenuation => &mut self.attenuation.quadratic,
                    LightValueSlot::FalloffAngle => &mut self.falloff_angle,
                    LightValueSlot::FalloffExponent => &mut self.falloff_exponent,
                };
                *target = value;
            }
            other => return Err(unexpected(self.kind.tag_name(), &other)),
        }
        Ok(())
    }

    /// Finish the element; fails without `<color>`
    pub fn build(self) -> Result<LightSource> {
        let color = self.color.ok_or_else(|| {
            Error::invalid_xml_element(self.kind.tag_name(), "missing required <color>")
        })?;
        let source = match self.kind {
            LightKind::Ambient => LightSource::Ambient(AmbientLight { color }),
            LightKind::Directional => LightSource::Directional(DirectionalLight { color }),
            LightKind::Point => LightSource::Point(PointLight {
                color,
                attenuation: self.attenuation,
            }),
            LightKind::Spot => LightSource::Spot(SpotLight {
                color,
                attenuation: self.attenuation,
                falloff_angle: self.falloff_angle,
                falloff_exponent: self.falloff_exponent,
            }),
        };
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_defaults() {
        let mut builder = LightSourceBuilder::new(LightKind::Spot);
        builder
            .absorb(Node::LightColor(RgbColor::new(1.0, 1.0, 1.0)))
            .unwrap();
        match builder.build().unwrap() {
            LightSource::Spot(spot) => {
                assert_eq!(spot.attenuation.constant.value, 1.0);
                assert_eq!(spot.attenuation.linear.value, 0.0);
                assert_eq!(spot.attenuation.quadratic.value, 0.0);
                assert_eq!(spot.falloff_angle.value, 180.0);
                assert_eq!(spot.falloff_exponent.value, 0.0);
            }
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn test_point_keeps_attenuation_sid() {
        let mut builder = LightSourceBuilder::new(LightKind::Point);
        builder
            .absorb(Node::LightColor(RgbColor::new(1.0, 0.5, 0.0)))
            .unwrap();
        builder
            .absorb(Node::LightValue(
                LightValueSlot::QuadraticAttenuation,
                FloatValue {
                    value: 0.25,
                    sid: Some("quad".to_string()),
                },
            ))
            .unwrap();
        match builder.build().unwrap() {
            LightSource::Point(point) => {
                assert_eq!(point.attenuation.quadratic.value, 0.25);
                assert_eq!(point.attenuation.quadratic.sid.as_deref(), Some("quad"));
            }
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn test_color_required() {
        let builder = LightSourceBuilder::new(LightKind::Ambient);
        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::InvalidXml(_)));
        assert!(err.to_string().contains("<ambient>"));
    }

    #[test]
    fn test_light_requires_source() {
        let builder = LightBuilder::from_attributes(&Attributes::new());
        assert!(builder.build().is_err());
    }
}
