//! Document root, libraries, shared value types and parser configuration

use crate::uri::Uri;

use super::camera::Camera;
use super::effect::Effect;
use super::geometry::Geometry;
use super::light::Light;

/// Root of a parsed COLLADA document
///
/// Owns every library in document order. Several libraries of the same kind
/// are kept apart, each in its authored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `<library_images>` elements
    pub image_libraries: Vec<ImageLibrary>,
    /// `<library_materials>` elements
    pub material_libraries: Vec<MaterialLibrary>,
    /// `<library_effects>` elements
    pub effect_libraries: Vec<EffectLibrary>,
    /// `<library_geometries>` elements
    pub geometry_libraries: Vec<GeometryLibrary>,
    /// `<library_cameras>` elements
    pub camera_libraries: Vec<CameraLibrary>,
    /// `<library_lights>` elements
    pub light_libraries: Vec<LightLibrary>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// All images across every image library
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.image_libraries.iter().flat_map(|l| l.items.iter())
    }

    /// All materials across every material library
    pub fn materials(&self) -> impl Iterator<Item = &Material> {
        self.material_libraries.iter().flat_map(|l| l.items.iter())
    }

    /// All effects across every effect library
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.effect_libraries.iter().flat_map(|l| l.items.iter())
    }

    /// All geometries across every geometry library
    pub fn geometries(&self) -> impl Iterator<Item = &Geometry> {
        self.geometry_libraries.iter().flat_map(|l| l.items.iter())
    }

    /// All cameras across every camera library
    pub fn cameras(&self) -> impl Iterator<Item = &Camera> {
        self.camera_libraries.iter().flat_map(|l| l.items.iter())
    }

    /// All lights across every light library
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.light_libraries.iter().flat_map(|l| l.items.iter())
    }

    /// Find an image by id
    pub fn image(&self, id: &str) -> Option<&Image> {
        self.images().find(|i| i.id.as_deref() == Some(id))
    }

    /// Find a material by id
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials().find(|m| m.id.as_deref() == Some(id))
    }

    /// Find an effect by id
    pub fn effect(&self, id: &str) -> Option<&Effect> {
        self.effects().find(|e| e.id.as_deref() == Some(id))
    }

    /// Find a geometry by id
    pub fn geometry(&self, id: &str) -> Option<&Geometry> {
        self.geometries().find(|g| g.id.as_deref() == Some(id))
    }

    /// Find a camera by id
    pub fn camera(&self, id: &str) -> Option<&Camera> {
        self.cameras().find(|c| c.id.as_deref() == Some(id))
    }

    /// Find a light by id
    pub fn light(&self, id: &str) -> Option<&Light> {
        self.lights().find(|l| l.id.as_deref() == Some(id))
    }

    /// Total number of libraries of all kinds
    pub fn library_count(&self) -> usize {
        self.image_libraries.len()
            + self.material_libraries.len()
            + self.effect_libraries.len()
            + self.geometry_libraries.len()
            + self.camera_libraries.len()
            + self.light_libraries.len()
    }
}

/// A `library_*` element: optional name and id plus its items in order
#[derive(Debug, Clone, PartialEq)]
pub struct Library<T> {
    /// Library id
    pub id: Option<String>,
    /// Library name
    pub name: Option<String>,
    /// Library entries in document order
    pub items: Vec<T>,
}

impl<T> Library<T> {
    /// Create an empty library
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            items: Vec::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the library has no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Library<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `<library_images>`
pub type ImageLibrary = Library<Image>;
/// `<library_materials>`
pub type MaterialLibrary = Library<Material>;
/// `<library_effects>`
pub type EffectLibrary = Library<Effect>;
/// `<library_geometries>`
pub type GeometryLibrary = Library<Geometry>;
/// `<library_cameras>`
pub type CameraLibrary = Library<Camera>;
/// `<library_lights>`
pub type LightLibrary = Library<Light>;

/// An `<image>` declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    /// Image id
    pub id: Option<String>,
    /// Image name
    pub name: Option<String>,
    /// Scoped id
    pub sid: Option<String>,
    /// Where the image data comes from
    pub source: Option<ImageSource>,
}

/// Contents of an image `<init_from>`
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    /// Whether mip levels should be generated (`mips_generate`, default true)
    pub generate_mips: bool,
    /// Location of the image data
    pub reference: Option<Uri>,
}

impl Default for ImageSource {
    fn default() -> Self {
        Self {
            generate_mips: true,
            reference: None,
        }
    }
}

/// A `<material>` declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    /// Material id
    pub id: Option<String>,
    /// Material name
    pub name: Option<String>,
    /// The instantiated effect
    pub effect_instance: Option<EffectInstance>,
}

/// An `<instance_effect>` inside a material
#[derive(Debug, Clone, PartialEq)]
pub struct EffectInstance {
    /// URI of the instantiated effect
    pub url: Uri,
    /// Scoped id
    pub sid: Option<String>,
    /// Instance name
    pub name: Option<String>,
}

/// A scalar with an optional scoped id (`<float sid="...">`, `<znear>`, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct FloatValue {
    /// The value
    pub value: f64,
    /// Scoped id
    pub sid: Option<String>,
}

impl FloatValue {
    /// Create a value without sid
    pub fn new(value: f64) -> Self {
        Self { value, sid: None }
    }
}

/// An RGB color as used by lights
#[derive(Debug, Clone, PartialEq)]
pub struct RgbColor {
    /// Scoped id
    pub sid: Option<String>,
    /// Red component
    pub red: f64,
    /// Green component
    pub green: f64,
    /// Blue component
    pub blue: f64,
}

impl RgbColor {
    /// Create a color without sid
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            sid: None,
            red,
            green,
            blue,
        }
    }
}

/// An RGBA color as used by shaders
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaColor {
    /// Scoped id
    pub sid: Option<String>,
    /// Red component
    pub red: f64,
    /// Green component
    pub green: f64,
    /// Blue component
    pub blue: f64,
    /// Alpha component
    pub alpha: f64,
}

impl RgbaColor {
    /// Create a color without sid
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            sid: None,
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Configuration for reading COLLADA documents
///
/// # Example
///
/// ```
/// use collada::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_strict_array_counts(false)
///     .with_max_depth(64);
/// assert!(!config.strict_array_counts());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    allow_dtd: bool,
    strict_array_counts: bool,
    max_depth: usize,
}

impl ParserConfig {
    /// Default maximum element nesting the reader tracks
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            allow_dtd: false,
            strict_array_counts: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Accept documents carrying a DOCTYPE declaration
    ///
    /// Disabled by default: DTDs can declare external entities and are never
    /// needed to read COLLADA content.
    pub fn with_dtd_allowed(mut self, allow: bool) -> Self {
        self.allow_dtd = allow;
        self
    }

    /// Fail when an array holds more values than its `count` attribute declares
    pub fn with_strict_array_counts(mut self, strict: bool) -> Self {
        self.strict_array_counts = strict;
        self
    }

    /// Maximum number of simultaneously open grammar positions
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Whether DOCTYPE declarations are accepted
    pub fn dtd_allowed(&self) -> bool {
        self.allow_dtd
    }

    /// Whether array counts are enforced
    pub fn strict_array_counts(&self) -> bool {
        self.strict_array_counts
    }

    /// Maximum tracked nesting
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
