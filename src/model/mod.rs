//! Data structures representing COLLADA documents

// Declare all submodules
mod camera;
mod core;
mod effect;
mod geometry;
mod light;

// Re-export all public types from core module
pub use core::{
    CameraLibrary, Document, EffectInstance, EffectLibrary, FloatValue, GeometryLibrary, Image,
    ImageLibrary, ImageSource, Library, LightLibrary, Material, MaterialLibrary, ParserConfig,
    RgbColor, RgbaColor,
};

// Re-export all public types from effect module
pub use effect::{
    ColorOrTexture, ColorSlot, CommonProfile, Effect, Filter, FloatOrParam, FloatSlot, NewParam,
    ParamValue, Profile, Sampler2D, Shader, ShadingModel, Technique, Texture, Wrap,
};

// Re-export all public types from geometry module
pub use geometry::{
    Accessor, ArrayPayload, CommonSourceTechnique, DataFlowParam, DataFlowSource, DataType,
    FloatArray, Geometry, Mesh, NameArray, Primitive, PrimitiveData, SharedInput, Triangles,
    UnsharedInput, Vertices,
};

// Re-export all public types from camera module
pub use camera::{Camera, Orthographic, Perspective, Projection};

// Re-export all public types from light module
pub use light::{
    AmbientLight, Attenuation, DirectionalLight, Light, LightKind, LightSource, PointLight,
    SpotLight,
};
