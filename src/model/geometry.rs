//! Geometry data structures: meshes, data sources and primitives

use crate::error::{Error, Result};
use crate::uri::Uri;

/// A `<geometry>` declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Geometry id
    pub id: Option<String>,
    /// Geometry name
    pub name: Option<String>,
    /// The mesh, when the geometry is a mesh
    pub mesh: Option<Mesh>,
}

/// A `<mesh>`: data sources, vertex declaration and primitives
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// `<source>` elements in document order
    pub sources: Vec<DataFlowSource>,
    /// The `<vertices>` element
    pub vertices: Vertices,
    /// Primitive collections in document order
    pub primitives: Vec<Primitive>,
}

impl Mesh {
    /// Find a source by id
    pub fn source(&self, id: &str) -> Option<&DataFlowSource> {
        self.sources.iter().find(|s| s.id.as_deref() == Some(id))
    }

    /// Iterate over all triangle collections
    pub fn triangles(&self) -> impl Iterator<Item = &Triangles> {
        self.primitives.iter().map(|p| match p {
            Primitive::Triangles(t) => t,
        })
    }
}

/// A `<source>` inside a mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFlowSource {
    /// Source id
    pub id: Option<String>,
    /// Source name
    pub name: Option<String>,
    /// The raw array, if any
    pub array: Option<ArrayPayload>,
    /// `<technique_common>` describing how to read the array
    pub common_technique: Option<CommonSourceTechnique>,
}

impl DataFlowSource {
    /// The float array payload, if the source holds one
    pub fn float_array(&self) -> Option<&FloatArray> {
        match &self.array {
            Some(ArrayPayload::Float(array)) => Some(array),
            _ => None,
        }
    }

    /// The name array payload, if the source holds one
    pub fn name_array(&self) -> Option<&NameArray> {
        match &self.array {
            Some(ArrayPayload::Name(array)) => Some(array),
            _ => None,
        }
    }

    /// The accessor of the common technique
    pub fn accessor(&self) -> Option<&Accessor> {
        self.common_technique.as_ref().map(|t| &t.accessor)
    }
}

/// The array held by a source
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayPayload {
    /// `<float_array>`
    Float(FloatArray),
    /// `<Name_array>`
    Name(NameArray),
}

/// `<float_array>`
#[derive(Debug, Clone, PartialEq)]
pub struct FloatArray {
    /// Array id
    pub id: Option<String>,
    /// Array name
    pub name: Option<String>,
    /// Declared number of values
    pub count: usize,
    /// Significant decimal digits (default 6)
    pub digits: u32,
    /// Largest exponent (default 38)
    pub magnitude: u32,
    /// Decoded values; may be shorter than `count`
    pub values: Vec<f64>,
}

impl FloatArray {
    /// Default `digits` attribute value
    pub const DEFAULT_DIGITS: u32 = 6;
    /// Default `magnitude` attribute value
    pub const DEFAULT_MAGNITUDE: u32 = 38;
}

/// `<Name_array>`
#[derive(Debug, Clone, PartialEq)]
pub struct NameArray {
    /// Array id
    pub id: Option<String>,
    /// Array name
    pub name: Option<String>,
    /// Declared number of values
    pub count: usize,
    /// Decoded names
    pub values: Vec<String>,
}

/// `<technique_common>` of a source
#[derive(Debug, Clone, PartialEq)]
pub struct CommonSourceTechnique {
    /// The accessor
    pub accessor: Accessor,
}

/// `<accessor>`: a view of an array as a sequence of records
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// URI of the viewed array
    pub source: Uri,
    /// Number of records
    pub count: usize,
    /// Index of the first value (default 0)
    pub offset: usize,
    /// Values between record starts (default 1, never 0)
    pub stride: usize,
    /// Record fields in order
    pub params: Vec<DataFlowParam>,
}

impl Accessor {
    /// Minimum array length needed to read every record
    ///
    /// # Example
    ///
    /// ```
    /// use collada::{Accessor, DataFlowParam, DataType, Uri};
    ///
    /// let accessor = Accessor {
    ///     source: Uri::parse("#positions-array").unwrap(),
    ///     count: 4,
    ///     offset: 0,
    ///     stride: 3,
    ///     params: vec![
    ///         DataFlowParam::new(DataType::Float),
    ///         DataFlowParam::new(DataType::Float),
    ///         DataFlowParam::new(DataType::Float),
    ///     ],
    /// };
    /// assert_eq!(accessor.required_array_len(), 12);
    /// ```
    pub fn required_array_len(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        self.offset + self.stride * (self.count - 1) + self.params.len()
    }
}

/// Value type of an accessor field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `float`
    Float,
    /// `float4x4`
    Float4x4,
    /// `int`
    Int,
    /// `Name`
    Name,
    /// `bool`
    Bool,
    /// `IDREF`
    Idref,
    /// `SIDREF`
    Sidref,
}

impl DataType {
    /// Parse a `type` attribute; literals are matched case-insensitively
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "FLOAT" => Ok(DataType::Float),
            "FLOAT4X4" => Ok(DataType::Float4x4),
            "INT" => Ok(DataType::Int),
            "NAME" => Ok(DataType::Name),
            "BOOL" => Ok(DataType::Bool),
            "IDREF" => Ok(DataType::Idref),
            "SIDREF" => Ok(DataType::Sidref),
            _ => Err(Error::malformed_value("param type", s, "accessor data type")),
        }
    }
}

/// `<param>` of an accessor
#[derive(Debug, Clone, PartialEq)]
pub struct DataFlowParam {
    /// Field type
    pub data_type: DataType,
    /// Field name (`X`, `Y`, `S`, ...)
    pub name: Option<String>,
    /// Field semantic
    pub semantic: Option<String>,
    /// Scoped id
    pub sid: Option<String>,
}

impl DataFlowParam {
    /// A nameless field of the given type
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            name: None,
            semantic: None,
            sid: None,
        }
    }
}

/// `<vertices>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vertices {
    /// Vertices id
    pub id: Option<String>,
    /// Vertices name
    pub name: Option<String>,
    /// Per-vertex inputs
    pub inputs: Vec<UnsharedInput>,
}

/// `<input>` without offset (inside `<vertices>`)
#[derive(Debug, Clone, PartialEq)]
pub struct UnsharedInput {
    /// Input semantic (`POSITION`, `NORMAL`, ...)
    pub semantic: String,
    /// URI of the source
    pub source: Uri,
}

/// `<input>` with offset (inside primitives)
#[derive(Debug, Clone, PartialEq)]
pub struct SharedInput {
    /// Input semantic (`VERTEX`, `NORMAL`, `TEXCOORD`, ...)
    pub semantic: String,
    /// URI of the source
    pub source: Uri,
    /// Position of this input inside each index tuple
    pub offset: usize,
    /// Input set
    pub set: Option<u32>,
}

/// Flat index buffer of a primitive (`<p>`)
pub type PrimitiveData = Vec<u32>;

/// A primitive collection inside a mesh
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// `<triangles>`
    Triangles(Triangles),
}

/// `<triangles>`
#[derive(Debug, Clone, PartialEq)]
pub struct Triangles {
    /// Primitive name
    pub name: Option<String>,
    /// Declared triangle count
    pub count: usize,
    /// Material symbol
    pub material: Option<String>,
    /// Inputs in order
    pub inputs: Vec<SharedInput>,
    /// Index data; its length is not checked against `count`
    pub data: PrimitiveData,
}

impl Triangles {
    /// Number of indices per vertex (largest input offset plus one)
    pub fn index_stride(&self) -> usize {
        self.inputs.iter().map(|i| i.offset + 1).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accessor(count: usize, offset: usize, stride: usize, params: usize) -> Accessor {
        Accessor {
            source: Uri::parse("#a").unwrap(),
            count,
            offset,
            stride,
            params: vec![DataFlowParam::new(DataType::Float); params],
        }
    }

    #[test]
    fn test_required_array_len() {
        assert_eq!(accessor(0, 5, 3, 3).required_array_len(), 0);
        assert_eq!(accessor(1, 0, 1, 1).required_array_len(), 1);
        assert_eq!(accessor(2, 1, 4, 2).required_array_len(), 7);
    }

    #[test]
    fn test_data_type_case_insensitive() {
        assert_eq!(DataType::parse("float").unwrap(), DataType::Float);
        assert_eq!(DataType::parse("Name").unwrap(), DataType::Name);
        assert_eq!(DataType::parse("float4x4").unwrap(), DataType::Float4x4);
        assert!(matches!(DataType::parse("double"), Err(Error::MalformedValue(_))));
    }

    #[test]
    fn test_index_stride() {
        let uri = Uri::parse("#v").unwrap();
        let triangles = Triangles {
            name: None,
            count: 1,
            material: None,
            inputs: vec![
                SharedInput { semantic: "VERTEX".into(), source: uri.clone(), offset: 0, set: None },
                SharedInput { semantic: "NORMAL".into(), source: uri, offset: 1, set: None },
            ],
            data: vec![0, 0, 1, 1, 2, 2],
        };
        assert_eq!(triangles.index_stride(), 2);
    }
}
