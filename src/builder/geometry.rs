//! Mesh builders: sources, arrays, accessors, vertices and triangles

use super::{Node, attr, parse_optional, parse_required, required_attr, required_uri, unexpected};
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::Attributes;
use crate::parser::chunk::{ChunkFloatReader, ChunkIntReader, ChunkStringReader};

/// Upper bound on storage reserved up front from a declared `count`
const MAX_PREALLOCATED_VALUES: usize = 1 << 16;

/// Accepted values of count, offset and precision attributes
const COUNT: &str = "non-negative integer";

/// Builds a [`Geometry`]
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    id: Option<String>,
    name: Option<String>,
    mesh: Option<Mesh>,
}

impl GeometryBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            mesh: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::Mesh(mesh) => self.mesh = Some(mesh),
            other => return Err(unexpected("geometry", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Geometry {
        Geometry {
            id: self.id,
            name: self.name,
            mesh: self.mesh,
        }
    }
}

/// Builds a [`Mesh`]
#[derive(Debug, Default)]
pub struct MeshBuilder {
    sources: Vec<DataFlowSource>,
    vertices: Option<Vertices>,
    primitives: Vec<Primitive>,
}

impl MeshBuilder {
    /// An empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::Source(source) => self.sources.push(source),
            Node::Vertices(vertices) => self.vertices = Some(vertices),
            Node::Triangles(triangles) => self.primitives.push(Primitive::Triangles(triangles)),
            other => return Err(unexpected("mesh", &other)),
        }
        Ok(())
    }

    /// Finish the element; fails without `<vertices>`
    pub fn build(self) -> Result<Mesh> {
        let vertices = self
            .vertices
            .ok_or_else(|| Error::invalid_xml_element("mesh", "missing required <vertices>"))?;
        Ok(Mesh {
            sources: self.sources,
            vertices,
            primitives: self.primitives,
        })
    }
}

/// Builds a [`DataFlowSource`]
#[derive(Debug, Default)]
pub struct DataSourceBuilder {
    id: Option<String>,
    name: Option<String>,
    array: Option<ArrayPayload>,
    common_technique: Option<CommonSourceTechnique>,
}

impl DataSourceBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            array: None,
            common_technique: None,
        }
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            // A later array replaces an earlier one
            Node::Array(array) => self.array = Some(array),
            Node::Accessor(accessor) => {
                self.common_technique = Some(CommonSourceTechnique { accessor })
            }
            other => return Err(unexpected("source", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> DataFlowSource {
        DataFlowSource {
            id: self.id,
            name: self.name,
            array: self.array,
            common_technique: self.common_technique,
        }
    }
}

/// Error for an array holding more values than it declares
fn surplus_values(element: &str, id: Option<&str>, count: usize) -> Error {
    Error::InvalidModel(format!(
        "<{}> '{}' holds more than its declared count of {} values",
        element,
        id.unwrap_or(""),
        count
    ))
}

/// Builds a [`FloatArray`], decoding its text as it arrives
#[derive(Debug)]
pub struct FloatArrayBuilder {
    id: Option<String>,
    name: Option<String>,
    count: usize,
    digits: u32,
    magnitude: u32,
    strict: bool,
    reader: ChunkFloatReader,
    values: Vec<f64>,
}

impl FloatArrayBuilder {
    /// Stage the element's attributes; `count` is required
    pub fn from_attributes(attrs: &Attributes, strict: bool) -> Result<Self> {
        let count: usize = parse_required(attrs, "float_array", "count", COUNT)?;
        Ok(Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            count,
            digits: parse_optional(attrs, "float_array", "digits", COUNT)?
                .unwrap_or(FloatArray::DEFAULT_DIGITS),
            magnitude: parse_optional(attrs, "float_array", "magnitude", COUNT)?
                .unwrap_or(FloatArray::DEFAULT_MAGNITUDE),
            strict,
            reader: ChunkFloatReader::new(),
            values: Vec::with_capacity(count.min(MAX_PREALLOCATED_VALUES)),
        })
    }

    fn push(
        values: &mut Vec<f64>,
        value: f64,
        limit: Option<usize>,
        id: Option<&str>,
    ) -> Result<()> {
        if let Some(count) = limit
            && values.len() >= count
        {
            return Err(surplus_values("float_array", id, count));
        }
        values.push(value);
        Ok(())
    }

    /// Decode a text fragment
    pub fn feed(&mut self, fragment: &str) -> Result<()> {
        let limit = self.strict.then_some(self.count);
        let id = self.id.as_deref();
        let values = &mut self.values;
        self.reader.feed(fragment, |v| Self::push(values, v, limit, id))
    }

    /// Finish the element
    pub fn build(mut self) -> Result<FloatArray> {
        let limit = self.strict.then_some(self.count);
        let id = self.id.as_deref();
        let values = &mut self.values;
        self.reader.finish(|v| Self::push(values, v, limit, id))?;
        Ok(FloatArray {
            id: self.id,
            name: self.name,
            count: self.count,
            digits: self.digits,
            magnitude: self.magnitude,
            values: self.values,
        })
    }
}

/// Builds a [`NameArray`], decoding its text as it arrives
#[derive(Debug)]
pub struct NameArrayBuilder {
    id: Option<String>,
    name: Option<String>,
    count: usize,
    strict: bool,
    reader: ChunkStringReader,
    values: Vec<String>,
}

impl NameArrayBuilder {
    /// Stage the element's attributes; `count` is required
    pub fn from_attributes(attrs: &Attributes, strict: bool) -> Result<Self> {
        let count: usize = parse_required(attrs, "Name_array", "count", COUNT)?;
        Ok(Self {
            id: attr(attrs, "id"),
            name: attr(attrs, "name"),
            count,
            strict,
            reader: ChunkStringReader::new(),
            values: Vec::with_capacity(count.min(MAX_PREALLOCATED_VALUES)),
        })
    }

    fn push(
        values: &mut Vec<String>,
        value: String,
        limit: Option<usize>,
        id: Option<&str>,
    ) -> Result<()> {
        if let Some(count) = limit
            && values.len() >= count
        {
            return Err(surplus_values("Name_array", id, count));
        }
        values.push(value);
        Ok(())
    }

    /// Decode a text fragment
    pub fn feed(&mut self, fragment: &str) -> Result<()> {
        let limit = self.strict.then_some(self.count);
        let id = self.id.as_deref();
        let values = &mut self.values;
        self.reader.feed(fragment, |v| Self::push(values, v, limit, id))
    }

    /// Finish the element
    pub fn build(mut self) -> Result<NameArray> {
        let limit = self.strict.then_some(self.count);
        let id = self.id.as_deref();
        let values = &mut self.values;
        self.reader.finish(|v| Self::push(values, v, limit, id))?;
        Ok(NameArray {
            id: self.id,
            name: self.name,
            count: self.count,
            values: self.values,
        })
    }
}

/// Builds an [`Accessor`]; `<param>` children are attached as leaves
#[derive(Debug)]
pub struct AccessorBuilder {
    accessor: Accessor,
}

impl AccessorBuilder {
    /// Stage the element's attributes; `source` and `count` are required
    pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
        let count: usize = parse_required(attrs, "accessor", "count", COUNT)?;
        let source = required_uri(attrs, "accessor", "source")?;
        let offset: usize = parse_optional(attrs, "accessor", "offset", COUNT)?.unwrap_or(0);
        let stride: usize = parse_optional(attrs, "accessor", "stride", COUNT)?.unwrap_or(1);
        if stride == 0 {
            return Err(Error::malformed_value(
                "'stride' attribute of <accessor>",
                "0",
                "positive integer",
            ));
        }
        Ok(Self {
            accessor: Accessor {
                source,
                count,
                offset,
                stride,
                params: Vec::new(),
            },
        })
    }

    /// Read a `<param>` leaf
    pub fn add_param(&mut self, attrs: &Attributes) -> Result<()> {
        let data_type = DataType::parse(required_attr(attrs, "param", "type")?)?;
        self.accessor.params.push(DataFlowParam {
            data_type,
            name: attr(attrs, "name"),
            semantic: attr(attrs, "semantic"),
            sid: attr(attrs, "sid"),
        });
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Accessor {
        self.accessor
    }
}

/// Builds [`Vertices`]; `<input>` children are attached as leaves
#[derive(Debug, Default)]
pub struct VerticesBuilder {
    vertices: Vertices,
}

impl VerticesBuilder {
    /// Stage the element's attributes
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            vertices: Vertices {
                id: attr(attrs, "id"),
                name: attr(attrs, "name"),
                inputs: Vec::new(),
            },
        }
    }

    /// Read an unshared `<input>` leaf
    pub fn add_input(&mut self, attrs: &Attributes) -> Result<()> {
        let semantic = required_attr(attrs, "input", "semantic")?.to_string();
        let source = required_uri(attrs, "input", "source")?;
        self.vertices.inputs.push(UnsharedInput { semantic, source });
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Vertices {
        self.vertices
    }
}

/// Read a shared `<input>` of a primitive
pub(super) fn parse_shared_input(attrs: &Attributes) -> Result<SharedInput> {
    Ok(SharedInput {
        semantic: required_attr(attrs, "input", "semantic")?.to_string(),
        source: required_uri(attrs, "input", "source")?,
        offset: parse_required(attrs, "input", "offset", COUNT)?,
        set: parse_optional(attrs, "input", "set", COUNT)?,
    })
}

/// Builds [`Triangles`]
#[derive(Debug)]
pub struct TrianglesBuilder {
    name: Option<String>,
    count: usize,
    material: Option<String>,
    inputs: Vec<SharedInput>,
    data: PrimitiveData,
}

impl TrianglesBuilder {
    /// Stage the element's attributes; `count` is required
    pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
        Ok(Self {
            name: attr(attrs, "name"),
            count: parse_required(attrs, "triangles", "count", COUNT)?,
            material: attr(attrs, "material"),
            inputs: Vec::new(),
            data: Vec::new(),
        })
    }

    pub(super) fn absorb(&mut self, node: Node) -> Result<()> {
        match node {
            Node::SharedInput(input) => self.inputs.push(input),
            Node::Indices(indices) => self.data.extend(indices),
            other => return Err(unexpected("triangles", &other)),
        }
        Ok(())
    }

    /// Finish the element
    pub fn build(self) -> Triangles {
        Triangles {
            name: self.name,
            count: self.count,
            material: self.material,
            inputs: self.inputs,
            data: self.data,
        }
    }
}

/// Builds the index buffer of a `<p>` element
#[derive(Debug, Default)]
pub struct IndexListBuilder {
    reader: ChunkIntReader,
    values: PrimitiveData,
}

impl IndexListBuilder {
    /// An empty index list
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a text fragment
    pub fn feed(&mut self, fragment: &str) -> Result<()> {
        let values = &mut self.values;
        self.reader.feed(fragment, |v| {
            values.push(v);
            Ok(())
        })
    }

    /// Finish the element
    pub fn build(mut self) -> Result<PrimitiveData> {
        let values = &mut self.values;
        self.reader.finish(|v| {
            values.push(v);
            Ok(())
        })?;
        Ok(self.values)
    }
}
