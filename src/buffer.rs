use glium::{
    backend::Facade,
    index::{NoIndices, PrimitiveType},
    vertex::BufferCreationError,
    Vertex, VertexBuffer,
};

/// Static vertex data drawn as a plain triangle list, without an index buffer.
///
/// Several programs may draw from the same `Mesh`; each reads only the attributes it declares.
pub struct Mesh<V: Vertex> {
    pub vertices: VertexBuffer<V>,
    pub indices: NoIndices,
}

impl<V: Vertex> Mesh<V> {
    /// Uploads `data` once; the buffer is never written again.
    pub fn upload<F: Facade + ?Sized>(facade: &F, data: &[V]) -> Result<Self, BufferCreationError> {
        let vertices = VertexBuffer::immutable(facade, data)?;
        log::debug!("uploaded {} vertices", vertices.len());
        Ok(Self {
            vertices,
            indices: NoIndices(PrimitiveType::TrianglesList),
        })
    }
}
