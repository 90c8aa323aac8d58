//! Conversion errors

/// Everything that can go wrong while moving geometry between a
/// [`RenderMesh`](crate::render_mesh::RenderMesh), a
/// [`Model`](crate::model::Model) and a polygon soup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// (MalformedMesh) Array lengths or index lists break the triangle-list contract
    #[error("(MalformedMesh) {reason}")]
    MalformedMesh { reason: String },

    /// (DegeneratePolygon) Fewer than three vertices, or the first three are collinear
    #[error("(DegeneratePolygon) {reason}")]
    DegeneratePolygon { reason: String },

    /// (SingularTransform) The transform has no world-to-local inverse
    #[error("(SingularTransform) The transform cannot be inverted")]
    SingularTransform,

    /// (TooManyVertices) The vertex buffer cannot be addressed with `u32` indices
    #[error("(TooManyVertices) {count} vertices exceed the u32 index range")]
    TooManyVertices { count: usize },
}

impl MeshError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedMesh {
            reason: reason.into(),
        }
    }

    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegeneratePolygon {
            reason: reason.into(),
        }
    }
}
