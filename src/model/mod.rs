//! `Model`: the indexed triangle mesh that sits between a [`RenderMesh`] and
//! the polygon soup a boolean engine works on.
//!
//! ```text
//! RenderMesh ─from_render_mesh─▶ Model ─to_polygons─▶ [Polygon] ─▶ engine
//!                                                                   │
//! RenderMesh ◀──────to_mesh────── Model ◀──from_polygons── [Polygon] ◀┘
//! ```

use crate::errors::MeshError;
use crate::mesh::{polygon::Polygon, vertex::Vertex};
use crate::render_mesh::RenderMesh;
use crate::transform::Transform;
use nalgebra::Vector2;
use tracing::{debug, trace, warn};

pub mod submesh;

pub use submesh::Submeshes;

/// A flat vertex buffer shared by all submeshes, plus one triangle list
/// (stride 3) per submesh.
///
/// Every index is a valid offset into `vertices`; the constructors enforce it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    vertices: Vec<Vertex>,
    submeshes: Submeshes,
}

impl Model {
    /// An empty model: no vertices, no submeshes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from raw parts, checking the triangle-list contract.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        index_lists: Vec<Vec<usize>>,
    ) -> Result<Self, MeshError> {
        for (submesh, indices) in index_lists.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(MeshError::malformed(format!(
                    "submesh {} has {} indices, not a multiple of 3",
                    submesh,
                    indices.len()
                )));
            }
            if let Some(&bad) = indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::malformed(format!(
                    "submesh {} references vertex {} of {}",
                    submesh,
                    bad,
                    vertices.len()
                )));
            }
        }

        Ok(Model {
            vertices,
            submeshes: Submeshes::from(index_lists),
        })
    }

    /// Import a renderable mesh placed in the scene by `transform`.
    ///
    /// Positions go through the full object-to-world transform, normals
    /// through the direction transform (rotation only). A missing or
    /// mismatched uv array becomes `(0, 0)` everywhere, a missing or
    /// mismatched color array becomes opaque white. Index lists are copied
    /// verbatim; the vertex buffer keeps the source sharing.
    pub fn from_render_mesh(mesh: &RenderMesh, transform: &Transform) -> Result<Self, MeshError> {
        mesh.validate()?;

        let uvs = mesh.uv_channel();
        let colors = mesh.color_channel();

        let vertices = mesh
            .positions
            .iter()
            .zip(&mesh.normals)
            .enumerate()
            .map(|(i, (pos, normal))| {
                let mut v = Vertex::new(
                    transform.transform_point(pos),
                    transform.transform_direction(normal),
                );
                if let Some(uvs) = uvs {
                    v.uv = uvs[i];
                }
                if let Some(colors) = colors {
                    v.color = colors[i];
                }
                v
            })
            .collect();

        let index_lists = mesh
            .submeshes
            .iter()
            .map(|list| list.iter().map(|&i| i as usize).collect())
            .collect::<Vec<Vec<usize>>>();

        let model = Model {
            vertices,
            submeshes: Submeshes::from(index_lists),
        };
        debug!(
            vertices = model.vertex_count(),
            triangles = model.triangle_count(),
            submeshes = model.submesh_count(),
            "imported render mesh"
        );
        Ok(model)
    }

    /// Reassemble a polygon soup into a model by fan triangulation.
    ///
    /// Each polygon contributes `len - 2` triangles `(v0, v[j-1], v[j])` to
    /// the submesh it is tagged with, keeping its winding. Every triangle
    /// corner becomes a fresh vertex buffer entry (no deduplication).
    /// Submesh buckets are allocated up to the highest tag seen, see
    /// [`Submeshes::bucket_mut`] for the limits on tags. A ring with fewer
    /// than three vertices still allocates its bucket but adds no triangles.
    pub fn from_polygons(polygons: &[Polygon]) -> Self {
        let triangle_total: usize = polygons.iter().map(Polygon::triangle_count).sum();
        let mut vertices = Vec::with_capacity(triangle_total * 3);
        let mut submeshes = Submeshes::new();

        for poly in polygons {
            let bucket = submeshes.bucket_mut(poly.submesh);
            if poly.vertices.len() < 3 {
                warn!(
                    submesh = poly.submesh,
                    ring = poly.vertices.len(),
                    "skipping degenerate polygon with fewer than 3 vertices"
                );
                continue;
            }
            let triangles = poly.triangulate();
            trace!(
                submesh = poly.submesh,
                ring = poly.vertices.len(),
                triangles = triangles.len(),
                "fan triangulating polygon"
            );
            for corner in triangles.into_iter().flatten() {
                bucket.push(vertices.len());
                vertices.push(corner);
            }
        }

        let model = Model {
            vertices,
            submeshes,
        };
        debug!(
            polygons = polygons.len(),
            vertices = model.vertex_count(),
            triangles = model.triangle_count(),
            submeshes = model.submesh_count(),
            "assembled model from polygons"
        );
        model
    }

    /// One triangle polygon per index triple, in submesh order then triangle
    /// order, tagged with its submesh. Planes come from [`Polygon::new`].
    pub fn to_polygons(&self) -> Vec<Polygon> {
        let polygons: Vec<Polygon> = self
            .submeshes
            .iter()
            .flat_map(|(submesh, indices)| {
                indices.chunks_exact(3).map(move |tri| {
                    Polygon::new(
                        vec![
                            self.vertices[tri[0]],
                            self.vertices[tri[1]],
                            self.vertices[tri[2]],
                        ],
                        submesh,
                    )
                })
            })
            .collect();
        debug!(polygons = polygons.len(), "exported polygons");
        polygons
    }

    /// Convert to a fresh [`RenderMesh`], see [`Model::write_to_mesh`].
    pub fn to_mesh(&self, target: Option<&Transform>) -> Result<RenderMesh, MeshError> {
        let mut mesh = RenderMesh::new();
        self.write_to_mesh(&mut mesh, target)?;
        Ok(mesh)
    }

    /// Overwrite the geometry of `mesh` with this model.
    ///
    /// Without a target, positions and normals are copied as they are. With a
    /// target, they are mapped through its world-to-local matrix (point and
    /// vector form), and tangents already on `mesh` are remapped with
    /// [`RenderMesh::remap_tangents_as_points`]. Uv, color and the submesh
    /// partition are copied verbatim and the bounds recomputed.
    pub fn write_to_mesh(
        &self,
        mesh: &mut RenderMesh,
        target: Option<&Transform>,
    ) -> Result<(), MeshError> {
        let vertex_count = self.vertex_count();
        if u32::try_from(vertex_count).is_err() {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
            });
        }
        let world_to_local = target.map(Transform::world_to_local).transpose()?;

        mesh.positions = self
            .vertices
            .iter()
            .map(|v| match &world_to_local {
                Some(m) => m.transform_point(&v.pos),
                None => v.pos,
            })
            .collect();
        mesh.normals = self
            .vertices
            .iter()
            .map(|v| match &world_to_local {
                Some(m) => m.transform_vector(&v.normal),
                None => v.normal,
            })
            .collect();
        mesh.uvs = Some(self.vertices.iter().map(|v| v.uv).collect::<Vec<Vector2<_>>>());
        mesh.colors = Some(self.vertices.iter().map(|v| v.color).collect());
        // indices fit: every index is below vertex_count, checked above
        mesh.submeshes = self
            .submeshes
            .iter()
            .map(|(_, indices)| indices.iter().map(|&i| i as u32).collect())
            .collect();

        if mesh.tangents.as_ref().is_some_and(|t| t.len() != vertex_count) {
            warn!(vertices = vertex_count, "dropping tangents that no longer match the vertex buffer");
            mesh.tangents = None;
        }
        if let Some(m) = &world_to_local {
            mesh.remap_tangents_as_points(m);
        }

        mesh.recalculate_bounds();
        debug!(
            vertices = vertex_count,
            triangles = mesh.triangle_count(),
            submeshes = mesh.submesh_count(),
            local = target.is_some(),
            "wrote render mesh"
        );
        Ok(())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub const fn submeshes(&self) -> &Submeshes {
        &self.submeshes
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.submeshes.triangle_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.submeshes.is_empty()
    }
}
