//! The renderable, indexed triangle mesh consumed and produced at the
//! boundary of this crate.

use crate::errors::MeshError;
use crate::float_types::{Real, parry3d::bounding_volume::Aabb};
use crate::mesh::vertex::Color;
use nalgebra::{Matrix4, Point3, Vector2, Vector3, Vector4};
use tracing::warn;

/// Parallel per-vertex attribute arrays plus one triangle list per submesh.
///
/// `positions` and `normals` are required and must have the same length.
/// `uvs`, `colors` and `tangents` are optional; an optional array whose
/// length differs from the vertex count is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMesh {
    pub positions: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    pub uvs: Option<Vec<Vector2<Real>>>,
    pub colors: Option<Vec<Color>>,
    pub tangents: Option<Vec<Vector4<Real>>>,

    /// Triangle-list indices (stride 3), one list per submesh
    pub submeshes: Vec<Vec<u32>>,

    /// Bounds of `positions`, refreshed by [`RenderMesh::recalculate_bounds`]
    pub bounds: Option<Aabb>,
}

impl RenderMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.len() / 3).sum()
    }

    /// The uv array, if present and covering every vertex.
    pub fn uv_channel(&self) -> Option<&[Vector2<Real>]> {
        full_channel("uv", self.uvs.as_deref(), self.vertex_count())
    }

    /// The color array, if present and covering every vertex.
    pub fn color_channel(&self) -> Option<&[Color]> {
        full_channel("color", self.colors.as_deref(), self.vertex_count())
    }

    /// Check the triangle-list contract: normals cover every vertex, positions
    /// and normals are finite, every submesh list is a multiple of 3 long and
    /// references existing vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertex_count();
        if self.normals.len() != vertex_count {
            return Err(MeshError::malformed(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                vertex_count
            )));
        }
        if let Some((i, p)) = self
            .positions
            .iter()
            .enumerate()
            .find(|(_, p)| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(MeshError::malformed(format!(
                "position {} ({}) has a NaN or infinite coordinate",
                i, p
            )));
        }
        if let Some((i, n)) = self
            .normals
            .iter()
            .enumerate()
            .find(|(_, n)| !n.iter().all(|c| c.is_finite()))
        {
            return Err(MeshError::malformed(format!(
                "normal {} ({}) has a NaN or infinite component",
                i, n
            )));
        }

        for (submesh, indices) in self.submeshes.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(MeshError::malformed(format!(
                    "submesh {} has {} indices, not a multiple of 3",
                    submesh,
                    indices.len()
                )));
            }
            if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::malformed(format!(
                    "submesh {} references vertex {} of {}",
                    submesh, bad, vertex_count
                )));
            }
        }
        Ok(())
    }

    /// Recompute [`RenderMesh::bounds`] from the positions. An empty mesh has no bounds.
    pub fn recalculate_bounds(&mut self) {
        self.bounds = bounds_of(&self.positions);
    }

    /// Push every tangent's xyz through `matrix` **as a point** (translation
    /// and projective divide included) and reset w to 0.
    ///
    /// Tangents are directions, so this is not a correct vector transform.
    /// It reproduces how geometry has always been un-transformed on export.
    // TODO: switch to `transform_vector` and keep the handedness in w once
    // downstream normal-mapped materials are checked against the change.
    pub fn remap_tangents_as_points(&mut self, matrix: &Matrix4<Real>) {
        if let Some(tangents) = self.tangents.as_mut() {
            for t in tangents.iter_mut() {
                let p = matrix.transform_point(&Point3::new(t.x, t.y, t.z));
                *t = Vector4::new(p.x, p.y, p.z, 0.0);
            }
        }
    }
}

fn full_channel<'a, T>(name: &str, channel: Option<&'a [T]>, vertex_count: usize) -> Option<&'a [T]> {
    match channel {
        Some(values) if values.len() == vertex_count => Some(values),
        Some(values) => {
            warn!(
                "ignoring {} array: {} entries for {} vertices",
                name,
                values.len(),
                vertex_count
            );
            None
        },
        None => None,
    }
}

pub(crate) fn bounds_of(positions: &[Point3<Real>]) -> Option<Aabb> {
    let (first, rest) = positions.split_first()?;
    let mut mins = *first;
    let mut maxs = *first;
    for p in rest {
        mins = mins.inf(p);
        maxs = maxs.sup(p);
    }
    Some(Aabb::new(mins, maxs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> RenderMesh {
        RenderMesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            submeshes: vec![vec![0, 1, 2]],
            ..RenderMesh::default()
        }
    }

    #[test]
    fn mismatched_channels_read_as_absent() {
        let mut mesh = triangle();
        mesh.uvs = Some(vec![Vector2::new(1.0, 1.0); 2]);
        mesh.colors = Some(vec![Color::new(1.0, 0.0, 0.0, 1.0); 3]);
        assert!(mesh.uv_channel().is_none());
        assert_eq!(mesh.color_channel().map(<[Color]>::len), Some(3));
    }

    #[test]
    fn validate_rejects_stride_and_range() {
        let mut mesh = triangle();
        assert!(mesh.validate().is_ok());

        mesh.submeshes[0].push(0);
        assert!(matches!(mesh.validate(), Err(MeshError::MalformedMesh { .. })));

        mesh.submeshes[0] = vec![0, 1, 3];
        assert!(matches!(mesh.validate(), Err(MeshError::MalformedMesh { .. })));

        let mut mesh = triangle();
        mesh.normals.pop();
        assert!(matches!(mesh.validate(), Err(MeshError::MalformedMesh { .. })));
    }

    #[test]
    fn validate_rejects_non_finite_coordinates() {
        let mut mesh = triangle();
        mesh.positions[1].y = Real::NAN;
        let err = mesh.validate().unwrap_err();
        assert!(matches!(err, MeshError::MalformedMesh { .. }));
        assert!(err.to_string().contains("position 1"));

        let mut mesh = triangle();
        mesh.normals[2].z = Real::INFINITY;
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("normal 2"));
    }

    #[test]
    fn bounds_follow_positions() {
        let mut mesh = triangle();
        mesh.recalculate_bounds();
        let bb = mesh.bounds.unwrap();
        assert_eq!(bb.mins, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bb.maxs, Point3::new(1.0, 1.0, 0.0));

        let mut empty = RenderMesh::new();
        empty.recalculate_bounds();
        assert!(empty.bounds.is_none());
    }

    #[test]
    fn tangents_pick_up_translation() {
        let mut mesh = triangle();
        mesh.tangents = Some(vec![Vector4::new(1.0, 0.0, 0.0, -1.0); 3]);
        let shift = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 5.0));
        mesh.remap_tangents_as_points(&shift);
        for t in mesh.tangents.unwrap() {
            assert_eq!(t, Vector4::new(1.0, 0.0, 5.0, 0.0));
        }
    }
}
