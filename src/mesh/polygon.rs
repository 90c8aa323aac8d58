//! Struct and functions for working with planar `Polygon`s

use crate::errors::MeshError;
use crate::float_types::{Real, parry3d::bounding_volume::Aabb};
use crate::mesh::{plane::Plane, vertex::Vertex};
use nalgebra::Point3;

/// A polygon, defined by an ordered ring of vertices, tagged with the
/// submesh (material bucket) it is emitted into.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices of the polygon, the winding defines the front side
    pub vertices: Vec<Vertex>,

    /// The plane on which this Polygon lies, derived from the first three vertices
    pub plane: Plane,

    /// Index of the submesh this polygon belongs to
    pub submesh: usize,
}

impl Polygon {
    /// Create a polygon from vertices without validating them.
    ///
    /// The caller guarantees at least three coplanar vertices with the first
    /// three not collinear. A ring shorter than three gets [`Plane::default`].
    pub fn new(vertices: Vec<Vertex>, submesh: usize) -> Self {
        let plane = plane_of(&vertices);
        Polygon {
            vertices,
            plane,
            submesh,
        }
    }

    /// Create a polygon, reporting [`MeshError::DegeneratePolygon`] when the
    /// ring has fewer than three vertices or its first three are collinear.
    ///
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use csgmodel::mesh::{polygon::Polygon, vertex::Vertex};
    /// let tri = vec![
    ///     Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::z()),
    ///     Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
    ///     Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()),
    /// ];
    /// let poly = Polygon::try_new(tri, 0).unwrap();
    /// assert_eq!(poly.plane.normal(), Vector3::z());
    /// ```
    pub fn try_new(vertices: Vec<Vertex>, submesh: usize) -> Result<Self, MeshError> {
        if vertices.len() < 3 {
            return Err(MeshError::degenerate(format!(
                "polygon has {} vertices, at least 3 are required",
                vertices.len()
            )));
        }
        let plane = Plane::try_from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos)
            .ok_or_else(|| {
                MeshError::degenerate(format!(
                    "first three vertices are collinear at: {}",
                    vertices[0].pos
                ))
            })?;

        Ok(Polygon {
            vertices,
            plane,
            submesh,
        })
    }

    /// Reverses winding order, flips vertex normals, and flips the plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Value form of [`Polygon::flip`]: same surface, opposite front side.
    pub fn flipped(&self) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().rev().map(Vertex::flipped).collect(),
            plane: self.plane.flipped(),
            submesh: self.submesh,
        }
    }

    /// Re-derive the plane after the first three vertices were changed.
    pub fn recompute_plane(&mut self) {
        self.plane = plane_of(&self.vertices);
    }

    /// Number of triangles a fan triangulation of this ring produces.
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    /// Fan-triangulate from the apex `vertices[0]`, preserving the winding.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        let Some(apex) = self.vertices.first() else {
            return Vec::new();
        };
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| [*apex, pair[0], pair[1]])
            .collect()
    }

    /// Axis aligned bounding box of this Polygon
    pub fn bounding_box(&self) -> Aabb {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
        for v in &self.vertices {
            mins.x = mins.x.min(v.pos.x);
            mins.y = mins.y.min(v.pos.y);
            mins.z = mins.z.min(v.pos.z);
            maxs.x = maxs.x.max(v.pos.x);
            maxs.y = maxs.y.max(v.pos.y);
            maxs.z = maxs.z.max(v.pos.z);
        }
        Aabb::new(mins, maxs)
    }
}

fn plane_of(vertices: &[Vertex]) -> Plane {
    match vertices {
        [a, b, c, ..] => Plane::from_points(a.pos, b.pos, c.pos),
        _ => Plane::default(),
    }
}
