//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use csgmodel::{
    float_types::Real,
    mesh::{polygon::Polygon, vertex::Vertex},
    render_mesh::RenderMesh,
};
use nalgebra::{Point3, Vector2, Vector3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn approx_point(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

pub fn approx_vector(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Helper to make a simple Polygon in 3D with given vertices.
pub fn make_polygon_3d(points: &[[Real; 3]], submesh: usize) -> Polygon {
    let mut verts = Vec::new();
    for p in points {
        let pos = Point3::new(p[0], p[1], p[2]);
        // An arbitrary normal; Polygon::new derives the plane from positions anyway.
        verts.push(Vertex::new(pos, Vector3::z()));
    }
    Polygon::new(verts, submesh)
}

/// The unit square in the XY plane, counter-clockwise seen from +Z.
pub fn unit_quad(submesh: usize) -> Polygon {
    make_polygon_3d(
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        submesh,
    )
}

/// Two triangles sharing an edge, split over two submeshes, with shared
/// vertices, uvs and normals.
pub fn two_submesh_mesh() -> RenderMesh {
    RenderMesh {
        positions: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        normals: vec![Vector3::z(); 4],
        uvs: Some(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ]),
        submeshes: vec![vec![0, 1, 2], vec![0, 2, 3]],
        ..RenderMesh::default()
    }
}

/// Axis aligned unit cube: 24 vertices, 12 triangles, one submesh per axis.
pub fn cube() -> RenderMesh {
    let faces: [([Real; 3], [[Real; 3]; 4]); 6] = [
        ([1.0, 0.0, 0.0], [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]]),
        ([-1.0, 0.0, 0.0], [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]]),
        ([0.0, 1.0, 0.0], [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]]),
        ([0.0, -1.0, 0.0], [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]]),
        ([0.0, 0.0, 1.0], [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]]),
        ([0.0, 0.0, -1.0], [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]]),
    ];

    let mut mesh = RenderMesh::new();
    mesh.submeshes = vec![Vec::new(); 3];
    for (face, (n, corners)) in faces.iter().enumerate() {
        let base = mesh.positions.len() as u32;
        for c in corners {
            mesh.positions.push(Point3::new(c[0], c[1], c[2]));
            mesh.normals.push(Vector3::new(n[0], n[1], n[2]));
        }
        mesh.submeshes[face / 2].extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}
