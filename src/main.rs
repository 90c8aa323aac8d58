// main.rs
//
// Minimal walk through csgmodel: import two scene meshes, hand their polygon
// soups to a stand-in engine, and write the result back into local space.
// Run with `RUST_LOG=csgmodel=debug cargo run --features cli` to see the
// per-conversion logging.

use csgmodel::{
    BooleanOp, Color, Model, Operand, Polygon, PolygonEngine, RenderMesh, Transform,
    float_types::Real, operation::invert, perform,
};
use nalgebra::{Point3, Vector2, Vector3};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Does no clipping: union concatenates, subtract concatenates the inverted
/// right operand, intersect keeps nothing.
struct Concatenate;

impl PolygonEngine for Concatenate {
    fn apply(&self, op: BooleanOp, lhs: Vec<Polygon>, rhs: Vec<Polygon>) -> Vec<Polygon> {
        match op {
            BooleanOp::Union => lhs.into_iter().chain(rhs).collect(),
            BooleanOp::Subtract => lhs.into_iter().chain(invert(&rhs)).collect(),
            BooleanOp::Intersect => Vec::new(),
        }
    }
}

/// Axis aligned unit cube with one submesh per face pair and 24 unshared vertices.
fn cube() -> RenderMesh {
    let faces: [([Real; 3], [[Real; 3]; 4]); 6] = [
        ([1.0, 0.0, 0.0], [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]]),
        ([-1.0, 0.0, 0.0], [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]]),
        ([0.0, 1.0, 0.0], [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]]),
        ([0.0, -1.0, 0.0], [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]]),
        ([0.0, 0.0, 1.0], [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]]),
        ([0.0, 0.0, -1.0], [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]]),
    ];
    let corner_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = RenderMesh::new();
    mesh.submeshes = vec![Vec::new(); 3];
    let mut uvs = Vec::new();
    for (face, (n, corners)) in faces.iter().enumerate() {
        let base = mesh.positions.len() as u32;
        for (c, uv) in corners.iter().zip(corner_uvs) {
            mesh.positions.push(Point3::new(c[0], c[1], c[2]));
            mesh.normals.push(Vector3::new(n[0], n[1], n[2]));
            uvs.push(Vector2::new(uv[0], uv[1]));
        }
        mesh.submeshes[face / 2].extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh.uvs = Some(uvs);
    mesh.recalculate_bounds();
    mesh
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut tinted = cube();
    tinted.colors = Some(vec![Color::new(0.8, 0.2, 0.2, 1.0); tinted.vertex_count()]);

    let a = cube();
    let a_at = Transform::identity();
    let b_at = Transform::from_translation(Vector3::new(0.5, 0.5, 0.5));

    // Round trip without an engine
    let model = match Model::from_render_mesh(&a, &a_at) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("import failed: {e}");
            return;
        },
    };
    let rebuilt = Model::from_polygons(&model.to_polygons());
    info!(
        source_vertices = model.vertex_count(),
        rebuilt_vertices = rebuilt.vertex_count(),
        triangles = rebuilt.triangle_count(),
        "round trip"
    );

    for op in [BooleanOp::Union, BooleanOp::Subtract, BooleanOp::Intersect] {
        let result = perform(
            &Concatenate,
            op,
            Operand::new(&a, &a_at),
            Operand::new(&tinted, &b_at),
        )
        .and_then(|model| model.to_mesh(Some(&a_at)));

        match result {
            Ok(mesh) => info!(
                ?op,
                vertices = mesh.vertex_count(),
                triangles = mesh.triangle_count(),
                submeshes = mesh.submesh_count(),
                bounds = ?mesh.bounds,
                "boolean result"
            ),
            Err(e) => eprintln!("{op:?} failed: {e}"),
        }
    }
}
