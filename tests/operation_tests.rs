use csgmodel::{
    errors::MeshError,
    float_types::tolerance,
    mesh::polygon::Polygon,
    operation::{BooleanOp, Operand, PolygonEngine, invert, perform},
    render_mesh::RenderMesh,
    transform::Transform,
};
use nalgebra::Vector3;
use std::cell::RefCell;

mod support;

use crate::support::{approx_point, approx_vector, cube, two_submesh_mesh};

/// Stand-in engine: records what it was given and concatenates, inverting
/// the right operand for subtraction.
#[derive(Default)]
struct Recording {
    seen: RefCell<Vec<(BooleanOp, usize, usize)>>,
}

impl PolygonEngine for Recording {
    fn apply(&self, op: BooleanOp, lhs: Vec<Polygon>, rhs: Vec<Polygon>) -> Vec<Polygon> {
        self.seen.borrow_mut().push((op, lhs.len(), rhs.len()));
        match op {
            BooleanOp::Union => lhs.into_iter().chain(rhs).collect(),
            BooleanOp::Subtract => lhs.into_iter().chain(invert(&rhs)).collect(),
            BooleanOp::Intersect => Vec::new(),
        }
    }
}

#[test]
fn operands_reach_the_engine_as_triangles() {
    let engine = Recording::default();
    let a = cube();
    let b = two_submesh_mesh();
    let at = Transform::identity();

    let model = perform(&engine, BooleanOp::Union, Operand::new(&a, &at), Operand::new(&b, &at))
        .unwrap();
    assert_eq!(*engine.seen.borrow(), vec![(BooleanOp::Union, 12, 2)]);
    assert_eq!(model.triangle_count(), 14);
    // cube has 3 submeshes, the quad 2: buckets grow to the larger count
    assert_eq!(model.submesh_count(), 3);
}

#[test]
fn operands_share_world_space() {
    let engine = Recording::default();
    let a = cube();
    let a_at = Transform::identity();
    let b_at = Transform::from_translation(Vector3::new(5.0, 0.0, 0.0));

    let model = perform(
        &engine,
        BooleanOp::Union,
        Operand::new(&a, &a_at),
        Operand::new(&a, &b_at),
    )
    .unwrap();
    let mesh = model.to_mesh(None).unwrap();
    let bb = mesh.bounds.unwrap();
    assert!(approx_point(&bb.mins, &nalgebra::Point3::new(0.0, 0.0, 0.0), tolerance()));
    assert!(approx_point(&bb.maxs, &nalgebra::Point3::new(6.0, 1.0, 1.0), tolerance()));
}

#[test]
fn subtract_inverts_the_right_operand() {
    let engine = Recording::default();
    let a = cube();
    let at = Transform::identity();

    let model = perform(&engine, BooleanOp::Subtract, Operand::new(&a, &at), Operand::new(&a, &at))
        .unwrap();
    let polygons = model.to_polygons();
    assert_eq!(polygons.len(), 24);

    // every left triangle has an inverted twin from the right operand
    for poly in &polygons {
        let twin = polygons.iter().find(|other| {
            approx_vector(&other.plane.normal(), &-poly.plane.normal(), tolerance())
                && (other.plane.offset() + poly.plane.offset()).abs() < tolerance()
        });
        assert!(twin.is_some());
    }
}

#[test]
fn empty_result_is_an_empty_model() {
    let engine = Recording::default();
    let a = cube();
    let at = Transform::identity();
    let model = perform(&engine, BooleanOp::Intersect, Operand::new(&a, &at), Operand::new(&a, &at))
        .unwrap();
    assert!(model.is_empty());
    assert_eq!(model.to_mesh(Some(&at)).unwrap().vertex_count(), 0);
}

#[test]
fn malformed_operand_stops_before_the_engine() {
    let engine = Recording::default();
    let good = cube();
    let mut bad = RenderMesh::new();
    bad.positions = good.positions.clone();
    bad.submeshes = vec![vec![0, 1, 2]];
    let at = Transform::identity();

    let result = perform(&engine, BooleanOp::Union, Operand::new(&good, &at), Operand::new(&bad, &at));
    assert!(matches!(result, Err(MeshError::MalformedMesh { .. })));
    assert!(engine.seen.borrow().is_empty());
}

#[test]
fn invert_twice_restores_polygons() {
    let at = Transform::identity();
    let polygons = csgmodel::model::Model::from_render_mesh(&cube(), &at)
        .unwrap()
        .to_polygons();
    assert_eq!(invert(&invert(&polygons)), polygons);
}
