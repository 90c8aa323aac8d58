//! Hand-off between scene meshes and an external boolean polygon engine.
//!
//! The engine (BSP construction, clipping, set algebra) lives elsewhere; this
//! module only moves both operands into a shared world space, passes their
//! polygon soups over, and reassembles whatever comes back.

use crate::errors::MeshError;
use crate::mesh::polygon::Polygon;
use crate::model::Model;
use crate::render_mesh::RenderMesh;
use crate::transform::Transform;
use tracing::debug;

/// Set operation requested from a [`PolygonEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

/// A boolean mesh engine operating on world-space polygon soups.
///
/// Implementations must keep each output polygon's `submesh` tag meaningful
/// for the caller; the tags are turned back into submesh buckets as-is.
pub trait PolygonEngine {
    fn apply(&self, op: BooleanOp, lhs: Vec<Polygon>, rhs: Vec<Polygon>) -> Vec<Polygon>;
}

/// A renderable mesh together with its placement in the scene.
#[derive(Debug, Clone, Copy)]
pub struct Operand<'a> {
    pub mesh: &'a RenderMesh,
    pub transform: &'a Transform,
}

impl<'a> Operand<'a> {
    pub const fn new(mesh: &'a RenderMesh, transform: &'a Transform) -> Self {
        Operand { mesh, transform }
    }

    fn polygons(&self) -> Result<Vec<Polygon>, MeshError> {
        Ok(Model::from_render_mesh(self.mesh, self.transform)?.to_polygons())
    }
}

/// Run `op` on two scene meshes through `engine`.
///
/// The returned model is in world space; call
/// [`Model::to_mesh`] with a target transform to bring it back into an
/// object's local space.
pub fn perform<E: PolygonEngine + ?Sized>(
    engine: &E,
    op: BooleanOp,
    lhs: Operand<'_>,
    rhs: Operand<'_>,
) -> Result<Model, MeshError> {
    let a = lhs.polygons()?;
    let b = rhs.polygons()?;
    debug!(?op, lhs = a.len(), rhs = b.len(), "running boolean engine");

    let result = engine.apply(op, a, b);
    Ok(Model::from_polygons(&result))
}

/// Flip every polygon: same surfaces, inside and outside swapped.
pub fn invert(polygons: &[Polygon]) -> Vec<Polygon> {
    polygons.iter().map(Polygon::flipped).collect()
}
