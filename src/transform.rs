//! Object-to-world placement of a mesh in a scene.

use crate::errors::MeshError;
use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Translation3, UnitQuaternion, Vector3};

/// Translation, rotation and (non-uniform) scale of a scene object, applied
/// in scale → rotate → translate order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<Real>,
    pub rotation: UnitQuaternion<Real>,
    pub scale: Vector3<Real>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Transform {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn from_translation(translation: Vector3<Real>) -> Self {
        Transform {
            translation,
            ..Self::identity()
        }
    }

    pub const fn with_rotation(mut self, rotation: UnitQuaternion<Real>) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn with_scale(mut self, scale: Vector3<Real>) -> Self {
        self.scale = scale;
        self
    }

    /// The object-to-world matrix `T * R * S`.
    pub fn local_to_world(&self) -> Matrix4<Real> {
        Translation3::from(self.translation).to_homogeneous()
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// The world-to-local matrix, or [`MeshError::SingularTransform`] when a
    /// scale component is zero.
    pub fn world_to_local(&self) -> Result<Matrix4<Real>, MeshError> {
        self.local_to_world()
            .try_inverse()
            .ok_or(MeshError::SingularTransform)
    }

    /// Map a local point into world space.
    pub fn transform_point(&self, point: &Point3<Real>) -> Point3<Real> {
        let scaled = Point3::from(point.coords.component_mul(&self.scale));
        self.rotation * scaled + self.translation
    }

    /// Map a local direction into world space. Only the rotation applies:
    /// no translation and no scale, so lengths are preserved.
    pub fn transform_direction(&self, direction: &Vector3<Real>) -> Vector3<Real> {
        self.rotation * direction
    }
}
