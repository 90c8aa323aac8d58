//! Supporting planes of polygons.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// An oriented plane `n · p = w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal
    pub w: Real,
}

impl Default for Plane {
    /// The XY plane through the origin, facing +Z.
    fn default() -> Self {
        Plane {
            normal: Vector3::z(),
            w: 0.0,
        }
    }
}

impl Plane {
    /// Create a plane from a normal (normalised here) and an offset.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: (p2-p1) × (p3-p1).
    ///
    /// A degenerate triple yields the +Z plane through the origin; use
    /// [`Plane::try_from_points`] when that must be detected.
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Self {
        Self::try_from_points(p1, p2, p3).unwrap_or_default()
    }

    /// Like [`Plane::from_points`] but returns `None` when the points are
    /// collinear: the sine of the angle at `p1` is within [`tolerance`].
    ///
    /// The test is relative to the edge lengths, so tiny triangles keep
    /// their true plane.
    pub fn try_from_points(
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
    ) -> Option<Self> {
        let (e1, e2) = (p2 - p1, p3 - p1);
        let normal = e1.cross(&e2);
        // |e1 × e2| = |e1| |e2| sin θ; a zero-length edge gives 0 <= 0
        if normal.norm() <= tolerance() * e1.norm() * e2.norm() {
            return None;
        }

        let normal = normal.normalize();
        Some(Plane {
            normal,
            w: normal.dot(&p1.coords),
        })
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Negate both normal and offset, keeping the same set of points.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of `point` from the plane, positive on the normal side.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }
}
