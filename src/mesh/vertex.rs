//! Struct and functions for working with `Vertex`s from which `Polygon`s are composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector2, Vector3};

/// Linear RGBA color carried per vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: Real,
    pub g: Real,
    pub b: Real,
    pub a: Real,
}

impl Color {
    /// Opaque white, substituted when a source mesh has no colors.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: Real, g: Real, b: Real, a: Real) -> Self {
        Color { r, g, b, a }
    }

    /// Channel-wise linear interpolation, `t = 0` yields `self`.
    pub fn lerp(&self, other: &Color, t: Real) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A vertex of a polygon, holding position, normal, texture coordinate and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Vector2<Real>,
    pub color: Color,
}

impl Vertex {
    /// Create a new [`Vertex`] with a zero uv and an opaque white color.
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non‑unit) normal; it is **copied verbatim**.
    ///
    /// Non-finite components are replaced with `0.0`.
    ///
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use csgmodel::{float_types::Real, mesh::vertex::{Color, Vertex}};
    /// let v = Vertex::new(Point3::new(1.0, Real::NAN, 3.0), Vector3::z());
    /// assert_eq!(v.pos, Point3::new(1.0, 0.0, 3.0));
    /// assert_eq!(v.color, Color::WHITE);
    /// ```
    #[inline]
    pub fn new(mut pos: Point3<Real>, mut normal: Vector3<Real>) -> Self {
        for c in pos.coords.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }
        for c in normal.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
            }
        }

        Vertex {
            pos,
            normal,
            uv: Vector2::zeros(),
            color: Color::WHITE,
        }
    }

    #[inline]
    pub const fn with_uv(mut self, uv: Vector2<Real>) -> Self {
        self.uv = uv;
        self
    }

    #[inline]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Flip vertex normal in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Copy of this vertex with the normal negated.
    pub fn flipped(&self) -> Vertex {
        let mut v = *self;
        v.flip();
        v
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Every attribute is interpolated; normals are *not* renormalised.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        Vertex {
            pos: self.pos + (other.pos - self.pos) * t,
            normal: self.normal + (other.normal - self.normal) * t,
            uv: self.uv + (other.uv - self.uv) * t,
            color: self.color.lerp(&other.color, t),
        }
    }
}
