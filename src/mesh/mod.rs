//! Geometry primitives shared by the model and the boolean engine:
//! [`Vertex`](vertex::Vertex), [`Plane`](plane::Plane) and [`Polygon`](polygon::Polygon).

pub mod plane;
pub mod polygon;
pub mod vertex;
