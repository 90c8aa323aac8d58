//! The geometric data layer of a BSP based **Constructive Solid Geometry (CSG)** toolkit.
//!
//! A renderable, indexed triangle mesh ([`RenderMesh`]) is imported into a
//! [`Model`], exported as a soup of [`Polygon`]s for a boolean engine, and the
//! engine's output is reassembled into a `Model` and written back as a mesh.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **cli**: build the `csgmodel` demo binary (installs a `tracing-subscriber`)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod model;
pub mod operation;
pub mod render_mesh;
pub mod transform;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MeshError;
pub use mesh::{plane::Plane, polygon::Polygon, vertex::{Color, Vertex}};
pub use model::Model;
pub use operation::{BooleanOp, Operand, PolygonEngine, perform};
pub use render_mesh::RenderMesh;
pub use transform::Transform;
