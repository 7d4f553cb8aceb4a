//! Procedural geometry generation for celestial bodies.
//!
//! Produces renderer-agnostic vertex and index buffers: UV-sphere tessellation
//! (planets, stars), flat ring annuli (planetary rings), and spiral-arm point
//! clouds (nebulae). All generators are pure functions from parameters to a
//! [`Mesh`]; invalid parameters are rejected up front with [`MeshError`] rather
//! than silently producing degenerate or non-finite geometry.

mod error;
mod ring;
mod sphere;
mod spiral;
mod vertex;

pub use error::MeshError;
pub use ring::generate_ring;
pub use sphere::generate_uv_sphere;
pub use spiral::{SpiralCloudParams, generate_spiral_cloud};
pub use vertex::{Mesh, Primitive, Vertex};
