#![warn(missing_docs)]

//! Indexed polyhedral mesh construction for the polyform kernel.
//!
//! Every builder in this crate produces a [`Polyhedron`]: a plain vertex
//! list plus a face-index list, with faces wound counter-clockwise when
//! viewed from outside. Downstream solid-modeling layers consume that pair
//! as-is; nothing here owns external resources or performs I/O.
//!
//! # Example
//!
//! ```
//! use polyform_mesh::uv_sphere;
//!
//! let sphere = uv_sphere(10.0, 12, 6);
//! assert_eq!(sphere.points.len(), 62);
//! assert_eq!(sphere.faces.len(), 120);
//! ```

mod error;
mod grid;
mod parametric;
mod platonic;
mod polyhedron;
mod sweep;

pub use error::MeshError;
pub use grid::grid_surface;
pub use parametric::{star, superellipsoid, uv_sphere};
pub use platonic::{dodecahedron, hexahedron, icosahedron, octahedron, tetrahedron};
pub use polyhedron::Polyhedron;
pub use sweep::sweep;

/// Result type for mesh construction.
pub type Result<T> = std::result::Result<T, MeshError>;
