#![warn(missing_docs)]

//! Convex hull construction for the polyform kernel.
//!
//! Two algorithms: [`hull2d`] builds the counter-clockwise boundary of a
//! planar point set with Andrew's monotone chain, and [`hull`] builds a
//! triangulated [`Polyhedron`](polyform_mesh::Polyhedron) over a spatial
//! point set with an incremental horizon-edge construction.
//!
//! Degeneracy tests compare cross and triple products against exactly
//! zero. Near-degenerate inputs may therefore produce structurally valid
//! but near-zero-area faces instead of an error; truly degenerate inputs
//! (coincident, collinear, or coplanar point sets) fail with a distinct
//! [`HullError`] per class.

mod error;
mod planar;
mod spatial;

pub use error::HullError;
pub use planar::hull2d;
pub use spatial::hull;

/// Result type for hull construction.
pub type Result<T> = std::result::Result<T, HullError>;
