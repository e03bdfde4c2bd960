//! Error types for hull construction.

use thiserror::Error;

/// Errors that can occur while building a convex hull.
///
/// The degeneracy variants are raised as soon as the tetrahedron seeding
/// scan exhausts the point list without finding a qualifying point; they
/// are never silently recovered.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Not enough (distinct) input points for the requested hull.
    #[error("need at least {needed} distinct points, got {got}")]
    TooFewPoints {
        /// Minimum number of points the hull requires.
        needed: usize,
        /// Number of points supplied.
        got: usize,
    },

    /// Every input point is the same point.
    #[error("all points coincide")]
    CoincidentPoints,

    /// All input points lie on one line.
    #[error("all points are collinear")]
    CollinearPoints,

    /// All input points lie in one plane.
    #[error("all points are coplanar")]
    CoplanarPoints,
}
