//! The indexed mesh value type shared by all builders.

use polyform_math::{Point3, Transform};

/// An indexed polyhedral mesh: a vertex list plus a face-index list.
///
/// Each face is an ordered list of at least three indices into `points`.
/// Traversing a face's indices in order yields a counter-clockwise winding
/// when viewed from outside the solid; the builders guarantee this, it is
/// not checked at runtime.
///
/// `Polyhedron` is a pure value type. Transforming one produces a new
/// value; nothing mutates a `Polyhedron` in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    /// Vertex positions.
    pub points: Vec<Point3>,
    /// Face-index tuples, outward-wound.
    pub faces: Vec<Vec<usize>>,
}

impl Polyhedron {
    /// Pair a point list with a face-index list.
    pub fn new(points: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        Self { points, faces }
    }

    /// Iterate all directed edges `(from, to)` over all faces, including
    /// the wrap-around edge closing each face.
    ///
    /// In a closed mesh every directed edge appears exactly once and has
    /// exactly one twin running the opposite way.
    pub fn directed_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces.iter().flat_map(|face| {
            (0..face.len()).map(move |i| (face[i], face[(i + 1) % face.len()]))
        })
    }

    /// Apply a transform to every vertex, returning a new polyhedron with
    /// the same face-index list.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            points: transform.apply_points(&self.points),
            faces: self.faces.clone(),
        }
    }
}
