//! Spatial convex hull via incremental horizon-edge construction.

use std::collections::BTreeSet;

use polyform_math::{Point3, Vec3};
use polyform_mesh::Polyhedron;

use crate::{HullError, Result};

/// Build the convex hull of a spatial point set as a triangulated
/// [`Polyhedron`].
///
/// The output vertices are exactly the input points on the hull boundary
/// (interior points are dropped and faces renumbered), and every face is
/// a triangle wound outward. Points are processed in lexicographic order,
/// so the result is deterministic regardless of input order.
///
/// The per-point face classification uses a dense `n x n` directed-edge
/// table, giving `O(n^2)` work per inserted point. That is fine for the
/// point counts this kernel targets (tens to low hundreds); callers with
/// larger sets should bucket their points first.
///
/// # Errors
///
/// Fails with [`HullError::TooFewPoints`] for fewer than four points, and
/// with a distinct degeneracy error when no seed tetrahedron exists:
/// [`HullError::CoincidentPoints`], [`HullError::CollinearPoints`], or
/// [`HullError::CoplanarPoints`].
pub fn hull(points: &[Point3]) -> Result<Polyhedron> {
    if points.len() < 4 {
        return Err(HullError::TooFewPoints {
            needed: 4,
            got: points.len(),
        });
    }

    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.total_cmp(&b.x)
            .then(a.y.total_cmp(&b.y))
            .then(a.z.total_cmp(&b.z))
    });
    let n = pts.len();

    let (seed, mut faces) = seed_tetrahedron(&pts)?;

    // Dense directed-edge classification table: 0 unseen, +1 convex,
    // -1 concave. Allocated once per call, indexed by [from * n + to].
    let mut edges = vec![0_i8; n * n];

    for i in 0..n {
        if seed.contains(&i) {
            continue;
        }
        let sides: Vec<i8> = faces.iter().map(|f| face_side(&pts, &pts[i], f)).collect();
        for (f, &side) in faces.iter().zip(&sides) {
            edges[f[0] * n + f[1]] = side;
            edges[f[1] * n + f[2]] = side;
            edges[f[2] * n + f[0]] = side;
        }
        faces = next_faces(i, &faces, &sides, &edges, n);
    }

    // Only hull-boundary vertices survive; renumber by index.
    let used: BTreeSet<usize> = faces.iter().flat_map(|f| f.iter().copied()).collect();
    let mut remap = vec![0_usize; n];
    let mut hull_points = Vec::with_capacity(used.len());
    for (new, &old) in used.iter().enumerate() {
        remap[old] = new;
        hull_points.push(pts[old]);
    }
    let hull_faces = faces
        .iter()
        .map(|f| f.iter().map(|&v| remap[v]).collect())
        .collect();

    Ok(Polyhedron::new(hull_points, hull_faces))
}

/// Find the first four sorted points spanning a tetrahedron and return its
/// four outward-wound faces.
fn seed_tetrahedron(pts: &[Point3]) -> Result<([usize; 4], Vec<[usize; 3]>)> {
    let v0 = 0;
    let v1 = (1..pts.len())
        .find(|&j| (pts[j] - pts[v0]).norm() != 0.0)
        .ok_or(HullError::CoincidentPoints)?;
    let v2 = (v1 + 1..pts.len())
        .find(|&j| (pts[v1] - pts[v0]).cross(&(pts[j] - pts[v0])).norm() != 0.0)
        .ok_or(HullError::CollinearPoints)?;

    let normal = (pts[v1] - pts[v0]).cross(&(pts[v2] - pts[v0]));
    let v3 = (v2 + 1..pts.len())
        .find(|&j| normal.dot(&(pts[j] - pts[v0])) != 0.0)
        .ok_or(HullError::CoplanarPoints)?;

    // Orient the four faces so their normals point away from the
    // opposite vertex.
    let faces = if normal.dot(&(pts[v3] - pts[v0])) > 0.0 {
        vec![[v1, v0, v2], [v0, v1, v3], [v1, v2, v3], [v2, v0, v3]]
    } else {
        vec![[v0, v1, v2], [v1, v0, v3], [v2, v1, v3], [v0, v2, v3]]
    };
    Ok(([v0, v1, v2, v3], faces))
}

/// Classify a face against a point: +1 when the point is on the inner
/// side (face stays), -1 when the face is visible from the point and must
/// be replaced, 0 when coplanar.
fn face_side(pts: &[Point3], p: &Point3, face: &[usize; 3]) -> i8 {
    let normal = face_normal(pts, face);
    let d = (pts[face[0]] - p).dot(&normal);
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

fn face_normal(pts: &[Point3], face: &[usize; 3]) -> Vec3 {
    (pts[face[1]] - pts[face[0]]).cross(&(pts[face[2]] - pts[face[0]]))
}

/// Keep the faces the new point cannot see, and bridge every horizon edge
/// (concave in one direction but not mirrored concave in the other) to
/// the new point.
fn next_faces(
    i: usize,
    current: &[[usize; 3]],
    sides: &[i8],
    edges: &[i8],
    n: usize,
) -> Vec<[usize; 3]> {
    let mut faces: Vec<[usize; 3]> = Vec::with_capacity(current.len());
    for (f, &side) in current.iter().zip(sides) {
        if side >= 0 {
            faces.push(*f);
        }
    }

    for &[v0, v1, v2] in current {
        for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
            if edges[a * n + b] < 0 && edges[a * n + b] != edges[b * n + a] {
                faces.push([a, b, i]);
            }
        }
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn assert_closed(poly: &Polyhedron) {
        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in poly.directed_edges() {
            *counts.entry(edge).or_insert(0) += 1;
        }
        for (&(a, b), &c) in &counts {
            assert_eq!(c, 1, "directed edge ({a}, {b}) repeated");
            assert_eq!(
                counts.get(&(b, a)),
                Some(&1),
                "directed edge ({a}, {b}) has no twin"
            );
        }
    }

    fn assert_convex(poly: &Polyhedron, inputs: &[Point3]) {
        for face in &poly.faces {
            let face = [face[0], face[1], face[2]];
            let normal = face_normal(&poly.points, &face);
            for q in inputs {
                let d = (poly.points[face[0]] - q).dot(&normal);
                assert!(d > -1e-9, "input point {q} outside a hull face");
            }
        }
    }

    #[test]
    fn test_seven_point_regression() {
        let points = vec![
            p(50.0, 50.0, 50.0),
            p(50.0, 50.0, 0.0),
            p(-50.0, 50.0, 0.0),
            p(-50.0, -50.0, 0.0),
            p(50.0, -50.0, 0.0),
            p(0.0, 0.0, 50.0),
            p(0.0, 0.0, -50.0),
        ];
        let h = hull(&points).unwrap();
        assert_eq!(h.points.len(), 7);
        assert_eq!(h.faces.len(), 10);
        assert_closed(&h);
        assert_convex(&h, &points);
    }

    #[test]
    fn test_interior_points_are_dropped() {
        let mut points = vec![
            p(0.0, 0.0, 0.0),
            p(10.0, 0.0, 0.0),
            p(0.0, 10.0, 0.0),
            p(0.0, 0.0, 10.0),
            p(10.0, 10.0, 0.0),
            p(10.0, 0.0, 10.0),
            p(0.0, 10.0, 10.0),
            p(10.0, 10.0, 10.0),
        ];
        points.push(p(5.0, 5.0, 5.0));
        points.push(p(2.0, 3.0, 4.0));
        let h = hull(&points).unwrap();
        assert_eq!(h.points.len(), 8);
        assert_eq!(h.faces.len(), 12);
        assert!(!h.points.contains(&p(5.0, 5.0, 5.0)));
        assert_closed(&h);
        assert_convex(&h, &points);
    }

    #[test]
    fn test_tetrahedron_is_its_own_hull() {
        let points = vec![
            p(5.0, -5.0, -5.0),
            p(-5.0, 5.0, -5.0),
            p(5.0, 5.0, 5.0),
            p(-5.0, -5.0, 5.0),
        ];
        let h = hull(&points).unwrap();
        assert_eq!(h.points.len(), 4);
        assert_eq!(h.faces.len(), 4);
        assert_closed(&h);
        assert_convex(&h, &points);
    }

    #[test]
    fn test_faces_wound_outward() {
        let points = vec![
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(0.0, 4.0, 0.0),
            p(0.0, 0.0, 4.0),
            p(4.0, 4.0, 4.0),
        ];
        let h = hull(&points).unwrap();
        let centroid = h
            .points
            .iter()
            .fold(Vec3::zeros(), |acc, q| acc + q.coords)
            / h.points.len() as f64;
        for face in &h.faces {
            let face = [face[0], face[1], face[2]];
            let normal = face_normal(&h.points, &face);
            let outward = h.points[face[0]].coords - centroid;
            assert!(normal.dot(&outward) > 0.0, "inward-wound hull face");
        }
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let mut points = vec![
            p(1.0, 2.0, 0.5),
            p(-3.0, 0.0, 1.0),
            p(2.0, -2.0, -1.0),
            p(0.0, 3.0, 2.0),
            p(-1.0, -1.0, 3.0),
            p(0.5, 0.5, 0.5),
        ];
        let forward = hull(&points).unwrap();
        points.reverse();
        let backward = hull(&points).unwrap();
        assert_eq!(forward.points, backward.points);
        assert_eq!(forward.faces, backward.faces);
    }

    #[test]
    fn test_too_few_points() {
        let points = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        assert_eq!(
            hull(&points),
            Err(HullError::TooFewPoints { needed: 4, got: 3 })
        );
    }

    #[test]
    fn test_coincident_points() {
        let points = vec![p(1.0, 1.0, 1.0); 5];
        assert_eq!(hull(&points), Err(HullError::CoincidentPoints));
    }

    #[test]
    fn test_collinear_points() {
        let points: Vec<_> = (0..5).map(|i| p(i as f64, 2.0 * i as f64, 0.0)).collect();
        assert_eq!(hull(&points), Err(HullError::CollinearPoints));
    }

    #[test]
    fn test_coplanar_points() {
        let points = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.5, 0.7, 0.0),
        ];
        assert_eq!(hull(&points), Err(HullError::CoplanarPoints));
    }
}
