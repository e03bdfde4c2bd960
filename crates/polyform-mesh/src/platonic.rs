//! Platonic solids with optional recursive face subdivision.
//!
//! Each generator starts from the classic unit vertex/face tables and
//! projects every vertex onto the sphere of the requested radius. A
//! `detail` greater than zero subdivides each triangular face into a
//! `(detail + 1)^2` sub-triangle grid by linear interpolation and
//! re-projects the new vertices onto the same sphere, trending toward a
//! geodesic ball.

use polyform_math::{Point3, Vec3};

use crate::Polyhedron;

/// Build a tetrahedron inscribed in the sphere of the given radius.
pub fn tetrahedron(radius: f64, detail: usize) -> Polyhedron {
    let vectors = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ];
    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    divide_project(&vectors, &faces, radius, detail)
}

/// Build a hexahedron (cube) inscribed in the sphere of the given radius.
pub fn hexahedron(radius: f64, detail: usize) -> Polyhedron {
    let t = 1.0 / 3.0_f64.sqrt();
    let vectors = [
        Vec3::new(t, t, t),
        Vec3::new(-t, t, t),
        Vec3::new(-t, -t, t),
        Vec3::new(t, -t, t),
        Vec3::new(t, t, -t),
        Vec3::new(-t, t, -t),
        Vec3::new(-t, -t, -t),
        Vec3::new(t, -t, -t),
    ];
    let faces = [
        [3, 7, 0],
        [7, 4, 0],
        [0, 4, 1],
        [4, 5, 1],
        [5, 6, 2],
        [1, 5, 2],
        [6, 7, 3],
        [2, 6, 3],
        [2, 3, 0],
        [1, 2, 0],
        [7, 6, 5],
        [4, 7, 5],
    ];
    divide_project(&vectors, &faces, radius, detail)
}

/// Build an octahedron inscribed in the sphere of the given radius.
pub fn octahedron(radius: f64, detail: usize) -> Polyhedron {
    let vectors = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    divide_project(&vectors, &faces, radius, detail)
}

/// Build a dodecahedron (triangulated) inscribed in the sphere of the
/// given radius.
pub fn dodecahedron(radius: f64, detail: usize) -> Polyhedron {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let r = 1.0 / t;
    let vectors = [
        // (±1, ±1, ±1)
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        // (0, ±1/φ, ±φ)
        Vec3::new(0.0, -r, -t),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, r, -t),
        Vec3::new(0.0, r, t),
        // (±1/φ, ±φ, 0)
        Vec3::new(-r, -t, 0.0),
        Vec3::new(-r, t, 0.0),
        Vec3::new(r, -t, 0.0),
        Vec3::new(r, t, 0.0),
        // (±φ, 0, ±1/φ)
        Vec3::new(-t, 0.0, -r),
        Vec3::new(t, 0.0, -r),
        Vec3::new(-t, 0.0, r),
        Vec3::new(t, 0.0, r),
    ];
    let faces = [
        [3, 11, 7],
        [3, 7, 15],
        [3, 15, 13],
        [7, 19, 17],
        [7, 17, 6],
        [7, 6, 15],
        [17, 4, 8],
        [17, 8, 10],
        [17, 10, 6],
        [8, 0, 16],
        [8, 16, 2],
        [8, 2, 10],
        [0, 12, 1],
        [0, 1, 18],
        [0, 18, 16],
        [6, 10, 2],
        [6, 2, 13],
        [6, 13, 15],
        [2, 16, 18],
        [2, 18, 3],
        [2, 3, 13],
        [18, 1, 9],
        [18, 9, 11],
        [18, 11, 3],
        [4, 14, 12],
        [4, 12, 0],
        [4, 0, 8],
        [11, 9, 5],
        [11, 5, 19],
        [11, 19, 7],
        [19, 5, 14],
        [19, 14, 4],
        [19, 4, 17],
        [1, 12, 14],
        [1, 14, 5],
        [1, 5, 9],
    ];
    divide_project(&vectors, &faces, radius, detail)
}

/// Build an icosahedron inscribed in the sphere of the given radius.
pub fn icosahedron(radius: f64, detail: usize) -> Polyhedron {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let vectors = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    divide_project(&vectors, &faces, radius, detail)
}

fn project(v: &Vec3, radius: f64) -> Point3 {
    Point3::from(v / v.norm() * radius)
}

/// Subdivide each triangular face into `(detail + 1)^2` sub-triangles by
/// linear interpolation and push every vertex onto the circumscribing
/// sphere. Sub-grids are emitted per face, so vertices along shared edges
/// are duplicated rather than welded.
fn divide_project(
    vectors: &[Vec3],
    faces: &[[usize; 3]],
    radius: f64,
    detail: usize,
) -> Polyhedron {
    if detail == 0 {
        return Polyhedron::new(
            vectors.iter().map(|v| project(v, radius)).collect(),
            faces.iter().map(|f| f.to_vec()).collect(),
        );
    }

    let rows = detail + 1;
    let mut points = Vec::new();
    let mut out_faces = Vec::new();

    for face in faces {
        let base = points.len();
        let v0 = vectors[face[0]];
        let dc = (vectors[face[1]] - v0) / rows as f64;
        let dr = (vectors[face[2]] - v0) / rows as f64;

        // Triangular grid, row ri holds rows - ri + 1 vertices.
        let mut row_base = Vec::with_capacity(rows + 1);
        let mut acc = 0;
        for ri in 0..=rows {
            row_base.push(acc);
            acc += rows - ri + 1;
        }
        for ri in 0..=rows {
            for ci in 0..=(rows - ri) {
                let v = v0 + dc * ci as f64 + dr * ri as f64;
                points.push(project(&v, radius));
            }
        }

        let idx = |ci: usize, ri: usize| base + row_base[ri] + ci;
        for ri in 0..rows {
            let last = rows - ri - 1;
            for ci in 0..(rows - ri) {
                out_faces.push(vec![idx(ci, ri), idx(ci + 1, ri), idx(ci, ri + 1)]);
                if ci != last {
                    out_faces.push(vec![
                        idx(ci + 1, ri),
                        idx(ci + 1, ri + 1),
                        idx(ci, ri + 1),
                    ]);
                }
            }
        }
    }

    Polyhedron::new(points, out_faces)
}
