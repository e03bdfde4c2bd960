//! Mesh assembly from a rectangular grid of surface samples.

use polyform_math::{Point3, Vec3};

use crate::{MeshError, Polyhedron, Result};

/// Build a mesh from an `R x C` grid of 3D surface samples.
///
/// Each grid cell becomes two triangles split along the cell diagonal from
/// `(r, c)` to `(r + 1, c + 1)`. With `thickness == 0.0` the result is the
/// open front sheet only. With a nonzero thickness each vertex is offset by
/// `thickness / 2` along its averaged vertex normal in both directions, and
/// the front and back sheets are stitched with four side walls into a
/// closed, outward-wound shell.
///
/// A 3x3 grid therefore yields 9 vertices and 8 faces when flat, and
/// 18 vertices and 32 faces when thickened.
///
/// # Errors
///
/// Fails on grids smaller than 2x2 or with rows of unequal length.
pub fn grid_surface(grid: &[Vec<Point3>], thickness: f64) -> Result<Polyhedron> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, |row| row.len());
    if rows < 2 || cols < 2 {
        return Err(MeshError::GridTooSmall { rows, cols });
    }
    for (index, row) in grid.iter().enumerate() {
        if row.len() != cols {
            return Err(MeshError::RaggedGrid {
                index,
                expected: cols,
                got: row.len(),
            });
        }
    }

    let count = rows * cols;
    let at = |r: usize, c: usize| r * cols + c;

    // Front sheet.
    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(2 * (rows - 1) * (cols - 1));
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let i0 = at(r, c);
            let i1 = at(r, c + 1);
            let i2 = at(r + 1, c + 1);
            let i3 = at(r + 1, c);
            faces.push(vec![i0, i1, i2]);
            faces.push(vec![i0, i2, i3]);
        }
    }

    let sheet: Vec<Point3> = grid.iter().flatten().copied().collect();
    if thickness == 0.0 {
        return Ok(Polyhedron::new(sheet, faces));
    }

    // Vertex normals: each triangle's unnormalized cross product accumulates
    // into its three corners.
    let mut normals = vec![Vec3::zeros(); count];
    for face in &faces {
        let (a, b, c) = (face[0], face[1], face[2]);
        let n = (sheet[b] - sheet[a]).cross(&(sheet[c] - sheet[a]));
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }

    let half = thickness / 2.0;
    let mut points = Vec::with_capacity(2 * count);
    for (p, n) in sheet.iter().zip(&normals) {
        points.push(p + n.normalize() * half);
    }
    for (p, n) in sheet.iter().zip(&normals) {
        points.push(p - n.normalize() * half);
    }

    // Back sheet: same cells, reversed winding, offset into the back half.
    let back: Vec<Vec<usize>> = faces
        .iter()
        .map(|f| vec![f[2] + count, f[1] + count, f[0] + count])
        .collect();
    faces.extend(back);

    // Side wall along row 0.
    for c in 0..cols - 1 {
        faces.push(vec![c, c + count, c + 1]);
        faces.push(vec![c + count, c + count + 1, c + 1]);
    }

    // Side walls along the first and last columns.
    let last_col = cols - 1;
    for r in 0..rows - 1 {
        let i0 = at(r + 1, last_col) + count;
        let i1 = at(r + 1, last_col);
        let i2 = at(r, last_col);
        let i3 = at(r, last_col) + count;
        faces.push(vec![i0, i1, i2]);
        faces.push(vec![i3, i0, i2]);

        let i0 = at(r, 0);
        let i1 = at(r + 1, 0);
        let i2 = at(r + 1, 0) + count;
        let i3 = at(r, 0) + count;
        faces.push(vec![i0, i1, i2]);
        faces.push(vec![i0, i2, i3]);
    }

    // Side wall along the last row.
    for i in count - cols..count - 1 {
        faces.push(vec![i + 1, i + count, i]);
        faces.push(vec![i + 1, i + count + 1, i + count]);
    }

    Ok(Polyhedron::new(points, faces))
}
