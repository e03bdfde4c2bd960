//! Lofting an ordered list of cross-section profiles into a solid mesh.

use polyform_math::Point3;

use crate::{MeshError, Polyhedron, Result};

/// Loft consecutive profile sections into a closed mesh.
///
/// All profiles must have the same number of points (at least three), and
/// consecutive sections are joined by a ring of two triangles per edge.
///
/// With `close_idx = None` the two open ends are capped with flat polygon
/// faces: the first section reversed, the last as-is. With
/// `close_idx = Some(k)` the last section is instead joined back to the
/// first with an index rotation of `k`, which supports twisted closures
/// such as a Mobius strip (`k` is taken modulo the profile length).
///
/// # Errors
///
/// Fails on fewer than two profiles, profiles of unequal length, or
/// profiles with fewer than three points.
pub fn sweep(profiles: &[Vec<Point3>], close_idx: Option<usize>) -> Result<Polyhedron> {
    if profiles.len() < 2 {
        return Err(MeshError::TooFewProfiles(profiles.len()));
    }
    let arity = profiles[0].len();
    if arity < 3 {
        return Err(MeshError::ProfileTooSmall(arity));
    }
    for (index, profile) in profiles.iter().enumerate().skip(1) {
        if profile.len() != arity {
            return Err(MeshError::MismatchedProfiles {
                index,
                expected: arity,
                got: profile.len(),
            });
        }
    }

    let sections = profiles.len();
    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(2 * arity * sections);

    // Tube walls between consecutive sections.
    for s in 0..sections - 1 {
        let base = s * arity;
        for i in 0..arity {
            let right = (i + 1) % arity;
            faces.push(vec![base + i, base + right, base + arity + i]);
            faces.push(vec![base + right, base + arity + right, base + arity + i]);
        }
    }

    match close_idx {
        None => {
            // Polygon caps: first section reversed, last section as-is.
            faces.push((0..arity).rev().collect());
            faces.push((arity * (sections - 1)..arity * sections).collect());
        }
        Some(k) => {
            // Join the last section back to the first, rotated by k.
            let base = arity * (sections - 1);
            for i in 0..arity {
                let l0 = base + (k + i) % arity;
                let l1 = base + (k + i + 1) % arity;
                let f1 = (i + 1) % arity;
                faces.push(vec![l0, l1, i]);
                faces.push(vec![l1, f1, i]);
            }
        }
    }

    let points = profiles.iter().flatten().copied().collect();
    Ok(Polyhedron::new(points, faces))
}
