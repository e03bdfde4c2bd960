//! Planar convex hull via Andrew's monotone chain.

use polyform_math::Point2;

use crate::{HullError, Result};

/// 2D cross product of `(a - o)` and `(b - o)`; positive for a left turn.
fn cross(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a - o).perp(&(b - o))
}

/// Build the convex hull boundary of a planar point set.
///
/// The returned points are ordered counter-clockwise, starting from the
/// lexicographically smallest point, without repeating the start point.
/// Collinear boundary points are excluded: only strictly turning vertices
/// remain. Input order is irrelevant.
///
/// # Errors
///
/// Fails with [`HullError::TooFewPoints`] when the input contains fewer
/// than two distinct points.
pub fn hull2d(points: &[Point2]) -> Result<Vec<Point2>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let distinct = match pts.as_slice() {
        [] => 0,
        rest => 1 + rest.windows(2).filter(|w| w[0] != w[1]).count(),
    };
    if distinct < 2 {
        return Err(HullError::TooFewPoints {
            needed: 2,
            got: distinct,
        });
    }

    let mut chain: Vec<Point2> = Vec::with_capacity(pts.len() + 1);

    // Lower chain, left to right.
    for &p in &pts {
        while chain.len() >= 2 && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], &p) <= 0.0
        {
            chain.pop();
        }
        chain.push(p);
    }

    // Upper chain, right to left; never pop below the lower chain.
    let upper_start = chain.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while chain.len() >= upper_start
            && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], &p) <= 0.0
        {
            chain.pop();
        }
        chain.push(p);
    }

    // The upper chain ends back at the start point; drop the duplicate.
    chain.pop();
    Ok(chain)
}
