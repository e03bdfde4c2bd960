//! Closed-form parametric generators: UV sphere, star, superellipsoid.

use std::f64::consts::{PI, TAU};

use polyform_math::Point3;

use crate::{sweep, Polyhedron, Result};

/// Build a UV sphere from latitude rings plus two pole vertices.
///
/// `width_segments` is the number of horizontal segments per ring,
/// `height_segments` the number of vertical segments. The rings form quad
/// bands split into triangles, and the poles are closed with triangle fans.
///
/// # Panics
///
/// Panics if `width_segments < 3` or `height_segments < 2`.
pub fn uv_sphere(radius: f64, width_segments: usize, height_segments: usize) -> Polyhedron {
    assert!(width_segments >= 3, "uv_sphere needs width_segments >= 3");
    assert!(height_segments >= 2, "uv_sphere needs height_segments >= 2");

    let theta_step = TAU / width_segments as f64;
    let phi_step = PI / height_segments as f64;

    // Rings from just above the south pole up to just below the north pole.
    let mut points = Vec::with_capacity((height_segments - 1) * width_segments + 2);
    for p in (1..height_segments).rev() {
        let phi = p as f64 * phi_step;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for t in 0..width_segments {
            let theta = t as f64 * theta_step;
            points.push(Point3::new(
                radius * sin_phi * theta.cos(),
                radius * sin_phi * theta.sin(),
                radius * cos_phi,
            ));
        }
    }
    points.push(Point3::new(0.0, 0.0, -radius));
    points.push(Point3::new(0.0, 0.0, radius));

    let w = width_segments;
    let bands = height_segments - 2;
    let wrap = w - 1;

    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(2 * w * (height_segments - 1));
    for p in 0..bands {
        for t in 0..wrap {
            let i0 = t + w * p;
            let i1 = (t + 1) + w * p;
            let i2 = (t + 1) + w * (p + 1);
            let i3 = t + w * (p + 1);
            faces.push(vec![i0, i1, i2]);
            faces.push(vec![i0, i2, i3]);
        }
        let i0 = wrap + w * p;
        let i1 = w * p;
        let i2 = w * (p + 1);
        let i3 = wrap + w * (p + 1);
        faces.push(vec![i0, i1, i2]);
        faces.push(vec![i0, i2, i3]);
    }

    // South pole fan.
    let bottom = points.len() - 2;
    for t in 0..wrap {
        faces.push(vec![bottom, t + 1, t]);
    }
    faces.push(vec![bottom, 0, wrap]);

    // North pole fan.
    let top = points.len() - 1;
    let last_ring = bands * w;
    for t in 0..wrap {
        faces.push(vec![top, last_ring + t, last_ring + t + 1]);
    }
    faces.push(vec![top, last_ring + wrap, last_ring]);

    Polyhedron::new(points, faces)
}

/// Build a star: `n` bursts of alternating outer/inner rim points joined to
/// an apex above and a base point below the rim plane.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn star(outer_radius: f64, inner_radius: f64, height: f64, n: usize) -> Polyhedron {
    assert!(n >= 2, "star needs at least 2 bursts");

    let up = TAU / 4.0;
    let theta_step = TAU / n as f64;
    let half_step = theta_step / 2.0;

    let mut points = Vec::with_capacity(2 * n + 2);
    for i in 0..n {
        let a = theta_step * i as f64 + up;
        points.push(Point3::new(
            outer_radius * a.cos(),
            outer_radius * a.sin(),
            0.0,
        ));
        points.push(Point3::new(
            inner_radius * (a + half_step).cos(),
            inner_radius * (a + half_step).sin(),
            0.0,
        ));
    }
    let half_height = height / 2.0;
    points.push(Point3::new(0.0, 0.0, half_height));
    points.push(Point3::new(0.0, 0.0, -half_height));

    let rim = 2 * n;
    let mut faces = Vec::with_capacity(2 * rim);
    for i in 0..rim {
        let j = (i + 1) % rim;
        faces.push(vec![i, j, rim]);
        faces.push(vec![rim + 1, j, i]);
    }

    Polyhedron::new(points, faces)
}

/// Build a superellipsoid with east-west exponent `e` and north-south
/// exponent `n`, sampled into latitude sections and lofted with polygon
/// caps at the poles.
///
/// `e = n = 1` gives a coarse sphere; exponents below 1 bulge toward a
/// box, above 1 pinch toward an octahedron.
///
/// # Errors
///
/// Fails if `width_segments < 3` or `height_segments < 1` (surfaced through
/// the loft's profile validation).
pub fn superellipsoid(
    e: f64,
    n: f64,
    width_segments: usize,
    height_segments: usize,
) -> Result<Polyhedron> {
    let ring_count = height_segments + 2;
    let theta_step = TAU / width_segments as f64;
    let phi_step = PI / ring_count as f64;

    let mut sections = Vec::with_capacity(ring_count - 1);
    for p in 1..ring_count {
        let phi = -PI / 2.0 + p as f64 * phi_step;
        let mut section = Vec::with_capacity(width_segments);
        for t in 0..width_segments {
            let theta = t as f64 * theta_step;
            section.push(Point3::new(
                signed_pow(phi.cos(), n) * signed_pow(theta.cos(), e),
                signed_pow(phi.cos(), n) * signed_pow(theta.sin(), e),
                signed_pow(phi.sin(), n),
            ));
        }
        sections.push(section);
    }

    sweep(&sections, None)
}

/// Signum-preserving power: `sgn(x) * |x|^m`, with `0^m == 0`.
fn signed_pow(x: f64, m: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum() * x.abs().powf(m)
    }
}
