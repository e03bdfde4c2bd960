//! Sweep a rotating rectangular profile into a Möbius band.
//!
//! Each section is the same rectangle pushed out to the ring radius and
//! given half a turn over the full revolution; `close_idx = Some(2)`
//! joins the last section back to the first with the matching index
//! rotation.

use std::f64::consts::TAU;

use polyform::{sweep, Point3, Transform};

fn main() {
    let profile = vec![
        Point3::new(10.0, -1.0, 0.0),
        Point3::new(10.0, 1.0, 0.0),
        Point3::new(-10.0, 1.0, 0.0),
        Point3::new(-10.0, -1.0, 0.0),
    ];

    let radius = 20.0;
    let frags = 24;
    let step = TAU / frags as f64;

    let mut profiles = Vec::with_capacity(frags);
    for i in 0..frags {
        let angle = i as f64 * step;
        let m = Transform::rotation_z(angle)
            .compose(&Transform::translation(radius, 0.0, 0.0))
            .compose(&Transform::rotation_x(TAU / 4.0))
            .compose(&Transform::rotation_z(angle / 2.0));
        profiles.push(m.apply_points(&profile));
    }

    let strip = sweep(&profiles, Some(2)).expect("all sections share one arity");
    println!(
        "mobius strip: {} vertices, {} faces",
        strip.points.len(),
        strip.faces.len()
    );
}
