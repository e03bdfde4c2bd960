//! Subdivide an icosahedron toward a geodesic sphere.

use polyform::icosahedron;

fn main() {
    for detail in 0..4 {
        let ball = icosahedron(10.0, detail);
        println!(
            "detail {}: {} vertices, {} faces",
            detail,
            ball.points.len(),
            ball.faces.len()
        );
    }
}
