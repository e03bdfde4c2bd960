//! Thicken a rippled height field into a closed shell.

use polyform::{grid_surface, Point3};

fn ripple(x: f64, y: f64) -> Point3 {
    let n = (x * x + y * y).sqrt().to_radians();
    Point3::new(x, y, 30.0 * (n.cos() + (3.0 * n).cos()))
}

fn main() {
    let grid: Vec<Vec<Point3>> = (-20..20)
        .map(|xi| {
            (-20..20)
                .map(|yi| ripple(xi as f64 * 10.0, yi as f64 * 10.0))
                .collect()
        })
        .collect();

    let shell = grid_surface(&grid, 5.0).expect("grid is rectangular");
    println!(
        "ripple shell: {} vertices, {} faces",
        shell.points.len(),
        shell.faces.len()
    );
}
