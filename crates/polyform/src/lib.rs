#![warn(missing_docs)]

//! polyform: a small computational-geometry kernel for indexed meshes.
//!
//! The kernel does three things:
//!
//! - builds planar and spatial **convex hulls** ([`hull2d`], [`hull`]);
//! - generates **indexed polyhedral meshes**: parametric solids
//!   ([`uv_sphere`], the Platonic solids, [`star`], [`superellipsoid`]),
//!   thickened grid surfaces ([`grid_surface`]), and lofted sweeps
//!   ([`sweep`]);
//! - positions meshes with a 4x4 affine [`Transform`].
//!
//! Everything is a pure function over immutable inputs producing a
//! [`Polyhedron`]: a vertex list plus an outward-wound face-index list
//! that downstream solid-modeling layers can consume directly.
//! Independent calls are safe to run in parallel; the kernel holds no
//! shared state.
//!
//! # Example
//!
//! ```
//! use polyform::{hull, uv_sphere, Transform};
//!
//! let sphere = uv_sphere(10.0, 8, 4).transformed(&Transform::translation(5.0, 0.0, 0.0));
//! let wrapped = hull(&sphere.points).unwrap();
//! assert_eq!(wrapped.points.len(), sphere.points.len());
//! ```

pub use polyform_hull::{hull, hull2d, HullError};
pub use polyform_math::{Point2, Point3, Transform, Vec2, Vec3};
pub use polyform_mesh::{
    dodecahedron, grid_surface, hexahedron, icosahedron, octahedron, star, superellipsoid, sweep,
    tetrahedron, uv_sphere, MeshError, Polyhedron,
};
