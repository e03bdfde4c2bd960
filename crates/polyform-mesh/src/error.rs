//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while building a mesh.
///
/// These are caller errors: every variant is a deterministic function of
/// the input and is surfaced immediately, never silently repaired.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// A sweep needs at least two profile sections.
    #[error("sweep needs at least 2 profiles, got {0}")]
    TooFewProfiles(usize),

    /// Profile sections must all have the same number of points.
    #[error("profile {index} has {got} points, expected {expected}")]
    MismatchedProfiles {
        /// Index of the offending profile.
        index: usize,
        /// Point count of the first profile.
        expected: usize,
        /// Point count of the offending profile.
        got: usize,
    },

    /// A profile section needs at least three points to bound a face.
    #[error("profiles need at least 3 points, got {0}")]
    ProfileTooSmall(usize),

    /// A grid surface needs at least a 2x2 sample grid.
    #[error("grid must be at least 2x2, got {rows}x{cols}")]
    GridTooSmall {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the first row.
        cols: usize,
    },

    /// All grid rows must have the same length.
    #[error("grid row {index} has {got} points, expected {expected}")]
    RaggedGrid {
        /// Index of the offending row.
        index: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },
}
