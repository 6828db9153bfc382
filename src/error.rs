//! Error types for uvtransfer.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`UvError`].
pub type Result<T> = std::result::Result<T, UvError>;

/// Errors that can occur while building meshes or transferring UVs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UvError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// The mesh has more elements than its index width can address.
    #[error("{count} {kind} exceed the index capacity of {capacity}")]
    TooManyElements {
        /// Element kind ("vertices" or "loops").
        kind: &'static str,
        /// Number of elements requested.
        count: usize,
        /// Largest count the index type supports.
        capacity: usize,
    },

    /// A face has fewer than three corners or repeats a vertex.
    #[error("face {face} is degenerate (fewer than 3 corners or repeated vertex)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// No faces are selected.
    #[error("no faces are selected")]
    NoSelection,

    /// The mesh has no UV layer and none was requested by name.
    #[error("object must have at least one UV map")]
    NoAttributeLayer,

    /// A UV layer was requested by a name the mesh does not have.
    #[error("UV map '{name}' not found")]
    LayerNotFound {
        /// The requested layer name.
        name: String,
    },

    /// Paste was attempted before anything was copied.
    #[error("need to copy UV first")]
    NothingCopied,

    /// Strict pairing requires equal face counts.
    #[error("number of selected faces is different from copied (src:{src}, dest:{dest})")]
    CountMismatch {
        /// Number of copied faces.
        src: usize,
        /// Number of destination faces.
        dest: usize,
    },

    /// A destination face has a different corner count than its source bundle.
    #[error("face {face} has {actual} corners but the copied face has {expected}")]
    FaceSizeMismatch {
        /// The destination face index.
        face: usize,
        /// Corner count of the copied bundle.
        expected: usize,
        /// Corner count of the destination face.
        actual: usize,
    },

    /// The alignment reference edge has zero length.
    #[error("reference edge of copied face {face} has zero length")]
    DegenerateEdge {
        /// Position of the reference face in the capture set.
        face: usize,
    },

    /// No active object carries mesh data.
    #[error("no active mesh object")]
    NoActiveObject,

    /// A face bundle was assembled from sequences of unequal length.
    #[error("face bundle sequences differ in length (uvs:{uvs}, pins:{pins}, seams:{seams})")]
    InvalidBundle {
        /// Number of UV coordinates.
        uvs: usize,
        /// Number of pin flags.
        pins: usize,
        /// Number of seam flags.
        seams: usize,
    },
}

impl UvError {
    /// Whether part of a paste batch may have been written before the error.
    ///
    /// A corner count mismatch on the first destination face leaves the mesh
    /// untouched, so `true` does not guarantee a write. The host's undo
    /// history is the only way back from such a state.
    pub fn is_partial_write(&self) -> bool {
        matches!(self, UvError::FaceSizeMismatch { .. })
    }
}
