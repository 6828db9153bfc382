//! # uvtransfer
//!
//! Copy and paste of per-corner UV data between mesh faces.
//!
//! uvtransfer captures UV coordinates, pin flags and seam markers from one set
//! of faces and writes them onto another, on the same mesh or across objects.
//! A second mode pastes UVs through a rotation and uniform scale so a copied
//! shape lines up with a differently oriented destination.
//!
//! ## Features
//!
//! - **Face-set transfer**: strict or wrap-around pairing, flip and rotate
//!   corner transforms, optional seam transfer
//! - **Whole-object transfer**: one capture pasted onto every selected mesh
//!   object of a [`Scene`](scene::Scene)
//! - **Similarity alignment**: paste aligned to a destination reference edge
//! - **Host seam**: engines work on any [`EditMesh`](mesh::EditMesh); the
//!   crate ships [`PolyMesh`](mesh::PolyMesh) as a reference host
//! - **Flexible indexing**: 16-bit, 32-bit and 64-bit element indices
//!
//! ## Quick Start
//!
//! ```
//! use uvtransfer::prelude::*;
//! use uvtransfer::transfer::{copy_uv, paste_uv, CopyOptions, PasteOptions, Reporter};
//! use nalgebra::{Point2, Point3};
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(2.0, 1.0, 0.0),
//! ];
//! let faces = vec![[0usize, 1, 4, 3], [1, 2, 5, 4]];
//! let mut mesh: PolyMesh = build_from_polygons(&vertices, &faces).unwrap();
//!
//! // Give the first quad a unit-square layout
//! let layer = mesh.add_uv_layer("UVMap");
//! let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let loops: Vec<_> = mesh.face_loops(FaceId::new(0)).collect();
//! for (l, (u, v)) in loops.into_iter().zip(corners) {
//!     mesh.uv_layers_mut().layer_mut(layer).set_uv(l, Point2::new(u, v));
//! }
//!
//! let mut clipboard = UvClipboard::new();
//! let reporter = Reporter::none();
//!
//! mesh.select_face(FaceId::new(0), true);
//! copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();
//!
//! mesh.select_all(false);
//! mesh.select_face(FaceId::new(1), true);
//! paste_uv(&mut mesh, &clipboard, &PasteOptions::default(), &reporter).unwrap();
//!
//! let third = mesh.face_loops(FaceId::new(1)).nth(2).unwrap();
//! assert_eq!(mesh.uv_layers().layer(layer).uv(third), Point2::new(1.0, 1.0));
//! ```
//!
//! ## Diagnostics
//!
//! Every operation logs through the [`log`] facade under the `uvtransfer`
//! target and forwards user-facing messages to a
//! [`Reporter`](transfer::Reporter) callback.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mesh;
pub mod scene;
pub mod transfer;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types:
///
/// ```
/// use uvtransfer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, UvError};
    pub use crate::mesh::{
        build_from_polygons, to_face_vertex, EdgeId, EditMesh, FaceId, LoopId, LoopUv, MeshIndex, PolyMesh,
        UvLayerId, UvLayers, VertexId,
    };
    pub use crate::scene::{Mode, Scene};
    pub use crate::transfer::{CaptureSet, FaceUvBundle, UvClipboard};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
