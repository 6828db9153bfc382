//! Core mesh data structures.
//!
//! This module provides the polygon mesh representation, per-loop UV layers,
//! and the [`EditMesh`] trait the transfer engines are written against.
//!
//! # Overview
//!
//! The reference mesh type is [`PolyMesh`]. Each face owns an ordered run of
//! loops (corners); each loop carries its own UV record in every layer, so
//! faces that share a vertex can still hold different UVs at it.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`LoopId`] - Identifies a face corner
//! - [`EdgeId`] - Identifies an edge
//! - [`FaceId`] - Identifies a face
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait).
//!
//! # Construction
//!
//! ```
//! use uvtransfer::mesh::{PolyMesh, build_from_polygons};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0usize, 1, 2]];
//!
//! let mut mesh: PolyMesh = build_from_polygons(&vertices, &faces).unwrap();
//! let layer = mesh.add_uv_layer("UVMap");
//! assert_eq!(mesh.uv_layers().layer(layer).len(), 3);
//! ```

mod builder;
mod edit;
mod index;
mod polymesh;
mod uv_layer;

pub use builder::{build_from_polygons, to_face_vertex};
pub use edit::EditMesh;
pub use index::{EdgeId, FaceId, LoopId, MeshIndex, VertexId};
pub use polymesh::{Edge, Face, Loop, PolyMesh};
pub use uv_layer::{LoopUv, UvLayer, UvLayerId, UvLayers, DEFAULT_LAYER_NAME};
