//! The host mesh capability seam.
//!
//! The transfer engines never touch a concrete mesh type. They operate on
//! anything implementing [`EditMesh`]: a face table with ordered loops,
//! per-edge seam flags, per-face selection and a [`UvLayers`] table. The
//! crate's own [`PolyMesh`] implements it; a host editor implements it over
//! its live edit-mode mesh.

use super::index::{EdgeId, FaceId, LoopId, MeshIndex};
use super::polymesh::PolyMesh;
use super::uv_layer::UvLayers;

/// Capabilities the UV transfer engines need from an editable mesh.
pub trait EditMesh {
    /// Integer type of the mesh's element indices.
    type Index: MeshIndex;

    /// Number of faces. Faces are visited in index order.
    fn num_faces(&self) -> usize;

    /// Number of loops, used to size newly created UV layers.
    fn num_loops(&self) -> usize;

    /// The loops of a face in winding order.
    fn face_loops(&self, f: FaceId<Self::Index>) -> impl Iterator<Item = LoopId<Self::Index>> + '_;

    /// Whether the face is selected.
    fn is_face_selected(&self, f: FaceId<Self::Index>) -> bool;

    /// The edge leaving a loop towards the next corner of its face.
    fn loop_edge(&self, l: LoopId<Self::Index>) -> EdgeId<Self::Index>;

    /// Whether the edge is a UV seam.
    fn is_seam(&self, e: EdgeId<Self::Index>) -> bool;

    /// Mark or clear a UV seam.
    fn set_seam(&mut self, e: EdgeId<Self::Index>, seam: bool);

    /// The UV layer table.
    fn uv_layers(&self) -> &UvLayers<Self::Index>;

    /// The mutable UV layer table.
    fn uv_layers_mut(&mut self) -> &mut UvLayers<Self::Index>;

    /// Commit a batch of edits so derived data is recomputed.
    fn update(&mut self);

    /// Turn on seam display after seams were written.
    fn show_seams(&mut self);

    /// Iterate over all face IDs in host order.
    fn face_ids(&self) -> impl Iterator<Item = FaceId<Self::Index>> + '_ {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Corner count of a face.
    fn face_len(&self, f: FaceId<Self::Index>) -> usize {
        self.face_loops(f).count()
    }
}

impl<I: MeshIndex> EditMesh for PolyMesh<I> {
    type Index = I;

    #[inline]
    fn num_faces(&self) -> usize {
        PolyMesh::num_faces(self)
    }

    #[inline]
    fn num_loops(&self) -> usize {
        PolyMesh::num_loops(self)
    }

    fn face_loops(&self, f: FaceId<I>) -> impl Iterator<Item = LoopId<I>> + '_ {
        PolyMesh::face_loops(self, f)
    }

    #[inline]
    fn is_face_selected(&self, f: FaceId<I>) -> bool {
        self.face(f).select
    }

    #[inline]
    fn loop_edge(&self, l: LoopId<I>) -> EdgeId<I> {
        self.get_loop(l).edge
    }

    #[inline]
    fn is_seam(&self, e: EdgeId<I>) -> bool {
        self.edge(e).seam
    }

    #[inline]
    fn set_seam(&mut self, e: EdgeId<I>, seam: bool) {
        self.set_edge_seam(e, seam);
    }

    #[inline]
    fn uv_layers(&self) -> &UvLayers<I> {
        PolyMesh::uv_layers(self)
    }

    #[inline]
    fn uv_layers_mut(&mut self) -> &mut UvLayers<I> {
        PolyMesh::uv_layers_mut(self)
    }

    fn update(&mut self) {
        self.bump_revision();
    }

    fn show_seams(&mut self) {
        self.set_seams_visible(true);
    }

    #[inline]
    fn face_len(&self, f: FaceId<I>) -> usize {
        PolyMesh::face_len(self, f)
    }
}
