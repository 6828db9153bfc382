//! Polygon mesh with per-loop attributes.
//!
//! This module provides a compact polygon mesh representation suited to
//! editing per-corner data such as UVs.
//!
//! # Structure
//!
//! - Each face owns a contiguous run of **loops**, one per corner, in winding order
//! - Each loop knows its **vertex**, its **face**, and the **edge** running from
//!   its vertex to the vertex of the next loop in the face
//! - Edges are shared between the faces that border them and carry the seam flag
//! - Faces carry the selection flag
//!
//! Per-loop UV data lives in a [`UvLayers`] table owned by the mesh.

use std::ops::Range;

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, LoopId, MeshIndex, VertexId};
use super::uv_layer::{UvLayerId, UvLayers};

/// One corner of one face.
#[derive(Debug, Clone, Copy)]
pub struct Loop<I: MeshIndex = u32> {
    /// The vertex at this corner.
    pub vertex: VertexId<I>,

    /// The edge from this corner to the next corner of the face.
    pub edge: EdgeId<I>,

    /// The face this loop belongs to.
    pub face: FaceId<I>,
}

/// An edge between two vertices.
#[derive(Debug, Clone, Copy)]
pub struct Edge<I: MeshIndex = u32> {
    /// The two end vertices, in the order they were first seen.
    pub vertices: [VertexId<I>; 2],

    /// UV unwrapping cut.
    pub seam: bool,
}

/// A polygonal face.
#[derive(Debug, Clone, Copy)]
pub struct Face<I: MeshIndex = u32> {
    /// The first loop of this face. The remaining loops follow contiguously.
    pub first_loop: LoopId<I>,

    /// Number of corners.
    pub len: usize,

    /// Face selection in the mesh editor.
    pub select: bool,
}

impl<I: MeshIndex> Face<I> {
    fn loop_range(&self) -> Range<usize> {
        let start = self.first_loop.index();
        start..start + self.len
    }
}

/// A polygon mesh with loop, edge and face tables.
#[derive(Debug, Clone)]
pub struct PolyMesh<I: MeshIndex = u32> {
    pub(crate) vertices: Vec<Point3<f64>>,
    pub(crate) loops: Vec<Loop<I>>,
    pub(crate) edges: Vec<Edge<I>>,
    pub(crate) faces: Vec<Face<I>>,
    pub(crate) uv_layers: UvLayers<I>,

    /// Incremented on every commit.
    revision: u64,

    show_seams: bool,
}

impl<I: MeshIndex> Default for PolyMesh<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> PolyMesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            loops: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            uv_layers: UvLayers::new(),
            revision: 0,
            show_seams: false,
        }
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of loops.
    #[inline]
    pub fn num_loops(&self) -> usize {
        self.loops.len()
    }

    /// Get the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId<I>) -> &Point3<f64> {
        &self.vertices[v.index()]
    }

    /// Get a loop by ID.
    #[inline]
    pub fn get_loop(&self, id: LoopId<I>) -> &Loop<I> {
        &self.loops[id.index()]
    }

    /// Get an edge by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId<I>) -> &Edge<I> {
        &self.edges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId<I>) -> &Face<I> {
        &self.faces[id.index()]
    }

    /// Get the corner count of a face.
    #[inline]
    pub fn face_len(&self, f: FaceId<I>) -> usize {
        self.face(f).len
    }

    // ==================== Iteration ====================

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId<I>> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over the loops of a face in winding order.
    pub fn face_loops(&self, f: FaceId<I>) -> impl Iterator<Item = LoopId<I>> {
        self.face(f).loop_range().map(LoopId::new)
    }

    /// Iterate over the vertices of a face in winding order.
    pub fn face_vertices(&self, f: FaceId<I>) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.face_loops(f).map(move |l| self.get_loop(l).vertex)
    }

    // ==================== Selection & Seams ====================

    /// Set the selection flag of a face.
    #[inline]
    pub fn select_face(&mut self, f: FaceId<I>, select: bool) {
        self.faces[f.index()].select = select;
    }

    /// Set the selection flag of every face.
    pub fn select_all(&mut self, select: bool) {
        for face in &mut self.faces {
            face.select = select;
        }
    }

    /// Set the seam flag of an edge.
    #[inline]
    pub fn set_edge_seam(&mut self, e: EdgeId<I>, seam: bool) {
        self.edges[e.index()].seam = seam;
    }

    /// Whether seams are drawn in the editor.
    #[inline]
    pub fn seams_visible(&self) -> bool {
        self.show_seams
    }

    /// Enable seam display.
    #[inline]
    pub fn set_seams_visible(&mut self, visible: bool) {
        self.show_seams = visible;
    }

    // ==================== UV Layers ====================

    /// Get the UV layer table.
    #[inline]
    pub fn uv_layers(&self) -> &UvLayers<I> {
        &self.uv_layers
    }

    /// Get the mutable UV layer table.
    #[inline]
    pub fn uv_layers_mut(&mut self) -> &mut UvLayers<I> {
        &mut self.uv_layers
    }

    /// Get or create a UV layer sized to this mesh.
    pub fn add_uv_layer(&mut self, name: &str) -> UvLayerId {
        let num_loops = self.loops.len();
        self.uv_layers.add(name, num_loops)
    }

    // ==================== Commit ====================

    /// Number of commits since construction.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }

    // ==================== Validation ====================

    /// Check if the mesh is valid (all connectivity is consistent).
    pub fn is_valid(&self) -> bool {
        let mut expected_start = 0;
        for (fi, face) in self.faces.iter().enumerate() {
            if face.first_loop.index() != expected_start || face.len < 3 {
                return false;
            }
            expected_start += face.len;

            let range = face.loop_range();
            for li in range.clone() {
                let lp = &self.loops[li];
                if lp.face.index() != fi {
                    return false;
                }
                let next = if li + 1 == range.end { range.start } else { li + 1 };
                let a = lp.vertex;
                let b = self.loops[next].vertex;
                let [e0, e1] = self.edges[lp.edge.index()].vertices;
                if !((e0 == a && e1 == b) || (e0 == b && e1 == a)) {
                    return false;
                }
            }
        }

        expected_start == self.loops.len()
            && self
                .uv_layers
                .names()
                .filter_map(|name| self.uv_layers.find(name))
                .all(|id| self.uv_layers.layer(id).len() == self.loops.len())
    }
}
