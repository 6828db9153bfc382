//! Mesh construction utilities.
//!
//! This module provides functions for building polygon meshes from
//! face-vertex lists as commonly found in mesh file formats.

use std::collections::HashMap;

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, LoopId, MeshIndex, VertexId};
use super::polymesh::{Edge, Face, Loop, PolyMesh};
use crate::error::{Result, UvError};

/// Build a polygon mesh from vertices and polygonal faces.
///
/// Faces may mix corner counts. Edges shared by neighbouring faces are
/// created once, regardless of the direction each face walks them.
///
/// # Arguments
/// * `vertices` - List of vertex positions
/// * `faces` - List of faces, each as a list of vertex indices in winding order
///
/// # Returns
/// A polygon mesh with no UV layers and all faces deselected, or an error if
/// the input is invalid.
///
/// # Example
/// ```
/// use uvtransfer::mesh::{build_from_polygons, PolyMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(2.0, 0.5, 0.0),
/// ];
/// let faces: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3], vec![1, 4, 2]];
///
/// let mesh: PolyMesh = build_from_polygons(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_faces(), 2);
/// assert_eq!(mesh.num_loops(), 7);
/// assert_eq!(mesh.num_edges(), 6);
/// ```
pub fn build_from_polygons<I: MeshIndex, F: AsRef<[usize]>>(
    vertices: &[Point3<f64>],
    faces: &[F],
) -> Result<PolyMesh<I>> {
    if faces.is_empty() {
        return Err(UvError::EmptyMesh);
    }

    for (fi, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        if face.len() < 3 {
            return Err(UvError::DegenerateFace { face: fi });
        }
        for (ci, &vi) in face.iter().enumerate() {
            if vi >= vertices.len() {
                return Err(UvError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            if vi == face[(ci + 1) % face.len()] {
                return Err(UvError::DegenerateFace { face: fi });
            }
        }
    }

    let num_loops: usize = faces.iter().map(|f| f.as_ref().len()).sum();
    for (kind, count) in [("vertices", vertices.len()), ("loops", num_loops)] {
        if count > I::CAPACITY {
            return Err(UvError::TooManyElements {
                kind,
                count,
                capacity: I::CAPACITY,
            });
        }
    }
    let mut mesh = PolyMesh::new();
    mesh.vertices.extend_from_slice(vertices);
    mesh.loops.reserve(num_loops);
    mesh.faces.reserve(faces.len());

    // Undirected edge (min, max) -> edge ID
    let mut edge_map: HashMap<(usize, usize), EdgeId<I>> = HashMap::new();

    for (fi, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        let face_id = FaceId::<I>::new(fi);

        mesh.faces.push(Face {
            first_loop: LoopId::new(mesh.loops.len()),
            len: face.len(),
            select: false,
        });

        for (ci, &v0) in face.iter().enumerate() {
            let v1 = face[(ci + 1) % face.len()];
            let key = (v0.min(v1), v0.max(v1));

            let edge = *edge_map.entry(key).or_insert_with(|| {
                let id = EdgeId::new(mesh.edges.len());
                mesh.edges.push(Edge {
                    vertices: [VertexId::new(v0), VertexId::new(v1)],
                    seam: false,
                });
                id
            });

            mesh.loops.push(Loop {
                vertex: VertexId::new(v0),
                edge,
                face: face_id,
            });
        }
    }

    Ok(mesh)
}

/// Convert a polygon mesh back to a face-vertex representation.
///
/// Returns (vertices, faces) tuple.
pub fn to_face_vertex<I: MeshIndex>(mesh: &PolyMesh<I>) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let vertices = mesh.vertices.clone();

    let faces: Vec<Vec<usize>> = mesh
        .face_ids()
        .map(|f| mesh.face_vertices(f).map(|v| v.index()).collect())
        .collect();

    (vertices, faces)
}
