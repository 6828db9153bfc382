//! Similarity-aligned UV copy/paste.
//!
//! Only faces whose corners are all selected in the UV editor take part. On
//! paste, a rotation and uniform scale is derived from the first edge of the
//! first copied face and the first edge of the first destination face. That
//! one transform is applied to every copied face about its own first corner,
//! and the result is moved onto the paired destination face's first corner.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};

use crate::error::{Result, UvError};
use crate::mesh::{EditMesh, FaceId, LoopId, UvLayerId};

use super::bundle::{CaptureSet, FaceUvBundle, UvClipboard};
use super::Reporter;

/// Reference edges shorter than this are treated as zero length.
const MIN_EDGE_LENGTH: f64 = 1e-12;

/// Capture position of the face whose first edge defines the transform.
const REFERENCE_FACE: usize = 0;

/// A rotation followed by a uniform scale in the UV plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentTransform {
    angle: f64,
    scale: f64,
}

impl AlignmentTransform {
    /// Transform taking the direction and length of `src` to those of `dest`.
    ///
    /// The angle is measured counter-clockwise and lies in `[0, 2π)`.
    /// Returns `None` if `src` has zero length.
    pub fn from_edges(src: Vector2<f64>, dest: Vector2<f64>) -> Option<Self> {
        let src_len = src.norm();
        if src_len <= MIN_EDGE_LENGTH {
            return None;
        }

        let src_angle = src.y.atan2(src.x);
        let dest_angle = dest.y.atan2(dest.x);
        let angle = if src_angle < dest_angle {
            dest_angle - src_angle
        } else if src_angle > dest_angle {
            // Rounding can land exactly on 2π for nearly equal angles.
            (TAU - (src_angle - dest_angle)) % TAU
        } else {
            0.0
        };

        Some(Self {
            angle,
            scale: dest.norm() / src_len,
        })
    }

    /// Transform between the first edges of two corner sequences.
    ///
    /// Returns `None` if either sequence has fewer than two corners or the
    /// source edge has zero length.
    pub fn between(src: &[Point2<f64>], dest: &[Point2<f64>]) -> Option<Self> {
        match (src, dest) {
            ([s0, s1, ..], [d0, d1, ..]) => Self::from_edges(s1 - s0, d1 - d0),
            _ => None,
        }
    }

    /// Rotation in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Uniform scale factor.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotate and scale an offset from a face's first corner.
    pub fn apply(&self, offset: Vector2<f64>) -> Vector2<f64> {
        let angle = self.angle + offset.y.atan2(offset.x);
        let len = offset.norm();
        Vector2::new(len * angle.cos(), len * angle.sin()) * self.scale
    }
}

/// Copy the UVs of faces whose corners are all selected into `clipboard`.
///
/// The active UV layer is used, and created when the mesh has none. Selected
/// faces with any unselected corner are skipped. Only coordinates are
/// captured. Returns the number of captured faces.
///
/// # Errors
///
/// [`UvError::NoSelection`] if no face qualifies. The clipboard is untouched.
pub fn copy_selected_uv<M: EditMesh>(mesh: &mut M, clipboard: &mut UvClipboard, reporter: &Reporter) -> Result<usize> {
    reporter.info("Copy UV coordinate (selection sequence)");

    let captured = capture_corner_selected(mesh).inspect_err(|e| reporter.warning(&e.to_string()))?;
    let count = captured.len();
    clipboard.store(captured);

    reporter.info(&format!("{} face(s) are selected", count));
    Ok(count)
}

/// Paste the clipboard onto faces whose corners are all selected, aligned to
/// each destination face's first edge.
///
/// Captured and destination faces are paired in order; extra faces on either
/// side are ignored, and within a pair only the shorter corner count is
/// written. The mesh is committed once. Returns the number of pairs written.
///
/// # Errors
///
/// - [`UvError::NothingCopied`] if the clipboard is empty
/// - [`UvError::NoSelection`] if no destination face qualifies
/// - [`UvError::DegenerateEdge`] if the reference edges cannot define a
///   transform; nothing is written
pub fn paste_aligned_uv<M: EditMesh>(mesh: &mut M, clipboard: &UvClipboard, reporter: &Reporter) -> Result<usize> {
    paste_aligned(mesh, clipboard, reporter).inspect_err(|e| reporter.warning(&e.to_string()))
}

fn corners_selected<M: EditMesh>(mesh: &M, layer: UvLayerId, f: FaceId<M::Index>) -> bool {
    let table = mesh.uv_layers().layer(layer);
    mesh.is_face_selected(f) && mesh.face_loops(f).all(|l| table.get(l).select)
}

fn verify_layer<M: EditMesh>(mesh: &mut M) -> UvLayerId {
    let num_loops = mesh.num_loops();
    mesh.uv_layers_mut().verify(num_loops)
}

fn capture_corner_selected<M: EditMesh>(mesh: &mut M) -> Result<CaptureSet> {
    let layer = verify_layer(mesh);
    let mesh: &M = mesh;
    let table = mesh.uv_layers().layer(layer);

    let captured: CaptureSet = mesh
        .face_ids()
        .filter(|&f| corners_selected(mesh, layer, f))
        .map(|f| FaceUvBundle::from_uvs(mesh.face_loops(f).map(|l| table.uv(l)).collect()))
        .collect();

    if captured.is_empty() {
        return Err(UvError::NoSelection);
    }
    Ok(captured)
}

fn paste_aligned<M: EditMesh>(mesh: &mut M, clipboard: &UvClipboard, reporter: &Reporter) -> Result<usize> {
    let captured = clipboard.require()?;
    reporter.info("Paste UV coordinate (selection sequence)");

    let layer = verify_layer(mesh);
    let dest: Vec<Vec<LoopId<M::Index>>> = {
        let view: &M = mesh;
        view.face_ids()
            .filter(|&f| corners_selected(view, layer, f))
            .map(|f| view.face_loops(f).collect())
            .collect()
    };
    let (Some(src_ref), Some(dest_ref)) = (captured.get(REFERENCE_FACE), dest.first()) else {
        return Err(UvError::NoSelection);
    };

    let dest_uvs: Vec<Point2<f64>> = {
        let table = mesh.uv_layers().layer(layer);
        dest_ref.iter().map(|&l| table.uv(l)).collect()
    };
    let transform = AlignmentTransform::between(src_ref.uvs(), &dest_uvs).ok_or(UvError::DegenerateEdge {
        face: REFERENCE_FACE,
    })?;
    log::debug!(
        "alignment angle {:.6} rad, scale {:.6}",
        transform.angle(),
        transform.scale()
    );

    let mut pairs = 0;
    for (source, loops) in captured.iter().zip(&dest) {
        let uvs = source.uvs();
        let (Some(&src0), Some(&l0)) = (uvs.first(), loops.first()) else {
            continue;
        };

        let table = mesh.uv_layers_mut().layer_mut(layer);
        let dest0 = table.uv(l0);
        for (&c, &l) in uvs.iter().zip(loops) {
            table.set_uv(l, dest0 + transform.apply(c - src0));
        }
        pairs += 1;
    }

    mesh.update();
    reporter.info(&format!("{} face(s) are copied", pairs));
    Ok(pairs)
}
