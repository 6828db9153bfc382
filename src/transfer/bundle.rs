//! Captured per-face UV data and the clipboard that carries it from copy to
//! paste.

use nalgebra::Point2;

use crate::error::{Result, UvError};
use crate::mesh::{EditMesh, FaceId, UvLayerId};

/// The UV attributes of one face, one entry per corner in winding order.
///
/// Seam flag `i` belongs to the edge leaving corner `i`. Pins and seams are
/// either both present with one entry per corner, or both absent for a
/// coordinates-only capture.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceUvBundle {
    uvs: Vec<Point2<f64>>,
    pins: Option<Vec<bool>>,
    seams: Option<Vec<bool>>,
}

impl FaceUvBundle {
    /// Assemble a bundle from its three sequences.
    pub fn new(uvs: Vec<Point2<f64>>, pins: Vec<bool>, seams: Vec<bool>) -> Result<Self> {
        if uvs.len() != pins.len() || uvs.len() != seams.len() {
            return Err(UvError::InvalidBundle {
                uvs: uvs.len(),
                pins: pins.len(),
                seams: seams.len(),
            });
        }
        Ok(Self {
            uvs,
            pins: Some(pins),
            seams: Some(seams),
        })
    }

    /// A bundle carrying coordinates only.
    ///
    /// Writing it leaves the destination's pins and seams as they are.
    pub fn from_uvs(uvs: Vec<Point2<f64>>) -> Self {
        Self {
            uvs,
            pins: None,
            seams: None,
        }
    }

    /// Read a face's UVs and pins from `layer` and its seams from the edges.
    pub fn capture<M: EditMesh>(mesh: &M, layer: UvLayerId, f: FaceId<M::Index>) -> Self {
        let table = mesh.uv_layers().layer(layer);
        let (mut uvs, mut pins, mut seams) = (Vec::new(), Vec::new(), Vec::new());
        for l in mesh.face_loops(f) {
            let record = table.get(l);
            uvs.push(record.uv);
            pins.push(record.pin);
            seams.push(mesh.is_seam(mesh.loop_edge(l)));
        }
        Self {
            uvs,
            pins: Some(pins),
            seams: Some(seams),
        }
    }

    /// Write this bundle onto a face with the same corner count.
    ///
    /// Seams are only touched when `copy_seams` is set. A coordinates-only
    /// bundle writes UVs and nothing else.
    pub fn write<M: EditMesh>(&self, mesh: &mut M, layer: UvLayerId, f: FaceId<M::Index>, copy_seams: bool) {
        let loops: Vec<_> = mesh.face_loops(f).collect();
        debug_assert_eq!(loops.len(), self.len(), "corner count checked by caller");

        for (i, &l) in loops.iter().enumerate() {
            let record = mesh.uv_layers_mut().layer_mut(layer).get_mut(l);
            record.uv = self.uvs[i];
            if let Some(pins) = &self.pins {
                record.pin = pins[i];
            }
            if let (true, Some(seams)) = (copy_seams, &self.seams) {
                let e = mesh.loop_edge(l);
                mesh.set_seam(e, seams[i]);
            }
        }
    }

    /// Number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.uvs.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uvs.is_empty()
    }

    /// UV coordinates in corner order.
    #[inline]
    pub fn uvs(&self) -> &[Point2<f64>] {
        &self.uvs
    }

    /// Pin flags in corner order, if captured.
    #[inline]
    pub fn pins(&self) -> Option<&[bool]> {
        self.pins.as_deref()
    }

    /// Seam flags in corner order, if captured.
    #[inline]
    pub fn seams(&self) -> Option<&[bool]> {
        self.seams.as_deref()
    }

    /// Whether the bundle holds coordinates without pins or seams.
    #[inline]
    pub fn is_uv_only(&self) -> bool {
        self.pins.is_none()
    }

    /// Reverse the corner order of all sequences together.
    pub fn flip(&mut self) {
        self.uvs.reverse();
        self.pins.iter_mut().chain(self.seams.iter_mut()).for_each(|flags| flags.reverse());
    }

    /// Move the last corner to the front, `steps` times.
    ///
    /// Whole cycles are skipped, so any step count is valid.
    pub fn rotate(&mut self, steps: usize) {
        if self.is_empty() {
            return;
        }
        let k = steps % self.len();
        self.uvs.rotate_right(k);
        self.pins
            .iter_mut()
            .chain(self.seams.iter_mut())
            .for_each(|flags| flags.rotate_right(k));
    }

    /// Copy of this bundle with the paste-time transforms applied: reversal
    /// first, then rotation.
    pub fn transformed(&self, flip: bool, rotate: usize) -> Self {
        let mut out = self.clone();
        if flip {
            out.flip();
        }
        out.rotate(rotate);
        out
    }
}

/// Face bundles captured by one copy, in host face order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureSet {
    faces: Vec<FaceUvBundle>,
}

impl CaptureSet {
    /// Create a capture set from bundles.
    pub fn new(faces: Vec<FaceUvBundle>) -> Self {
        Self { faces }
    }

    /// Number of captured faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Get a bundle by capture position.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&FaceUvBundle> {
        self.faces.get(i)
    }

    /// Iterate over the bundles.
    pub fn iter(&self) -> std::slice::Iter<'_, FaceUvBundle> {
        self.faces.iter()
    }

    /// The bundles as a slice.
    pub fn as_slice(&self) -> &[FaceUvBundle] {
        &self.faces
    }
}

impl FromIterator<FaceUvBundle> for CaptureSet {
    fn from_iter<T: IntoIterator<Item = FaceUvBundle>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CaptureSet {
    type Item = &'a FaceUvBundle;
    type IntoIter = std::slice::Iter<'a, FaceUvBundle>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

/// Capture every face accepted by `keep`, in host face order.
pub(super) fn capture_faces<M, F>(mesh: &M, layer: UvLayerId, mut keep: F) -> CaptureSet
where
    M: EditMesh,
    F: FnMut(FaceId<M::Index>) -> bool,
{
    mesh.face_ids()
        .filter(|&f| keep(f))
        .map(|f| FaceUvBundle::capture(mesh, layer, f))
        .collect()
}

/// Session store carrying one [`CaptureSet`] from copy to paste.
///
/// A capture replaces the contents wholesale; paste only reads them.
#[derive(Debug, Clone, Default)]
pub struct UvClipboard {
    captured: Option<CaptureSet>,
}

impl UvClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents.
    pub fn store(&mut self, set: CaptureSet) {
        self.captured = Some(set);
    }

    /// The current contents, if any.
    pub fn get(&self) -> Option<&CaptureSet> {
        self.captured.as_ref()
    }

    /// The current contents, or [`UvError::NothingCopied`].
    pub fn require(&self) -> Result<&CaptureSet> {
        self.captured
            .as_ref()
            .filter(|set| !set.is_empty())
            .ok_or(UvError::NothingCopied)
    }

    /// Check if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.captured.as_ref().map_or(true, CaptureSet::is_empty)
    }
}
