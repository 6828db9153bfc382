//! Face-set UV copy/paste.

use crate::error::{Result, UvError};
use crate::mesh::{EditMesh, FaceId, UvLayerId};

use super::bundle::{capture_faces, CaptureSet, UvClipboard};
use super::{CopyOptions, PasteOptions, Reporter};

/// Copy the UVs, pins and seams of the selected faces into `clipboard`.
///
/// Faces are captured in host face order. On success the clipboard contents
/// are replaced and the number of captured faces is returned; on failure the
/// clipboard is left as it was.
///
/// # Errors
///
/// - [`UvError::NoAttributeLayer`] / [`UvError::LayerNotFound`] if the layer
///   cannot be resolved
/// - [`UvError::NoSelection`] if no face is selected
pub fn copy_uv<M: EditMesh>(
    mesh: &M,
    clipboard: &mut UvClipboard,
    options: &CopyOptions,
    reporter: &Reporter,
) -> Result<usize> {
    reporter.info(&format!("Copy UV coordinate{}", options.layer.describe()));

    let captured = capture_selected(mesh, options).inspect_err(|e| reporter.warning(&e.to_string()))?;
    let count = captured.len();
    clipboard.store(captured);

    reporter.info(&format!("{} face(s) are selected", count));
    Ok(count)
}

fn capture_selected<M: EditMesh>(mesh: &M, options: &CopyOptions) -> Result<CaptureSet> {
    let layer = options.layer.resolve(mesh)?;
    let captured = capture_faces(mesh, layer, |f| mesh.is_face_selected(f));
    if captured.is_empty() {
        return Err(UvError::NoSelection);
    }
    Ok(captured)
}

/// Paste the clipboard onto the selected faces.
///
/// Each destination face is paired with a captured face according to
/// [`PasteOptions::strategy`]. The captured corners are flipped and rotated
/// as requested, then UVs and pins (and seams if
/// [`PasteOptions::copy_seams`]) are written. The mesh is committed once after
/// the batch. Returns the number of faces written.
///
/// # Errors
///
/// - [`UvError::NothingCopied`] if the clipboard is empty
/// - [`UvError::NoAttributeLayer`] / [`UvError::LayerNotFound`] if the layer
///   cannot be resolved
/// - [`UvError::NoSelection`] if no face is selected
/// - [`UvError::CountMismatch`] for [`Strategy::Strict`](super::Strategy::Strict)
///   with unequal counts
/// - [`UvError::FaceSizeMismatch`] if a pair differs in corner count; faces
///   written before the mismatch keep their new UVs
pub fn paste_uv<M: EditMesh>(
    mesh: &mut M,
    clipboard: &UvClipboard,
    options: &PasteOptions,
    reporter: &Reporter,
) -> Result<usize> {
    paste_selected(mesh, clipboard, options, reporter).inspect_err(|e| reporter.warning(&e.to_string()))
}

fn paste_selected<M: EditMesh>(
    mesh: &mut M,
    clipboard: &UvClipboard,
    options: &PasteOptions,
    reporter: &Reporter,
) -> Result<usize> {
    let captured = clipboard.require()?;
    reporter.info(&format!("Paste UV coordinate{}", options.layer.describe()));

    let layer = options.layer.resolve(mesh)?;
    let dest: Vec<FaceId<M::Index>> = mesh.face_ids().filter(|&f| mesh.is_face_selected(f)).collect();
    if dest.is_empty() {
        return Err(UvError::NoSelection);
    }

    write_faces(mesh, captured, &dest, layer, options)?;

    mesh.update();
    if options.copy_seams {
        mesh.show_seams();
    }

    reporter.info(&format!("{} face(s) are copied", dest.len()));
    Ok(dest.len())
}

/// Write captured bundles onto `dest` in order, without committing.
pub(super) fn write_faces<M: EditMesh>(
    mesh: &mut M,
    captured: &CaptureSet,
    dest: &[FaceId<M::Index>],
    layer: UvLayerId,
    options: &PasteOptions,
) -> Result<()> {
    options.strategy.check_counts(captured.len(), dest.len())?;

    for (i, &f) in dest.iter().enumerate() {
        let source = &captured.as_slice()[options.strategy.source_index(i, captured.len())];
        let corners = mesh.face_len(f);
        if source.len() != corners {
            return Err(UvError::FaceSizeMismatch {
                face: f.index(),
                expected: source.len(),
                actual: corners,
            });
        }

        let bundle = source.transformed(options.flip, options.rotate);
        bundle.write(mesh, layer, f, options.copy_seams);
    }

    log::debug!(
        "wrote {} face(s) from {} captured ({:?})",
        dest.len(),
        captured.len(),
        options.strategy
    );
    Ok(())
}
