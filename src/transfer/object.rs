//! Whole-object UV copy/paste across the objects of a scene.

use crate::error::{Result, UvError};
use crate::mesh::{EditMesh, FaceId};
use crate::scene::{Mode, Scene};

use super::bundle::{capture_faces, CaptureSet, UvClipboard};
use super::faceset::write_faces;
use super::{CopyOptions, ObjectPasteOptions, PasteOptions, Reporter, Strategy};

/// Copy every face of the active mesh object into `clipboard`.
///
/// Face selection is ignored: the whole mesh is captured. The scene is put in
/// edit mode for the duration of the copy and its previous mode is restored on
/// return. Returns the number of captured faces.
///
/// # Errors
///
/// - [`UvError::NoActiveObject`] if there is no active object or it has no mesh
/// - [`UvError::NoAttributeLayer`] / [`UvError::LayerNotFound`] if the layer
///   cannot be resolved
/// - [`UvError::NoSelection`] if the mesh has no faces
pub fn copy_object_uv<M: EditMesh>(
    scene: &mut Scene<M>,
    clipboard: &mut UvClipboard,
    options: &CopyOptions,
    reporter: &Reporter,
) -> Result<usize> {
    reporter.info(&format!("Copy UV coordinate per object{}", options.layer.describe()));

    let guard = scene.enter_mode(Mode::Edit);
    let (name, captured) = capture_active(&guard, options).inspect_err(|e| reporter.warning(&e.to_string()))?;
    let count = captured.len();
    clipboard.store(captured);

    reporter.info(&format!("{}'s UV coordinates are copied", name));
    Ok(count)
}

fn capture_active<M: EditMesh>(scene: &Scene<M>, options: &CopyOptions) -> Result<(String, CaptureSet)> {
    let object = scene.active_object().ok_or(UvError::NoActiveObject)?;
    let mesh = object.mesh().ok_or(UvError::NoActiveObject)?;

    let layer = options.layer.resolve(mesh)?;
    let captured = capture_faces(mesh, layer, |_| true);
    if captured.is_empty() {
        return Err(UvError::NoSelection);
    }
    Ok((object.name.clone(), captured))
}

/// Paste the clipboard onto every selected mesh object.
///
/// Objects are visited in scene order. Unselected objects and objects without
/// a mesh are skipped with an info report. Each remaining object is made active
/// and all of its faces are paired one-to-one with the captured faces, so
/// every object must have exactly as many faces as were copied. Each object is
/// committed after its faces are written. The scene's mode is restored on
/// return. Returns the total number of faces written.
///
/// # Errors
///
/// - [`UvError::NothingCopied`] if the clipboard is empty
/// - [`UvError::NoAttributeLayer`] if an object has no UV layer
/// - [`UvError::CountMismatch`] / [`UvError::FaceSizeMismatch`] if an object's
///   faces do not match the capture; objects pasted before it stay pasted
pub fn paste_object_uv<M: EditMesh>(
    scene: &mut Scene<M>,
    clipboard: &UvClipboard,
    options: &ObjectPasteOptions,
    reporter: &Reporter,
) -> Result<usize> {
    paste_objects(scene, clipboard, options, reporter).inspect_err(|e| reporter.warning(&e.to_string()))
}

fn paste_objects<M: EditMesh>(
    scene: &mut Scene<M>,
    clipboard: &UvClipboard,
    options: &ObjectPasteOptions,
    reporter: &Reporter,
) -> Result<usize> {
    let captured = clipboard.require()?;
    let paste = PasteOptions {
        layer: options.layer.clone(),
        strategy: Strategy::Strict,
        flip: false,
        rotate: 0,
        copy_seams: options.copy_seams,
    };

    let mut scene = scene.enter_mode(Mode::Edit);
    let mut total = 0;

    for index in 0..scene.len() {
        let object = scene.object(index);
        if !object.selected || object.mesh().is_none() {
            reporter.info(&format!("{} skipped (not a selected mesh object)", object.name));
            continue;
        }

        scene.set_mode(Mode::Object);
        scene.set_active(index);
        scene.set_mode(Mode::Edit);

        let object = scene.object_mut(index);
        let name = object.name.clone();
        let Some(mesh) = object.mesh_mut() else {
            continue;
        };

        reporter.info(&format!("Paste UV coordinate per object{}", options.layer.describe()));
        let layer = options.layer.resolve_or_default(mesh)?;
        let dest: Vec<FaceId<M::Index>> = mesh.face_ids().collect();

        write_faces(mesh, captured, &dest, layer, &paste)?;

        mesh.update();
        if options.copy_seams {
            mesh.show_seams();
        }
        total += dest.len();

        log::debug!("pasted {} face(s) onto {}", dest.len(), name);
        reporter.info(&format!("{}'s UV coordinates are pasted", name));
    }

    Ok(total)
}
