//! Objects, selection and editor mode.
//!
//! A [`Scene`] is the minimal document model the whole-object transfer needs:
//! an ordered list of named objects, each selectable and optionally carrying
//! mesh data, an active object, and the editor [`Mode`].
//!
//! Mode changes made for the duration of an operation go through
//! [`Scene::enter_mode`], whose guard puts the previous mode back when it is
//! dropped, on success and on early error return alike.

use std::ops::{Deref, DerefMut};

use crate::mesh::PolyMesh;

/// Editor interaction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Objects are selected and transformed as a whole.
    #[default]
    Object,
    /// The active object's mesh is open for element editing.
    Edit,
}

/// Data attached to an object.
#[derive(Debug, Clone)]
pub enum ObjectData<M = PolyMesh> {
    /// An editable mesh.
    Mesh(M),
    /// No geometry (cameras, lights, empties).
    Empty,
}

/// A named scene object.
#[derive(Debug, Clone)]
pub struct SceneObject<M = PolyMesh> {
    /// Display name.
    pub name: String,
    /// Object selection.
    pub selected: bool,
    /// Attached data.
    pub data: ObjectData<M>,
}

impl<M> SceneObject<M> {
    /// The mesh, if this object has one.
    pub fn mesh(&self) -> Option<&M> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::Empty => None,
        }
    }

    /// The mutable mesh, if this object has one.
    pub fn mesh_mut(&mut self) -> Option<&mut M> {
        match &mut self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::Empty => None,
        }
    }
}

/// An ordered collection of objects with an active object and a mode.
#[derive(Debug, Clone)]
pub struct Scene<M = PolyMesh> {
    objects: Vec<SceneObject<M>>,
    active: Option<usize>,
    mode: Mode,
}

impl<M> Default for Scene<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Scene<M> {
    /// Create an empty scene in object mode.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            active: None,
            mode: Mode::Object,
        }
    }

    /// Add an unselected object and return its index.
    pub fn add_object(&mut self, name: impl Into<String>, data: ObjectData<M>) -> usize {
        self.objects.push(SceneObject {
            name: name.into(),
            selected: false,
            data,
        });
        self.objects.len() - 1
    }

    /// Add an unselected mesh object and return its index.
    pub fn add_mesh(&mut self, name: impl Into<String>, mesh: M) -> usize {
        self.add_object(name, ObjectData::Mesh(mesh))
    }

    /// Get the number of objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by index.
    #[inline]
    pub fn object(&self, index: usize) -> &SceneObject<M> {
        &self.objects[index]
    }

    /// Get a mutable object by index.
    #[inline]
    pub fn object_mut(&mut self, index: usize) -> &mut SceneObject<M> {
        &mut self.objects[index]
    }

    /// Iterate over the objects in scene order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject<M>> + '_ {
        self.objects.iter()
    }

    /// Set the selection flag of an object.
    pub fn select(&mut self, index: usize, selected: bool) {
        self.objects[index].selected = selected;
    }

    /// Index of the active object.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Make an object active.
    pub fn set_active(&mut self, index: usize) {
        debug_assert!(index < self.objects.len(), "object {} out of range", index);
        self.active = Some(index);
    }

    /// The active object, if any.
    pub fn active_object(&self) -> Option<&SceneObject<M>> {
        self.active.map(|i| &self.objects[i])
    }

    /// The current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode without restoring it later.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Switch mode until the returned guard is dropped.
    pub fn enter_mode(&mut self, mode: Mode) -> ModeGuard<'_, M> {
        let previous = self.mode;
        self.set_mode(mode);
        ModeGuard {
            scene: self,
            previous,
        }
    }
}

/// Restores the scene's previous mode on drop.
///
/// Derefs to the [`Scene`], so the operation runs through the guard.
#[derive(Debug)]
pub struct ModeGuard<'a, M = PolyMesh> {
    scene: &'a mut Scene<M>,
    previous: Mode,
}

impl<M> ModeGuard<'_, M> {
    /// The mode that will be restored.
    pub fn previous(&self) -> Mode {
        self.previous
    }
}

impl<M> Deref for ModeGuard<'_, M> {
    type Target = Scene<M>;

    fn deref(&self) -> &Scene<M> {
        self.scene
    }
}

impl<M> DerefMut for ModeGuard<'_, M> {
    fn deref_mut(&mut self) -> &mut Scene<M> {
        self.scene
    }
}

impl<M> Drop for ModeGuard<'_, M> {
    fn drop(&mut self) {
        let previous = self.previous;
        self.scene.set_mode(previous);
    }
}
