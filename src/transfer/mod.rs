//! UV copy/paste engines.
//!
//! This module moves per-corner UV data between faces. Copy captures the
//! selected faces into a [`UvClipboard`]; paste writes the captured data onto
//! another selection, possibly on another mesh.
//!
//! # Engines
//!
//! - [`copy_uv`] / [`paste_uv`]: face-set transfer of UVs, pins and seams,
//!   with strict or wrap-around pairing and flip/rotate corner transforms
//! - [`copy_object_uv`] / [`paste_object_uv`]: whole-object transfer onto
//!   every selected mesh object of a [`Scene`](crate::scene::Scene)
//! - [`copy_selected_uv`] / [`paste_aligned_uv`]: similarity alignment for
//!   faces whose UV corners are all selected
//!
//! # Example
//!
//! ```
//! use uvtransfer::prelude::*;
//! use uvtransfer::transfer::{copy_uv, paste_uv, CopyOptions, PasteOptions, Reporter};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mut mesh: PolyMesh = build_from_polygons(&vertices, &[[0usize, 1, 2], [0, 2, 3]]).unwrap();
//! mesh.add_uv_layer("UVMap");
//!
//! let mut clipboard = UvClipboard::new();
//! let reporter = Reporter::none();
//!
//! mesh.select_face(FaceId::new(0), true);
//! copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();
//!
//! mesh.select_all(false);
//! mesh.select_face(FaceId::new(1), true);
//! let pasted = paste_uv(&mut mesh, &clipboard, &PasteOptions::default().with_rotation(1), &reporter).unwrap();
//! assert_eq!(pasted, 1);
//! ```

mod align;
mod bundle;
mod faceset;
mod object;
mod report;

pub use align::{copy_selected_uv, paste_aligned_uv, AlignmentTransform};
pub use bundle::{CaptureSet, FaceUvBundle, UvClipboard};
pub use faceset::{copy_uv, paste_uv};
pub use object::{copy_object_uv, paste_object_uv};
pub use report::{Reporter, Severity};

use crate::error::{Result, UvError};
use crate::mesh::{EditMesh, UvLayerId};

/// Which UV layer an operation reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayerSelector {
    /// The mesh's active layer.
    #[default]
    Default,
    /// A layer by name.
    Named(String),
}

impl LayerSelector {
    /// Select a layer by name.
    pub fn named(name: impl Into<String>) -> Self {
        LayerSelector::Named(name.into())
    }

    /// Resolve against a mesh.
    ///
    /// `Default` fails with [`UvError::NoAttributeLayer`] when the mesh has no
    /// layer; `Named` fails with [`UvError::LayerNotFound`] for unknown names.
    pub fn resolve<M: EditMesh>(&self, mesh: &M) -> Result<UvLayerId> {
        match self {
            LayerSelector::Default => mesh.uv_layers().active().ok_or(UvError::NoAttributeLayer),
            LayerSelector::Named(name) => mesh
                .uv_layers()
                .find(name)
                .ok_or_else(|| UvError::LayerNotFound { name: name.clone() }),
        }
    }

    /// Resolve against a mesh, treating an unknown name as `Default`.
    pub fn resolve_or_default<M: EditMesh>(&self, mesh: &M) -> Result<UvLayerId> {
        match self {
            LayerSelector::Named(name) => match mesh.uv_layers().find(name) {
                Some(id) => Ok(id),
                None => LayerSelector::Default.resolve(mesh),
            },
            LayerSelector::Default => LayerSelector::Default.resolve(mesh),
        }
    }

    /// Suffix used in report messages.
    fn describe(&self) -> String {
        match self {
            LayerSelector::Default => String::new(),
            LayerSelector::Named(name) => format!(" (UV map:{})", name),
        }
    }
}

/// How destination faces are paired with captured faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Destination `i` takes capture `i`; counts must match.
    Strict,
    /// Destination `i` takes capture `i mod len`; any count is accepted.
    #[default]
    Wrap,
}

impl Strategy {
    /// Capture position paired with destination position `dest`.
    #[inline]
    pub fn source_index(self, dest: usize, captured: usize) -> usize {
        match self {
            Strategy::Strict => dest,
            Strategy::Wrap => dest % captured,
        }
    }

    /// Check the face counts this strategy accepts.
    pub fn check_counts(self, captured: usize, dest: usize) -> Result<()> {
        if self == Strategy::Strict && captured != dest {
            return Err(UvError::CountMismatch {
                src: captured,
                dest,
            });
        }
        Ok(())
    }
}

/// Options for copy operations.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Layer to capture from.
    pub layer: LayerSelector,
}

impl CopyOptions {
    /// Create options reading the given layer.
    pub fn with_layer(mut self, layer: LayerSelector) -> Self {
        self.layer = layer;
        self
    }
}

/// Options for face-set paste.
#[derive(Debug, Clone)]
pub struct PasteOptions {
    /// Layer to write to.
    pub layer: LayerSelector,

    /// Face pairing.
    pub strategy: Strategy,

    /// Reverse each bundle's corner order before writing.
    pub flip: bool,

    /// Rotate each bundle's corners this many steps (last corner to the front).
    pub rotate: usize,

    /// Also write seam flags onto the destination edges.
    pub copy_seams: bool,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            layer: LayerSelector::Default,
            strategy: Strategy::Wrap,
            flip: false,
            rotate: 0,
            copy_seams: true,
        }
    }
}

impl PasteOptions {
    /// Create options writing the given layer.
    pub fn with_layer(mut self, layer: LayerSelector) -> Self {
        self.layer = layer;
        self
    }

    /// Set the pairing strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Require one destination face per captured face.
    pub fn strict(mut self) -> Self {
        self.strategy = Strategy::Strict;
        self
    }

    /// Set whether bundles are flipped.
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Set the corner rotation.
    pub fn with_rotation(mut self, rotate: usize) -> Self {
        self.rotate = rotate;
        self
    }

    /// Set whether seams are written.
    pub fn with_copy_seams(mut self, copy_seams: bool) -> Self {
        self.copy_seams = copy_seams;
        self
    }
}

/// Options for whole-object paste.
#[derive(Debug, Clone)]
pub struct ObjectPasteOptions {
    /// Layer to write to. Unknown names fall back to each object's active layer.
    pub layer: LayerSelector,

    /// Also write seam flags onto the destination edges.
    pub copy_seams: bool,
}

impl Default for ObjectPasteOptions {
    fn default() -> Self {
        Self {
            layer: LayerSelector::Default,
            copy_seams: true,
        }
    }
}

impl ObjectPasteOptions {
    /// Create options writing the given layer.
    pub fn with_layer(mut self, layer: LayerSelector) -> Self {
        self.layer = layer;
        self
    }

    /// Set whether seams are written.
    pub fn with_copy_seams(mut self, copy_seams: bool) -> Self {
        self.copy_seams = copy_seams;
        self
    }
}
