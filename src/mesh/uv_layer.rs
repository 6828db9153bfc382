//! Per-loop UV attribute storage.
//!
//! A [`UvLayer`] is a named table holding one [`LoopUv`] record per loop of
//! a mesh. A mesh carries any number of layers in a [`UvLayers`] table, one of
//! which is marked active.

use std::marker::PhantomData;

use nalgebra::Point2;

use super::index::{LoopId, MeshIndex};

/// Name given to the layer created by [`UvLayers::verify`].
pub const DEFAULT_LAYER_NAME: &str = "UVMap";

/// The UV attributes of one loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopUv {
    /// Texture coordinate.
    pub uv: Point2<f64>,
    /// Pinned corners are left alone by automatic unwrapping.
    pub pin: bool,
    /// Corner selection in the UV editor.
    pub select: bool,
}

impl Default for LoopUv {
    fn default() -> Self {
        Self {
            uv: Point2::origin(),
            pin: false,
            select: false,
        }
    }
}

/// Handle to a layer within a [`UvLayers`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UvLayerId(usize);

impl UvLayerId {
    /// Position of the layer in its table.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named per-loop UV table.
#[derive(Debug, Clone)]
pub struct UvLayer<I: MeshIndex = u32> {
    name: String,
    data: Vec<LoopUv>,
    _marker: PhantomData<I>,
}

impl<I: MeshIndex> UvLayer<I> {
    /// Create a layer with `num_loops` zeroed records.
    pub fn new(name: impl Into<String>, num_loops: usize) -> Self {
        Self {
            name: name.into(),
            data: vec![LoopUv::default(); num_loops],
            _marker: PhantomData,
        }
    }

    /// The layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the record of a loop.
    #[inline]
    pub fn get(&self, l: LoopId<I>) -> &LoopUv {
        &self.data[l.index()]
    }

    /// Get a mutable record of a loop.
    #[inline]
    pub fn get_mut(&mut self, l: LoopId<I>) -> &mut LoopUv {
        &mut self.data[l.index()]
    }

    /// Get the UV coordinate of a loop.
    #[inline]
    pub fn uv(&self, l: LoopId<I>) -> Point2<f64> {
        self.data[l.index()].uv
    }

    /// Set the UV coordinate of a loop.
    #[inline]
    pub fn set_uv(&mut self, l: LoopId<I>, uv: Point2<f64>) {
        self.data[l.index()].uv = uv;
    }

    /// Set the pin flag of a loop.
    #[inline]
    pub fn set_pin(&mut self, l: LoopId<I>, pin: bool) {
        self.data[l.index()].pin = pin;
    }

    /// Set the UV-editor selection flag of a loop.
    #[inline]
    pub fn set_select(&mut self, l: LoopId<I>, select: bool) {
        self.data[l.index()].select = select;
    }

    /// Get the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all records with their loop IDs.
    pub fn iter(&self) -> impl Iterator<Item = (LoopId<I>, &LoopUv)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, uv)| (LoopId::new(i), uv))
    }
}

/// The UV layer table of a mesh.
#[derive(Debug, Clone)]
pub struct UvLayers<I: MeshIndex = u32> {
    layers: Vec<UvLayer<I>>,
    active: Option<usize>,
}

impl<I: MeshIndex> Default for UvLayers<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> UvLayers<I> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            active: None,
        }
    }

    /// Get the number of layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the table has no layers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate over the layer names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.layers.iter().map(|layer| layer.name())
    }

    /// Find a layer by name.
    pub fn find(&self, name: &str) -> Option<UvLayerId> {
        self.layers
            .iter()
            .position(|layer| layer.name == name)
            .map(UvLayerId)
    }

    /// Get the layer with the given name, creating it if absent.
    ///
    /// The first layer added to an empty table becomes active.
    pub fn add(&mut self, name: &str, num_loops: usize) -> UvLayerId {
        if let Some(id) = self.find(name) {
            return id;
        }

        self.layers.push(UvLayer::new(name, num_loops));
        let index = self.layers.len() - 1;
        if self.active.is_none() {
            self.active = Some(index);
        }
        UvLayerId(index)
    }

    /// The active layer, falling back to the first one.
    pub fn active(&self) -> Option<UvLayerId> {
        self.active
            .or(if self.layers.is_empty() { None } else { Some(0) })
            .map(UvLayerId)
    }

    /// Mark a layer as active.
    pub fn set_active(&mut self, id: UvLayerId) {
        debug_assert!(id.0 < self.layers.len(), "layer {} out of range", id.0);
        self.active = Some(id.0);
    }

    /// Return the active layer, creating [`DEFAULT_LAYER_NAME`] when the
    /// table is empty.
    pub fn verify(&mut self, num_loops: usize) -> UvLayerId {
        match self.active() {
            Some(id) => id,
            None => self.add(DEFAULT_LAYER_NAME, num_loops),
        }
    }

    /// Get a layer.
    #[inline]
    pub fn layer(&self, id: UvLayerId) -> &UvLayer<I> {
        &self.layers[id.0]
    }

    /// Get a mutable layer.
    #[inline]
    pub fn layer_mut(&mut self, id: UvLayerId) -> &mut UvLayer<I> {
        &mut self.layers[id.0]
    }
}
