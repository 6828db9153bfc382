//! Element handles.
//!
//! Vertices, loops, edges and faces are addressed by distinct newtypes so a
//! loop handle can never be passed where a face handle is expected. Each
//! handle is generic over its storage width ([`MeshIndex`]), letting a host
//! match the integer type of its own element tables.

use std::fmt;
use std::hash::Hash;

/// Integer width backing the element handles.
///
/// Implemented for `u16`, `u32` and `u64`.
pub trait MeshIndex: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// Number of distinct elements this width can address.
    const CAPACITY: usize;

    /// Narrow a table position to this width.
    ///
    /// Positions at or beyond [`CAPACITY`](Self::CAPACITY) are a logic error;
    /// debug builds panic on them.
    fn from_usize(v: usize) -> Self;

    /// Widen back to a table position.
    fn to_usize(self) -> usize;
}

macro_rules! impl_mesh_index {
    ($($ty:ty),*) => {$(
        impl MeshIndex for $ty {
            const CAPACITY: usize = (<$ty>::MAX as usize).saturating_add(1);

            #[inline]
            fn from_usize(v: usize) -> Self {
                debug_assert!(v < Self::CAPACITY, "position {} exceeds {} range", v, stringify!($ty));
                v as $ty
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    )*};
}

impl_mesh_index!(u16, u32, u64);

macro_rules! element_handle {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name<I: MeshIndex = u32>(I);

        impl<I: MeshIndex> $name<I> {
            /// Handle for a table position.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// Table position of this handle.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }
        }

        impl<I: MeshIndex> fmt::Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $tag, self.index())
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

element_handle!(
    /// Handle of a vertex position.
    VertexId,
    "V"
);
element_handle!(
    /// Handle of a loop: one corner of one face.
    ///
    /// Faces meeting at a vertex each have their own loop there, so each can
    /// carry a different UV.
    LoopId,
    "L"
);
element_handle!(
    /// Handle of an undirected edge, shared by the faces on either side.
    EdgeId,
    "E"
);
element_handle!(
    /// Handle of a face.
    FaceId,
    "F"
);
