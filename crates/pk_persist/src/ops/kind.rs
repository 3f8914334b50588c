use core::fmt;

use crate::Persist;
use crate::ops::Composite;
use crate::persistence::Leaf;

// -----------------------------------------------------------------------------
// PersistKind

/// An enumeration of the two "kinds" of a persistable type.
///
/// Every [`Persist`] type is exactly one of these, decided at compile time by
/// whether it implements [`Properties`]. There is no third case and no
/// runtime registry consulted to tell them apart.
///
/// A `PersistKind` is obtained via [`Persist::persist_kind`], or via
/// [`PersistRef::kind`] and [`PersistMut::kind`].
///
/// [`Properties`]: crate::Properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistKind {
    /// A scalar with a [`Leaf`] encoding.
    Leaf,
    /// A type that carries an ordered property list.
    Composite,
}

impl fmt::Display for PersistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.pad("Leaf"),
            Self::Composite => f.pad("Composite"),
        }
    }
}

// -----------------------------------------------------------------------------
// PersistRef

/// An immutable "kind" view of a persistable value.
///
/// Obtained via [`Persist::persist_ref`]. Matching on it is how the walk
/// engine branches between storing a scalar and recursing into a nested
/// record.
///
/// # Examples
///
/// ```
/// use pk_persist::{Leaf, Persist, ops::PersistRef};
///
/// match 3.5_f32.persist_ref() {
///     PersistRef::Leaf(leaf) => assert_eq!(leaf, Leaf::Float(3.5)),
///     PersistRef::Composite(_) => unreachable!(),
/// }
/// ```
pub enum PersistRef<'a> {
    /// The value is a scalar; its archive encoding is materialized by value.
    Leaf(Leaf),
    /// The value carries a property list and can be walked recursively.
    Composite(&'a dyn Composite),
}

impl PersistRef<'_> {
    /// Returns the kind discriminator of this view.
    #[inline]
    pub const fn kind(&self) -> PersistKind {
        match self {
            Self::Leaf(_) => PersistKind::Leaf,
            Self::Composite(_) => PersistKind::Composite,
        }
    }

    /// Moves the leaf encoding out of this view, if the value is a leaf.
    #[inline]
    pub fn to_leaf(self) -> Option<Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Composite(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// PersistMut

/// A mutable "kind" view of a persistable value.
///
/// Obtained via [`Persist::persist_mut`]. The leaf variant keeps the plain
/// [`Persist`] surface so a [`Leaf`] can be applied to it; the composite
/// variant exposes the property access surface for recursion.
pub enum PersistMut<'a> {
    /// The value is a scalar, ready to receive a [`Leaf`] through
    /// [`Persist::apply_leaf`].
    Leaf(&'a mut dyn Persist),
    /// The value carries a property list and can be walked recursively.
    Composite(&'a mut dyn Composite),
}

impl PersistMut<'_> {
    /// Returns the kind discriminator of this view.
    #[inline]
    pub const fn kind(&self) -> PersistKind {
        match self {
            Self::Leaf(_) => PersistKind::Leaf,
            Self::Composite(_) => PersistKind::Composite,
        }
    }
}
