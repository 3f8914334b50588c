use core::any::{Any, TypeId};
use core::fmt;

use crate::Persist;

// -----------------------------------------------------------------------------
// Property

/// The descriptor of one persistable property.
///
/// A property is a stable external name plus a pair of accessors into the
/// owning type `T`, together with the [`TypeId`] of the value behind them.
/// The name is what ends up in the archive, so it survives renaming the Rust
/// field as long as the declaration keeps the old name.
///
/// Descriptors are built in `const` context, which is how a whole list of
/// them can live in a `static` with no startup registration.
///
/// # Examples
///
/// ```
/// use pk_persist::{Properties, derive::Persist};
///
/// #[derive(Persist, Default)]
/// struct Monitor {
///     width: u32,
/// }
///
/// let property = Monitor::properties().property_at(0).unwrap();
///
/// assert!(property.type_is::<u32>());
/// assert_eq!(property.name(), "width");
/// ```
pub struct Property<T> {
    ty_id: TypeId,
    name: &'static str,
    get: fn(&T) -> &dyn Persist,
    get_mut: fn(&mut T) -> &mut dyn Persist,
}

impl<T> Property<T> {
    /// Creates a new [`Property`] named `name` for a value of type `V`.
    ///
    /// The accessors must return the same field of `T` that `V` describes;
    /// the erased signature cannot check this, so prefer
    /// [the derive macro](crate::derive::Persist), which generates consistent
    /// triples.
    #[inline]
    pub const fn new<V: Persist>(
        name: &'static str,
        get: fn(&T) -> &dyn Persist,
        get_mut: fn(&mut T) -> &mut dyn Persist,
    ) -> Self {
        Self {
            ty_id: TypeId::of::<V>(),
            name,
            get,
            get_mut,
        }
    }

    /// Returns the `TypeId` of the property value type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches the property value type.
    #[inline]
    pub fn type_is<V: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<V>()
    }

    /// Returns the stable external name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the property out of its owner.
    #[inline]
    pub fn get<'a>(&self, owner: &'a T) -> &'a dyn Persist {
        (self.get)(owner)
    }

    /// Reads the property out of its owner, mutably.
    #[inline]
    pub fn get_mut<'a>(&self, owner: &'a mut T) -> &'a mut dyn Persist {
        (self.get_mut)(owner)
    }
}

// The derived impl would put a `T: Debug` bound on it, which the accessor
// pointers do not need.
impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("ty_id", &self.ty_id)
            .finish_non_exhaustive()
    }
}
