use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::ops::{PersistKind, PersistMut, PersistRef};
use crate::persistence::{Leaf, PersistError};

// -----------------------------------------------------------------------------
// Persist

/// The foundational trait of [`pk_persist`].
///
/// Every value the walk engine can touch implements `Persist`: the closed set
/// of leaf scalars (integers, floats, `bool`, `String`) and every type that
/// carries a property list. The trait answers one question per value, "are
/// you a leaf or a composite", and gives the walk a uniform way to read and
/// assign either case without compile-time knowledge of the concrete type.
///
/// # Recommendations
///
/// Use [the derive macro for `Persist`] rather than implementing this trait
/// by hand. The derive implements `Persist` together with [`Properties`],
/// which is what actually marks a type as composite.
///
/// # Kind Dispatch
///
/// [`persist_ref`] and [`persist_mut`] return a closed two-variant view of the
/// value. The walk matches on it once per property and never needs a runtime
/// type tag:
///
/// ```
/// # use pk_persist::{Leaf, Persist, ops::PersistRef};
/// let x = 7_u16;
/// let PersistRef::Leaf(leaf) = x.persist_ref() else { unreachable!() };
/// assert_eq!(leaf, Leaf::UInt(7));
/// ```
///
/// # Type Identification
///
/// While `Persist` supports [`Any`], note that [`Any::type_id`] on
/// `Box<dyn Persist>` returns the container's type ID, not the inner value's.
/// Use [`Persist::ty_id`] instead:
///
/// ```
/// # use pk_persist::Persist;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Persist> = 32_i32.into_boxed_persist();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!((*x).type_id() == TypeId::of::<i32>()); // Dereferenced works
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// Use `downcast_ref`, `downcast_mut` and `take` for concrete conversion:
///
/// ```
/// # use pk_persist::Persist;
/// let x: Box<dyn Persist> = 10_i32.into_boxed_persist();
/// let y = x.downcast_ref::<i32>().unwrap();
/// assert_eq!(*y, 10);
/// ```
///
/// [`pk_persist`]: crate
/// [`Properties`]: crate::Properties
/// [`persist_ref`]: Persist::persist_ref
/// [`persist_mut`]: Persist::persist_mut
/// [`Any`]: core::any::Any
/// [the derive macro for `Persist`]: crate::derive::Persist
pub trait Persist: Any + Send + Sync {
    /// Casts this type to a persistable trait object.
    ///
    /// # Example
    ///
    /// ```
    /// use pk_persist::Persist;
    ///
    /// let x = 32;
    /// let p: &dyn Persist = x.as_persist();
    /// // Equal to this:
    /// // let p: &dyn Persist = &x;
    /// ```
    #[inline(always)]
    fn as_persist(&self) -> &dyn Persist
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, persistable trait object.
    #[inline(always)]
    fn as_persist_mut(&mut self) -> &mut dyn Persist
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, persistable trait object.
    #[inline(always)]
    fn into_persist(self: Box<Self>) -> Box<dyn Persist>
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, persistable trait object.
    ///
    /// # Example
    ///
    /// ```
    /// use pk_persist::Persist;
    ///
    /// let p = 32.into_boxed_persist();
    /// // Equal to this:
    /// // let p = Box::new(32) as Box<dyn Persist>;
    /// ```
    #[inline(always)]
    fn into_boxed_persist(self) -> Box<dyn Persist>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of the underlying type.
    ///
    /// When you call `Box<dyn Persist>::type_id`, it will return the
    /// [`TypeId`] of the entire container, instead of the value inside.
    /// This is prone to errors, so we provide this method.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full path of the underlying type, used in diagnostics.
    fn type_path(&self) -> &'static str;

    /// Performs a type-checked assignment of a persistable value to this
    /// value.
    ///
    /// On mismatch the input is handed back untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::Persist;
    /// let data = 3_i32.into_boxed_persist();
    /// let mut x = 0_i32;
    ///
    /// x.set(data).unwrap();
    /// assert_eq!(x, 3);
    /// ```
    fn set(&mut self, value: Box<dyn Persist>) -> Result<(), Box<dyn Persist>>;

    /// Returns a pure enumeration of ["kinds"](PersistKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::{Persist, ops::PersistKind};
    /// assert_eq!(10_i32.persist_kind(), PersistKind::Leaf);
    /// ```
    fn persist_kind(&self) -> PersistKind;

    /// Returns an immutable ["kind" view](PersistRef) of the value.
    ///
    /// For leaf types this materializes the [`Leaf`] encoding by value; for
    /// composite types it borrows the [`Composite`](crate::ops::Composite)
    /// access surface.
    fn persist_ref(&self) -> PersistRef<'_>;

    /// Returns a mutable ["kind" view](PersistMut) of the value.
    fn persist_mut(&mut self) -> PersistMut<'_>;

    /// Assigns a [`Leaf`] value to this value, coercing where the leaf
    /// encodings allow it.
    ///
    /// Integer leaves inter-coerce under a range check, float targets accept
    /// integer leaves, `bool` and `String` are exact. Composite types reject
    /// every leaf; the walk never routes one to them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::{Leaf, Persist};
    /// let mut x = 0_u8;
    ///
    /// x.apply_leaf(Leaf::Int(200)).unwrap();
    /// assert_eq!(x, 200);
    ///
    /// // 500 does not fit in `u8`.
    /// assert!(x.apply_leaf(Leaf::Int(500)).is_err());
    /// assert_eq!(x, 200);
    /// ```
    fn apply_leaf(&mut self, value: Leaf) -> Result<(), PersistError> {
        Err(PersistError::MismatchedLeaf {
            from_kind: value.kind(),
            to_type: self.type_path(),
        })
    }

    /// Debug formatter for the value.
    ///
    /// Leaf types use their own [`Debug`](core::fmt::Debug) implementation;
    /// composite types are rendered field-by-field through
    /// [`composite_debug`](crate::impls::composite_debug).
    fn persist_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.persist_ref() {
            PersistRef::Leaf(leaf) => core::fmt::Debug::fmt(&leaf, f),
            PersistRef::Composite(value) => crate::impls::composite_debug(value, f),
        }
    }
}

impl dyn Persist {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::Persist;
    /// let x: Box<dyn Persist> = 10_i32.into_boxed_persist();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait
    /// object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::Persist;
    /// let x: Box<dyn Persist> = 10_i32.into_boxed_persist();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Persist>) -> Result<T, Box<dyn Persist>> {
        if self.is::<T>() {
            // TODO: replace to `downcast_uncheck` when it's stable,
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { *<Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }
}

impl core::fmt::Debug for dyn Persist {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.persist_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the methods every leaf type shares, like `set` and
/// `persist_kind`.
macro_rules! impl_persist_cast_fn {
    ($path:expr) => {
        #[inline]
        fn type_path(&self) -> &'static str {
            $path
        }

        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Persist>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Persist>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn persist_kind(&self) -> $crate::ops::PersistKind {
            $crate::ops::PersistKind::Leaf
        }

        #[inline]
        fn persist_mut(&mut self) -> $crate::ops::PersistMut<'_> {
            $crate::ops::PersistMut::Leaf(self)
        }

        #[inline]
        fn persist_debug(
            &self,
            f: &mut ::core::fmt::Formatter<'_>,
        ) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_persist_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Persist;

    #[test]
    fn downcast_sees_through_the_container() {
        let boxed: Box<dyn Persist> = Box::new(14_u32);

        assert!(boxed.is::<u32>());
        assert!(!boxed.is::<i32>());
        assert_eq!(boxed.downcast_ref::<u32>(), Some(&14));
    }

    #[test]
    fn take_hands_back_on_mismatch() {
        let boxed: Box<dyn Persist> = Box::new(String::from("keep me"));

        let boxed = boxed.take::<i64>().unwrap_err();
        assert_eq!(boxed.take::<String>().unwrap(), "keep me");
    }

    #[test]
    fn set_replaces_only_matching_types() {
        let mut target = 1_i16;

        assert!(target.set(Box::new(2_i16)).is_ok());
        assert_eq!(target, 2);

        // An `i32` is not an `i16`, even with a fitting value.
        assert!(target.set(Box::new(3_i32)).is_err());
        assert_eq!(target, 2);
    }
}
