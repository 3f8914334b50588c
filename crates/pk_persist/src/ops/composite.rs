use alloc::boxed::Box;

use crate::{Persist, Properties};

// -----------------------------------------------------------------------------
// Composite trait

/// A trait for type-erased access to the properties of a composite value.
///
/// The walk engine never sees concrete types; it recurses through
/// `&dyn Composite` and `&mut dyn Composite`, reading and writing properties
/// by index in declaration order.
///
/// There is exactly one implementation, blanket-provided for every
/// [`Properties`] type. User code opts a type in by implementing (usually
/// deriving) `Properties` and gets this surface for free.
///
/// # Examples
///
/// ```
/// use pk_persist::derive::Persist;
/// use pk_persist::ops::Composite;
///
/// #[derive(Persist, Default)]
/// struct Monitor {
///     label: String,
///     width: u32,
/// }
///
/// let monitor = Monitor { label: "office".into(), width: 1920 };
/// let composite: &dyn Composite = &monitor;
///
/// assert_eq!(composite.property_len(), 2);
/// assert_eq!(composite.name_at(1), Some("width"));
/// assert_eq!(composite.property_as::<u32>("width"), Some(&1920));
/// ```
pub trait Composite: Persist {
    /// Returns the value of the property named `name`.
    ///
    /// Returns `None` if no property uses that name.
    fn property(&self, name: &str) -> Option<&dyn Persist>;

    /// Returns the value of the property named `name`, mutably.
    ///
    /// Returns `None` if no property uses that name.
    fn property_mut(&mut self, name: &str) -> Option<&mut dyn Persist>;

    /// Returns the value of the property at `index`, counted in declaration
    /// order.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn property_at(&self, index: usize) -> Option<&dyn Persist>;

    /// Returns the value of the property at `index`, mutably.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn property_at_mut(&mut self, index: usize) -> Option<&mut dyn Persist>;

    /// Returns the stable name of the property at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::{derive::Persist, ops::Composite};
    /// #[derive(Persist, Default)]
    /// struct Monitor { width: u32, height: u32 }
    ///
    /// let monitor = Monitor::default();
    ///
    /// assert_eq!(monitor.name_at(0), Some("width"));
    /// assert_eq!(monitor.name_at(2), None);
    /// ```
    fn name_at(&self, index: usize) -> Option<&'static str>;

    /// Returns the number of declared properties.
    fn property_len(&self) -> usize;

    /// Returns an iterator over the property values in declaration order.
    fn iter_properties(&self) -> PropertyIter<'_>;

    /// Boxes a default-constructed value of the same concrete type.
    ///
    /// Deserialization stages nested records with this before assigning them
    /// over the parent's field.
    fn boxed_default(&self) -> Box<dyn Composite>;
}

impl<T: Properties> Composite for T {
    #[inline]
    fn property(&self, name: &str) -> Option<&dyn Persist> {
        let property = T::properties().property(name)?;
        Some(property.get(self))
    }

    #[inline]
    fn property_mut(&mut self, name: &str) -> Option<&mut dyn Persist> {
        let property = T::properties().property(name)?;
        Some(property.get_mut(self))
    }

    #[inline]
    fn property_at(&self, index: usize) -> Option<&dyn Persist> {
        let property = T::properties().property_at(index)?;
        Some(property.get(self))
    }

    #[inline]
    fn property_at_mut(&mut self, index: usize) -> Option<&mut dyn Persist> {
        let property = T::properties().property_at(index)?;
        Some(property.get_mut(self))
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&'static str> {
        let property = T::properties().property_at(index)?;
        Some(property.name())
    }

    #[inline]
    fn property_len(&self) -> usize {
        T::properties().len()
    }

    #[inline]
    fn iter_properties(&self) -> PropertyIter<'_> {
        PropertyIter::new(self)
    }

    #[inline]
    fn boxed_default(&self) -> Box<dyn Composite> {
        Box::new(T::default())
    }
}

impl dyn Composite {
    /// Returns a typed reference to the property with the given name.
    ///
    /// Returns `None` if:
    /// - The property does not exist.
    /// - The property cannot be downcast to type `T`
    #[inline]
    pub fn property_as<T: Persist>(&self, name: &str) -> Option<&T> {
        self.property(name).and_then(<dyn Persist>::downcast_ref)
    }

    /// Returns a typed mutable reference to the property with the given name.
    ///
    /// Returns `None` if:
    /// - The property does not exist.
    /// - The property cannot be downcast to type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// # use pk_persist::{derive::Persist, ops::Composite};
    /// #[derive(Persist, Default)]
    /// struct Monitor { width: u32 }
    ///
    /// let mut monitor = Monitor::default();
    /// let composite: &mut dyn Composite = &mut monitor;
    ///
    /// if let Some(width) = composite.property_mut_as::<u32>("width") {
    ///     *width = 640;
    /// }
    ///
    /// assert_eq!(monitor.width, 640);
    /// ```
    #[inline]
    pub fn property_mut_as<T: Persist>(&mut self, name: &str) -> Option<&mut T> {
        self.property_mut(name)
            .and_then(<dyn Persist>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Property Iterator

/// An iterator over the property values of a composite, in declaration
/// order.
///
/// Pairs naturally with [`Composite::name_at`] when the walk needs the name
/// alongside the value.
pub struct PropertyIter<'a> {
    value: &'a dyn Composite,
    index: usize,
}

impl<'a> PropertyIter<'a> {
    /// Creates a new iterator over the properties of `value`.
    #[inline(always)]
    pub const fn new(value: &'a dyn Composite) -> Self {
        PropertyIter { value, index: 0 }
    }
}

impl<'a> Iterator for PropertyIter<'a> {
    type Item = &'a dyn Persist;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value.property_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.value.property_len();
        (size - self.index, Some(size))
    }
}

impl<'a> ExactSizeIterator for PropertyIter<'a> {}
