use crate::Persist;
use crate::props::PropertyList;

// -----------------------------------------------------------------------------
// Properties

/// The trait that makes a type composite.
///
/// Implementing `Properties` is the whole opt-in: the blanket
/// [`Composite`](crate::ops::Composite) impl picks the type up, and through
/// it the walk engine gains by-name and by-index access to the declared
/// properties. Leaf scalars never implement this trait, which is how the two
/// kinds stay disjoint without any runtime registry.
///
/// `Default` is a supertrait because deserialization stages nested records:
/// the walk default-constructs the child, loads into it, and only then
/// assigns it over the parent's field.
///
/// # Examples
///
/// Usually derived:
///
/// ```
/// use pk_persist::{Properties, derive::Persist};
///
/// #[derive(Persist, Default)]
/// struct Monitor {
///     label: String,
///     width: u32,
/// }
///
/// let list = Monitor::properties();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.index_of("width"), Some(1));
/// ```
pub trait Properties: Persist + Default {
    /// Returns the property list of this type, in declaration order.
    fn properties() -> &'static PropertyList<Self>;
}
