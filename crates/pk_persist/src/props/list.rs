use crate::props::Property;

// -----------------------------------------------------------------------------
// PropertyList

/// The ordered property list of a composite type.
///
/// The order is fixed at declaration and drives every walk: serialization
/// stores properties in this order, deserialization retrieves them in this
/// order. Lookup by name is a linear scan, acceptable because lists are as
/// short as the structs they describe.
///
/// # Name collisions
///
/// Two properties of one type must not share an external name; with renaming
/// in play the field names alone do not guarantee this. [`PropertyList::new`]
/// checks it during const evaluation, so a collision fails the build of the
/// declaring crate instead of corrupting archives at runtime.
///
/// ```compile_fail
/// use pk_persist::derive::Persist;
///
/// #[derive(Persist, Default)]
/// struct Monitor {
///     width: u32,
///     #[persist(rename = "width")] // Clashes with the field above.
///     height: u32,
/// }
/// ```
pub struct PropertyList<T: 'static> {
    properties: &'static [Property<T>],
}

impl<T> PropertyList<T> {
    /// Creates a new [`PropertyList`] over `properties`, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics when two properties share a name. Intended to run in const
    /// context, where the panic becomes a compile error.
    pub const fn new(properties: &'static [Property<T>]) -> Self {
        let mut index = 0;
        while index < properties.len() {
            let mut other = index + 1;
            while other < properties.len() {
                if str_eq(properties[index].name(), properties[other].name()) {
                    panic!("every property of a type must use a distinct name");
                }
                other += 1;
            }
            index += 1;
        }

        Self { properties }
    }

    /// Returns the [`Property`] with the given `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn property(&self, name: &str) -> Option<&'static Property<T>> {
        let index = self.index_of(name)?;
        Some(&self.properties[index])
    }

    /// Returns the [`Property`] at the given index, if present.
    #[inline]
    pub fn property_at(&self, index: usize) -> Option<&'static Property<T>> {
        self.properties.get(index)
    }

    /// Returns the index for the given property `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties
            .iter()
            .position(|property| property.name() == name)
    }

    /// Returns an iterator over the properties in **declaration order**.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'static, Property<T>> {
        self.properties.iter()
    }

    /// Returns the number of properties.
    #[inline]
    pub const fn len(&self) -> usize {
        self.properties.len()
    }
}

// `str` comparison is not usable in const context yet.
const fn str_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut index = 0;
    while index < a.len() {
        if a[index] != b[index] {
            return false;
        }
        index += 1;
    }
    true
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::str_eq;

    #[test]
    fn str_eq_compares_content() {
        assert!(str_eq("width", "width"));
        assert!(!str_eq("width", "height"));
        assert!(!str_eq("width", "widt"));
        assert!(!str_eq("", "w"));
        const _: () = assert!(str_eq("label", "label"));
    }
}
