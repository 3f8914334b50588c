//! Provide [`HashMap`] based on [hashbrown]'s implementation.

use core::fmt::Debug;
use core::hash::{BuildHasher, Hash};

use hashbrown::{Equivalent, TryReserveError, hash_map as hb};

use crate::hash::FixedHashState;

// -----------------------------------------------------------------------------
// Re-export iterator and entry types

pub use hb::{Entry, OccupiedEntry, VacantEntry};

pub use hb::{Drain, ExtractIf, IntoIter, IntoKeys, IntoValues};
pub use hb::{Iter, IterMut, Keys, Values, ValuesMut};

// -----------------------------------------------------------------------------
// HashMap

type InternalMap<K, V, S> = hb::HashMap<K, V, S>;

/// New-type for [`HashMap`] with [`FixedHashState`] as the default hashing provider.
///
/// Hash results only depend on the inserted keys, so iteration order is
/// arbitrary but identical between two runs over the same insertions.
///
/// # Examples
///
/// ```
/// use pk_utils::hash::HashMap;
///
/// let mut ages = HashMap::new();
///
/// ages.insert("a", 1);
/// ages.insert("b", 2);
///
/// assert_eq!(ages.get("a"), Some(&1));
/// ```
///
/// [`HashMap`]: hb::HashMap
#[repr(transparent)]
pub struct HashMap<K, V, S = FixedHashState>(InternalMap<K, V, S>);

// -----------------------------------------------------------------------------
// `FixedHashState` specific methods

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for HashMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V> HashMap<K, V> {
    /// Create a empty [`HashMap`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use pk_utils::hash::HashMap;
    ///
    /// let map = HashMap::new();
    /// #
    /// # let mut map = map;
    /// # map.insert("foo", 1);
    /// # assert_eq!(map.get("foo"), Some(&1));
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self(InternalMap::with_hasher(FixedHashState))
    }

    /// Create a empty [`HashMap`] with specific capacity
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// #
    /// let map = HashMap::with_capacity(5);
    /// #
    /// # let mut map = map;
    /// # map.insert("foo", 1);
    /// # assert_eq!(map.get("foo"), Some(&1));
    /// ```
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(InternalMap::with_capacity_and_hasher(
            capacity,
            FixedHashState,
        ))
    }
}

// -----------------------------------------------------------------------------
// Re-export the underlying method

impl<K, V, S> Clone for HashMap<K, V, S>
where
    InternalMap<K, V, S>: Clone,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    InternalMap<K, V, S>: Debug,
{
    #[inline(always)]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <InternalMap<K, V, S> as Debug>::fmt(&self.0, f)
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    InternalMap<K, V, S>: Default,
{
    #[inline(always)]
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    InternalMap<K, V, S>: PartialEq,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<K, V, S> Eq for HashMap<K, V, S> where InternalMap<K, V, S>: Eq {}

impl<K, V, S, X> FromIterator<X> for HashMap<K, V, S>
where
    InternalMap<K, V, S>: FromIterator<X>,
{
    #[inline(always)]
    fn from_iter<U: IntoIterator<Item = X>>(iter: U) -> Self {
        Self(FromIterator::from_iter(iter))
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S>
where
    InternalMap<K, V, S>: IntoIterator,
{
    type Item = <InternalMap<K, V, S> as IntoIterator>::Item;

    type IntoIter = <InternalMap<K, V, S> as IntoIterator>::IntoIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    &'a InternalMap<K, V, S>: IntoIterator,
{
    type Item = <&'a InternalMap<K, V, S> as IntoIterator>::Item;

    type IntoIter = <&'a InternalMap<K, V, S> as IntoIterator>::IntoIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S>
where
    &'a mut InternalMap<K, V, S>: IntoIterator,
{
    type Item = <&'a mut InternalMap<K, V, S> as IntoIterator>::Item;

    type IntoIter = <&'a mut InternalMap<K, V, S> as IntoIterator>::IntoIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        (&mut self.0).into_iter()
    }
}

impl<K, V, S, X> Extend<X> for HashMap<K, V, S>
where
    InternalMap<K, V, S>: Extend<X>,
{
    #[inline(always)]
    fn extend<U: IntoIterator<Item = X>>(&mut self, iter: U) {
        self.0.extend(iter);
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Create a empty [`HashMap`] which will use the given hash builder.
    #[inline(always)]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self(InternalMap::with_hasher(hash_builder))
    }

    /// Create a empty [`HashMap`] with specific capacity and hash builder.
    #[inline(always)]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self(InternalMap::with_capacity_and_hasher(capacity, hash_builder))
    }

    /// Returns the number of elements the map can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert("foo", 1);
    ///
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map contains no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// assert!(map.is_empty());
    ///
    /// map.insert("foo", 1);
    ///
    /// assert!(!map.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator visiting all key-value pairs in arbitrary order.
    /// The iterator element type is `(&'a K, &'a V)`.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.0.iter()
    }

    /// An iterator visiting all key-value pairs in arbitrary order,
    /// with mutable references to the values.
    /// The iterator element type is `(&'a K, &'a mut V)`.
    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.0.iter_mut()
    }

    /// An iterator visiting all keys in arbitrary order.
    /// The iterator element type is `&'a K`.
    #[inline(always)]
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.0.keys()
    }

    /// An iterator visiting all values in arbitrary order.
    /// The iterator element type is `&'a V`.
    #[inline(always)]
    pub fn values(&self) -> Values<'_, K, V> {
        self.0.values()
    }

    /// An iterator visiting all values mutably in arbitrary order.
    /// The iterator element type is `&'a mut V`.
    #[inline(always)]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.0.values_mut()
    }

    /// Clears the map, returning all key-value pairs in an iterator.
    #[inline(always)]
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        self.0.drain()
    }

    /// Retains only the elements specified by the predicate.
    #[inline(always)]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.0.retain(f);
    }

    /// Clears the map, removing all key-value pairs.
    ///
    /// Keeps the allocated memory for reuse.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Reserves capacity for at least additional more elements to be inserted in the map.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// Tries to reserve capacity for at least additional more elements.
    #[inline(always)]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.0.try_reserve(additional)
    }

    /// Shrinks the capacity of the map as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.0.shrink_to_fit();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// map.insert("foo", 1);
    ///
    /// assert_eq!(map.get("foo"), Some(&1));
    /// ```
    #[inline(always)]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    #[inline(always)]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline(always)]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.get_mut(key)
    }

    /// Returns true if the map contains a value for the specified key.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// map.insert("foo", 1);
    ///
    /// assert!(map.contains_key("foo"));
    /// ```
    #[inline(always)]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// - If the map did not have this key present, `None` is returned.
    /// - If the map did have this key present, the value is updated,
    ///   and the old value is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// assert_eq!(map.insert("foo", 1), None);
    /// assert_eq!(map.insert("foo", 2), Some(1));
    /// ```
    #[inline(always)]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Removes a key from the map,
    /// returning the value at the key if the key was previously in the map.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// map.insert("foo", 1);
    ///
    /// assert_eq!(map.remove("foo"), Some(1));
    /// assert!(map.is_empty());
    /// ```
    #[inline(always)]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.remove(key)
    }

    /// Removes a key from the map,
    /// returning the stored key and value if the key was previously in the map.
    #[inline(always)]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.0.remove_entry(key)
    }

    /// Gets the given key's corresponding entry in the map for in-place manipulation.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pk_utils::hash::HashMap;
    /// let mut map = HashMap::new();
    ///
    /// *map.entry("foo").or_insert(0) += 1;
    /// *map.entry("foo").or_insert(0) += 1;
    ///
    /// assert_eq!(map.get("foo"), Some(&2));
    /// ```
    #[inline(always)]
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        self.0.entry(key)
    }
}
