//! A thread-safe hash set.
//!
//! See `HashSet` for details.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;

use crate::set_ref::HashSetRef;
use crate::{ConcurrentSet, SetError};

/// A thread-safe hash set implemented as a `HashMap` where the value is `()`, behind a
/// reader/writer lock.
///
/// # Examples
///
/// ```
/// use syncset::HashSet;
///
/// // Initialize a new hash set.
/// let books = HashSet::new();
///
/// // Add some books
/// books.insert("Fight Club");
/// books.insert("Three Men In A Raft");
/// books.insert("The Book of Dust");
/// books.insert("The Dry");
///
/// // Check for a specific one.
/// if !books.contains(&"The Drunken Botanist") {
///     println!("We don't have The Drunken Botanist.");
/// }
///
/// // Remove a book.
/// books.discard(&"Three Men In A Raft");
///
/// // Iterate over everything.
/// for book in books.read().iter() {
///     println!("{}", book);
/// }
/// ```
pub struct HashSet<T, S = crate::DefaultHashBuilder> {
    map: RwLock<HashMap<T, (), S>>,
}

impl<T> HashSet<T, crate::DefaultHashBuilder> {
    /// Creates an empty `HashSet`.
    ///
    /// The hash set is initially created with a capacity of 0, so it will not allocate until it
    /// is first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    /// let set: HashSet<i32> = HashSet::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `HashSet` with the specified capacity.
    ///
    /// The hash set will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the hash set will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    /// let set: HashSet<&str, _> = HashSet::with_capacity(10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, crate::DefaultHashBuilder::default())
    }
}

impl<T, S> Default for HashSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> HashSet<T, S> {
    /// Creates an empty set which will use `hash_builder` to hash values.
    ///
    /// Warning: `hash_builder` is normally randomly generated, and is designed to
    /// allow the set to be resistant to attacks that cause many collisions and
    /// very poor performance. Setting it manually using this
    /// function can expose a DoS attack vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::{HashSet, DefaultHashBuilder};
    ///
    /// let set = HashSet::with_hasher(DefaultHashBuilder::default());
    /// set.insert(1);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: RwLock::new(HashMap::with_hasher(hash_builder)),
        }
    }

    /// Creates an empty set with the specified `capacity`, using `hash_builder` to hash the
    /// values.
    ///
    /// If `capacity` is 0, the call will not allocate, and is equivalent to
    /// [`HashSet::with_hasher`].
    ///
    /// Warning: `hash_builder` is normally randomly generated, and is designed to allow the set
    /// to be resistant to attacks that cause many collisions and very poor performance.
    /// Setting it manually using this function can expose a DoS attack vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let s = RandomState::new();
    /// let set = HashSet::with_capacity_and_hasher(10, s);
    /// set.insert(1);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hash_builder)),
        }
    }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Returns `true` if the set contains no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::new();
    /// assert!(set.is_empty());
    /// set.insert("a");
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&self) {
        self.map.write().clear();
    }

    /// Locks the set for reading and returns a view of it.
    ///
    /// The set cannot be modified while the returned [`HashSetRef`] is alive, so every lookup
    /// made through it sees the same state. Calling a mutating method on this set from the thread
    /// that holds the view will deadlock.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::from([1, 2, 3]);
    /// let view = set.read();
    /// assert_eq!(view.len(), 3);
    /// assert_eq!(view.iter().sum::<i32>(), 6);
    /// ```
    pub fn read(&self) -> HashSetRef<'_, T, S> {
        HashSetRef::new(self.map.read())
    }

    /// Consumes the set and returns its values in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.map.into_inner().into_keys().collect()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the set contains the specified value.
    ///
    /// The value may be any borrowed form of the set's value type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::new();
    /// set.insert(2);
    ///
    /// assert!(set.contains(&2));
    /// assert!(!set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.read().contains_key(value)
    }

    /// Returns `true` if the set contains *every* one of `values`.
    ///
    /// Stops at the first value that is missing. With no values at all, there is nothing that
    /// could be missing, so the result is `true`. The whole check runs against a single state of
    /// the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::from(["hello", "world"]);
    ///
    /// assert!(set.has(["world", "hello"]));
    /// assert!(!set.has(["hello", "there"]));
    /// assert!(set.has(std::iter::empty::<&str>()));
    /// ```
    pub fn has<'v, Q, I>(&self, values: I) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'v,
        I: IntoIterator<Item = &'v Q>,
    {
        self.read().has(values)
    }

    /// Adds a value to the set.
    ///
    /// If the set did not have this value present, `true` is returned.
    ///
    /// If the set did have this value present, `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert!(set.contains(&2));
    /// ```
    pub fn insert(&self, value: T) -> bool {
        self.map.write().insert(value, ()).is_none()
    }

    /// Adds every one of `values` to the set, and returns the set to allow chaining.
    ///
    /// Values that are already present, or that appear more than once in `values`, are stored
    /// once; all other values are still added. The whole batch becomes visible to other threads
    /// at once.
    ///
    /// `values` is drained before the set is locked, so it is fine for the iterator to read from
    /// this same set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NoValues`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::{HashSet, SetError};
    ///
    /// let set = HashSet::new();
    /// set.add([1, 2])?.add([2, 3])?;
    /// assert_eq!(set.len(), 3);
    ///
    /// assert_eq!(set.add(Vec::new()).err(), Some(SetError::NoValues));
    /// # Ok::<(), SetError<i32>>(())
    /// ```
    pub fn add<I>(&self, values: I) -> Result<&Self, SetError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SetError::NoValues);
        }

        self.map
            .write()
            .extend(values.into_iter().map(|value| (value, ())));
        Ok(self)
    }

    /// Removes a value from the set.
    ///
    /// If the set did not have this value present, `false` is returned and the set is left
    /// untouched.
    ///
    /// If the set did have this value present, `true` is returned.
    ///
    /// The value may be any borrowed form of the set's value type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::new();
    /// set.insert(2);
    ///
    /// assert_eq!(set.discard(&2), true);
    /// assert!(!set.contains(&2));
    /// assert_eq!(set.discard(&2), false);
    /// ```
    pub fn discard<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.write().remove(value).is_some()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Removes every one of `values` from the set.
    ///
    /// Either all of the batch is removed, or none of it is.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NoValues`] if `values` is empty, and [`SetError::NotFound`] with a
    /// copy of each missing value if any of `values` is not in the set. In both cases the set is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::{HashSet, SetError};
    ///
    /// let set = HashSet::from([1, 2, 3]);
    ///
    /// set.remove(&[1, 2])?;
    /// assert!(!set.has(&[1, 2]));
    ///
    /// assert_eq!(set.remove(&[3, 4]), Err(SetError::NotFound(vec![4])));
    /// assert!(set.contains(&3));
    /// # Ok::<(), SetError<i32>>(())
    /// ```
    pub fn remove<'v, I>(&self, values: I) -> Result<(), SetError<T>>
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        let values: Vec<&T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SetError::NoValues);
        }

        let mut map = self.map.write();
        let missing: Vec<T> = values
            .iter()
            .copied()
            .filter(|value| !map.contains_key(*value))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SetError::NotFound(missing));
        }

        for value in values {
            map.remove(value);
        }
        Ok(())
    }
}

impl<T, S> HashSet<T, S>
where
    T: Clone,
{
    /// Returns a snapshot of the values in the set, in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::from([3, 1, 2]);
    /// let mut values = set.to_vec();
    /// values.sort();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.map.read().keys().cloned().collect()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set with the values that are in `self`, in `other`, or in both.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let a = HashSet::from([1, 2]);
    /// let b = HashSet::from([2, 3]);
    /// assert_eq!(a.union(&b), HashSet::from([1, 2, 3]));
    /// ```
    pub fn union<O>(&self, other: &O) -> Self
    where
        O: ConcurrentSet<T>,
    {
        ConcurrentSet::union(self, other)
    }

    /// Returns a new set with the values that are in both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let a = HashSet::from([1, 2]);
    /// let b = HashSet::from([2, 3]);
    /// assert_eq!(a.intersection(&b), HashSet::from([2]));
    /// ```
    pub fn intersection<O>(&self, other: &O) -> Self
    where
        O: ConcurrentSet<T>,
    {
        ConcurrentSet::intersection(self, other)
    }

    /// Returns a new set with the values that are in `self` but not in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let a = HashSet::from([1, 2]);
    /// let b = HashSet::from([2, 3]);
    /// assert_eq!(a.difference(&b), HashSet::from([1]));
    /// assert_eq!(b.difference(&a), HashSet::from([3]));
    /// ```
    pub fn difference<O>(&self, other: &O) -> Self
    where
        O: ConcurrentSet<T>,
    {
        ConcurrentSet::difference(self, other)
    }

    /// Returns `true` if every value in `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let a = HashSet::from([1, 2, 3]);
    /// assert!(HashSet::from([1, 2]).is_subset(&a));
    /// assert!(!HashSet::from([1, 21]).is_subset(&a));
    /// assert!(HashSet::<i32>::new().is_subset(&a));
    /// ```
    pub fn is_subset<O>(&self, other: &O) -> bool
    where
        O: ConcurrentSet<T>,
    {
        ConcurrentSet::is_subset(self, other)
    }

    /// Returns `true` if every value in `other` is also in `self`.
    ///
    /// Every set is a superset of the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let a = HashSet::from([1, 2, 3]);
    /// assert!(a.is_superset(&HashSet::from([1, 2])));
    /// assert!(!a.is_superset(&HashSet::from([1, 21])));
    /// ```
    pub fn is_superset<O>(&self, other: &O) -> bool
    where
        O: ConcurrentSet<T>,
    {
        ConcurrentSet::is_superset(self, other)
    }
}

impl<T, S> ConcurrentSet<T> for HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn new_empty(&self) -> Self {
        Self::with_hasher(self.map.read().hasher().clone())
    }

    fn insert(&self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    fn add<I>(&self, values: I) -> Result<&Self, SetError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        HashSet::add(self, values)
    }

    fn remove<'v, I>(&self, values: I) -> Result<(), SetError<T>>
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        HashSet::remove(self, values)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn has<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        HashSet::has(self, values)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&self) {
        HashSet::clear(self)
    }

    fn to_vec(&self) -> Vec<T> {
        HashSet::to_vec(self)
    }
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        // never hold both locks at once
        let ours = self.to_vec();
        let theirs = other.read();
        ours.len() == theirs.len() && theirs.has(&ours)
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
}

impl<T, S> Debug for HashSet<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.read().iter()).finish()
    }
}

impl<T, S> Clone for HashSet<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> HashSet<T, S> {
        Self {
            map: RwLock::new(self.map.read().clone()),
        }
    }
}

impl<T, S> Extend<T> for &HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // drain the iterator before taking the lock; it may read from this set
        let values: Vec<T> = iter.into_iter().collect();
        self.map
            .write()
            .extend(values.into_iter().map(|value| (value, ())));
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map
            .get_mut()
            .extend(iter.into_iter().map(|value| (value, ())));
    }
}

impl<'a, T, S> Extend<&'a T> for HashSet<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            map: RwLock::new(iter.into_iter().map(|value| (value, ())).collect()),
        }
    }
}

impl<'a, T, S> FromIterator<&'a T> for HashSet<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        Self::from_iter(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for HashSet<T, crate::DefaultHashBuilder>
where
    T: Hash + Eq,
{
    fn from(values: [T; N]) -> Self {
        Self::from_iter(values)
    }
}
