use std::borrow::Borrow;
use std::collections::{hash_map, HashMap};
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLockReadGuard;

/// A read-locked view of a [`HashSet`](crate::HashSet), constructed with
/// [`HashSet::read`](crate::HashSet::read).
///
/// The set is held in shared mode for the lifetime of this reference: other readers proceed,
/// writers wait until it is dropped.
pub struct HashSetRef<'set, T, S = crate::DefaultHashBuilder> {
    map: RwLockReadGuard<'set, HashMap<T, (), S>>,
}

impl<'set, T, S> HashSetRef<'set, T, S> {
    pub(crate) fn new(map: RwLockReadGuard<'set, HashMap<T, (), S>>) -> Self {
        Self { map }
    }

    /// An iterator visiting all values in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use syncset::HashSet;
    ///
    /// let set = HashSet::from([1, 2]);
    /// for x in set.read().iter() {
    ///     println!("{}", x);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.map.keys(),
        }
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T, S> HashSetRef<'_, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the set contains the specified value.
    ///
    /// See [`HashSet::contains`](crate::HashSet::contains).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(value)
    }

    /// Returns `true` if the set contains every one of `values`.
    ///
    /// See [`HashSet::has`](crate::HashSet::has).
    pub fn has<'v, Q, I>(&self, values: I) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'v,
        I: IntoIterator<Item = &'v Q>,
    {
        values.into_iter().all(|value| self.map.contains_key(value))
    }
}

impl<'a, T, S> IntoIterator for &'a HashSetRef<'_, T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> Debug for HashSetRef<'_, T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> PartialEq for HashSetRef<'_, T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.has(other.iter())
    }
}

/// An iterator over the values of a [`HashSetRef`].
///
/// See [`HashSetRef::iter`] for details.
#[derive(Debug, Clone)]
pub struct Iter<'g, T> {
    keys: hash_map::Keys<'g, T, ()>,
}

impl<'g, T> Iterator for Iter<'g, T> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
