use std::hash::Hash;

use crate::SetError;

/// The capabilities of a thread-safe set of `T`s.
///
/// All methods take `&self`; implementors are expected to synchronize internally. Set algebra
/// and the subset/superset tests are provided on top of the required methods. They read each
/// operand through [`to_vec`](ConcurrentSet::to_vec) or [`has`](ConcurrentSet::has) and never
/// hold on to one operand while reading the other.
///
/// # Examples
///
/// ```
/// use syncset::{ConcurrentSet, HashSet};
///
/// fn common_words<S: ConcurrentSet<&'static str>>(a: &S, b: &S) -> usize {
///     a.intersection(b).len()
/// }
///
/// let a = HashSet::from(["to", "be", "or", "not"]);
/// let b = HashSet::from(["not", "to", "see"]);
/// assert_eq!(common_words(&a, &b), 2);
/// ```
pub trait ConcurrentSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates a new, empty set configured like this one.
    fn new_empty(&self) -> Self
    where
        Self: Sized;

    /// Adds a value to the set. Returns `true` if it was not present before.
    fn insert(&self, value: T) -> bool;

    /// Adds every one of `values` to the set.
    ///
    /// # Errors
    ///
    /// Fails with [`SetError::NoValues`] if `values` is empty.
    fn add<I>(&self, values: I) -> Result<&Self, SetError<T>>
    where
        I: IntoIterator<Item = T>;

    /// Removes every one of `values` from the set, or none of them.
    ///
    /// # Errors
    ///
    /// Fails with [`SetError::NoValues`] if `values` is empty, and with [`SetError::NotFound`] if
    /// any of `values` is not in the set.
    fn remove<'v, I>(&self, values: I) -> Result<(), SetError<T>>
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Returns `true` if the set contains every one of `values`, and `true` for no values.
    fn has<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns the number of values in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value from the set.
    fn clear(&self);

    /// Returns a snapshot of the values in the set, in arbitrary order.
    fn to_vec(&self) -> Vec<T>;

    /// Returns a new set with the values of `self` and of `other`.
    fn union<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: ConcurrentSet<T>,
    {
        let result = self.new_empty();
        for value in self.to_vec().into_iter().chain(other.to_vec()) {
            result.insert(value);
        }
        result
    }

    /// Returns a new set with the values that are in both `self` and `other`.
    fn intersection<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: ConcurrentSet<T>,
    {
        let theirs = snapshot(other);
        let result = self.new_empty();
        for value in self.to_vec() {
            if theirs.contains(&value) {
                result.insert(value);
            }
        }
        result
    }

    /// Returns a new set with the values of `self` that are not in `other`.
    fn difference<O>(&self, other: &O) -> Self
    where
        Self: Sized,
        O: ConcurrentSet<T>,
    {
        let theirs = snapshot(other);
        let result = self.new_empty();
        for value in self.to_vec() {
            if !theirs.contains(&value) {
                result.insert(value);
            }
        }
        result
    }

    /// Returns `true` if every value of `self` is in `other`.
    ///
    /// Stops at the first value of `self` that `other` lacks. True if `self` is empty.
    fn is_subset<O>(&self, other: &O) -> bool
    where
        O: ConcurrentSet<T>,
    {
        other.has(&self.to_vec())
    }

    /// Returns `true` if every value of `other` is in `self`.
    ///
    /// Stops at the first value of `other` that `self` lacks. True if `other` is empty.
    fn is_superset<O>(&self, other: &O) -> bool
    where
        O: ConcurrentSet<T>,
    {
        self.has(&other.to_vec())
    }
}

fn snapshot<T, O>(set: &O) -> std::collections::HashSet<T, crate::DefaultHashBuilder>
where
    T: Hash + Eq + Clone,
    O: ConcurrentSet<T>,
{
    set.to_vec().into_iter().collect()
}
