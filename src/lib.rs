//! A thread-safe hash set with set algebra.
//!
//! [`HashSet`] is an unordered collection of unique values that can be shared between threads
//! (typically behind an [`Arc`](std::sync::Arc)) and mutated through a shared reference. It is a
//! hash map from value to `()` guarded by a single reader/writer lock: lookups take the lock in
//! shared mode, mutations take it in exclusive mode, and every public operation is atomic with
//! respect to every other operation on the same set.
//!
//! # Examples
//!
//! ```
//! use syncset::HashSet;
//!
//! let books = HashSet::new();
//! books.add(["Fight Club", "Three Men In A Raft", "The Dry"])?;
//!
//! assert!(books.has(["The Dry", "Fight Club"]));
//! assert!(!books.contains("The Drunken Botanist"));
//!
//! books.remove(&["Three Men In A Raft"])?;
//! assert_eq!(books.len(), 2);
//! # Ok::<(), syncset::SetError<&str>>(())
//! ```
//!
//! # Batches and errors
//!
//! [`HashSet::add`] and [`HashSet::remove`] operate on batches of values. A batch is applied
//! under one acquisition of the lock, so other threads observe either none or all of it. An empty
//! batch is rejected with [`SetError::NoValues`] by both operations. Removing a value that is not
//! in the set is reported as [`SetError::NotFound`], and in that case nothing from the batch is
//! removed. For single values, [`HashSet::insert`] and [`HashSet::discard`] return a `bool`
//! instead.
//!
//! # Set algebra
//!
//! [`HashSet::union`], [`HashSet::intersection`] and [`HashSet::difference`] always produce a
//! new, independent set; neither operand is modified. [`HashSet::is_subset`] and
//! [`HashSet::is_superset`] hold iff every value of one side is present in the other, and are
//! vacuously true when that side is empty.
//!
//! The algebra methods work on snapshots. Each operand is read under its own lock, one after the
//! other, and no lock of one set is ever held while the lock of the other set is taken. Two
//! threads computing `a.union(&b)` and `b.union(&a)` at the same time therefore cannot deadlock,
//! and `a.union(&a)` is fine too. The flip side is that the result reflects each operand as it
//! was at the moment it was read, which need not be the same instant for both.
//!
//! The operations are also available through the [`ConcurrentSet`] trait, so that code can be
//! written against the capability rather than against [`HashSet`] itself. The binary operations
//! accept any other [`ConcurrentSet`] as their operand.
//!
//! # Consistent reads
//!
//! [`HashSet::read`] returns a [`HashSetRef`] that holds the lock in shared mode for as long as
//! it lives. Use it to iterate over the set, or to run several lookups against one consistent
//! state. Writers block while a [`HashSetRef`] is alive, so do not keep one around longer than
//! needed, and never mutate a set from a thread that holds a [`HashSetRef`] to it.
//!
//! # Hashing
//!
//! By default the set uses [`ahash`], through [`DefaultHashBuilder`]. Any other
//! [`BuildHasher`](std::hash::BuildHasher) can be supplied with [`HashSet::with_hasher`] or
//! [`HashSet::with_capacity_and_hasher`]. Sets derived through set algebra use a clone of the
//! receiver's hasher.
//!
//! # Optional features
//!
//! - `serde`: [`HashSet`] (and [`HashSetRef`]) serialize as a sequence of values, and
//!   [`HashSet`] deserializes from one.
//! - `rayon`: [`HashSet`] implements `ParallelExtend` and `FromParallelIterator`.
#![deny(
    missing_docs,
    missing_debug_implementations,
    unreachable_pub,
    rustdoc::broken_intra_doc_links
)]
#![warn(rust_2018_idioms)]

mod error;
mod set;
mod set_ref;
mod traits;

#[cfg(feature = "rayon")]
mod rayon_impls;

#[cfg(feature = "serde")]
mod serde_impls;

/// Types needed to iterate over a [`HashSetRef`].
pub mod iter {
    pub use crate::set_ref::Iter;
}

pub use error::SetError;
pub use set::HashSet;
pub use set_ref::HashSetRef;
pub use traits::ConcurrentSet;

/// Default hasher for [`HashSet`].
pub type DefaultHashBuilder = ahash::RandomState;
