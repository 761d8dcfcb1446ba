use crate::HashSet;
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};
use std::hash::{BuildHasher, Hash};

impl<T, S> ParallelExtend<T> for HashSet<T, S>
where
    T: Hash + Eq + Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        self.par_extend_sync(par_iter);
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq + Send,
    S: BuildHasher,
{
    /// Like [`ParallelExtend::par_extend`], but through a shared reference.
    ///
    /// The values are produced in parallel and then added in one batch, so the set is only
    /// locked once.
    pub fn par_extend_sync<I>(&self, par_iter: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        let values: Vec<T> = par_iter.into_par_iter().collect();
        let mut this = self;
        this.extend(values);
    }
}

impl<T, S> FromParallelIterator<T> for HashSet<T, S>
where
    T: Hash + Eq + Send,
    S: BuildHasher + Default,
{
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        let mut created_set = HashSet::default();
        created_set.par_extend(par_iter);
        created_set
    }
}
