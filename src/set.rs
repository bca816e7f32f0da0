use allocator_api2::alloc::{ Allocator, Global };
use std::fmt::{ Debug, Formatter, Result as FmtResult };

use crate::{
    error::TreeError,
    rbtree::{ CompareLess, Keys, Tree, TreeCompare }
};

/// Ordered set of unique values on top of [`Tree`].
pub struct Set<T, C = CompareLess, A = Global>
where A: Allocator
{
    _impl: Tree<T, (), C, A>
}

impl<T> Set<T, CompareLess, Global>
where T: Ord
{
    pub fn new() -> Self { Self { _impl: Tree::new() } }
}

impl<T, C, A> Set<T, C, A>
where C: TreeCompare<T>,
      A: Allocator
{
    pub fn new_in(compare: C, alloc: A) -> Self { Self { _impl: Tree::new_in(compare, alloc) } }

    /// Returns `Ok(false)` without touching the set if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> Result<bool, TreeError> {
        Ok(self._impl.insert_unique(value, ())?.is_some())
    }
    pub fn contains(&self, value: &T) -> bool { self._impl.contains_key(value) }
    pub fn remove(&mut self, value: &T) -> Option<T> { self._impl.erase(value).map(|(v, _)| v) }
}

impl<T, C, A> Set<T, C, A>
where A: Allocator
{
    pub fn len(&self) -> usize { self._impl.len() }
    pub fn is_empty(&self) -> bool { self._impl.is_empty() }
    pub fn first(&self) -> Option<&T> { self._impl.first().map(|(v, _)| v) }
    pub fn last(&self) -> Option<&T> { self._impl.last().map(|(v, _)| v) }
    pub fn iter(&self) -> Keys<'_, T, (), C, A> { self._impl.keys() }
}

impl<T> Default for Set<T, CompareLess, Global>
where T: Ord
{
    fn default() -> Self { Self::new() }
}

impl<T, C, A> Debug for Set<T, C, A>
where T: Debug,
      A: Allocator
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}
