use allocator_api2::alloc::Allocator;
use std::iter::FusedIterator;

use super::{ NodeRef, Tree };

impl<K, V, C, A> Tree<K, V, C, A>
where A: Allocator
{
    /// Lazy in-order walk over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, C, A> {
        let mut iter = Iter { tree: self, current: self.root, stack: vec![], remaining: self.len() };
        iter.descend();
        iter
    }
    pub fn inorder(&self) -> Iter<'_, K, V, C, A> { self.iter() }
    pub fn keys(&self) -> Keys<'_, K, V, C, A> { Keys(self.iter()) }
    pub fn values(&self) -> Values<'_, K, V, C, A> { Values(self.iter()) }
}

/// In-order iterator driven by an explicit stack of pending ancestors, so
/// walking never recurses.
pub struct Iter<'a, K, V, C, A>
where A: Allocator
{
    tree: &'a Tree<K, V, C, A>,
    current: NodeRef,
    stack: Vec<NodeRef>,
    remaining: usize
}

impl<'a, K, V, C, A> Iter<'a, K, V, C, A>
where A: Allocator
{
    // push the left spine of `current`
    fn descend(&mut self) {
        while !self.current.is_nil() {
            self.stack.push(self.current);
            self.current = self.tree.left(self.current);
        }
    }
}

impl<'a, K, V, C, A> Iterator for Iter<'a, K, V, C, A>
where A: Allocator
{
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.descend();
        let out = self.stack.pop()?;
        let tree: &'a Tree<K, V, C, A> = self.tree;
        self.current = tree.right(out);
        self.remaining -= 1;
        let node = &tree.arena[out];
        Some((&node.key, &node.value))
    }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<K, V, C, A> ExactSizeIterator for Iter<'_, K, V, C, A> where A: Allocator {}
impl<K, V, C, A> FusedIterator for Iter<'_, K, V, C, A> where A: Allocator {}

impl<'a, K, V, C, A> IntoIterator for &'a Tree<K, V, C, A>
where A: Allocator
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C, A>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

pub struct Keys<'a, K, V, C, A>(Iter<'a, K, V, C, A>) where A: Allocator;

impl<'a, K, V, C, A> Iterator for Keys<'a, K, V, C, A>
where A: Allocator
{
    type Item = &'a K;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(|(k, _)| k) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

pub struct Values<'a, K, V, C, A>(Iter<'a, K, V, C, A>) where A: Allocator;

impl<'a, K, V, C, A> Iterator for Values<'a, K, V, C, A>
where A: Allocator
{
    type Item = &'a V;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(|(_, v)| v) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

/// Owning iterator, drains the tree smallest key first.
pub struct IntoIter<K, V, C, A>
where A: Allocator
{
    tree: Tree<K, V, C, A>
}

impl<K, V, C, A> Iterator for IntoIter<K, V, C, A>
where A: Allocator
{
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> { self.tree.pop_first() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.tree.len(), Some(self.tree.len())) }
}

impl<K, V, C, A> DoubleEndedIterator for IntoIter<K, V, C, A>
where A: Allocator
{
    fn next_back(&mut self) -> Option<Self::Item> { self.tree.pop_last() }
}

impl<K, V, C, A> ExactSizeIterator for IntoIter<K, V, C, A> where A: Allocator {}

impl<K, V, C, A> IntoIterator for Tree<K, V, C, A>
where A: Allocator
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C, A>;
    fn into_iter(self) -> Self::IntoIter { IntoIter { tree: self } }
}

#[cfg(test)]
pub mod tests {
    use crate::rbtree::{ tests::TestReturn, Tree };

    #[test]
    pub fn inorder_is_sorted_and_exact() -> TestReturn {
        let mut tree = Tree::new();
        for k in [42, 7, 19, 3, 88, 61, 7] { tree.insert(k, k + 1)?; }
        let mut iter = tree.inorder();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some((&3, &4)));
        assert_eq!(iter.len(), 6);
        let rest: Vec<i32> = iter.map(|(k, _)| *k).collect();
        assert_eq!(rest, vec![7, 7, 19, 42, 61, 88]);
        Ok(())
    }

    #[test]
    pub fn iterator_restarts_from_scratch() -> TestReturn {
        let mut tree = Tree::new();
        for k in 0..10u8 { tree.insert(k, ())?; }
        let first: Vec<u8> = tree.keys().take(3).copied().collect();
        let again: Vec<u8> = (&tree).into_iter().map(|(k, _)| *k).take(3).collect();
        assert_eq!(first, again);
        let empty: Tree<u8, ()> = Tree::new();
        assert_eq!(empty.iter().next(), None);
        Ok(())
    }

    #[test]
    pub fn deep_tree_walks_without_recursion() -> TestReturn {
        let mut tree = Tree::new();
        for k in 0..20_000u32 { tree.insert(k, ())?; }
        assert_eq!(tree.keys().count(), 20_000);
        assert!(tree.keys().zip(tree.keys().skip(1)).all(|(a, b)| a < b));
        Ok(())
    }

    #[test]
    pub fn owning_iter_drains_both_ends() -> TestReturn {
        let mut tree = Tree::new();
        for k in [3, 1, 2, 5, 4] { tree.insert(k, k * k)?; }
        let mut drain = tree.into_iter();
        assert_eq!(drain.next(), Some((1, 1)));
        assert_eq!(drain.next_back(), Some((5, 25)));
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.collect::<Vec<_>>(), vec![(2, 4), (3, 9), (4, 16)]);
        Ok(())
    }
}
