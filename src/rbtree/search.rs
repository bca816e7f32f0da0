use allocator_api2::alloc::Allocator;
use std::cmp::Ordering;

use super::{ Direction, NodeRef, Tree, TreeCompare };

impl<K, V, C, A> Tree<K, V, C, A>
where C: TreeCompare<K>,
      A: Allocator
{
    /// Finds the node holding `key`. Among equal keys this is the earliest
    /// inserted one.
    pub fn find_node(&self, key: &K) -> Option<NodeRef> {
        let mut current = self.root;
        let mut found = None;
        while !current.is_nil() {
            match self.compare.ordering(key, &self.arena[current].key) {
                Ordering::Less => current = self.left(current),
                Ordering::Greater => current = self.right(current),
                // keep descending left, earlier duplicates sit there
                Ordering::Equal => {
                    found = Some(current);
                    current = self.left(current);
                }
            }
        }
        found
    }

    pub fn find(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|n| &self.arena[n].value)
    }

    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let n = self.find_node(key)?;
        Some(&mut self.arena[n].value)
    }

    pub fn contains_key(&self, key: &K) -> bool { self.find_node(key).is_some() }

    /// First node whose key is not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Option<NodeRef> {
        let mut current = self.root;
        let mut found = None;
        while !current.is_nil() {
            if self.compare.less(&self.arena[current].key, key) {
                current = self.right(current);
            } else {
                found = Some(current);
                current = self.left(current);
            }
        }
        found
    }
}

impl<K, V, C, A> Tree<K, V, C, A>
where A: Allocator
{
    pub fn get_node(&self, node: NodeRef) -> Option<(&K, &V)> {
        self.arena.get(node).map(|n| (&n.key, &n.value))
    }

    /// Keys are never handed out mutably, changing one would break the order.
    pub fn get_node_mut(&mut self, node: NodeRef) -> Option<(&K, &mut V)> {
        self.arena.get_mut(node).map(|n| (&n.key, &mut n.value))
    }

    pub fn first_node(&self) -> Option<NodeRef> { self.leftmost(self.root) }
    pub fn last_node(&self) -> Option<NodeRef> { self.rightmost(self.root) }
    pub fn first(&self) -> Option<(&K, &V)> { self.first_node().and_then(|n| self.get_node(n)) }
    pub fn last(&self) -> Option<(&K, &V)> { self.last_node().and_then(|n| self.get_node(n)) }

    /// Smallest node in the subtree rooted at `node`.
    pub fn leftmost(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.get(node)?;
        Some(self.extreme(node, Direction::Left))
    }

    /// Largest node in the subtree rooted at `node`.
    pub fn rightmost(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.get(node)?;
        Some(self.extreme(node, Direction::Right))
    }

    /// Next node in key order, or `None` if `node` holds the largest key.
    pub fn successor(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.get(node)?;
        let next = self.step(node, Direction::Right);
        match next.is_nil() {
            true => None,
            false => Some(next)
        }
    }

    /// Previous node in key order, or `None` if `node` holds the smallest key.
    pub fn predecessor(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.get(node)?;
        let prev = self.step(node, Direction::Left);
        match prev.is_nil() {
            true => None,
            false => Some(prev)
        }
    }

    // NOTE: Assume that n is a real node
    pub(super) fn extreme(&self, mut n: NodeRef, dir: Direction) -> NodeRef {
        let mut next = self.child(n, dir);
        while !next.is_nil() {
            n = next;
            next = self.child(n, dir);
        }
        n
    }

    // In-order neighbour of n towards dir. Takes the extreme of the child
    // subtree on that side if there is one, otherwise climbs until leaving a
    // chain of dir-side children. Sentinel when there is no neighbour.
    fn step(&self, mut n: NodeRef, dir: Direction) -> NodeRef {
        let child = self.child(n, dir);
        if !child.is_nil() {
            return self.extreme(child, dir.opposite());
        }
        let mut parent = self.parent(n);
        while !parent.is_nil() && self.child(parent, dir) == n {
            n = parent;
            parent = self.parent(n);
        }
        parent
    }
}
