use allocator_api2::alloc::Allocator;
use log::trace;
use std::cmp::Ordering;

use crate::error::TreeError;
use super::{
    node::Node,
    Color, Direction, NodeRef, Tree, TreeCompare
};

impl<K, V, C, A> Tree<K, V, C, A>
where C: TreeCompare<K>,
      A: Allocator
{
    /// Inserts an entry and returns a handle to its node.
    ///
    /// Keys equal to an existing one are kept as separate entries, placed
    /// after the existing ones in iteration order. If node storage cannot be
    /// allocated the tree is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Result<NodeRef, TreeError> {
        match self.descend(&key, false) {
            Some((parent, dir)) => self.attach(parent, dir, key, value),
            None => unreachable!("descent only stops early for unique inserts")
        }
    }

    /// Inserts an entry unless an equal key is already present, in which case
    /// the tree is left untouched and `Ok(None)` is returned.
    pub fn insert_unique(&mut self, key: K, value: V) -> Result<Option<NodeRef>, TreeError> {
        match self.descend(&key, true) {
            Some((parent, dir)) => self.attach(parent, dir, key, value).map(Some),
            None => Ok(None)
        }
    }

    // traverse BST from the root with a trailing parent pointer. Returns the
    // leaf slot for key, or None if unique is set and an equal key was met.
    fn descend(&self, key: &K, unique: bool) -> Option<(NodeRef, Direction)> {
        let mut parent = NodeRef::NIL;
        let mut dir = Direction::Left;
        let mut current = self.root;
        while !current.is_nil() {
            parent = current;
            let other = &self.arena[current].key;
            dir = match unique {
                true => match self.compare.ordering(key, other) {
                    Ordering::Less => Direction::Left,
                    Ordering::Greater => Direction::Right,
                    Ordering::Equal => return None
                },
                false => match self.compare.less(key, other) {
                    true => Direction::Left,
                    false => Direction::Right
                }
            };
            current = self.child(current, dir);
        }
        Some((parent, dir))
    }

    // add as leaf under parent, then restore the red-black properties
    fn attach(&mut self, parent: NodeRef, dir: Direction, key: K, value: V) -> Result<NodeRef, TreeError> {
        let node = self.arena.try_alloc(Node::new(key, value))?;
        self.set_parent(node, parent);
        match parent.is_nil() {
            true => self.root = node,
            false => self.set_child(parent, dir, node)
        }
        self.insert_fixup(node);
        Ok(node)
    }

    // z is red, and the only possible violation is z and its parent both being red
    fn insert_fixup(&mut self, mut z: NodeRef) {
        while self.is_red(self.parent(z)) {
            // a red parent is never the root, so the grandparent is real
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let side = self.direction(parent);
            let uncle = self.child(grandparent, side.opposite());
            if self.is_red(uncle) {
                trace!("insert fixup at {:?}: red uncle, recolor and climb to {:?}", z, grandparent);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                // travel up 2 tree levels
                z = grandparent;
            } else {
                if self.child(parent, side.opposite()) == z {
                    trace!("insert fixup at {:?}: inner grandchild, rotate {:?} at parent", z, side);
                    z = parent;
                    self.rotate(z, side);
                }
                trace!("insert fixup at {:?}: outer grandchild, rotate {:?} at grandparent", z, side.opposite());
                let parent = self.parent(z);
                let grandparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
