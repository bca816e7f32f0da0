use allocator_api2::alloc::Allocator;
use log::trace;

use super::{ Color, Direction, NodeRef, Tree, TreeCompare };

impl<K, V, C, A> Tree<K, V, C, A>
where C: TreeCompare<K>,
      A: Allocator
{
    /// Removes the entry for `key` (the earliest inserted one, if the key was
    /// inserted several times) and returns it. Erasing an absent key does
    /// nothing and returns `None`.
    pub fn erase(&mut self, key: &K) -> Option<(K, V)> {
        let z = self.find_node(key)?;
        Some(self.erase_node(z))
    }
}

impl<K, V, C, A> Tree<K, V, C, A>
where A: Allocator
{
    /// Removes the entry named by `node`. Returns `None` if the handle is
    /// stale.
    pub fn remove_node(&mut self, node: NodeRef) -> Option<(K, V)> {
        self.arena.get(node)?;
        Some(self.erase_node(node))
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first_node()?;
        Some(self.erase_node(first))
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last_node()?;
        Some(self.erase_node(last))
    }

    // NOTE: Assume that z is a live node
    fn erase_node(&mut self, z: NodeRef) -> (K, V) {
        // y is the node that actually leaves its slot: z itself, or z's
        // successor when z has two children
        let mut y_original_color = self.color(z);
        let x;
        if self.left(z).is_nil() {
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z).is_nil() {
            x = self.left(z);
            self.transplant(z, x);
        } else {
            let y = self.extreme(self.right(z), Direction::Left);
            y_original_color = self.color(y);
            x = self.right(y);
            if self.parent(y) == z {
                // x may be the sentinel, it still has to know where it sits
                self.set_parent(x, y);
            } else {
                self.transplant(y, x);
                let right = self.right(z);
                self.set_child(y, Direction::Right, right);
                self.set_parent(right, y);
            }
            self.transplant(z, y);
            let left = self.left(z);
            self.set_child(y, Direction::Left, left);
            self.set_parent(left, y);
            let color = self.color(z);
            self.set_color(y, color);
        }
        let node = self.arena.release(z);
        if y_original_color == Color::Black {
            self.erase_fixup(x);
        }
        (node.key, node.value)
    }

    // x carries an extra black. The loop pushes it up until it lands on a red
    // node or the root, or rotations absorb it.
    fn erase_fixup(&mut self, mut x: NodeRef) {
        while x != self.root && self.is_black(x) {
            let parent = self.parent(x);
            let side = self.direction(x);
            let far = side.opposite();
            // x's subtree is a black level short, so its sibling is real
            let mut w = self.child(parent, far);
            if self.is_red(w) {
                trace!("erase fixup at {:?}: red sibling, rotate {:?} at parent", x, side);
                self.set_color(w, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                w = self.child(parent, far);
            }
            if self.is_black(self.left(w)) && self.is_black(self.right(w)) {
                trace!("erase fixup at {:?}: black nephews, recolor and climb to {:?}", x, parent);
                self.set_color(w, Color::Red);
                x = parent;
            } else {
                if self.is_black(self.child(w, far)) {
                    trace!("erase fixup at {:?}: red near nephew, rotate {:?} at sibling", x, far);
                    let near = self.child(w, side);
                    self.set_color(near, Color::Black);
                    self.set_color(w, Color::Red);
                    self.rotate(w, far);
                    w = self.child(parent, far);
                }
                trace!("erase fixup at {:?}: red far nephew, rotate {:?} at parent", x, side);
                let parent_color = self.color(parent);
                self.set_color(w, parent_color);
                self.set_color(parent, Color::Black);
                let far_nephew = self.child(w, far);
                self.set_color(far_nephew, Color::Black);
                self.rotate(parent, side);
                x = self.root;
            }
        }
        self.set_color(x, Color::Black);
    }
}
