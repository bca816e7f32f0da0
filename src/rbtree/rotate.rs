use allocator_api2::alloc::Allocator;
use log::trace;

use super::{ Direction, NodeRef, Tree };

impl<K, V, C, A> Tree<K, V, C, A>
where A: Allocator
{
    //
    //      p           p
    //     /           /
    //    n           r
    //   / \    =>   / \
    //  x   r       n   y
    //     / \     / \
    //    o  y    x   o
    //
    // NOTE: Assume that r is a real node. p may be the sentinel.
    pub(super) fn rotate_left(&mut self, n: NodeRef) {
        let r = self.right(n);
        debug_assert!(!r.is_nil(), "left rotation needs a right child");
        trace!("rotate left at {:?}, lifting {:?}", n, r);
        let o = self.left(r);
        self.set_child(n, Direction::Right, o);
        if !o.is_nil() { self.set_parent(o, n) }
        let p = self.parent(n);
        self.set_parent(r, p);
        self.replace_child(p, n, r);
        self.set_child(r, Direction::Left, n);
        self.set_parent(n, r);
    }

    //
    //        p           p
    //       /           /
    //      n           r
    //     / \    =>   / \
    //    r   y       x   n
    //   / \             / \
    //  x  o            o  y
    //
    // NOTE: Assume that r is a real node. p may be the sentinel.
    pub(super) fn rotate_right(&mut self, n: NodeRef) {
        let r = self.left(n);
        debug_assert!(!r.is_nil(), "right rotation needs a left child");
        trace!("rotate right at {:?}, lifting {:?}", n, r);
        let o = self.right(r);
        self.set_child(n, Direction::Left, o);
        if !o.is_nil() { self.set_parent(o, n) }
        let p = self.parent(n);
        self.set_parent(r, p);
        self.replace_child(p, n, r);
        self.set_child(r, Direction::Right, n);
        self.set_parent(n, r);
    }

    // Rotating towards dir moves n down on that side
    pub(super) fn rotate(&mut self, n: NodeRef, dir: Direction) {
        match dir {
            Direction::Left => self.rotate_left(n),
            Direction::Right => self.rotate_right(n)
        }
    }

    // Points whichever of p's child links held `old` (or the root, when p is
    // the sentinel) at `new`. Does not touch `new`'s parent link.
    fn replace_child(&mut self, p: NodeRef, old: NodeRef, new: NodeRef) {
        if p.is_nil() {
            self.root = new;
        } else if self.left(p) == old {
            self.set_child(p, Direction::Left, new);
        } else {
            self.set_child(p, Direction::Right, new);
        }
    }

    /// Puts `v` into `u`'s slot under `u`'s parent. `u`'s own children are left
    /// alone. `v` may be the sentinel, in which case its scratch parent link is
    /// set so the erase fixup can climb from it.
    pub(super) fn transplant(&mut self, u: NodeRef, v: NodeRef) {
        let p = self.parent(u);
        self.replace_child(p, u, v);
        self.set_parent(v, p);
    }
}

#[cfg(test)]
pub mod tests {
    use crate::rbtree::{ tests::{ TestReturn, TreeAssertion }, Color, Tree };

    // Builds
    //
    //      4B
    //     /  \
    //   2B    6B
    //  / \   /  \
    // 1R 3R 5R  7R
    fn balanced() -> Result<Tree<u32, ()>, Box<dyn std::error::Error>> {
        let mut tree = Tree::new();
        for k in [4, 2, 6, 1, 3, 5, 7] { tree.insert(k, ())?; }
        Ok(tree)
    }

    #[test]
    pub fn rotate_left_at_root() -> TestReturn {
        let mut tree = balanced()?;
        let root = TreeAssertion::new(&tree).node(4);
        tree.rotate_left(root);
        //        6
        //       / \
        //      4   7
        //     / \
        //    2   5
        let asserter = TreeAssertion::new(&tree);
        asserter.check_node(6, Color::Black, Some(4), None, Some(7));
        asserter.check_node(4, Color::Black, Some(2), Some(6), Some(5));
        asserter.check_node(5, Color::Red, None, Some(4), None);
        asserter.check_node(2, Color::Black, Some(1), Some(4), Some(3));
        assert_eq!(tree.root(), Some(asserter.node(6)));
        let keys: Vec<u32> = tree.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
        Ok(())
    }

    #[test]
    pub fn rotate_right_then_left_restores_shape() -> TestReturn {
        let mut tree = balanced()?;
        let two = TreeAssertion::new(&tree).node(2);
        tree.rotate_right(two);
        {
            // 1 lifted into 2's slot under 4, 2 keeps 3 on its right
            let asserter = TreeAssertion::new(&tree);
            asserter.check_node(1, Color::Red, None, Some(4), Some(2));
            asserter.check_node(2, Color::Black, None, Some(1), Some(3));
            asserter.check_node(4, Color::Black, Some(1), None, Some(6));
        }
        let one = TreeAssertion::new(&tree).node(1);
        tree.rotate_left(one);
        let asserter = TreeAssertion::new(&tree);
        asserter.check_node(2, Color::Black, Some(1), Some(4), Some(3));
        asserter.check_node(1, Color::Red, None, Some(2), None);
        asserter.check_node(3, Color::Red, None, Some(2), None);
        tree.validate()?;
        Ok(())
    }

    #[test]
    pub fn transplant_sentinel_records_parent() -> TestReturn {
        let mut tree = balanced()?;
        let asserter = TreeAssertion::new(&tree);
        let (seven, six) = (asserter.node(7), asserter.node(6));
        tree.transplant(seven, crate::rbtree::NodeRef::NIL);
        assert!(tree.right(six).is_nil());
        assert_eq!(tree.parent(crate::rbtree::NodeRef::NIL), six);
        Ok(())
    }
}
