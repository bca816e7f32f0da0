use allocator_api2::alloc::Allocator;

use crate::error::InvariantViolation;
use super::{ NodeRef, Tree, TreeCompare };

impl<K, V, C, A> Tree<K, V, C, A>
where C: TreeCompare<K>,
      A: Allocator
{
    /// Checks key order, parent links and the red-black properties over the
    /// whole tree. Returns the black-height of the root (0 for an empty tree).
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot(self.root));
        }
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::BrokenParentLink { node: self.root, expected: NodeRef::NIL });
        }
        let mut found = 0;
        let black_height = self.check_subtree(self.root, &mut found)?;
        if found != self.len() {
            return Err(InvariantViolation::LengthMismatch { expected: self.len(), found });
        }
        let mut previous: Option<NodeRef> = None;
        let mut current = self.first_node();
        while let Some(n) = current {
            if let Some(p) = previous {
                if self.compare.less(&self.arena[n].key, &self.arena[p].key) {
                    return Err(InvariantViolation::OrderViolation { node: n, predecessor: p });
                }
            }
            previous = Some(n);
            current = self.successor(n);
        }
        Ok(black_height)
    }

    // Black nodes between n (inclusive) and the sentinel below it
    fn check_subtree(&self, n: NodeRef, found: &mut usize) -> Result<usize, InvariantViolation> {
        if n.is_nil() { return Ok(0) }
        *found += 1;
        let (left, right) = (self.left(n), self.right(n));
        for child in [left, right] {
            if child.is_nil() { continue }
            if self.parent(child) != n {
                return Err(InvariantViolation::BrokenParentLink { node: child, expected: n });
            }
            if self.is_red(n) && self.is_red(child) {
                return Err(InvariantViolation::DoubleRed { parent: n, child });
            }
        }
        let left_height = self.check_subtree(left, found)?;
        let right_height = self.check_subtree(right, found)?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeightMismatch { node: n, left: left_height, right: right_height });
        }
        Ok(left_height + usize::from(self.is_black(n)))
    }
}

impl<K, V, C, A> Tree<K, V, C, A>
where A: Allocator
{
    /// Number of edges on the longest path from the root down to a node. Empty
    /// and single-entry trees both have height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = match self.root.is_nil() {
            true => vec![],
            false => vec![(self.root, 0usize)]
        };
        while let Some((n, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [self.left(n), self.right(n)] {
                if !child.is_nil() { stack.push((child, depth + 1)) }
            }
        }
        height
    }
}
