//! Red-black tree keyed by a user-supplied strict weak ordering.
//!
//! Nodes live in an arena owned by the tree and refer to each other through
//! [`NodeRef`] handles. Every leaf link and the root's parent link point at the
//! shared sentinel ([`NodeRef::NIL`]), which is always black. After every public
//! operation the tree satisfies:
//!
//! 1. every node is red or black
//! 2. the root is black
//! 3. the sentinel is black
//! 4. a red node has no red child
//! 5. every path from a node down to the sentinel crosses the same number of
//!    black nodes
//!
//! so a tree of `n` entries is at most `2 * log2(n + 1)` nodes tall.
//!
//! Equal keys are allowed. They are kept in insertion order, and key-based
//! lookups and removals address the earliest inserted one.

use allocator_api2::alloc::{ Allocator, Global };
use std::fmt::{ Debug, Formatter, Result as FmtResult };

pub mod compare;
pub mod node;
mod arena;
mod erase;
mod insert;
mod iter;
mod rotate;
mod search;
mod validate;

pub use compare::{ CompareBy, CompareGreater, CompareLess, TreeCompare };
pub use iter::{ IntoIter, Iter, Keys, Values };
pub use node::{ Color, Direction, NodeRef };

use crate::error::TreeError;
use arena::Arena;
use node::Sentinel;

pub struct Tree<K, V, C = CompareLess, A = Global>
where A: Allocator
{
    arena: Arena<K, V, A>,
    root: NodeRef,
    nil: Sentinel,
    compare: C
}

impl<K, V> Tree<K, V, CompareLess, Global>
where K: Ord
{
    pub fn new() -> Self { Self::new_in(CompareLess, Global) }
}

impl<K, V, C> Tree<K, V, C, Global>
where C: TreeCompare<K>
{
    pub fn with_comparator(compare: C) -> Self { Self::new_in(compare, Global) }
}

impl<K, V, C, A> Tree<K, V, C, A>
where C: TreeCompare<K>,
      A: Allocator
{
    pub fn new_in(compare: C, alloc: A) -> Self {
        Self { arena: Arena::new_in(alloc), root: NodeRef::NIL, nil: Sentinel::new(), compare }
    }

    /// Creates an empty tree with room for `capacity` entries up front.
    pub fn with_capacity_in(compare: C, alloc: A, capacity: usize) -> Result<Self, TreeError> {
        let mut tree = Self::new_in(compare, alloc);
        tree.arena.try_reserve(capacity)?;
        Ok(tree)
    }

    pub fn comparator(&self) -> &C { &self.compare }
}

impl<K, V, C, A> Tree<K, V, C, A>
where A: Allocator
{
    pub fn len(&self) -> usize { self.arena.len() }
    pub fn is_empty(&self) -> bool { self.arena.len() == 0 }
    pub fn root(&self) -> Option<NodeRef> {
        match self.root.is_nil() {
            true => None,
            false => Some(self.root)
        }
    }

    /// Drops every entry. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NodeRef::NIL;
        self.nil = Sentinel::new();
    }

    // Link accessors. The sentinel answers black for its color and its scratch
    // link for its parent, so fixups never branch on "no node".
    fn color(&self, n: NodeRef) -> Color {
        match n.is_nil() {
            true => Sentinel::COLOR,
            false => self.arena[n].color
        }
    }
    fn set_color(&mut self, n: NodeRef, color: Color) {
        if n.is_nil() {
            debug_assert!(color == Sentinel::COLOR, "sentinel can only be black");
            return;
        }
        self.arena[n].color = color;
    }
    fn is_red(&self, n: NodeRef) -> bool { self.color(n) == Color::Red }
    fn is_black(&self, n: NodeRef) -> bool { self.color(n) == Color::Black }

    fn parent(&self, n: NodeRef) -> NodeRef {
        match n.is_nil() {
            true => self.nil.parent,
            false => self.arena[n].parent
        }
    }
    fn set_parent(&mut self, n: NodeRef, parent: NodeRef) {
        match n.is_nil() {
            true => self.nil.parent = parent,
            false => self.arena[n].parent = parent
        }
    }
    fn child(&self, n: NodeRef, dir: Direction) -> NodeRef {
        match n.is_nil() {
            true => NodeRef::NIL,
            false => self.arena[n].child(dir)
        }
    }
    fn left(&self, n: NodeRef) -> NodeRef { self.child(n, Direction::Left) }
    fn right(&self, n: NodeRef) -> NodeRef { self.child(n, Direction::Right) }
    fn set_child(&mut self, n: NodeRef, dir: Direction, child: NodeRef) {
        *self.arena[n].child_mut(dir) = child;
    }

    // NOTE: Assume that n is a real node with a real parent
    fn direction(&self, n: NodeRef) -> Direction {
        match self.right(self.parent(n)) == n {
            true => Direction::Right,
            false => Direction::Left
        }
    }
}

impl<K, V> Default for Tree<K, V, CompareLess, Global>
where K: Ord
{
    fn default() -> Self { Self::new() }
}

impl<K, V, C, A> Debug for Tree<K, V, C, A>
where K: Debug,
      V: Debug,
      A: Allocator
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
pub mod tests {
    use super::{ Color, CompareGreater, CompareLess, NodeRef, Tree, TreeCompare };
    use allocator_api2::alloc::Global;
    use std::error::Error;

    pub type TestReturn = Result<(), Box<dyn Error>>;

    pub fn init_logging() {
        use simplelog::{ Config, LevelFilter, TestLogger };
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    }

    /// Checks a node's color and its three links against expected neighbours
    /// (`None` meaning the sentinel).
    pub struct TreeAssertion<'a, K, V, C> {
        tree: &'a Tree<K, V, C, Global>
    }
    impl<'a, K, V, C> TreeAssertion<'a, K, V, C>
    where K: Ord + std::fmt::Debug,
          C: TreeCompare<K>
    {
        pub fn new(tree: &'a Tree<K, V, C, Global>) -> Self { Self { tree } }

        pub fn node(&self, key: K) -> NodeRef {
            match self.tree.find_node(&key) {
                Some(n) => n,
                None => panic!("Value {:?} should be in the tree", key)
            }
        }

        pub fn check_node(&self, key: K, color: Color, left: Option<K>, parent: Option<K>, right: Option<K>) {
            let n = self.node(key);
            let node = &self.tree.arena[n];
            let expect = |k: Option<K>| k.map_or(NodeRef::NIL, |k| self.node(k));
            assert!(node.color == color, "<{:?}> should be *{:?}* instead of {:?}", node.key, color, node.color);
            assert!(node.left == expect(left), "Left child for <{:?}> is wrong", node.key);
            assert!(node.parent == expect(parent), "Parent node for <{:?}> is wrong", node.key);
            assert!(node.right == expect(right), "Right child for <{:?}> is wrong", node.key);
        }
    }

    #[test]
    pub fn test_logger_shows_trace() {
        init_logging();
        assert!(log::log_enabled!(log::Level::Trace), "Rotation traces should reach the test log");
    }

    #[test]
    pub fn create_blank_tree() -> TestReturn {
        let tree: Tree<u32, u32> = Tree::new();
        assert!(tree.len() == 0, "Length for new tree should be zero");
        assert!(tree.is_empty(), "is_empty should be true for new tree");
        assert!(tree.root().is_none());
        assert_eq!(tree.color(NodeRef::NIL), Color::Black);
        tree.validate()?;
        Ok(())
    }

    #[test]
    pub fn clear_resets_tree() -> TestReturn {
        let mut tree = Tree::new();
        for k in 0..32u32 { tree.insert(k, k * 2)?; }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.find(&3), None);
        tree.insert(3, 9)?;
        assert_eq!(tree.find(&3), Some(&9));
        tree.validate()?;
        Ok(())
    }

    #[test]
    pub fn reverse_comparator_orders_descending() -> TestReturn {
        let mut tree = Tree::with_comparator(CompareGreater);
        for k in [4, 9, 1, 7] { tree.insert(k, ())?; }
        let keys: Vec<i32> = tree.keys().copied().collect();
        assert_eq!(keys, vec![9, 7, 4, 1]);
        tree.validate()?;
        Ok(())
    }

    #[test]
    pub fn with_capacity_prereserves() -> TestReturn {
        let tree: Tree<u8, u8> = Tree::with_capacity_in(CompareLess, Global, 16)?;
        assert!(tree.arena.capacity() >= 16);
        Ok(())
    }

    #[test]
    pub fn debug_lists_entries_in_order() -> TestReturn {
        let mut tree = Tree::new();
        tree.insert(2, "b")?;
        tree.insert(1, "a")?;
        assert_eq!(format!("{:?}", tree), r#"{1: "a", 2: "b"}"#);
        Ok(())
    }
}
