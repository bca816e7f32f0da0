use std::fmt::{ Debug, Formatter, Result as FmtResult };

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red = 0,
    Black
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Left = 0,
    Right
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left
        }
    }
}

/// Handle to a node slot inside a tree's arena.
///
/// A handle is only a lookup key: it does not keep the node alive, and it goes
/// stale once the entry it names is removed (the slot may later be reused by
/// another insert). `NodeRef::NIL` names the sentinel.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef(pub(crate) usize);

impl NodeRef {
    pub const NIL: NodeRef = NodeRef(usize::MAX);

    pub fn is_nil(self) -> bool { self == Self::NIL }
    pub(crate) fn index(self) -> usize { self.0 }
}

impl Debug for NodeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.is_nil() {
            true => write!(f, "NodeRef(nil)"),
            false => write!(f, "NodeRef({})", self.0)
        }
    }
}

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: NodeRef,
    pub(crate) right: NodeRef,
    pub(crate) parent: NodeRef
}

impl<K, V> Node<K, V> {
    // Nodes are always born red, hanging off the sentinel
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: NodeRef::NIL,
            right: NodeRef::NIL,
            parent: NodeRef::NIL
        }
    }
    pub(crate) fn child(&self, dir: Direction) -> NodeRef {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right
        }
    }
    pub(crate) fn child_mut(&mut self, dir: Direction) -> &mut NodeRef {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right
        }
    }
}

/// The tree's shared leaf / parent-of-root marker. Always black. The only
/// thing it remembers is a scratch parent link, set when a deletion splices
/// the sentinel into a vacated slot so the erase fixup can climb from it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sentinel {
    pub(crate) parent: NodeRef
}

impl Sentinel {
    pub(crate) const COLOR: Color = Color::Black;
    pub(crate) fn new() -> Self { Self { parent: NodeRef::NIL } }
}

#[cfg(test)]
pub mod tests {
    use super::{ Color, Direction, Node, NodeRef, Sentinel };

    #[test]
    pub fn new_node_is_red_leaf() {
        let node = Node::new(7u32, "seven");
        assert_eq!(node.color, Color::Red);
        assert!(node.left.is_nil() && node.right.is_nil() && node.parent.is_nil());
        assert_eq!(node.child(Direction::Left), NodeRef::NIL);
    }

    #[test]
    pub fn child_mut_follows_direction() {
        let mut node = Node::new(1u32, ());
        *node.child_mut(Direction::Right) = NodeRef(3);
        assert_eq!(node.right, NodeRef(3));
        assert_eq!(node.child(Direction::Right.opposite()), NodeRef::NIL);
    }

    #[test]
    pub fn sentinel_is_black() {
        assert_eq!(Sentinel::COLOR, Color::Black);
        assert!(Sentinel::new().parent.is_nil());
        assert_eq!(format!("{:?}", NodeRef::NIL), "NodeRef(nil)");
    }
}
