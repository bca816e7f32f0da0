use allocator_api2::{ alloc::Allocator, vec::Vec };
use log::{ debug, warn };
use std::{
    mem,
    ops::{ Index, IndexMut }
};

use crate::error::TreeError;
use super::node::{ Node, NodeRef };

enum Slot<K, V> {
    Occupied(Node<K, V>),
    // next vacant slot in the free list
    Vacant(Option<usize>)
}

/// Owns every node of a tree. Nodes are addressed by `NodeRef` and vacated
/// slots are recycled through a free list.
pub(crate) struct Arena<K, V, A>
where A: Allocator
{
    slots: Vec<Slot<K, V>, A>,
    free: Option<usize>,
    len: usize
}

impl<K, V, A> Arena<K, V, A>
where A: Allocator
{
    pub(crate) fn new_in(alloc: A) -> Self {
        Self { slots: Vec::new_in(alloc), free: None, len: 0 }
    }
    pub(crate) fn len(&self) -> usize { self.len }
    pub(crate) fn capacity(&self) -> usize { self.slots.capacity() }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TreeError> {
        let vacant = self.slots.len() - self.len;
        if additional <= vacant { return Ok(()) }
        let needed = additional - vacant;
        if self.slots.len().saturating_add(needed) >= NodeRef::NIL.index() {
            return Err(TreeError::CapacityOverflow);
        }
        self.slots.try_reserve(needed).map_err(|_| {
            warn!("arena failed to reserve {} more node slots", needed);
            TreeError::AllocFailed
        })
    }

    /// Stores `node` and returns its handle. On failure nothing is stored and
    /// the node is dropped.
    pub(crate) fn try_alloc(&mut self, node: Node<K, V>) -> Result<NodeRef, TreeError> {
        let index = match self.free {
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(node)) {
                    Slot::Vacant(next) => self.free = next,
                    Slot::Occupied(_) => unreachable!("free list points at a live node")
                }
                debug!("reusing node slot {}", index);
                index
            },
            None => {
                if self.slots.len() == self.slots.capacity() {
                    self.try_reserve(1)?;
                    debug!("arena grew to {} node slots", self.capacity());
                }
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        Ok(NodeRef(index))
    }

    /// Takes the node out of its slot, handing the slot to the free list.
    pub(crate) fn release(&mut self, at: NodeRef) -> Node<K, V> {
        let index = at.index();
        match mem::replace(&mut self.slots[index], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = Some(index);
                self.len -= 1;
                node
            },
            Slot::Vacant(_) => panic!("released vacant node slot {}", index)
        }
    }

    pub(crate) fn get(&self, at: NodeRef) -> Option<&Node<K, V>> {
        match self.slots.get(at.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None
        }
    }
    pub(crate) fn get_mut(&mut self, at: NodeRef) -> Option<&mut Node<K, V>> {
        match self.slots.get_mut(at.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<K, V, A> Index<NodeRef> for Arena<K, V, A>
where A: Allocator
{
    type Output = Node<K, V>;
    fn index(&self, at: NodeRef) -> &Self::Output {
        match self.get(at) {
            Some(node) => node,
            None => panic!("{:?} does not name a live node", at)
        }
    }
}

impl<K, V, A> IndexMut<NodeRef> for Arena<K, V, A>
where A: Allocator
{
    fn index_mut(&mut self, at: NodeRef) -> &mut Self::Output {
        match self.get_mut(at) {
            Some(node) => node,
            None => panic!("{:?} does not name a live node", at)
        }
    }
}
