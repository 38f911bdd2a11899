//! A chain segment: one ring buffer plus neighbor links.
//!
//! Links are indices into the owning deque's node arena, not owning
//! references: the deque owns the chain, and the pool owns detached nodes.
//! A node sitting in the pool always has both links cleared.

use crate::ring::RingBuffer;

pub(crate) struct Node<T> {
    pub(crate) ring: RingBuffer<T>,
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(segment_capacity: usize) -> Self {
        Self {
            ring: RingBuffer::new(segment_capacity),
            next: None,
            prev: None,
        }
    }

    /// A detached node belongs to no chain and may be returned to the pool.
    pub(crate) fn is_detached(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_node_is_empty_and_detached() {
        let node: Node<i32> = Node::new(8);
        assert!(node.ring.is_empty());
        assert_eq!(node.ring.capacity(), 8);
        assert!(node.is_detached());
    }

    #[rstest]
    fn test_linked_node_is_not_detached() {
        let mut node: Node<i32> = Node::new(8);
        node.next = Some(3);
        assert!(!node.is_detached());
        node.next = None;
        node.prev = Some(1);
        assert!(!node.is_detached());
    }
}
