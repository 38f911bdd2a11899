//! The user-facing deque: a doubly linked chain of pooled segments.
//!
//! # Overview
//!
//! `Deque` stores its elements in fixed-capacity ring-buffer segments linked
//! into a chain. Pushing into a full boundary segment fetches a node from the
//! process-wide pool shared by every deque with the same (element type,
//! segment capacity) signature; popping the last element out of a boundary
//! segment unlinks it and hands it back. Workloads that repeatedly grow and
//! shrink therefore recycle the same few segment allocations instead of
//! churning the allocator.
//!
//! All end operations are O(1); the occasional pool interaction is O(1) plus
//! a short critical section, allocating only when the pool is dry.
//!
//! # Representation
//!
//! Nodes live in a vacant-slot arena (`Vec<Option<Node<T>>>`) owned by the
//! deque; `next`/`prev` links and `head`/`tail` are indices into it. Arena
//! slots vacated by released nodes are kept on a spare list and reused, so
//! the chain never shifts and unlinking stays O(1).
//!
//! Chain invariants, maintained by every operation:
//!
//! - `head` is `None` iff `tail` is `None` iff the deque is empty;
//! - the head's `prev` and the tail's `next` are `None`, the chain between
//!   them is acyclic and ordered front-to-back;
//! - only the head and tail segments may be partially occupied; every
//!   interior segment is full.
//!
//! # Sharing
//!
//! A deque is a single-owner value: mutation goes through `&mut self`, and
//! iterators/cursors borrow it, so the compiler rules out concurrent
//! mutation. Only the pool behind it is shared, so `Deque<T>` is `Send` for
//! `T: Send` and `Sync` for `T: Send + Sync`.
//!
//! # Examples
//!
//! ```rust
//! use segdeque::Deque;
//!
//! let mut deque: Deque<i32> = Deque::new(8);
//! for value in 0..10 {
//!     deque.push_back(value);
//! }
//! deque.push_front(-1);
//!
//! assert_eq!(deque.len(), 11);
//! assert_eq!(deque.front(), Some(&-1));
//! assert_eq!(deque.pop_back(), 9);
//! assert_eq!(deque.pop_front(), -1);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::iter::Iter;
use crate::node::Node;
use crate::pool::{self, NodePool};

/// Arena indices kept inline on the spare list before it spills to the heap.
const SPARE_SLOT_INLINE_CAPACITY: usize = 4;

/// A double-ended queue backed by pooled ring-buffer segments.
///
/// Created with [`Deque::new`], which binds the deque to the shared node
/// pool for its (element type, segment capacity) signature. See the
/// [module documentation](self) for the representation and sharing model.
pub struct Deque<T> {
    arena: Vec<Option<Node<T>>>,
    spare_slots: SmallVec<[usize; SPARE_SLOT_INLINE_CAPACITY]>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    pool: Arc<NodePool<T>>,
}

impl<T: Send + 'static> Deque<T> {
    /// Creates an empty deque whose segments hold `segment_capacity`
    /// elements each, bound to the shared pool for that signature.
    ///
    /// `T: Send + 'static` is required because the pool is shared across
    /// threads and keyed by the element's `TypeId`.
    ///
    /// # Panics
    ///
    /// Panics if `segment_capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdeque::Deque;
    ///
    /// let deque: Deque<String> = Deque::new(16);
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.segment_capacity(), 16);
    /// ```
    pub fn new(segment_capacity: usize) -> Self {
        Self::with_pool(pool::shared_pool(segment_capacity))
    }
}

impl<T> Deque<T> {
    /// Segment capacity used by [`Default`] and [`FromIterator`].
    pub const DEFAULT_SEGMENT_CAPACITY: usize = 16;

    pub(crate) fn with_pool(pool: Arc<NodePool<T>>) -> Self {
        Self {
            arena: Vec::new(),
            spare_slots: SmallVec::new(),
            head: None,
            tail: None,
            len: 0,
            pool,
        }
    }

    /// The number of elements in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed capacity of each backing segment.
    pub fn segment_capacity(&self) -> usize {
        self.pool.segment_capacity()
    }

    /// Inserts `value` at the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdeque::Deque;
    ///
    /// let mut deque = Deque::new(8);
    /// deque.push_front(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.peek_front(), &1);
    /// ```
    pub fn push_front(&mut self, value: T) {
        *self.alloc_front() = Some(value);
    }

    /// Inserts `value` at the back.
    pub fn push_back(&mut self, value: T) {
        *self.alloc_back() = Some(value);
    }

    /// Reserves a slot at the front, linking in a pooled node when the deque
    /// is empty or the head segment is full, and returns the slot for the
    /// caller to fill.
    pub(crate) fn alloc_front(&mut self) -> &mut Option<T> {
        let index = self.front_target();
        self.len += 1;
        self.node_mut(index).ring.alloc_front()
    }

    /// Reserves a slot at the back; see [`Deque::alloc_front`].
    pub(crate) fn alloc_back(&mut self) -> &mut Option<T> {
        let index = self.back_target();
        self.len += 1;
        self.node_mut(index).ring.alloc_back()
    }

    /// Removes and returns the front element. When this empties the head
    /// segment, the segment goes back to the pool.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. Check [`Deque::is_empty`] first, or use
    /// [`Deque::front`] to look without committing.
    pub fn pop_front(&mut self) -> T {
        assert!(self.len > 0, "pop from empty deque");
        let Some(index) = self.head else {
            unreachable!("non-empty deque with no head segment")
        };
        let value = self.node_mut(index).ring.remove_front();
        self.len -= 1;
        if self.node(index).ring.is_empty() {
            self.unlink_and_release(index);
        }
        value
    }

    /// Removes and returns the back element; see [`Deque::pop_front`].
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(self.len > 0, "pop from empty deque");
        let Some(index) = self.tail else {
            unreachable!("non-empty deque with no tail segment")
        };
        let value = self.node_mut(index).ring.remove_back();
        self.len -= 1;
        if self.node(index).ring.is_empty() {
            self.unlink_and_release(index);
        }
        value
    }

    /// The front element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn peek_front(&self) -> &T {
        assert!(self.len > 0, "peek on empty deque");
        let Some(index) = self.head else {
            unreachable!("non-empty deque with no head segment")
        };
        self.node(index).ring.peek_front()
    }

    /// The back element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn peek_back(&self) -> &T {
        assert!(self.len > 0, "peek on empty deque");
        let Some(index) = self.tail else {
            unreachable!("non-empty deque with no tail segment")
        };
        self.node(index).ring.peek_back()
    }

    /// The front element, or `None` when the deque is empty.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.peek_front())
        }
    }

    /// The back element, or `None` when the deque is empty.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(self.peek_back())
        }
    }

    /// Drops every element and returns every segment to the pool.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdeque::Deque;
    ///
    /// let mut deque: Deque<u8> = (0..100).collect();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let mut current = self.head;
        while let Some(index) = current {
            let mut node = self.remove_node(index);
            current = node.next;
            node.next = None;
            node.prev = None;
            self.pool.put(node);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.arena.clear();
        self.spare_slots.clear();
    }

    /// A borrowing front-to-back iterator. Also reachable through
    /// `&deque` in a `for` loop.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A cursor positioned on the front element, or `None` when the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use segdeque::Deque;
    ///
    /// let mut deque = Deque::new(4);
    /// assert!(deque.cursor_front().is_none());
    ///
    /// deque.push_back("a");
    /// deque.push_back("b");
    /// let mut cursor = deque.cursor_front().unwrap();
    /// assert_eq!(*cursor.current(), "a");
    /// assert!(cursor.move_next());
    /// assert_eq!(*cursor.current(), "b");
    /// assert!(!cursor.move_next());
    /// ```
    pub fn cursor_front(&self) -> Option<Cursor<'_, T>> {
        Cursor::front(self)
    }

    /// A cursor positioned on the back element, or `None` when the deque is
    /// empty.
    pub fn cursor_back(&self) -> Option<Cursor<'_, T>> {
        Cursor::back(self)
    }

    // -------------------------------------------------------------------------
    // Chain maintenance
    // -------------------------------------------------------------------------

    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        let Some(node) = self.arena[index].as_ref() else {
            unreachable!("chain link points at a vacant arena slot")
        };
        node
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        let Some(node) = self.arena[index].as_mut() else {
            unreachable!("chain link points at a vacant arena slot")
        };
        node
    }

    pub(crate) fn head_index(&self) -> Option<usize> {
        self.head
    }

    pub(crate) fn tail_index(&self) -> Option<usize> {
        self.tail
    }

    /// Stores `node` in the arena, reusing a spare slot when one exists.
    fn insert_node(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.spare_slots.pop() {
            self.arena[index] = Some(node);
            index
        } else {
            self.arena.push(Some(node));
            self.arena.len() - 1
        }
    }

    fn remove_node(&mut self, index: usize) -> Node<T> {
        let Some(node) = self.arena[index].take() else {
            unreachable!("chain link points at a vacant arena slot")
        };
        self.spare_slots.push(index);
        node
    }

    /// The segment the next front insertion writes into, linking in a pooled
    /// node when the deque is empty or the head segment is full.
    fn front_target(&mut self) -> usize {
        match self.head {
            None => self.link_first(),
            Some(index) if self.node(index).ring.is_full() => {
                let mut node = self.pool.get();
                node.next = Some(index);
                let new_index = self.insert_node(node);
                self.node_mut(index).prev = Some(new_index);
                self.head = Some(new_index);
                new_index
            }
            Some(index) => index,
        }
    }

    /// The segment the next back insertion writes into; see
    /// [`Deque::front_target`].
    fn back_target(&mut self) -> usize {
        match self.tail {
            None => self.link_first(),
            Some(index) if self.node(index).ring.is_full() => {
                let mut node = self.pool.get();
                node.prev = Some(index);
                let new_index = self.insert_node(node);
                self.node_mut(index).next = Some(new_index);
                self.tail = Some(new_index);
                new_index
            }
            Some(index) => index,
        }
    }

    /// Fetches the first node of an empty deque and makes it both ends.
    fn link_first(&mut self) -> usize {
        let node = self.pool.get();
        let index = self.insert_node(node);
        self.head = Some(index);
        self.tail = Some(index);
        index
    }

    /// Unlinks an emptied boundary node from the chain and returns it to the
    /// pool. Handles the last-node case, where the deque ends up empty.
    fn unlink_and_release(&mut self, index: usize) {
        let mut node = self.remove_node(index);
        if let Some(prev_index) = node.prev {
            self.node_mut(prev_index).next = node.next;
        } else {
            self.head = node.next;
        }
        if let Some(next_index) = node.next {
            self.node_mut(next_index).prev = node.prev;
        } else {
            self.tail = node.prev;
        }
        node.prev = None;
        node.next = None;
        self.pool.put(node);
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Deque<T> {
    /// Clones the elements into a fresh deque bound to the same pool.
    fn clone(&self) -> Self {
        let mut clone = Self::with_pool(Arc::clone(&self.pool));
        clone.extend(self.iter().cloned());
        clone
    }
}

impl<T: Send + 'static> Default for Deque<T> {
    /// An empty deque at [`Deque::DEFAULT_SEGMENT_CAPACITY`].
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEGMENT_CAPACITY)
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Send + 'static> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::default();
        deque.extend(iter);
        deque
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

static_assertions::assert_impl_all!(Deque<i32>: Send, Sync);
static_assertions::assert_impl_all!(Deque<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
