//! A positioned read cursor over a deque's segment chain.
//!
//! A cursor exists only while positioned on a live element: construction
//! fails (`None`) on an empty deque, and movement refuses to run off either
//! end instead of entering a dangling state. The shared borrow it holds
//! keeps the deque immutable for the cursor's whole lifetime, so a cursor
//! can never observe a stale chain.

use crate::deque::Deque;

/// A cursor over a [`Deque`], movable in both directions across segment
/// boundaries.
///
/// Obtained from [`Deque::cursor_front`] / [`Deque::cursor_back`].
///
/// # Examples
///
/// ```rust
/// use segdeque::Deque;
///
/// let mut deque = Deque::new(2);
/// deque.extend([1, 2, 3, 4, 5]);
///
/// let mut cursor = deque.cursor_back().unwrap();
/// let mut reversed = vec![*cursor.current()];
/// while cursor.move_prev() {
///     reversed.push(*cursor.current());
/// }
/// assert_eq!(reversed, [5, 4, 3, 2, 1]);
/// ```
pub struct Cursor<'a, T> {
    deque: &'a Deque<T>,
    node: usize,
    offset: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn front(deque: &'a Deque<T>) -> Option<Self> {
        deque.head_index().map(|node| Self {
            deque,
            node,
            offset: 0,
        })
    }

    pub(crate) fn back(deque: &'a Deque<T>) -> Option<Self> {
        deque.tail_index().map(|node| Self {
            deque,
            node,
            offset: deque.node(node).ring.len() - 1,
        })
    }

    /// Steps towards the back, crossing into the next segment when the
    /// current one runs out. Returns `false` without moving when already on
    /// the last element; the cursor does not wrap.
    pub fn move_next(&mut self) -> bool {
        let node = self.deque.node(self.node);
        if self.offset + 1 < node.ring.len() {
            self.offset += 1;
            true
        } else if let Some(next) = node.next {
            self.node = next;
            self.offset = 0;
            true
        } else {
            false
        }
    }

    /// Steps towards the front; the mirror of [`Cursor::move_next`].
    pub fn move_prev(&mut self) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            true
        } else if let Some(prev) = self.deque.node(self.node).prev {
            self.node = prev;
            self.offset = self.deque.node(prev).ring.len() - 1;
            true
        } else {
            false
        }
    }

    /// The element under the cursor.
    pub fn current(&self) -> &'a T {
        self.deque.node(self.node).ring.at(self.offset)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            node: self.node,
            offset: self.offset,
        }
    }
}
