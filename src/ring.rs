//! Fixed-capacity circular buffer backing one chain segment.
//!
//! A `RingBuffer` owns a `Vec<Option<T>>` of fixed length allocated once at
//! construction. Logical index `i` maps to storage slot `(head + i) % cap`;
//! growing at the front steps `head` backwards modulo the capacity, growing at
//! the back only extends `len`. Vacant slots hold `None`, so removing a value
//! releases it immediately even while the buffer itself is retained.
//!
//! The backing `Vec` survives pooling round-trips unchanged: moving the
//! buffer between a deque and the pool moves three words, not the storage.
//! This is the allocation the pool amortizes.
//!
//! All operations are O(1). Misuse (indexing past `len`, growing a full
//! buffer, shrinking an empty one) is a contract violation and panics.

pub(crate) struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer with `capacity` vacant slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "segment capacity must be greater than zero");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the value at logical index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub(crate) fn at(&self, index: usize) -> &T {
        assert!(index < self.len, "ring buffer index out of range");
        let slot = (self.head + index) % self.capacity();
        let Some(value) = self.slots[slot].as_ref() else {
            unreachable!("occupied ring slot holds no value")
        };
        value
    }

    /// Extends the logical range by one slot at the front and returns the
    /// vacant slot for the caller to fill.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub(crate) fn alloc_front(&mut self) -> &mut Option<T> {
        assert!(self.len < self.capacity(), "ring buffer capacity exceeded");
        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.len += 1;
        let slot = self.head;
        debug_assert!(self.slots[slot].is_none(), "allocated ring slot is occupied");
        &mut self.slots[slot]
    }

    /// Extends the logical range by one slot at the back and returns the
    /// vacant slot for the caller to fill.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub(crate) fn alloc_back(&mut self) -> &mut Option<T> {
        assert!(self.len < self.capacity(), "ring buffer capacity exceeded");
        let slot = (self.head + self.len) % self.capacity();
        self.len += 1;
        debug_assert!(self.slots[slot].is_none(), "allocated ring slot is occupied");
        &mut self.slots[slot]
    }

    /// Takes the front value, leaving its slot vacant.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub(crate) fn remove_front(&mut self) -> T {
        assert!(self.len > 0, "ring buffer underflow");
        let slot = self.head;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        let Some(value) = self.slots[slot].take() else {
            unreachable!("occupied ring slot holds no value")
        };
        value
    }

    /// Takes the back value, leaving its slot vacant.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub(crate) fn remove_back(&mut self) -> T {
        assert!(self.len > 0, "ring buffer underflow");
        let slot = (self.head + self.len - 1) % self.capacity();
        self.len -= 1;
        let Some(value) = self.slots[slot].take() else {
            unreachable!("occupied ring slot holds no value")
        };
        value
    }

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub(crate) fn peek_front(&self) -> &T {
        assert!(self.len > 0, "ring buffer underflow");
        self.at(0)
    }

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub(crate) fn peek_back(&self) -> &T {
        assert!(self.len > 0, "ring buffer underflow");
        self.at(self.len - 1)
    }

    /// Removes from the back until the buffer is empty, dropping the values.
    pub(crate) fn clear(&mut self) {
        while self.len > 0 {
            drop(self.remove_back());
        }
    }

    #[cfg(test)]
    pub(crate) fn storage_ptr(&self) -> *const Option<T> {
        self.slots.as_ptr()
    }
}

// =============================================================================
// Tests
// =============================================================================
