//! Node pooling: per-signature free lists and the process-wide registry.
//!
//! Every deque with the same (element type, segment capacity) signature
//! shares one [`NodePool`], so a segment released by one deque can be reused
//! by any other, including deques on other threads. The pool and the
//! registry are the only shared-mutable state in the crate; both guard their
//! state with a [`parking_lot::Mutex`] held for a handful of instructions.
//!
//! # Ownership discipline
//!
//! A node is owned by exactly one of {a deque's arena, a pool free list} at
//! any time. `get` and `put` move nodes by value, so a node can never be
//! reachable from a chain and from the free list simultaneously.
//!
//! # Registry lifetime
//!
//! Pools are created lazily on first request for a never-before-seen
//! signature and live for the rest of the process. The registry only grows
//! one entry per distinct signature actually used, so there is no eviction.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use smallvec::SmallVec;

use crate::node::Node;

/// Nodes kept inline in a pool's free list before it spills to the heap.
const FREE_LIST_INLINE_CAPACITY: usize = 4;

/// A reusable-object pool of nodes for one (element type, capacity) pair.
///
/// `get`/`put` are safe to call from any thread. No ordering guarantee is
/// made about which released node a subsequent `get` returns.
pub(crate) struct NodePool<T> {
    segment_capacity: usize,
    free: Mutex<SmallVec<[Node<T>; FREE_LIST_INLINE_CAPACITY]>>,
}

impl<T> NodePool<T> {
    /// # Panics
    ///
    /// Panics if `segment_capacity` is zero.
    pub(crate) fn new(segment_capacity: usize) -> Self {
        assert!(
            segment_capacity > 0,
            "segment capacity must be greater than zero"
        );
        Self {
            segment_capacity,
            free: Mutex::new(SmallVec::new()),
        }
    }

    pub(crate) fn segment_capacity(&self) -> usize {
        self.segment_capacity
    }

    /// Returns a node ready for use: empty ring, both links cleared.
    ///
    /// Recycles a previously released node when one is available; otherwise
    /// constructs a fresh one at the pool's capacity. Construction happens
    /// outside the critical section.
    pub(crate) fn get(&self) -> Node<T> {
        let recycled = self.free.lock().pop();
        recycled.unwrap_or_else(|| Node::new(self.segment_capacity))
    }

    /// Releases a detached node for future reuse.
    ///
    /// The caller must have cleared both links and must not touch the node
    /// again until a later `get` hands it back. Residual values are dropped
    /// here, so pooled nodes never keep element resources alive.
    pub(crate) fn put(&self, mut node: Node<T>) {
        debug_assert!(
            node.is_detached(),
            "node returned to the pool while still linked"
        );
        node.ring.clear();
        self.free.lock().push(node);
    }

    #[cfg(test)]
    pub(crate) fn free_count(&self) -> usize {
        self.free.lock().len()
    }
}

// =============================================================================
// Process-wide registry
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct PoolKey {
    element: TypeId,
    segment_capacity: usize,
}

type RegistryMap = HashMap<PoolKey, Arc<dyn Any + Send + Sync>>;

static REGISTRY: OnceLock<Mutex<RegistryMap>> = OnceLock::new();

/// Returns the shared pool for `(T, segment_capacity)`, creating it on first
/// request.
///
/// Lookup and construct-on-miss happen under a single lock, so at most one
/// pool ever exists per signature even when many threads race the first
/// request. The key carries the element's `TypeId`, which is why deque
/// construction requires `T: 'static`; `T: Send` makes the shared pool
/// usable from any thread.
///
/// # Panics
///
/// Panics if `segment_capacity` is zero.
pub(crate) fn shared_pool<T: Send + 'static>(segment_capacity: usize) -> Arc<NodePool<T>> {
    assert!(
        segment_capacity > 0,
        "segment capacity must be greater than zero"
    );
    let key = PoolKey {
        element: TypeId::of::<T>(),
        segment_capacity,
    };
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let entry = Arc::clone(
        registry
            .lock()
            .entry(key)
            .or_insert_with(|| {
                Arc::new(NodePool::<T>::new(segment_capacity)) as Arc<dyn Any + Send + Sync>
            }),
    );
    entry
        .downcast::<NodePool<T>>()
        .unwrap_or_else(|_| unreachable!("pool registered under a mismatched element type"))
}

static_assertions::assert_impl_all!(NodePool<i32>: Send, Sync);
static_assertions::assert_impl_all!(NodePool<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
