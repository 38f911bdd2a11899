//! # segdeque
//!
//! A double-ended queue built from fixed-capacity ring-buffer segments that
//! are recycled through a process-wide pool instead of being allocated and
//! freed individually.
//!
//! ## Overview
//!
//! Every [`Deque`] owns a doubly linked chain of segments; each segment is a
//! circular buffer of the capacity chosen at construction. Pushing into a
//! full boundary segment links in a segment from the pool shared by all
//! deques with the same (element type, segment capacity) signature, and
//! popping a boundary segment empty sends it back. Workloads that repeatedly
//! grow and shrink deques of one signature pay the segment allocation cost
//! once, not per cycle.
//!
//! - O(1) push/pop/peek at both ends
//! - [`Cursor`] for stepwise bidirectional traversal, plus standard
//!   double-ended [`Iterator`] support
//! - No per-deque locking: a deque is a plain single-owner value; only the
//!   segment pool behind it is synchronized
//!
//! ## Example
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
//!
//! let collected: Vec<i32> = deque.iter().copied().collect();
//! assert_eq!(collected[0], -1);
//! ```
//!
//! ## Sharing contract
//!
//! A single deque (and any cursor or iterator over it) has a single-owner,
//! single-writer contract, enforced by the borrow checker. The segment pool
//! and its registry are the only shared state and are safe to exercise from
//! any number of threads at once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod cursor;
mod deque;
mod iter;
mod node;
mod pool;
mod ring;

pub use crate::cursor::Cursor;
pub use crate::deque::Deque;
pub use crate::iter::{IntoIter, Iter};
