//! Concurrency tests for the shared segment pool.
//!
//! A deque itself is single-owner, but every deque with one (element type,
//! segment capacity) signature shares a pool, and deques live and die on
//! arbitrary threads. These tests hammer that sharing path with plain
//! threads and verify that values stay intact and nothing deadlocks.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use segdeque::Deque;

/// Many threads grow and drain deques of one signature simultaneously, so
/// segments released by one thread are picked up by others mid-run.
#[test]
fn test_concurrent_deque_churn_over_one_signature() {
    let total = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..8_u64)
        .map(|thread_index| {
            let total = Arc::clone(&total);
            thread::spawn(move || {
                for round in 0..50_u64 {
                    let mut deque: Deque<u64> = Deque::new(8);
                    let base = thread_index * 1000 + round;
                    for offset in 0..30 {
                        deque.push_back(base + offset);
                    }
                    // Drain and verify order before the deque (and its
                    // segments) go back to the pool.
                    for offset in 0..30 {
                        assert_eq!(deque.pop_front(), base + offset);
                        total.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("churn thread panicked");
    }
    assert_eq!(total.load(Ordering::Relaxed), 8 * 50 * 30);
}

/// A deque built on one thread keeps working after moving to another.
#[test]
fn test_deque_moves_between_threads() {
    let mut deque: Deque<String> = Deque::new(4);
    for value in 0..10 {
        deque.push_back(format!("value-{value}"));
    }

    let handle = thread::spawn(move || {
        assert_eq!(deque.pop_front(), "value-0");
        deque.push_back("appended".to_string());
        deque
    });

    let mut returned = handle.join().expect("worker thread panicked");
    assert_eq!(returned.len(), 10);
    assert_eq!(returned.pop_back(), "appended");
}

/// Threads working distinct signatures never see each other's segments:
/// capacities must match what each deque was built with.
#[test]
fn test_distinct_signatures_stay_separate() {
    let handles: Vec<_> = [2_usize, 3, 5, 7]
        .into_iter()
        .map(|capacity| {
            thread::spawn(move || {
                for _ in 0..50 {
                    let mut deque: Deque<u32> = Deque::new(capacity);
                    assert_eq!(deque.segment_capacity(), capacity);
                    for value in 0..20 {
                        deque.push_front(value);
                    }
                    for expected in (0..20).rev() {
                        assert_eq!(deque.pop_front(), expected);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("signature thread panicked");
    }
}

/// Elements with interior ownership survive cross-thread segment recycling.
#[test]
fn test_owning_elements_survive_concurrent_recycling() {
    let probe = Arc::new(());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let probe = Arc::clone(&probe);
            thread::spawn(move || {
                for _ in 0..25 {
                    let mut deque: Deque<Arc<()>> = Deque::new(4);
                    for _ in 0..10 {
                        deque.push_back(Arc::clone(&probe));
                    }
                    deque.clear();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("recycling thread panicked");
    }
    assert_eq!(Arc::strong_count(&probe), 1);
}
