//! Property-based tests mirroring `Deque` against `std::collections::VecDeque`.
//!
//! The model check runs arbitrary operation sequences against both
//! containers and requires identical observable behavior at every step,
//! across a range of segment capacities so boundary crossings land at
//! unpredictable points.

use std::collections::VecDeque;

use proptest::prelude::*;
use segdeque::Deque;

#[derive(Debug, Clone)]
enum Operation {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Clear,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<i32>().prop_map(Operation::PushFront),
        4 => any::<i32>().prop_map(Operation::PushBack),
        3 => Just(Operation::PopFront),
        3 => Just(Operation::PopBack),
        1 => Just(Operation::Clear),
    ]
}

proptest! {
    // =========================================================================
    // Model equivalence
    // =========================================================================

    #[test]
    fn prop_matches_vecdeque_model(
        capacity in 1_usize..=8,
        operations in prop::collection::vec(operation_strategy(), 0..200),
    ) {
        let mut deque: Deque<i32> = Deque::new(capacity);
        let mut model: VecDeque<i32> = VecDeque::new();

        for operation in operations {
            match operation {
                Operation::PushFront(value) => {
                    deque.push_front(value);
                    model.push_front(value);
                }
                Operation::PushBack(value) => {
                    deque.push_back(value);
                    model.push_back(value);
                }
                Operation::PopFront => {
                    if let Some(expected) = model.pop_front() {
                        prop_assert_eq!(deque.pop_front(), expected);
                    }
                }
                Operation::PopBack => {
                    if let Some(expected) = model.pop_back() {
                        prop_assert_eq!(deque.pop_back(), expected);
                    }
                }
                Operation::Clear => {
                    deque.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.front(), model.front());
            prop_assert_eq!(deque.back(), model.back());
        }

        let drained: Vec<i32> = deque.into_iter().collect();
        let expected: Vec<i32> = model.into_iter().collect();
        prop_assert_eq!(drained, expected);
    }

    // =========================================================================
    // Traversal order
    // =========================================================================

    #[test]
    fn prop_forward_iteration_matches_model_order(
        capacity in 1_usize..=8,
        front_or_back in prop::collection::vec(any::<bool>(), 0..100),
    ) {
        let mut deque: Deque<usize> = Deque::new(capacity);
        let mut model: VecDeque<usize> = VecDeque::new();

        for (value, to_front) in front_or_back.into_iter().enumerate() {
            if to_front {
                deque.push_front(value);
                model.push_front(value);
            } else {
                deque.push_back(value);
                model.push_back(value);
            }
        }

        let forward: Vec<usize> = deque.iter().copied().collect();
        let expected: Vec<usize> = model.iter().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let backward: Vec<usize> = deque.iter().rev().copied().collect();
        let mut reversed = expected;
        reversed.reverse();
        prop_assert_eq!(backward, reversed);
    }

    #[test]
    fn prop_round_trip_restores_len(
        capacity in 1_usize..=8,
        seed in prop::collection::vec(any::<i32>(), 0..50),
        value: i32,
    ) {
        let mut deque: Deque<i32> = Deque::new(capacity);
        deque.extend(seed);

        let before = deque.len();
        deque.push_back(value);
        prop_assert_eq!(deque.pop_back(), value);
        prop_assert_eq!(deque.len(), before);

        deque.push_front(value);
        prop_assert_eq!(deque.pop_front(), value);
        prop_assert_eq!(deque.len(), before);
    }

    #[test]
    fn prop_cursor_and_iterator_agree(
        capacity in 1_usize..=8,
        values in prop::collection::vec(any::<i32>(), 1..60),
    ) {
        let mut deque: Deque<i32> = Deque::new(capacity);
        deque.extend(values);

        let mut cursor = deque.cursor_front().expect("non-empty deque");
        let mut walked = vec![*cursor.current()];
        while cursor.move_next() {
            walked.push(*cursor.current());
        }

        let iterated: Vec<i32> = deque.iter().copied().collect();
        prop_assert_eq!(walked, iterated);
    }
}
