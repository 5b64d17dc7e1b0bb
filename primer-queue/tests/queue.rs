use std::collections::VecDeque;

use primer_queue::{CircularQueue, QueueBuilder};
use proptest::prelude::*;

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn capacity_five_walkthrough() {
    let mut queue = QueueBuilder::new().capacity(5).build().unwrap();
    assert!(queue.is_empty());

    for value in [10, 20, 30, 40, 50] {
        queue.enqueue(value);
    }
    assert!(queue.is_full());
    assert_eq!(queue.to_vec(), Some(vec![10, 20, 30, 40, 50]));
    assert_eq!(queue.to_string(), "10 20 30 40 50");

    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.peek(), Some(&20));
    assert_eq!(queue.to_string(), "20 30 40 50");

    queue.enqueue(60);
    assert_eq!(queue.to_vec(), Some(vec![20, 30, 40, 50, 60]));
    assert_eq!(queue.to_string(), "20 30 40 50 60");
}

#[test]
fn full_queue_ignores_enqueue() {
    let mut queue = CircularQueue::with_capacity(3);
    for value in ['x', 'y', 'z'] {
        queue.enqueue(value);
    }
    assert!(queue.is_full());

    queue.enqueue('w');
    assert_eq!(queue.to_vec(), Some(vec!['x', 'y', 'z']));
    assert_eq!(queue.len(), 3);
}

#[test]
fn empty_dequeue_returns_none() {
    let mut queue: CircularQueue<i32> = CircularQueue::with_capacity(3);
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.to_vec(), None);
    assert_eq!(queue.to_string(), "Queue is Empty");
}

#[test]
fn round_trip_ends_with_sentinel_cursors() {
    let mut queue = CircularQueue::with_capacity(8);
    let values = [3, 1, 4, 1, 5, 9];
    for value in values {
        queue.enqueue(value);
    }

    let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(drained, values);
    assert!(queue.is_empty());
    assert_eq!(queue.front_index(), None);
    assert_eq!(queue.rear_index(), None);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u32),
    Dequeue,
    Peek,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Enqueue),
        Just(Op::Dequeue),
        Just(Op::Peek),
    ]
}

proptest! {
    #[test]
    fn matches_bounded_vecdeque(
        capacity in 1usize..16,
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut queue = CircularQueue::with_capacity(capacity);
        let mut model = VecDeque::with_capacity(capacity);

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    let accepted = queue.try_enqueue(value).is_ok();
                    prop_assert_eq!(accepted, model.len() < capacity);
                    if accepted {
                        model.push_back(value);
                    }
                }
                Op::Dequeue => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front());
                }
                Op::Peek => {
                    prop_assert_eq!(queue.peek(), model.front());
                }
            }

            prop_assert!(queue.len() <= queue.capacity());
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == capacity);
            prop_assert_eq!(queue.front_index().is_none(), model.is_empty());
            prop_assert_eq!(queue.rear_index().is_none(), model.is_empty());
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }

    #[test]
    fn fill_then_enqueue_is_noop(capacity in 1usize..32, extra in any::<u64>()) {
        let mut queue = CircularQueue::with_capacity(capacity);
        for value in 0..capacity as u64 {
            queue.enqueue(value);
        }
        prop_assert!(queue.is_full());

        let before = queue.to_vec();
        queue.enqueue(extra);
        prop_assert_eq!(queue.to_vec(), before);
    }

    #[test]
    fn round_trip_preserves_order(
        capacity in 1usize..32,
        seed in prop::collection::vec(any::<i64>(), 0..32),
    ) {
        let values: Vec<_> = seed.into_iter().take(capacity).collect();
        let mut queue = CircularQueue::with_capacity(capacity);
        for &value in &values {
            queue.enqueue(value);
        }

        let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        prop_assert_eq!(drained, values);
        prop_assert!(queue.is_empty());
        prop_assert_eq!(queue.front_index(), None);
        prop_assert_eq!(queue.rear_index(), None);
    }
}
