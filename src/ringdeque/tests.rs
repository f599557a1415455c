use super::*;
use crate::behavior::{CapacityMode, OverflowMode, ResizeTieBreak};
use alloc::vec;
use alloc::vec::Vec;

fn contents<T: Clone>(deque: &RingDeque<T>) -> Vec<T> {
    deque.iter().cloned().collect()
}

/// Physical slot contents, `None` for dead slots.
fn physical<T: Clone>(deque: &RingDeque<T>) -> Vec<Option<T>> {
    let capacity = deque.capacity();
    let mut slots = vec![None; capacity];
    for (i, elt) in deque.iter().enumerate() {
        slots[wrap_add(deque.head, i, capacity)] = Some(elt.clone());
    }
    slots
}

#[test]
fn any_simple() {
    macro_rules! test {
        ($policy:expr) => {{
            let mut tester = RingDeque::new(7, $policy);
            assert_eq!(tester.capacity(), 7);
            assert_eq!(tester.len(), 0);

            tester.push_back(1).unwrap();
            tester.push_back(2).unwrap();
            tester.push_back(3).unwrap();
            tester.push_back(4).unwrap();
            assert_eq!(tester.len(), 4);

            assert_eq!(tester.pop_front(), Ok(1));
            assert_eq!(tester.pop_front(), Ok(2));
            assert_eq!(tester.len(), 2);
            assert_eq!(tester.pop_front(), Ok(3));
            assert_eq!(tester.pop_front(), Ok(4));
            assert!(tester.pop_front().is_err());
        }};
    }

    test!(Policy::REPLACE_OLDEST);
    test!(Policy::REJECT_ON_FULL);
    test!(Policy::DYNAMIC);
}

#[test]
fn any_simple_reversely() {
    macro_rules! test {
        ($policy:expr) => {{
            let mut tester = RingDeque::new(7, $policy);
            tester.push_front(1).unwrap();
            tester.push_front(2).unwrap();
            tester.push_front(3).unwrap();
            tester.push_front(4).unwrap();
            assert_eq!(tester.len(), 4);
            assert_eq!(tester.pop_back(), Ok(1));
            assert_eq!(tester.pop_back(), Ok(2));
            assert_eq!(tester.len(), 2);
            assert_eq!(tester.pop_back(), Ok(3));
            assert_eq!(tester.pop_back(), Ok(4));
            assert!(tester.pop_back().is_err());
        }};
    }

    test!(Policy::REPLACE_OLDEST);
    test!(Policy::REJECT_ON_FULL);
    test!(Policy::DYNAMIC);
}

#[test]
fn any_pop_empty() {
    macro_rules! test {
        ($policy:expr) => {{
            let mut tester = RingDeque::new(3, $policy);
            tester.push_back(1).unwrap();
            assert_eq!(tester.pop_front(), Ok(1));
            assert!(tester.is_empty());
            assert_eq!(tester.pop_front(), Err(Error::BufferEmpty { capacity: 3 }));
            assert_eq!(tester.pop_back(), Err(Error::BufferEmpty { capacity: 3 }));
            assert_eq!(tester.front(), Err(Error::BufferEmpty { capacity: 3 }));
            assert_eq!(tester.back(), Err(Error::BufferEmpty { capacity: 3 }));
        }};
    }

    test!(Policy::REPLACE_OLDEST);
    test!(Policy::REJECT_ON_FULL);
    test!(Policy::DYNAMIC);
}

#[test]
fn overwrites_oldest_from_back() {
    // capacity 5, push 1..=7
    let mut tester = RingDeque::with_capacity(5);
    for i in 1..=7 {
        tester.push_back(i).unwrap();
    }
    assert_eq!(contents(&tester), [3, 4, 5, 6, 7]);
    assert_eq!(
        physical(&tester),
        [Some(6), Some(7), Some(3), Some(4), Some(5)]
    );
    assert!(tester.is_full());
    assert_eq!(tester.head, 2);
    assert_eq!(tester.tail, None);
}

#[test]
fn overwrites_oldest_from_front() {
    let mut tester = RingDeque::with_capacity(3);
    for i in 1..=5 {
        tester.push_front(i).unwrap();
    }
    assert_eq!(contents(&tester), [5, 4, 3]);
    assert_eq!(tester.len(), 3);
}

#[test]
fn overwrite_returns_the_new_slot() {
    let mut tester = RingDeque::with_capacity(2);
    tester.push_back(1).unwrap();
    tester.push_back(2).unwrap();
    *tester.push_back(3).unwrap() += 10;
    *tester.push_front(0).unwrap() += 10;
    assert_eq!(contents(&tester), [10, 2]);
}

#[test]
fn reject_on_full_leaves_buffer_untouched() {
    // capacity 10, fill 0..10, push(42)
    let mut tester = RingDeque::new(10, Policy::REJECT_ON_FULL);
    for i in 0..10 {
        tester.push_back(i).unwrap();
    }
    let err = tester.push_back(42).unwrap_err();
    assert_eq!(err.kind(), Error::BufferFull { capacity: 10 });
    assert_eq!(err.into_inner(), 42);

    let err = tester.push_front(43).unwrap_err();
    assert_eq!(err.kind(), Error::BufferFull { capacity: 10 });

    let err = tester.insert(4, 44, InsertTieBreak::DiscardHead).unwrap_err();
    assert_eq!(err.kind(), Error::BufferFull { capacity: 10 });

    assert_eq!(tester.len(), 10);
    assert_eq!(contents(&tester), (0..10).collect::<Vec<_>>());
}

#[test]
fn zero_capacity_fixed_rejects_every_insertion() {
    macro_rules! test {
        ($policy:expr) => {{
            let mut tester: RingDeque<i32> = RingDeque::new(0, $policy);
            assert!(tester.is_empty());
            assert!(tester.is_full());
            assert_eq!(tester.push_back(1).unwrap_err().kind(), Error::ZeroCapacity);
            assert_eq!(tester.push_front(1).unwrap_err().kind(), Error::ZeroCapacity);
            assert_eq!(
                tester.insert(0, 1, InsertTieBreak::DiscardTail).unwrap_err().kind(),
                Error::ZeroCapacity
            );
            // capacity is checked before the position
            assert_eq!(
                tester.insert(1, 1, InsertTieBreak::DiscardHead).unwrap_err().kind(),
                Error::ZeroCapacity
            );
            assert_eq!(tester.pop_front(), Err(Error::BufferEmpty { capacity: 0 }));
            assert_eq!(tester.remove(0), Err(Error::BufferEmpty { capacity: 0 }));
            assert_eq!(tester.data(), Ok(&[][..]));
            tester.linearize();
            tester.clear();
            assert_eq!(tester.len(), 0);
        }};
    }

    test!(Policy::REPLACE_OLDEST);
    test!(Policy::REJECT_ON_FULL);
}

#[test]
fn dynamic_grows_instead_of_overwriting() {
    // capacity 5, push 0..=10
    let mut tester = RingDeque::dynamic(5);
    for i in 0..=10 {
        tester.push_back(i).unwrap();
    }
    assert_eq!(tester.len(), 11);
    assert!(tester.capacity() > 10);
    assert_eq!(contents(&tester)[..10], (0..10).collect::<Vec<_>>()[..]);
}

#[test]
fn dynamic_grows_from_zero() {
    let mut tester = RingDeque::dynamic(0);
    tester.push_front(1).unwrap();
    assert_eq!(tester.capacity(), 1);
    tester.push_front(2).unwrap();
    assert_eq!(tester.capacity(), 2);
    tester.insert(1, 3, InsertTieBreak::DiscardHead).unwrap();
    assert_eq!(tester.capacity(), 4);
    assert_eq!(contents(&tester), [2, 3, 1]);
}

#[test]
fn dynamic_shrinks_at_quarter_occupancy() {
    let mut tester = RingDeque::dynamic(16);
    tester.extend(0..16);
    assert_eq!(tester.capacity(), 16);

    for _ in 0..11 {
        tester.pop_front().unwrap();
    }
    assert_eq!(tester.len(), 5);
    assert_eq!(tester.capacity(), 16);

    // 4 * 4 <= 16
    tester.pop_back().unwrap();
    assert_eq!(tester.capacity(), 8);
    assert_eq!(contents(&tester), [11, 12, 13, 14]);

    tester.remove(0).unwrap();
    tester.remove(0).unwrap();
    assert_eq!(tester.capacity(), 4);
    assert_eq!(contents(&tester), [13, 14]);

    // never below the floor
    tester.pop_front().unwrap();
    tester.pop_front().unwrap();
    assert_eq!(tester.capacity(), MIN_DYNAMIC_CAPACITY);
}

#[test]
fn failed_pop_does_not_shrink() {
    let mut tester: RingDeque<i32> = RingDeque::dynamic(16);
    assert_eq!(tester.pop_back(), Err(Error::BufferEmpty { capacity: 16 }));
    assert_eq!(tester.pop_front(), Err(Error::BufferEmpty { capacity: 16 }));
    assert_eq!(tester.remove(0), Err(Error::BufferEmpty { capacity: 16 }));
    assert_eq!(tester.capacity(), 16);
}

#[test]
fn resize_does_not_trigger_shrink() {
    let mut tester = RingDeque::dynamic(4);
    tester.push_back(1).unwrap();
    tester.resize(64, ResizeTieBreak::DiscardOld);
    assert_eq!(tester.capacity(), 64);
    assert_eq!(contents(&tester), [1]);
}

#[test]
fn resize_grow_linearizes() {
    // capacity 5, push 1..=14, resize(10)
    let mut tester = RingDeque::with_capacity(5);
    for i in 1..=14 {
        tester.push_back(i).unwrap();
    }
    assert_eq!(contents(&tester), [10, 11, 12, 13, 14]);

    tester.resize(10, ResizeTieBreak::DiscardOld);
    assert_eq!(tester.capacity(), 10);
    assert_eq!(tester.head, 0);
    assert_eq!(tester.tail, Some(5));
    assert_eq!(tester.data(), Ok(&[10, 11, 12, 13, 14][..]));
    assert_eq!(physical(&tester)[5..], [None::<i32>; 5]);
}

#[test]
fn resize_shrink_tie_breaks() {
    let mut base = RingDeque::with_capacity(6);
    base.extend(0..9);
    assert_eq!(contents(&base), [3, 4, 5, 6, 7, 8]);

    let mut old = base.clone();
    old.resize(4, ResizeTieBreak::DiscardOld);
    assert_eq!(contents(&old), [5, 6, 7, 8]);
    assert!(old.is_full());

    let mut new = base.clone();
    new.resize(4, ResizeTieBreak::DiscardNew);
    assert_eq!(contents(&new), [3, 4, 5, 6]);
    assert!(new.is_linearized());

    let mut same = base.clone();
    same.resize(6, ResizeTieBreak::DiscardNew);
    assert_eq!(same, base);

    base.resize(0, ResizeTieBreak::DiscardOld);
    assert_eq!(base.capacity(), 0);
    assert!(base.is_empty());
    assert_eq!(base.push_back(1).unwrap_err().kind(), Error::ZeroCapacity);
}

#[test]
fn resize_empty_buffer() {
    let mut tester: RingDeque<u8> = RingDeque::with_capacity(3);
    tester.resize(8, ResizeTieBreak::DiscardNew);
    assert_eq!(tester.capacity(), 8);
    assert!(tester.is_empty());
    tester.push_back(7).unwrap();
    assert_eq!(tester.data(), Ok(&[7][..]));
}

#[test]
fn remove_shifts_the_shorter_side() {
    // capacity 10, push 0..15, remove(3)
    let mut tester = RingDeque::with_capacity(10);
    for i in 0..15 {
        tester.push_back(i).unwrap();
    }
    assert_eq!(contents(&tester), (5..15).collect::<Vec<_>>());
    assert_eq!(tester.remove(3), Ok(8));
    assert_eq!(contents(&tester), [5, 6, 7, 9, 10, 11, 12, 13, 14]);

    // the front side was shorter: head advanced by one, back untouched
    assert_eq!(tester.head, 6);
    assert_eq!(tester.tail, Some(5));
}

#[test]
fn remove_every_position() {
    for capacity in 1..7 {
        for len in 1..=capacity {
            for offset in 0..capacity {
                for pos in 0..len {
                    let mut tester = RingDeque::with_capacity(capacity);
                    tester.head = offset;
                    tester.set_len(0);
                    tester.extend(0..len);
                    let mut model: Vec<_> = (0..len).collect();

                    assert_eq!(tester.remove(pos), Ok(model.remove(pos)));
                    assert_eq!(contents(&tester), model);
                }
            }
        }
    }
}

#[test]
fn remove_errors() {
    let mut tester = RingDeque::with_capacity(4);
    assert_eq!(tester.remove(0), Err(Error::BufferEmpty { capacity: 4 }));
    tester.extend(0..2);
    assert_eq!(tester.remove(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    assert_eq!(contents(&tester), [0, 1]);
}

#[test]
fn insert_into_non_full() {
    let mut tester = RingDeque::with_capacity(8);
    tester.extend(10..15);
    tester.insert(2, 99, InsertTieBreak::DiscardHead).unwrap();
    assert_eq!(contents(&tester), [10, 11, 99, 12, 13, 14]);
}

#[test]
fn insert_every_position() {
    for capacity in 1..7 {
        for len in 0..capacity {
            for offset in 0..capacity {
                for pos in 0..=len {
                    let mut tester = RingDeque::with_capacity(capacity);
                    tester.head = offset;
                    tester.set_len(0);
                    tester.extend(0..len);
                    let mut model: Vec<_> = (0..len).collect();

                    assert_eq!(*tester.insert(pos, 100, InsertTieBreak::DiscardHead).unwrap(), 100);
                    model.insert(pos, 100);
                    assert_eq!(contents(&tester), model);
                }
            }
        }
    }
}

#[test]
fn insert_into_full_evicts_first() {
    let mut head = RingDeque::with_capacity(4);
    head.extend(0..4);
    head.insert(2, 9, InsertTieBreak::DiscardHead).unwrap();
    assert_eq!(contents(&head), [1, 2, 9, 3]);

    let mut tail = RingDeque::with_capacity(4);
    tail.extend(0..4);
    tail.insert(2, 9, InsertTieBreak::DiscardTail).unwrap();
    assert_eq!(contents(&tail), [0, 1, 9, 2]);

    // position at the old end is clamped after the eviction
    let mut end = RingDeque::with_capacity(4);
    end.extend(0..4);
    end.insert(4, 9, InsertTieBreak::DiscardTail).unwrap();
    assert_eq!(contents(&end), [0, 1, 2, 9]);
}

#[test]
fn insert_out_of_range() {
    let mut tester = RingDeque::with_capacity(4);
    tester.extend(0..2);
    let err = tester.insert(3, 7, InsertTieBreak::DiscardHead).unwrap_err();
    assert_eq!(err.kind(), Error::OutOfRange { index: 3, len: 2 });
    assert_eq!(err.into_inner(), 7);
    assert_eq!(contents(&tester), [0, 1]);
}

#[test]
fn linearize_every_layout() {
    for capacity in 1..7 {
        for len in 0..=capacity {
            for offset in 0..capacity {
                let mut tester = RingDeque::with_capacity(capacity);
                tester.head = offset;
                tester.set_len(0);
                tester.extend(0..len);

                tester.linearize();
                assert!(tester.is_linearized());
                assert_eq!(tester.data(), Ok(&(0..len).collect::<Vec<_>>()[..]));
                assert_eq!(tester.len(), len);

                // idempotent
                tester.linearize();
                assert_eq!(contents(&tester), (0..len).collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn linearize_copy_leaves_source() {
    let mut tester = RingDeque::with_capacity(5);
    tester.extend(0..7);
    let head = tester.head;

    let copy = tester.linearize_copy();
    assert_eq!(copy, tester);
    assert_eq!(copy.capacity(), 5);
    assert!(copy.is_linearized());
    assert_eq!(tester.head, head);

    let strict = tester.linearize_copy_with(Policy::REJECT_ON_FULL);
    assert_eq!(strict.policy(), Policy::REJECT_ON_FULL);
    assert_eq!(strict, tester);
}

#[test]
fn data_requires_linear_or_full() {
    let mut tester = RingDeque::with_capacity(4);
    tester.extend(0..3);
    assert!(tester.data().is_ok());

    tester.pop_front().unwrap();
    assert_eq!(tester.data(), Err(Error::NotLinearizedNotFull));
    assert_eq!(tester.data_mut(), Err(Error::NotLinearizedNotFull));

    tester.extend(3..5);
    // full but rotated: physical order
    assert_eq!(tester.data(), Ok(&[4, 1, 2, 3][..]));
    tester.data_mut().unwrap()[0] = 40;
    assert_eq!(contents(&tester), [1, 2, 3, 40]);
}

#[test]
fn at_and_index() {
    let mut tester = RingDeque::with_capacity(3);
    tester.extend(0..5);
    assert_eq!(tester.at(0), Ok(&2));
    assert_eq!(tester.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    *tester.at_mut(1).unwrap() = 30;
    tester[2] = 40;
    assert_eq!(tester[1], 30);
    assert_eq!(tester.front(), Ok(&2));
    assert_eq!(tester.back(), Ok(&40));
    *tester.front_mut().unwrap() += 1;
    *tester.back_mut().unwrap() += 1;
    assert_eq!(contents(&tester), [3, 30, 41]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_out_of_bounds_panics() {
    let tester: RingDeque<i32> = RingDeque::with_capacity(3);
    let _ = &tester[0];
}

#[test]
fn swap_and_contains() {
    let mut tester = RingDeque::with_capacity(4);
    tester.extend(0..6);
    tester.swap(0, 3).unwrap();
    tester.swap(1, 1).unwrap();
    assert_eq!(contents(&tester), [5, 3, 4, 2]);
    assert_eq!(tester.swap(0, 4), Err(Error::OutOfRange { index: 4, len: 4 }));
    assert!(tester.contains(&4));
    assert!(!tester.contains(&0));
}

#[test]
fn iterators_cover_both_runs() {
    let mut tester = RingDeque::with_capacity(5);
    tester.extend(0..8);

    assert_eq!(tester.iter().len(), 5);
    assert_eq!(tester.iter().rev().copied().collect::<Vec<_>>(), [7, 6, 5, 4, 3]);

    let mut iter = tester.iter();
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next_back(), Some(&7));
    assert_eq!(iter.clone().count(), 3);

    for elt in tester.iter_mut().rev() {
        *elt *= 2;
    }
    assert_eq!(contents(&tester), [6, 8, 10, 12, 14]);

    let mut owned = tester.into_iter();
    assert_eq!(owned.next_back(), Some(14));
    assert_eq!(owned.len(), 4);
    assert_eq!(owned.collect::<Vec<_>>(), [6, 8, 10, 12]);
}

#[test]
fn into_iter_does_not_shrink() {
    let mut tester = RingDeque::dynamic(16);
    tester.extend(0..16);
    let mut iter = tester.into_iter();
    for _ in 0..14 {
        iter.next();
    }
    assert_eq!(iter.inner.capacity(), 16);
    assert_eq!(iter.collect::<Vec<_>>(), [14, 15]);
}

#[test]
fn drain_ranges() {
    for capacity in 1..7 {
        for len in 0..=capacity {
            for offset in 0..capacity {
                for start in 0..=len {
                    for end in start..=len {
                        let mut tester = RingDeque::with_capacity(capacity);
                        tester.head = offset;
                        tester.set_len(0);
                        tester.extend(0..len);
                        let mut model: Vec<_> = (0..len).collect();

                        let drained: Vec<_> = tester.drain(start..end).collect();
                        let expected: Vec<_> = model.drain(start..end).collect();
                        assert_eq!(drained, expected);
                        assert_eq!(contents(&tester), model);
                    }
                }
            }
        }
    }
}

#[test]
fn drain_dropped_early_removes_range() {
    let mut tester = RingDeque::with_capacity(8);
    tester.extend(0..8);
    {
        let mut drain = tester.drain(2..6);
        assert_eq!(drain.next(), Some(2));
        assert_eq!(drain.next_back(), Some(5));
    }
    assert_eq!(contents(&tester), [0, 1, 6, 7]);
    assert!(!tester.is_full());
}

#[test]
fn clear_keeps_capacity() {
    let mut tester = RingDeque::with_capacity(3);
    tester.extend(0..4);
    tester.clear();
    assert!(tester.is_empty());
    assert_eq!(tester.capacity(), 3);
    assert!(tester.is_linearized());
    tester.extend(0..2);
    assert_eq!(contents(&tester), [0, 1]);
}

#[test]
fn clone_is_deep_and_linear() {
    let mut tester = RingDeque::new(4, Policy::REJECT_ON_FULL);
    tester.extend(vec![String::from("a"), String::from("b")]);
    tester.pop_front().unwrap();
    tester.push_back(String::from("c")).unwrap();
    tester.push_back(String::from("d")).unwrap();

    let mut copy = tester.clone();
    assert_eq!(copy, tester);
    assert_eq!(copy.capacity(), 4);
    assert_eq!(copy.policy(), Policy::REJECT_ON_FULL);
    assert!(copy.is_linearized());

    copy[0].push('!');
    assert_eq!(tester[0], "b");
    assert_eq!(copy[0], "b!");
}

#[test]
fn take_leaves_zero_capacity() {
    let mut tester = RingDeque::with_capacity(4);
    tester.extend(0..3);
    let taken = core::mem::take(&mut tester);

    assert_eq!(contents(&taken), [0, 1, 2]);
    assert_eq!(tester.capacity(), 0);
    assert_eq!(tester.push_back(1).unwrap_err().kind(), Error::ZeroCapacity);
    assert_eq!(tester.pop_back(), Err(Error::BufferEmpty { capacity: 0 }));
}

#[test]
fn extend_follows_policy() {
    let mut strict = RingDeque::new(3, Policy::REJECT_ON_FULL);
    let mut source = 0..10;
    strict.extend(source.by_ref());
    assert_eq!(contents(&strict), [0, 1, 2]);
    // no item was pulled beyond the room available
    assert_eq!(source.next(), Some(3));

    let mut zero: RingDeque<i32> = RingDeque::with_capacity(0);
    zero.extend(0..3);
    assert!(zero.is_empty());

    let mut copies: RingDeque<i32> = RingDeque::with_capacity(2);
    copies.extend(&[1, 2, 3]);
    assert_eq!(contents(&copies), [2, 3]);
}

#[test]
fn from_iter_and_vec() {
    let tester: RingDeque<_> = (0..4).collect();
    assert_eq!(tester.capacity(), 4);
    assert!(tester.is_full());
    assert_eq!(tester.policy(), Policy::default());

    let from_vec = RingDeque::from(vec![0, 1, 2, 3]);
    assert_eq!(from_vec, tester);

    let empty: RingDeque<u8> = Vec::new().into();
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn comparisons_ignore_layout() {
    let mut rotated = RingDeque::with_capacity(3);
    rotated.extend(0..5);
    let linear = RingDeque::from(vec![2, 3, 4]);
    assert_eq!(rotated, linear);

    let mut bigger = RingDeque::dynamic(16);
    bigger.extend(vec![2, 3, 5]);
    assert!(linear < bigger);
    assert_eq!(linear.cmp(&bigger), core::cmp::Ordering::Less);

    use core::hash::{Hash, Hasher};
    use std::collections::hash_map::DefaultHasher;

    let hash = |deque: &RingDeque<i32>| {
        let mut hasher = DefaultHasher::new();
        deque.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&rotated), hash(&linear));
}

#[test]
fn debug_lists_elements() {
    let mut tester = RingDeque::with_capacity(2);
    tester.extend(0..3);
    assert_eq!(format!("{:?}", tester), "[1, 2]");
}

#[test]
fn policy_can_change_between_operations() {
    let mut tester = RingDeque::new(2, Policy::REJECT_ON_FULL);
    tester.extend(0..2);
    assert!(tester.push_back(2).is_err());

    tester.policy_mut().overflow = OverflowMode::ReplaceOldest;
    tester.push_back(2).unwrap();
    assert_eq!(contents(&tester), [1, 2]);

    let previous = tester.set_policy(Policy {
        capacity: CapacityMode::Dynamic,
        overflow: OverflowMode::RejectOnFull,
    });
    assert_eq!(previous, Policy::REPLACE_OLDEST);
    tester.push_back(3).unwrap();
    assert_eq!(tester.capacity(), 4);
    assert_eq!(contents(&tester), [1, 2, 3]);
}
