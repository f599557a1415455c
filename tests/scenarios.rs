use ringdeque::{Error, InsertTieBreak, Policy, ResizeTieBreak, RingDeque};

fn contents<T: Copy>(deque: &RingDeque<T>) -> Vec<T> {
    deque.iter().copied().collect()
}

#[test]
fn replace_oldest_keeps_the_newest() {
    let mut deque = RingDeque::new(5, Policy::REPLACE_OLDEST);
    for i in 1..=7 {
        deque.push_back(i).unwrap();
    }
    assert_eq!(contents(&deque), [3, 4, 5, 6, 7]);
    // full, so the raw view is available in physical order
    assert_eq!(deque.data(), Ok(&[6, 7, 3, 4, 5][..]));
    assert!(!deque.is_linearized());
}

#[test]
fn reject_on_full_reports_and_keeps_state() {
    let mut deque = RingDeque::new(10, Policy::REJECT_ON_FULL);
    for i in 0..10 {
        deque.push_back(i).unwrap();
    }
    let err = deque.push_back(42).unwrap_err();
    assert_eq!(err.kind(), Error::BufferFull { capacity: 10 });
    assert_eq!(err.to_string(), "insertion rejected: buffer is full with capacity 10");
    assert_eq!(deque.len(), 10);
    assert_eq!(contents(&deque), (0..10).collect::<Vec<_>>());
}

#[test]
fn dynamic_never_fails_to_insert() {
    let mut deque = RingDeque::new(5, Policy::DYNAMIC);
    for i in 0..=10 {
        deque.push_back(i).unwrap();
    }
    assert!(deque.capacity() > 10);
    assert_eq!(deque.len(), 11);
    assert_eq!(contents(&deque)[..10], (0..10).collect::<Vec<_>>()[..]);
}

#[test]
fn resize_after_wrapping() {
    let mut deque = RingDeque::with_capacity(5);
    for i in 1..=14 {
        deque.push_back(i).unwrap();
    }
    assert_eq!(contents(&deque), [10, 11, 12, 13, 14]);

    deque.resize(10, ResizeTieBreak::DiscardOld);
    assert!(deque.is_linearized());
    assert!(!deque.is_full());
    assert_eq!(deque.data(), Ok(&[10, 11, 12, 13, 14][..]));
    assert_eq!(deque.capacity(), 10);
}

#[test]
fn remove_from_the_middle() {
    let mut deque = RingDeque::with_capacity(10);
    for i in 0..15 {
        deque.push_back(i).unwrap();
    }
    assert_eq!(contents(&deque), (5..15).collect::<Vec<_>>());

    assert_eq!(deque.remove(3), Ok(8));
    assert_eq!(contents(&deque), [5, 6, 7, 9, 10, 11, 12, 13, 14]);
}

#[test]
fn insert_into_the_middle() {
    let mut deque = RingDeque::with_capacity(8);
    deque.extend(10..=14);
    let inserted = deque.insert(2, 99, InsertTieBreak::DiscardHead).unwrap();
    assert_eq!(*inserted, 99);
    assert_eq!(contents(&deque), [10, 11, 99, 12, 13, 14]);
}

#[test]
fn errors_render_with_context() {
    let mut deque: RingDeque<u8> = RingDeque::with_capacity(2);
    assert_eq!(
        deque.pop_front().unwrap_err().to_string(),
        "buffer is empty with capacity 2"
    );
    deque.push_back(1).unwrap();
    assert_eq!(
        deque.at(4).unwrap_err().to_string(),
        "index 4 out of range [0, 1)"
    );
    deque.pop_front().unwrap();
    deque.push_back(2).unwrap();
    assert_eq!(
        deque.data().unwrap_err().to_string(),
        "buffer is not linearized and not full"
    );

    let mut empty: RingDeque<u8> = RingDeque::default();
    let err = empty.push_back(1).unwrap_err();
    assert_eq!(
        std::error::Error::source(&err).map(|source| source.to_string()),
        Some(String::from("capacity must be greater than zero"))
    );
}

#[test]
fn cursor_walks_a_wrapped_buffer() {
    let mut deque = RingDeque::with_capacity(4);
    deque.extend(0..7);

    let mut cursor = deque.cursor();
    let mut seen = Vec::new();
    while let Ok(value) = cursor.get() {
        seen.push(*value);
        cursor.move_next();
    }
    assert_eq!(seen, [3, 4, 5, 6]);
    assert_eq!(cursor - deque.cursor(), 4);
    assert_eq!(cursor.get(), Err(Error::OutOfRange { index: 4, len: 4 }));
}
