#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    debug_assert!(capacity > 0);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    debug_assert!(capacity > 0);
    (index + capacity - subtrahend) % capacity
}

/// Number of slots walked from `head` up to (not including) `tail`.
#[inline]
pub fn count(head: usize, tail: usize, capacity: usize) -> usize {
    debug_assert!(head < capacity);
    debug_assert!(tail < capacity);
    if tail >= head {
        tail - head
    } else {
        capacity + tail - head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_add_crosses_the_end() {
        assert_eq!(wrap_add(3, 1, 5), 4);
        assert_eq!(wrap_add(4, 1, 5), 0);
        assert_eq!(wrap_add(4, 3, 5), 2);
        assert_eq!(wrap_add(0, 5, 5), 0);
    }

    #[test]
    fn wrap_sub_crosses_the_start() {
        assert_eq!(wrap_sub(3, 1, 5), 2);
        assert_eq!(wrap_sub(0, 1, 5), 4);
        assert_eq!(wrap_sub(1, 3, 5), 3);
    }

    #[test]
    fn count_handles_wrapped_region() {
        assert_eq!(count(0, 0, 5), 0);
        assert_eq!(count(1, 4, 5), 3);
        assert_eq!(count(3, 1, 5), 3);
        assert_eq!(count(2, 2, 5), 0);
    }
}
