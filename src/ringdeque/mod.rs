use core::cmp;
use core::mem;

pub use odds::IndexRange as RangeArgument;

use crate::arena::SlotArena;
use crate::behavior::{InsertTieBreak, Policy};
use crate::cursor::{Cursor, CursorMut};
use crate::error::{Error, InsertError};
use crate::utils::*;

use self::internal::Room;
pub use self::internal::MIN_DYNAMIC_CAPACITY;

mod internal;
mod iterator_impls;
mod layout;
mod trait_impls;

#[cfg(test)]
mod tests;

/// `RingDeque` is a circular buffer with a runtime capacity.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto
/// the back in this manner, and iterating over `RingDeque` goes front to back.
///
/// What happens once the buffer is full is decided by its [`Policy`]: a fixed
/// buffer either overwrites the oldest element on the far side or rejects the
/// insertion, and a dynamic buffer doubles its capacity.
///
/// # Capacity
///
/// All `capacity()` slots are usable; a full buffer is told apart from an
/// empty one by the absence of a tail slot.
/// [Read more]
///
/// [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
pub struct RingDeque<T> {
    slots: SlotArena<T>,
    head: usize,
    // `None` while full, and always for a zero-capacity buffer.
    tail: Option<usize>,
    policy: Policy,
}

/// `RingDeque` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    front: core::slice::Iter<'a, T>,
    back: core::slice::Iter<'a, T>,
}

/// `RingDeque` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: core::slice::IterMut<'a, T>,
    back: core::slice::IterMut<'a, T>,
}

/// A by-value `RingDeque` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingDeque<T>,
}

/// A draining `RingDeque` iterator
pub struct Drain<'a, T: 'a> {
    deque: &'a mut RingDeque<T>,
    // logical bounds of the elements not yet yielded
    front: usize,
    back: usize,
    // the drained range, and the length before draining
    gap: usize,
    after: usize,
    orig_len: usize,
}

impl<T> RingDeque<T> {
    /// Creates an empty `RingDeque` with room for `capacity` elements.
    ///
    /// A capacity of zero is allowed; a fixed zero-capacity buffer rejects
    /// every insertion with [`Error::ZeroCapacity`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Policy, RingDeque};
    ///
    /// let buf: RingDeque<usize> = RingDeque::new(3, Policy::REJECT_ON_FULL);
    /// assert_eq!(buf.capacity(), 3);
    /// ```
    pub fn new(capacity: usize, policy: Policy) -> RingDeque<T> {
        let mut deque = RingDeque {
            slots: SlotArena::new(capacity),
            head: 0,
            tail: None,
            policy,
        };
        deque.set_len(0);
        deque
    }

    /// Creates an empty fixed-capacity `RingDeque` that overwrites its oldest
    /// element when full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// buf.push_back(3).unwrap();
    /// assert_eq!(buf, vec![2, 3].into_iter().collect::<RingDeque<_>>());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> RingDeque<T> {
        Self::new(capacity, Policy::REPLACE_OLDEST)
    }

    /// Creates an empty `RingDeque` that grows and shrinks on demand.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::dynamic(0);
    /// for i in 0..5 {
    ///     buf.push_back(i).unwrap();
    /// }
    /// assert_eq!(buf.len(), 5);
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    #[inline]
    pub fn dynamic(capacity: usize) -> RingDeque<T> {
        Self::new(capacity, Policy::DYNAMIC)
    }

    /// Returns the policy the deque currently follows.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns a mutable reference to the policy.
    ///
    /// A change takes effect from the next operation on.
    #[inline]
    pub fn policy_mut(&mut self) -> &mut Policy {
        &mut self.policy
    }

    /// Replaces the policy, returning the previous one.
    #[inline]
    pub fn set_policy(&mut self, policy: Policy) -> Policy {
        mem::replace(&mut self.policy, policy)
    }

    /// Retrieves an element in the `RingDeque` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.push_back(3).unwrap();
    /// buf.push_back(4).unwrap();
    /// buf.push_back(5).unwrap();
    /// assert_eq!(buf.get(1), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            let idx = self.phys(index);
            unsafe { Some(self.slots.get(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingDeque` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.push_back(3).unwrap();
    /// buf.push_back(4).unwrap();
    /// buf.push_back(5).unwrap();
    /// if let Some(elem) = buf.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(buf[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let idx = self.phys(index);
            unsafe { Some(self.slots.get_mut(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element by index, reporting [`Error::OutOfRange`] when
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.push_back('a').unwrap();
    /// assert_eq!(buf.at(0), Ok(&'a'));
    /// assert_eq!(buf.at(1), Err(Error::OutOfRange { index: 1, len: 1 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len();
        self.get(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable variant of [`at`](#method.at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len();
        self.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Returns the front element, or [`Error::BufferEmpty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// assert_eq!(buf.front(), Err(Error::BufferEmpty { capacity: 2 }));
    ///
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        let capacity = self.capacity();
        self.get(0).ok_or(Error::BufferEmpty { capacity })
    }

    /// Returns a mutable reference to the front element, or
    /// [`Error::BufferEmpty`].
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        let capacity = self.capacity();
        self.get_mut(0).ok_or(Error::BufferEmpty { capacity })
    }

    /// Returns the back element, or [`Error::BufferEmpty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf.back(), Ok(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        let capacity = self.capacity();
        match self.len() {
            0 => Err(Error::BufferEmpty { capacity }),
            len => self.at(len - 1),
        }
    }

    /// Returns a mutable reference to the back element, or
    /// [`Error::BufferEmpty`].
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        let capacity = self.capacity();
        match self.len() {
            0 => Err(Error::BufferEmpty { capacity }),
            len => self.at_mut(len - 1),
        }
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// Fails if there is no element with either index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.push_back(3).unwrap();
    /// buf.push_back(4).unwrap();
    /// buf.push_back(5).unwrap();
    /// buf.swap(0, 2).unwrap();
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [5, 4, 3]);
    /// assert!(buf.swap(0, 3).is_err());
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let len = self.len();
        for index in [i, j] {
            if index >= len {
                return Err(Error::OutOfRange { index, len });
            }
        }
        let ri = self.phys(i);
        let rj = self.phys(j);
        self.slots.swap(ri, rj);
        Ok(())
    }

    /// Returns the maximum number of elements the deque holds without
    /// overflowing or reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the number of elements in the `RingDeque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(1);
    /// assert_eq!(buf.len(), 0);
    /// buf.push_back(1).unwrap();
    /// assert_eq!(buf.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        match self.tail {
            None => self.capacity(),
            Some(tail) => count(self.head, tail, self.capacity()),
        }
    }

    /// Returns true if the buffer contains no elements.
    ///
    /// A zero-capacity buffer is both empty and full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(1);
    /// assert!(buf.is_empty());
    /// buf.push_front(1).unwrap();
    /// assert!(!buf.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(1);
    /// assert!(!buf.is_full());
    /// buf.push_front(1).unwrap();
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns true if the front element sits in the first slot, so that the
    /// whole sequence is one contiguous run.
    ///
    /// An empty buffer is linearized only when its head is at slot 0.
    #[inline]
    pub fn is_linearized(&self) -> bool {
        self.head == 0
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.push_back(5).unwrap();
    /// buf.push_back(3).unwrap();
    /// buf.push_back(4).unwrap();
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.push_back(5).unwrap();
    /// buf.push_back(3).unwrap();
    /// buf.push_back(4).unwrap();
    /// for num in buf.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 3, &mut 1, &mut 2];
    /// assert_eq!(&buf.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingDeque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(3);
    /// buf.push_back(0).unwrap();
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// buf.push_back(3).unwrap();
    ///
    /// assert_eq!(buf.as_slices(), (&[1, 2][..], &[3][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let len = self.len();
        if len == 0 {
            return (&[], &[]);
        }
        let first = cmp::min(len, self.capacity() - self.head);
        unsafe {
            (
                self.slots.slice(self.head, first),
                self.slots.slice(0, len - first),
            )
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `RingDeque`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let len = self.len();
        if len == 0 {
            return (&mut [], &mut []);
        }
        let head = self.head;
        let first = cmp::min(len, self.capacity() - head);
        unsafe { self.slots.split_slices_mut(head, first, len - first) }
    }

    /// Returns `true` if the `RingDeque` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// buf.push_back(0).unwrap();
    /// buf.push_back(1).unwrap();
    ///
    /// assert_eq!(buf.contains(&1), true);
    /// assert_eq!(buf.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Create a draining iterator that removes the specified range in the
    /// `RingDeque` and yields the removed items.
    ///
    /// Note 1: The element range is removed even if the iterator is not
    /// consumed until the end.
    ///
    /// Note 2: It is unspecified how many elements are removed from the deque,
    /// if the `Drain` value is not dropped, but the borrow it holds expires
    /// (ex. due to `mem::forget`). Debug builds panic when such a deque is
    /// dropped, because the leaked slots are still live.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.extend(vec![1, 2, 3]);
    /// let drained: Vec<_> = buf.drain(1..).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(buf.len(), 1);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeArgument<usize>,
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Truncate to the start of the range while draining, so a leaked
        // `Drain` leaks the drained and trailing elements instead of
        // exposing dead slots.
        self.set_len(start);

        Drain {
            deque: self,
            front: start,
            back: end,
            gap: start,
            after: end,
            orig_len: len,
        }
    }

    /// Clears the buffer, removing all values. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(1);
    /// buf.push_back(1).unwrap();
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 1);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.drain(..);
        self.head = 0;
        self.set_len(0);
    }

    /// Appends an element to the back of the buffer and returns a reference
    /// to it.
    ///
    /// On a full buffer the outcome depends on the policy: `ReplaceOldest`
    /// drops the front element, `RejectOnFull` hands the element back in an
    /// [`InsertError`], and a dynamic buffer doubles its capacity first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, Policy, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// buf.push_back(3).unwrap();
    /// assert_eq!(buf.front(), Ok(&2));
    ///
    /// let mut strict = RingDeque::new(1, Policy::REJECT_ON_FULL);
    /// strict.push_back(1).unwrap();
    /// let err = strict.push_back(2).unwrap_err();
    /// assert_eq!(err.kind(), Error::BufferFull { capacity: 1 });
    /// assert_eq!(err.into_inner(), 2);
    /// ```
    pub fn push_back(&mut self, element: T) -> Result<&mut T, InsertError<T>> {
        let room = match self.prepare_insert() {
            Ok(room) => room,
            Err(kind) => return Err(InsertError::new(element, kind)),
        };
        match room {
            Room::Vacant => {
                let len = self.len();
                let index = self.phys(len);
                self.set_len(len + 1);
                Ok(self.slots.construct(index, element))
            }
            Room::Occupied => {
                let index = self.head;
                self.head = wrap_add(index, 1, self.capacity());
                tracing::trace!(slot = index, "overwriting front element");
                let slot = unsafe { self.slots.get_mut(index) };
                *slot = element;
                Ok(slot)
            }
        }
    }

    /// Prepends an element to the front of the buffer and returns a reference
    /// to it.
    ///
    /// On a full `ReplaceOldest` buffer the back element is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// buf.push_front(1).unwrap();
    /// buf.push_front(2).unwrap();
    /// buf.push_front(3).unwrap();
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [3, 2]);
    /// ```
    pub fn push_front(&mut self, element: T) -> Result<&mut T, InsertError<T>> {
        let room = match self.prepare_insert() {
            Ok(room) => room,
            Err(kind) => return Err(InsertError::new(element, kind)),
        };
        let index = wrap_sub(self.head, 1, self.capacity());
        match room {
            Room::Vacant => {
                let len = self.len();
                self.head = index;
                self.set_len(len + 1);
                Ok(self.slots.construct(index, element))
            }
            Room::Occupied => {
                self.head = index;
                tracing::trace!(slot = index, "overwriting back element");
                let slot = unsafe { self.slots.get_mut(index) };
                *slot = element;
                Ok(slot)
            }
        }
    }

    /// Removes the first element and returns it, or [`Error::BufferEmpty`].
    ///
    /// A dynamic buffer halves its capacity once it is a quarter full or less.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// assert!(buf.pop_front().is_err());
    /// buf.push_back(1).unwrap();
    /// buf.push_back(2).unwrap();
    /// assert_eq!(buf.pop_front(), Ok(1));
    /// assert_eq!(buf.pop_front(), Ok(2));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::BufferEmpty {
                capacity: self.capacity(),
            });
        }
        let value = self.take_front();
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes the last element and returns it, or [`Error::BufferEmpty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(2);
    /// buf.push_back(1).unwrap();
    /// buf.push_back(3).unwrap();
    /// assert_eq!(buf.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::BufferEmpty {
                capacity: self.capacity(),
            });
        }
        let value = self.take_back();
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Inserts an element at logical position `pos`, shifting whichever side
    /// is shorter, and returns a reference to it.
    ///
    /// `pos` may equal the length. On a full `ReplaceOldest` buffer one
    /// element is evicted first, chosen by `tie_break`, and a `pos` that then
    /// lies past the end is clamped to the end. A fixed buffer of capacity
    /// zero reports [`Error::ZeroCapacity`] whatever `pos` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{InsertTieBreak, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.extend(vec![0, 1, 3]);
    /// buf.insert(2, 2, InsertTieBreak::DiscardHead).unwrap();
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    ///
    /// buf.insert(0, 9, InsertTieBreak::DiscardTail).unwrap();
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [9, 0, 1, 2]);
    /// ```
    pub fn insert(
        &mut self,
        pos: usize,
        element: T,
        tie_break: InsertTieBreak,
    ) -> Result<&mut T, InsertError<T>> {
        if self.capacity() == 0 && !self.policy.is_dynamic() {
            return Err(InsertError::new(element, Error::ZeroCapacity));
        }
        let len = self.len();
        if pos > len {
            return Err(InsertError::new(
                element,
                Error::OutOfRange { index: pos, len },
            ));
        }
        let room = match self.prepare_insert() {
            Ok(room) => room,
            Err(kind) => return Err(InsertError::new(element, kind)),
        };

        let mut pos = pos;
        if let Room::Occupied = room {
            tracing::trace!(?tie_break, "evicting to make room for insert");
            drop(match tie_break {
                InsertTieBreak::DiscardHead => self.take_front(),
                InsertTieBreak::DiscardTail => self.take_back(),
            });
            pos = cmp::min(pos, self.len());
        }

        let index = self.open_gap(pos);
        Ok(self.slots.construct(index, element))
    }

    /// Removes the element at logical position `pos` and returns it, shifting
    /// whichever side is shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// assert_eq!(buf.remove(0), Err(Error::BufferEmpty { capacity: 4 }));
    ///
    /// buf.extend(vec![1, 2, 3]);
    /// assert_eq!(buf.remove(1), Ok(2));
    /// assert_eq!(buf.remove(5), Err(Error::OutOfRange { index: 5, len: 2 }));
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn remove(&mut self, pos: usize) -> Result<T, Error> {
        let len = self.len();
        if len == 0 {
            return Err(Error::BufferEmpty {
                capacity: self.capacity(),
            });
        }
        if pos >= len {
            return Err(Error::OutOfRange { index: pos, len });
        }
        let index = self.phys(pos);
        let value = unsafe { self.slots.take(index) };
        self.close_gap(pos, len);
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Returns a cursor at the front element, or at the end of an empty
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(3);
    /// buf.extend(vec![1, 2, 3]);
    /// let cursor = buf.cursor();
    /// assert_eq!(cursor.get(), Ok(&1));
    /// assert_eq!((cursor + 2).get(), Ok(&3));
    /// assert!((cursor + 3).is_end());
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor at logical position `pos`. Positions at or past the
    /// length give the end cursor.
    #[inline]
    pub fn cursor_at(&self, pos: usize) -> Cursor<'_, T> {
        Cursor::new(self, pos)
    }

    /// Returns the end cursor, one past the back element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Returns a mutable cursor at the front element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(3);
    /// buf.extend(vec![1, 2, 3]);
    /// let mut cursor = buf.cursor_mut();
    /// while let Ok(value) = cursor.get_mut() {
    ///     *value *= 10;
    ///     cursor.move_next();
    /// }
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    /// ```
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutable cursor at logical position `pos`.
    #[inline]
    pub fn cursor_mut_at(&mut self, pos: usize) -> CursorMut<'_, T> {
        CursorMut::new(self, pos)
    }
}
