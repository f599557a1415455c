use core::mem;

use super::RingDeque;
use crate::arena::SlotArena;
use crate::behavior::{Policy, ResizeTieBreak};
use crate::error::Error;
use crate::utils::*;

impl<T> RingDeque<T> {
    /// Rearranges the elements in place so that the front element sits in
    /// slot 0, then returns the deque for chaining.
    ///
    /// Capacity and element order are unchanged, and no element is cloned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.extend(vec![1, 2, 3, 4, 5]);
    /// assert!(!buf.is_linearized());
    ///
    /// buf.linearize();
    /// assert!(buf.is_linearized());
    /// assert_eq!(buf.data(), Ok(&[2, 3, 4, 5][..]));
    /// ```
    pub fn linearize(&mut self) -> &mut Self {
        let len = self.len();
        let capacity = self.capacity();

        if len == 0 {
            self.head = 0;
            self.set_len(0);
            return self;
        }
        if self.head == 0 {
            return self;
        }

        let head = self.head;
        if self.is_full() {
            //  full ring, any head:
            //
            //         H
            //  [o o o o o o o o]
            //
            //   H
            //  [o o o o o o o o]
            //
            self.slots.rotate_left(capacity, head);
        } else if head + len <= capacity {
            //  one contiguous run:
            //
            //         H         T
            //  [. . . o o o o o . . .]
            //
            //   H         T
            //  [o o o o o . . . . . .]
            //   M M M M M
            for i in 0..len {
                unsafe { self.slots.relocate(i, head + i) };
            }
        } else {
            //  wrapped around:
            //
            //       T       H
            //  [o o . . . . o o o]
            //
            //  move the front run down next to the back run, then rotate
            //  the occupied prefix so the front run comes first
            //
            //       T
            //  [o o o o o . . . .]
            //       M M M
            //
            //   H         T
            //  [o o o o o . . . .]
            //
            let tail = head + len - capacity;
            for i in 0..capacity - head {
                unsafe { self.slots.relocate(tail + i, head + i) };
            }
            self.slots.rotate_left(len, tail);
        }

        self.head = 0;
        self.set_len(len);
        self
    }

    /// Returns a linearized deep copy with the same capacity and policy.
    ///
    /// The source is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut buf = RingDeque::with_capacity(3);
    /// buf.extend(vec![1, 2, 3, 4]);
    ///
    /// let copy = buf.linearize_copy();
    /// assert!(copy.is_linearized());
    /// assert!(!buf.is_linearized());
    /// assert_eq!(copy, buf);
    /// ```
    #[inline]
    pub fn linearize_copy(&self) -> RingDeque<T>
    where
        T: Clone,
    {
        self.clone()
    }

    /// Returns a linearized deep copy with the same capacity and a different
    /// policy.
    pub fn linearize_copy_with(&self, policy: Policy) -> RingDeque<T>
    where
        T: Clone,
    {
        let mut copy = self.clone();
        copy.policy = policy;
        copy
    }

    /// Changes the capacity to `new_capacity`, moving the survivors into a
    /// fresh allocation starting at slot 0.
    ///
    /// When fewer slots than elements remain, `tie_break` decides which
    /// elements are dropped: `DiscardOld` drops from the front and
    /// `DiscardNew` drops from the back. Resizing to zero drops every element
    /// and releases the allocation. Resizing to the current capacity does
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{ResizeTieBreak, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(5);
    /// buf.extend(vec![1, 2, 3, 4, 5]);
    ///
    /// buf.resize(3, ResizeTieBreak::DiscardOld);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
    ///
    /// buf.resize(2, ResizeTieBreak::DiscardNew);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [3, 4]);
    /// assert_eq!(buf.capacity(), 2);
    /// ```
    pub fn resize(&mut self, new_capacity: usize, tie_break: ResizeTieBreak) {
        let capacity = self.capacity();
        if new_capacity == capacity {
            return;
        }
        let len = self.len();

        if new_capacity == 0 {
            tracing::debug!(from = capacity, len, "releasing ring buffer storage");
            self.clear();
            self.slots = SlotArena::new(0);
            self.head = 0;
            self.set_len(0);
            return;
        }

        tracing::debug!(from = capacity, to = new_capacity, len, "resizing ring buffer");
        if len <= new_capacity {
            self.reallocate(new_capacity);
            return;
        }

        let excess = len - new_capacity;
        let (kept, discarded) = match tie_break {
            ResizeTieBreak::DiscardOld => (excess..len, 0..excess),
            ResizeTieBreak::DiscardNew => (0..new_capacity, new_capacity..len),
        };

        let mut slots = SlotArena::new(new_capacity);
        let first = kept.start;
        for i in kept {
            let index = self.phys(i);
            slots.construct(i - first, unsafe { self.slots.take(index) });
        }

        let old_head = self.head;
        let mut old = mem::replace(&mut self.slots, slots);
        self.head = 0;
        self.set_len(new_capacity);

        // The deque is consistent from here on; a panicking destructor only
        // leaks the rest of the discarded elements.
        for i in discarded {
            unsafe { old.destroy(wrap_add(old_head, i, capacity)) };
        }
    }

    /// Returns the elements as one contiguous slice, in order.
    ///
    /// Succeeds only when the deque is linearized or full. A full deque that
    /// is not linearized yields every slot in physical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{Error, RingDeque};
    ///
    /// let mut buf = RingDeque::with_capacity(4);
    /// buf.extend(vec![1, 2, 3]);
    /// assert_eq!(buf.data(), Ok(&[1, 2, 3][..]));
    ///
    /// buf.pop_front().unwrap();
    /// assert_eq!(buf.data(), Err(Error::NotLinearizedNotFull));
    /// ```
    pub fn data(&self) -> Result<&[T], Error> {
        if !self.is_linearized() && !self.is_full() {
            return Err(Error::NotLinearizedNotFull);
        }
        Ok(unsafe { self.slots.slice(0, self.len()) })
    }

    /// Mutable variant of [`data`](#method.data).
    pub fn data_mut(&mut self) -> Result<&mut [T], Error> {
        if !self.is_linearized() && !self.is_full() {
            return Err(Error::NotLinearizedNotFull);
        }
        let len = self.len();
        Ok(unsafe { self.slots.slice_mut(0, len) })
    }
}
