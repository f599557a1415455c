use core::cmp;

use super::RingDeque;
use crate::arena::SlotArena;
use crate::utils::*;

/// Smallest capacity a dynamic buffer shrinks from on its own.
pub const MIN_DYNAMIC_CAPACITY: usize = 4;

/// Where an insertion will land once `prepare_insert` has run.
pub(crate) enum Room {
    /// A dead slot is available at either end.
    Vacant,
    /// The buffer is full and the oldest element must give way.
    Occupied,
}

impl<T> RingDeque<T> {
    /// Physical slot of the logical index `index`.
    #[inline]
    pub(crate) fn phys(&self, index: usize) -> usize {
        wrap_add(self.head, index, self.capacity())
    }

    /// Recomputes `tail` from `head` for a sequence of `len` elements.
    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        let capacity = self.capacity();
        debug_assert!(len <= capacity);
        self.tail = if len == capacity {
            None
        } else {
            Some(wrap_add(self.head, len, capacity))
        };
    }

    /// Decides how the next insertion proceeds, growing a dynamic buffer
    /// when it is full.
    pub(crate) fn prepare_insert(&mut self) -> Result<Room, crate::Error> {
        if !self.is_full() {
            return Ok(Room::Vacant);
        }
        if self.policy.is_dynamic() {
            self.grow();
            return Ok(Room::Vacant);
        }
        if self.capacity() == 0 {
            return Err(crate::Error::ZeroCapacity);
        }
        if self.policy.rejects_on_full() {
            return Err(crate::Error::BufferFull {
                capacity: self.capacity(),
            });
        }
        Ok(Room::Occupied)
    }

    /// Moves the front element out. The deque must not be empty.
    pub(crate) fn take_front(&mut self) -> T {
        let len = self.len();
        debug_assert!(len > 0);
        let index = self.head;
        let value = unsafe { self.slots.take(index) };
        self.head = wrap_add(index, 1, self.capacity());
        self.set_len(len - 1);
        value
    }

    /// Moves the back element out. The deque must not be empty.
    pub(crate) fn take_back(&mut self) -> T {
        let len = self.len();
        debug_assert!(len > 0);
        let index = self.phys(len - 1);
        let value = unsafe { self.slots.take(index) };
        self.set_len(len - 1);
        value
    }

    /// Opens a dead slot at logical position `pos` by moving the shorter side
    /// outwards by one slot. Returns the physical index of the opened slot;
    /// the length is already accounted for.
    pub(crate) fn open_gap(&mut self, pos: usize) -> usize {
        let len = self.len();
        let capacity = self.capacity();
        debug_assert!(len < capacity);
        debug_assert!(pos <= len);

        if pos < len - pos {
            //  closer to head:
            //
            //         H   I       T
            //  [. . . o o A o o o . . .]
            //
            //       H       T
            //  [. . o o I A o o o . . .]
            //       M M
            let head = self.head;
            let new_head = wrap_sub(head, 1, capacity);
            for i in 0..pos {
                let dst = wrap_add(new_head, i, capacity);
                let src = wrap_add(head, i, capacity);
                unsafe { self.slots.relocate(dst, src) };
            }
            self.head = new_head;
            self.set_len(len + 1);
            wrap_add(new_head, pos, capacity)
        } else {
            //  closer to tail:
            //
            //         H       I   T
            //  [. . . o o o o A o . . .]
            //
            //         H             T
            //  [. . . o o o o I A o . .]
            //                   M M
            for i in (pos..len).rev() {
                let dst = self.phys(i + 1);
                let src = self.phys(i);
                unsafe { self.slots.relocate(dst, src) };
            }
            self.set_len(len + 1);
            self.phys(pos)
        }
    }

    /// Closes the dead slot left at logical position `pos` of a sequence that
    /// was `len` long, moving the shorter side inwards by one slot.
    pub(crate) fn close_gap(&mut self, pos: usize, len: usize) {
        let capacity = self.capacity();
        debug_assert!(pos < len);

        if pos < len - 1 - pos {
            //  closer to head:
            //
            //         H   R       T
            //  [. . . o o x o o o . . .]
            //
            //           H         T
            //  [. . . . o o o o o . . .]
            //           M M
            for i in (0..pos).rev() {
                let dst = self.phys(i + 1);
                let src = self.phys(i);
                unsafe { self.slots.relocate(dst, src) };
            }
            self.head = wrap_add(self.head, 1, capacity);
        } else {
            //  closer to tail:
            //
            //         H       R   T
            //  [. . . o o o o x o . . .]
            //
            //         H         T
            //  [. . . o o o o o . . . .]
            //                 M
            for i in pos + 1..len {
                let dst = self.phys(i - 1);
                let src = self.phys(i);
                unsafe { self.slots.relocate(dst, src) };
            }
        }
        self.set_len(len - 1);
    }

    /// Moves every element, in logical order, into a fresh arena of
    /// `new_capacity` slots starting at slot 0.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        let len = self.len();
        debug_assert!(new_capacity >= len);

        let mut slots = SlotArena::new(new_capacity);
        for i in 0..len {
            let index = self.phys(i);
            slots.construct(i, unsafe { self.slots.take(index) });
        }
        self.slots = slots;
        self.head = 0;
        self.set_len(len);
    }

    pub(crate) fn grow(&mut self) {
        let capacity = self.capacity();
        let new_capacity = cmp::max(1, capacity.saturating_mul(2));
        tracing::debug!(
            from = capacity,
            to = new_capacity,
            len = self.len(),
            "growing dynamic ring buffer"
        );
        self.reallocate(new_capacity);
    }

    /// Halves a dynamic buffer that has dropped to a quarter occupancy.
    pub(crate) fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        let len = self.len();
        if self.policy.is_dynamic() && capacity > MIN_DYNAMIC_CAPACITY && len * 4 <= capacity {
            tracing::debug!(
                from = capacity,
                to = capacity / 2,
                len,
                "shrinking dynamic ring buffer"
            );
            self.reallocate(capacity / 2);
        }
    }
}
