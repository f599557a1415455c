//! Raw slot storage for `RingDeque`.
//!
//! A `SlotArena` owns one contiguous allocation of possibly uninitialized
//! slots. It has no notion of which slots form the logical sequence; the ring
//! engine is the only authority on liveness. Debug builds keep a per-slot
//! liveness bitset and assert every construct/destroy against it.
//!
//! Dropping an arena never drops values. Every slot must be dead by then;
//! debug builds assert it unless the thread is already unwinding.

use alloc::boxed::Box;
#[cfg(debug_assertions)]
use alloc::vec;
use alloc::vec::Vec;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

pub(crate) struct SlotArena<T> {
    slots: Box<[MaybeUninit<T>]>,
    #[cfg(debug_assertions)]
    live: Vec<bool>,
}

impl<T> SlotArena<T> {
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, MaybeUninit::uninit);
        SlotArena {
            slots: slots.into_boxed_slice(),
            #[cfg(debug_assertions)]
            live: vec![false; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` into a dead slot.
    #[inline]
    pub fn construct(&mut self, index: usize, value: T) -> &mut T {
        self.mark_live(index);
        self.slots[index].write(value)
    }

    /// Drops the value held by a live slot.
    ///
    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn destroy(&mut self, index: usize) {
        self.mark_dead(index);
        ptr::drop_in_place(self.slots[index].as_mut_ptr());
    }

    /// Moves the value out of a live slot, leaving it dead.
    ///
    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn take(&mut self, index: usize) -> T {
        self.mark_dead(index);
        self.slots[index].assume_init_read()
    }

    /// Moves the value of live slot `src` into dead slot `dst`.
    ///
    /// # Safety
    ///
    /// `src` must be live and `dst` must be dead.
    #[inline]
    pub unsafe fn relocate(&mut self, dst: usize, src: usize) {
        debug_assert_ne!(dst, src);
        let value = self.take(src);
        self.construct(dst, value);
    }

    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn get(&self, index: usize) -> &T {
        self.debug_check_live(index);
        self.slots[index].assume_init_ref()
    }

    /// # Safety
    ///
    /// The slot must be live.
    #[inline]
    pub unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        self.debug_check_live(index);
        self.slots[index].assume_init_mut()
    }

    /// Views `len` slots starting at `start` as initialized values.
    ///
    /// # Safety
    ///
    /// Every slot in `start..start + len` must be live.
    #[inline]
    pub unsafe fn slice(&self, start: usize, len: usize) -> &[T] {
        debug_assert!(start + len <= self.capacity());
        for index in start..start + len {
            self.debug_check_live(index);
        }
        slice::from_raw_parts(self.slots.as_ptr().add(start) as *const T, len)
    }

    /// # Safety
    ///
    /// Every slot in `start..start + len` must be live.
    #[inline]
    pub unsafe fn slice_mut(&mut self, start: usize, len: usize) -> &mut [T] {
        debug_assert!(start + len <= self.capacity());
        for index in start..start + len {
            self.debug_check_live(index);
        }
        slice::from_raw_parts_mut(self.slots.as_mut_ptr().add(start) as *mut T, len)
    }

    /// Views `first` live slots from `start` and `second` live slots from 0
    /// as two disjoint mutable slices.
    ///
    /// # Safety
    ///
    /// Both ranges must be live, and `second <= start`.
    pub unsafe fn split_slices_mut(
        &mut self,
        start: usize,
        first: usize,
        second: usize,
    ) -> (&mut [T], &mut [T]) {
        debug_assert!(second <= start);
        debug_assert!(start + first <= self.capacity());
        for index in (start..start + first).chain(0..second) {
            self.debug_check_live(index);
        }
        let (low, high) = self.slots.split_at_mut(start);
        (
            slice::from_raw_parts_mut(high.as_mut_ptr() as *mut T, first),
            slice::from_raw_parts_mut(low.as_mut_ptr() as *mut T, second),
        )
    }

    /// Swaps the contents of two slots.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        #[cfg(debug_assertions)]
        self.live.swap(a, b);
    }

    /// Rotates the first `len` slots left by `mid`, carrying liveness along.
    pub fn rotate_left(&mut self, len: usize, mid: usize) {
        self.slots[..len].rotate_left(mid);
        #[cfg(debug_assertions)]
        self.live[..len].rotate_left(mid);
    }

    /// Number of live slots, as tracked by the debug bitset.
    #[cfg(all(debug_assertions, test))]
    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|live| **live).count()
    }

    #[inline]
    fn mark_live(&mut self, _index: usize) {
        #[cfg(debug_assertions)]
        {
            assert!(!self.live[_index], "slot {} is already constructed", _index);
            self.live[_index] = true;
        }
    }

    #[inline]
    fn mark_dead(&mut self, _index: usize) {
        #[cfg(debug_assertions)]
        {
            assert!(self.live[_index], "slot {} is not constructed", _index);
            self.live[_index] = false;
        }
    }

    #[inline]
    fn debug_check_live(&self, _index: usize) {
        #[cfg(debug_assertions)]
        assert!(self.live[_index], "slot {} is not constructed", _index);
    }
}

impl<T> Drop for SlotArena<T> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            if unwinding() {
                return;
            }
            let live = self.live.iter().filter(|live| **live).count();
            assert!(live == 0, "arena dropped with {} live slot(s)", live);
        }
    }
}

#[cfg(debug_assertions)]
#[inline]
fn unwinding() -> bool {
    #[cfg(any(feature = "std", test))]
    {
        std::thread::panicking()
    }
    #[cfg(not(any(feature = "std", test)))]
    {
        false
    }
}
