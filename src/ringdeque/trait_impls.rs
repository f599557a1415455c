use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use super::*;

/// Deep copy with the same capacity and policy. The copy is linearized.
impl<T: Clone> Clone for RingDeque<T> {
    fn clone(&self) -> RingDeque<T> {
        let mut copy = RingDeque::new(self.capacity(), self.policy);
        for (i, elt) in self.iter().enumerate() {
            copy.slots.construct(i, elt.clone());
            copy.set_len(i + 1);
        }
        copy
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// An empty fixed buffer with zero capacity.
impl<T> Default for RingDeque<T> {
    #[inline]
    fn default() -> RingDeque<T> {
        RingDeque::new(0, Policy::default())
    }
}

/// Element-wise comparison; capacity, policy and layout are ignored.
impl<T: PartialEq> PartialEq for RingDeque<T> {
    fn eq(&self, other: &RingDeque<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingDeque<T> {}

impl<T: PartialOrd> PartialOrd for RingDeque<T> {
    fn partial_cmp(&self, other: &RingDeque<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<T> {
    #[inline]
    fn cmp(&self, other: &RingDeque<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

impl<T> Index<usize> for RingDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(elt) => elt,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elt) => elt,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

/// Collects into a full fixed buffer whose capacity is the number of
/// elements.
impl<T> iter::FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

/// Moves the elements of a vector into a full fixed buffer of the same
/// length.
impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut deque = RingDeque::new(vec.len(), Policy::default());
        for (i, elt) in vec.into_iter().enumerate() {
            deque.slots.construct(i, elt);
            deque.set_len(i + 1);
        }
        deque
    }
}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `RingDeque` with an iterator.
///
/// Elements are pushed to the back under the current policy, so a full
/// `ReplaceOldest` buffer keeps the last `capacity()` elements and a dynamic
/// buffer grows. A `RejectOnFull` buffer stops extracting items once it is
/// full; no error occurs if there are more iterator elements.
impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let take = if self.policy.rejects_on_full() || (!self.policy.is_dynamic() && self.capacity() == 0) {
            self.capacity() - self.len()
        } else {
            usize::MAX
        };
        for elt in iter.into_iter().take(take) {
            if self.push_back(elt).is_err() {
                break;
            }
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
