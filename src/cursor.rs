//! Random-access cursors over the logical sequence of a `RingDeque`.
//!
//! A cursor caches the length of the deque when it is created and checks
//! every access against that snapshot. While a cursor lives it borrows the
//! deque, so the snapshot cannot go stale: no structural mutation can happen
//! until the cursor is gone.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::error::Error;
use crate::RingDeque;

/// Moves `position` by `n` within `[0, len)`, landing on the end position
/// (`None`) when it leaves that range. The end steps back onto `len - 1`.
#[inline]
fn step(position: Option<usize>, len: usize, n: isize) -> Option<usize> {
    let base = position.unwrap_or(len);
    let target = if n < 0 {
        base.checked_sub(n.unsigned_abs())
    } else {
        base.checked_add(n as usize)
    };
    target.filter(|&target| target < len)
}

/// `-n`, with `isize::MIN` clamped to `isize::MAX`; either one leaves the range.
#[inline]
fn negate(n: isize) -> isize {
    n.checked_neg().unwrap_or(isize::MAX)
}

#[inline]
fn out_of_range(position: Option<usize>, len: usize) -> Error {
    Error::OutOfRange {
        index: position.unwrap_or(len),
        len,
    }
}

/// A read-only cursor into a `RingDeque`.
///
/// The cursor is either on an element or on the end position, one past the
/// back. Moving past either bound lands on the end position, and moving back
/// from the end lands on the back element.
///
/// # Examples
///
/// ```
/// use ringdeque::RingDeque;
///
/// let buf: RingDeque<_> = vec![1, 2, 3].into();
///
/// let mut cursor = buf.cursor_end();
/// cursor -= 1;
/// assert_eq!(cursor.get(), Ok(&3));
/// assert_eq!(cursor.at(-2), Ok(&1));
/// assert_eq!(cursor - buf.cursor(), 2);
/// ```
pub struct Cursor<'a, T: 'a> {
    deque: &'a RingDeque<T>,
    position: Option<usize>,
    len: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(deque: &'a RingDeque<T>, position: usize) -> Cursor<'a, T> {
        let len = deque.len();
        Cursor {
            deque,
            position: Some(position).filter(|&position| position < len),
            len,
        }
    }

    /// Logical position of the cursor; the end position reads as the cached
    /// length.
    #[inline]
    pub fn index(&self) -> usize {
        self.position.unwrap_or(self.len)
    }

    /// Length of the deque when the cursor was created.
    #[inline]
    pub fn snapshot_len(&self) -> usize {
        self.len
    }

    /// Returns true if the cursor is on the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Returns the element under the cursor, or [`Error::OutOfRange`] on the
    /// end position.
    pub fn get(&self) -> Result<&'a T, Error> {
        let deque: &'a RingDeque<T> = self.deque;
        self.position
            .and_then(|position| deque.get(position))
            .ok_or_else(|| out_of_range(self.position, self.len))
    }

    /// Returns the element `n` positions away from the cursor.
    #[inline]
    pub fn at(&self, n: isize) -> Result<&'a T, Error> {
        (*self + n).get()
    }

    /// Moves the cursor by `n` positions.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.position = step(self.position, self.len, n);
    }

    /// Moves to the next element.
    #[inline]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    /// Moves to the previous element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.advance(-1);
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline]
    fn add(mut self, n: isize) -> Cursor<'a, T> {
        self.advance(n);
        self
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline]
    fn sub(mut self, n: isize) -> Cursor<'a, T> {
        self.advance(negate(n));
        self
    }
}

impl<'a, T> AddAssign<isize> for Cursor<'a, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<'a, T> SubAssign<isize> for Cursor<'a, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.advance(negate(n));
    }
}

/// Signed distance between two cursors, end positions counting as the cached
/// length.
impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Cursor<'a, T>) -> isize {
        self.index() as isize - other.index() as isize
    }
}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.deque, other.deque) && self.index() == other.index()
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

/// Cursors over different deques are unordered.
impl<'a, T> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.deque, other.deque) {
            Some(self.index().cmp(&other.index()))
        } else {
            None
        }
    }
}

impl<'a, T> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.len)
            .finish()
    }
}

/// A cursor into a `RingDeque` that can modify the element under it.
///
/// Navigation follows [`Cursor`].
pub struct CursorMut<'a, T: 'a> {
    deque: &'a mut RingDeque<T>,
    position: Option<usize>,
    len: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(deque: &'a mut RingDeque<T>, position: usize) -> CursorMut<'a, T> {
        let len = deque.len();
        CursorMut {
            deque,
            position: Some(position).filter(|&position| position < len),
            len,
        }
    }

    /// Logical position of the cursor; the end position reads as the cached
    /// length.
    #[inline]
    pub fn index(&self) -> usize {
        self.position.unwrap_or(self.len)
    }

    /// Length of the deque when the cursor was created.
    #[inline]
    pub fn snapshot_len(&self) -> usize {
        self.len
    }

    /// Returns true if the cursor is on the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Returns the element under the cursor.
    pub fn get(&self) -> Result<&T, Error> {
        self.position
            .and_then(|position| self.deque.get(position))
            .ok_or_else(|| out_of_range(self.position, self.len))
    }

    /// Returns the element under the cursor mutably.
    pub fn get_mut(&mut self) -> Result<&mut T, Error> {
        let (position, len) = (self.position, self.len);
        position
            .and_then(|position| self.deque.get_mut(position))
            .ok_or_else(|| out_of_range(position, len))
    }

    /// Returns the element `n` positions away from the cursor.
    pub fn at(&self, n: isize) -> Result<&T, Error> {
        let position = step(self.position, self.len, n);
        position
            .and_then(|position| self.deque.get(position))
            .ok_or_else(|| out_of_range(position, self.len))
    }

    /// Moves the cursor by `n` positions.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.position = step(self.position, self.len, n);
    }

    /// Moves to the next element.
    #[inline]
    pub fn move_next(&mut self) {
        self.advance(1);
    }

    /// Moves to the previous element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.advance(-1);
    }

    /// Returns a read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            deque: &*self.deque,
            position: self.position,
            len: self.len,
        }
    }
}

impl<'a, T> AddAssign<isize> for CursorMut<'a, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<'a, T> SubAssign<isize> for CursorMut<'a, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.advance(negate(n));
    }
}

impl<'a, T> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.len)
            .finish()
    }
}
