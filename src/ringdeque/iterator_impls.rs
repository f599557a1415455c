use super::*;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.front.next() {
            Some(elem) => Some(elem),
            None => self.back.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.back.next_back() {
            Some(elem) => Some(elem),
            None => self.front.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> IntoIter<T> {
    pub(crate) fn new(mut inner: RingDeque<T>) -> IntoIter<T> {
        // A dynamic buffer would otherwise reallocate while being consumed.
        inner.policy.capacity = crate::behavior::CapacityMode::Fixed;
        IntoIter { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: 'a> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        let deque = &mut *self.deque;
        let removed = self.after - self.gap;
        let head_len = self.gap;
        let tail_len = self.orig_len - self.after;

        // H = deque head; g = drain gap; a = after the drained range
        //
        //        H   g   a
        // [. . . o o x x o o . . .]
        //
        if removed > 0 {
            let capacity = deque.capacity();
            if head_len <= tail_len {
                // slide the front section up against the remaining back
                for i in (0..head_len).rev() {
                    let dst = deque.phys(i + removed);
                    let src = deque.phys(i);
                    unsafe { deque.slots.relocate(dst, src) };
                }
                deque.head = wrap_add(deque.head, removed, capacity);
            } else {
                // slide the back section down against the front
                for i in 0..tail_len {
                    let dst = deque.phys(self.gap + i);
                    let src = deque.phys(self.after + i);
                    unsafe { deque.slots.relocate(dst, src) };
                }
            }
        }
        deque.set_len(self.orig_len - removed);
    }
}

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.deque.phys(self.front);
        self.front += 1;
        unsafe { Some(self.deque.slots.take(index)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let index = self.deque.phys(self.back);
        unsafe { Some(self.deque.slots.take(index)) }
    }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}
