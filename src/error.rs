//! Errors reported by `RingDeque` operations.

use core::fmt;

/// Error kinds reported by `RingDeque` operations.
///
/// Every failing call leaves the deque exactly as it was before the call.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// An insertion into a fixed buffer with zero capacity.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
    /// An insertion into a full `RejectOnFull` buffer.
    #[error("buffer is full with capacity {capacity}")]
    BufferFull {
        /// Capacity of the buffer.
        capacity: usize,
    },
    /// A removal or access on an empty buffer.
    #[error("buffer is empty with capacity {capacity}")]
    BufferEmpty {
        /// Capacity of the buffer.
        capacity: usize,
    },
    /// A logical index outside of the occupied range.
    #[error("index {index} out of range [0, {len})")]
    OutOfRange {
        /// Index that was requested.
        index: usize,
        /// Length at the time of the request.
        len: usize,
    },
    /// Contiguous access requested while the buffer is neither linearized nor full.
    #[error("buffer is not linearized and not full")]
    NotLinearizedNotFull,
}

/// Error value returned by a rejected insertion.
///
/// The element that could not be inserted is handed back to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsertError<T> {
    /// The element that caused the error.
    pub element: T,
    /// Why the insertion was rejected.
    pub kind: Error,
}

impl<T> InsertError<T> {
    #[inline]
    pub(crate) fn new(element: T, kind: Error) -> Self {
        InsertError { element, kind }
    }

    /// Returns the rejected element.
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Returns the reason of the rejection.
    #[inline]
    pub fn kind(&self) -> Error {
        self.kind
    }
}

impl<T> core::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "insertion rejected: {}", self.kind)
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InsertError: {:?}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            Error::OutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 out of range [0, 3)"
        );
        assert_eq!(
            Error::BufferFull { capacity: 10 }.to_string(),
            "buffer is full with capacity 10"
        );
    }

    #[test]
    fn insert_error_hands_back_element() {
        struct Opaque(u8);

        let err = InsertError::new(Opaque(4), Error::ZeroCapacity);
        assert_eq!(err.kind(), Error::ZeroCapacity);
        assert_eq!(
            err.to_string(),
            "insertion rejected: capacity must be greater than zero"
        );
        assert_eq!(err.into_inner().0, 4);
    }
}
