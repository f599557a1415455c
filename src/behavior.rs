//! Behavior semantics for `RingDeque`.
//!
//! The policy set is split into independent axes so that every combination is
//! meaningful: [`CapacityMode`] decides whether the buffer may reallocate,
//! [`OverflowMode`] decides what a fixed-capacity buffer does once it is full.
//! [`ResizeTieBreak`] and [`InsertTieBreak`] are passed per call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the capacity of a `RingDeque` may change on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapacityMode {
    /// The capacity only changes through an explicit `resize`.
    #[default]
    Fixed,
    /// The capacity doubles when an insertion finds the buffer full, and halves
    /// when a removal leaves it at a quarter occupancy or less.
    ///
    /// A dynamic buffer never overflows, so its [`OverflowMode`] is unused.
    Dynamic,
}

/// What a fixed-capacity `RingDeque` does when inserting into a full buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowMode {
    /// Overwrite the oldest element on the far side.
    ///
    /// ### Pushing to back:
    ///
    /// Pushing elements to the **back** of a deque that **has already reached its capacity**
    /// causes it to **overwrite** existing elements from the **front**.
    ///
    /// ### Pushing to front:
    ///
    /// Pushing elements to the **front** of a deque that **has already reached its capacity**
    /// causes it to **overwrite** existing elements from the **back**.
    #[default]
    ReplaceOldest,
    /// Fail with `BufferFull`, without performing any mutation.
    RejectOnFull,
}

/// The pair of capacity and overflow behaviors attached to a `RingDeque`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Policy {
    /// Capacity behavior.
    pub capacity: CapacityMode,
    /// Overflow behavior, consulted only under `CapacityMode::Fixed`.
    pub overflow: OverflowMode,
}

impl Policy {
    /// Fixed capacity, overwriting the oldest element when full.
    pub const REPLACE_OLDEST: Policy = Policy::fixed(OverflowMode::ReplaceOldest);

    /// Fixed capacity, rejecting insertions when full.
    pub const REJECT_ON_FULL: Policy = Policy::fixed(OverflowMode::RejectOnFull);

    /// Dynamic capacity.
    pub const DYNAMIC: Policy = Policy {
        capacity: CapacityMode::Dynamic,
        overflow: OverflowMode::ReplaceOldest,
    };

    /// A fixed-capacity policy with the given overflow behavior.
    #[inline]
    pub const fn fixed(overflow: OverflowMode) -> Policy {
        Policy {
            capacity: CapacityMode::Fixed,
            overflow,
        }
    }

    #[inline]
    pub(crate) fn is_dynamic(&self) -> bool {
        self.capacity == CapacityMode::Dynamic
    }

    #[inline]
    pub(crate) fn rejects_on_full(&self) -> bool {
        self.capacity == CapacityMode::Fixed && self.overflow == OverflowMode::RejectOnFull
    }
}

/// Which elements `resize` drops when the new capacity is below the length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResizeTieBreak {
    /// Drop from the front, keeping the most recently pushed elements.
    #[default]
    DiscardOld,
    /// Drop from the back, keeping the oldest elements.
    DiscardNew,
}

/// Which element `insert` evicts from a full `ReplaceOldest` buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InsertTieBreak {
    /// Pop the front element before inserting.
    #[default]
    DiscardHead,
    /// Pop the back element before inserting.
    DiscardTail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_replaces_oldest() {
        let policy = Policy::default();
        assert_eq!(policy, Policy::REPLACE_OLDEST);
        assert!(!policy.is_dynamic());
        assert!(!policy.rejects_on_full());
    }

    #[test]
    fn dynamic_never_rejects() {
        let policy = Policy {
            capacity: CapacityMode::Dynamic,
            overflow: OverflowMode::RejectOnFull,
        };
        assert!(policy.is_dynamic());
        assert!(!policy.rejects_on_full());
    }
}
