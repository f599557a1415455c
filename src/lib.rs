//! A circular buffer with fixed or dynamic capacity.
//! Requires Rust 1.81+
//!
//! This queue has `O(1)` inserts and removals from both ends of the
//! container (amortized when the capacity is dynamic). It also has `O(1)`
//! indexing like a vector, and inserts or removes in the middle by shifting
//! whichever side is shorter. The contained elements are not required to be
//! copyable or default-constructible: a slot holds a value only while it is
//! part of the sequence.
//!
//! # Policies
//!
//! What a full buffer does is decided at runtime by a [`Policy`]:
//!
//! - `CapacityMode::Fixed` with `OverflowMode::ReplaceOldest` (the default)
//!   overwrites the oldest element on the far side.
//! - `CapacityMode::Fixed` with `OverflowMode::RejectOnFull` hands the element
//!   back in an [`InsertError`].
//! - `CapacityMode::Dynamic` doubles the capacity when full, and halves it when
//!   a removal leaves the buffer at a quarter occupancy or less.
//!
//! # Feature Flags
//! The **ringdeque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//!
//! - `serde`
//!   - Optional
//!   - Derive `Serialize` and `Deserialize` for the policy types
//!
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringdeque = "0.1"
//! ```
//!
//! If you would like to use ringdeque in a `#![no_std]` situation or crate
//! you can request this via:
//!
//! ```toml
//! [dependencies]
//! ringdeque = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! All `capacity()` slots hold elements; a full buffer and an empty one are
//! told apart without a spare slot.
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut vector = RingDeque::with_capacity(3);
//! assert_eq!(vector.capacity(), 3);
//! assert_eq!(vector.len(), 0);
//!
//! vector.push_back(1).unwrap();
//! vector.push_back(2).unwrap();
//! assert_eq!(vector.len(), 2);
//!
//! assert_eq!(vector.pop_front(), Ok(1));
//! assert_eq!(vector.pop_front(), Ok(2));
//! assert!(vector.pop_front().is_err());
//! ```
//!
//! # Overwriting
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut vector = RingDeque::with_capacity(5);
//! vector.extend(1..=7);
//!
//! assert_eq!(format!("{:?}", vector), "[3, 4, 5, 6, 7]");
//! assert_eq!(vector.as_slices(), (&[3, 4, 5][..], &[6, 7][..]));
//! ```
//!
//! # Insert & Remove
//! ```
//! use ringdeque::{InsertTieBreak, RingDeque};
//!
//! let mut vector = RingDeque::with_capacity(8);
//!
//! vector.push_back(11).unwrap();
//! vector.push_back(13).unwrap();
//! vector.insert(1, 12, InsertTieBreak::DiscardHead).unwrap();
//! vector.remove(0).unwrap();
//!
//! assert_eq!(vector[0], 12);
//! assert_eq!(vector[1], 13);
//! ```
//!
//! # Linearize & Resize
//! ```
//! use ringdeque::{ResizeTieBreak, RingDeque};
//!
//! let mut vector = RingDeque::with_capacity(4);
//! vector.extend(0..6);
//! assert!(vector.data().is_ok());
//!
//! vector.linearize();
//! assert_eq!(vector.data(), Ok(&[2, 3, 4, 5][..]));
//!
//! vector.resize(2, ResizeTieBreak::DiscardOld);
//! assert_eq!(format!("{:?}", vector), "[4, 5]");
//! ```
//!
//! # Iterator
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut vector = RingDeque::dynamic(2);
//!
//! vector.extend(0..5);
//!
//! let iters: Vec<_> = vector.into_iter().collect();
//! assert_eq!(iters, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # From Iterator
//! ```
//! use ringdeque::RingDeque;
//!
//! let vector: RingDeque<_> = vec![0, 1, 2, 3, 4].into_iter().collect();
//! let vector2: RingDeque<_> = (0..5).collect();
//!
//! assert_eq!(vector, vector2);
//! assert_eq!(vector.capacity(), 5);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod arena;
pub mod behavior;
pub mod cursor;
pub mod error;
mod ringdeque;
mod utils;

pub use crate::behavior::{CapacityMode, InsertTieBreak, OverflowMode, Policy, ResizeTieBreak};
pub use crate::cursor::{Cursor, CursorMut};
pub use crate::error::{Error, InsertError};
pub use crate::ringdeque::{
    Drain, IntoIter, Iter, IterMut, RangeArgument, RingDeque, MIN_DYNAMIC_CAPACITY,
};
