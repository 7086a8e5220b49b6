#![no_std]
#![warn(missing_docs)]

//! A growable double-ended queue backed by a power-of-two ring buffer.
//!
//! [`Deque`] supports amortized O(1) insertion and removal at both ends and
//! O(1) random access. Its storage doubles before the insertion that would
//! fill it, and halves again once removals leave it no more than a quarter
//! full, down to a configurable minimum.
//!
//! Positions may be given as any integer or float type (see [`DequeIndex`]);
//! negative values count from the back, and positions that name no element
//! yield [`None`] rather than panicking.
//!
//! # Examples
//! ```
//! use ringque::Deque;
//!
//! let mut queue = Deque::new();
//! queue.push_back_all([1, 2, 3]);
//! queue.push_front(0);
//!
//! assert_eq!(queue.get(-1), Some(&3));
//! assert_eq!(queue.get(0.5), None);
//! assert_eq!(queue.pop_front(), Some(0));
//! assert_eq!(queue.to_vec(), [1, 2, 3]);
//! ```

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod config;
pub mod deque;
pub mod error;
pub mod index;

pub use crate::config::{DequeConfig, DEFAULT_CAPACITY, MIN_CAPACITY};
pub use crate::deque::{Deque, Drain, IntoIter, Iter, IterMut};
pub use crate::error::{PushError, ReserveError};
pub use crate::index::{DequeIndex, Position};
