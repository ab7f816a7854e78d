// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-vec`
//!
//! A `no_std` (plus `alloc`), heap-backed growable array built directly on top
//! of an owned storage block.
//!
//! The core type, [`GrowVec<T>`], owns one contiguous block of `capacity`
//! slots and tracks a logical length `len ∈ 0..=capacity`. Appending past the
//! end of the block allocates a new block of twice the size (or one slot when
//! nothing has been allocated yet), migrates the existing elements and frees
//! the old block. Over a sequence of pushes this is amortized `O(1)`.
//!
//! The crate exists to show the mechanism: the growth law, the copy rules and
//! the cursor contract are all explicit and observable through
//! [`GrowVec::capacity`].
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `raw-alloc` feature flag:
//!
//! - **Default backend (boxed)**:
//!   - Storage is a `Box<[T]>` holding `capacity` initialized slots.
//!   - The crate is `#![forbid(unsafe_code)]`.
//!   - Operations that create fresh slots ([`GrowVec::push`],
//!     [`GrowVec::with_len`], [`GrowVec::try_clone`], ...) require
//!     `T: Default`; spare slots hold `T::default()`.
//!
//! - **`raw-alloc` backend**:
//!   - Storage is a raw block from [`alloc::alloc::alloc`] sized by
//!     [`Layout::array`](core::alloc::Layout::array).
//!   - Only the `[0..len)` prefix is initialized; the tail is never read.
//!   - `T: Default` is only needed by [`GrowVec::with_len`].
//!   - Adds [`GrowVec::as_ptr`] and the unchecked accessors
//!     `get_unchecked` / `get_unchecked_mut`.
//!
//! In both backends the remaining public API is identical.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `GrowVec<T>` as a plain
//!   sequence.
//! - `raw-alloc`: the raw allocation backend described above.
//!
//! ## Errors and panics
//!
//! Every operation that may allocate returns `Result<_, `[`Error`]`>`:
//! [`Error::CapacityOverflow`] when the requested capacity cannot be laid out,
//! [`Error::AllocFailed`] when the allocator refuses it. A failed
//! [`GrowVec::push`] or [`GrowVec::assign`] leaves the vector untouched.
//!
//! Indexing (`v[i]`) panics when `i >= len`, like slices. [`GrowVec::get`] is
//! the `Option`-returning variant.
//!
//! ## Example
//!
//! ```rust
//! use grow_vec::GrowVec;
//!
//! let mut v: GrowVec<u32> = GrowVec::new();
//! assert_eq!(v.capacity(), 0);
//! v.push(1).unwrap();
//! v.push(2).unwrap();
//! v.push(3).unwrap();
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//!
//! let mut it = v.begin();
//! let mut seen = 0;
//! while it != v.end() {
//!     seen += *it.post_advance();
//! }
//! assert_eq!(seen, 6);
//! ```

#![cfg_attr(not(feature = "raw-alloc"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{Cursor, CursorMut};
pub use vec::GrowVec;
