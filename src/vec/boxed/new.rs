// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::block::alloc_block;
use crate::{
    error::Error,
    vec::{capacity_for, GrowVec},
};

// Alloc imports
use alloc::boxed::Box;

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
            cap: 0,
        }
    }
}

impl<T> GrowVec<T> {
    /// Constructs an empty vector. Nothing is allocated.
    ///
    /// Not `const` in this backend: the empty `Box<[T]>` comes from
    /// `Default`, which is not a `const fn`. The `raw-alloc` backend's `new`
    /// is `const`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Default> GrowVec<T> {
    /// Constructs a vector of `n` elements, each `T::default()`.
    ///
    /// The capacity is the smallest power of two `>= n` (`0` when `n == 0`).
    pub fn with_len(n: usize) -> Result<Self, Error> {
        let cap = capacity_for(n)?;
        if cap == 0 {
            return Ok(Self::new());
        }
        let buf = alloc_block(cap, |_| T::default())?;
        Ok(Self { buf, len: n, cap })
    }
}

impl<T: Clone + Default> GrowVec<T> {
    /// Constructs a vector of `n` clones of `value`.
    ///
    /// Sized like [`with_len`](GrowVec::with_len); the spare slots hold
    /// `T::default()`.
    pub fn from_elem(value: T, n: usize) -> Result<Self, Error> {
        let cap = capacity_for(n)?;
        if cap == 0 {
            return Ok(Self::new());
        }
        let buf = alloc_block(cap, |i| if i < n { value.clone() } else { T::default() })?;
        Ok(Self { buf, len: n, cap })
    }
}
